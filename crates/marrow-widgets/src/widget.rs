//! The widget trait, widget kinds and argument helpers.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Widget errors.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The widget does not understand the action.
    #[error("unknown action \"{action}\" for {kind}")]
    UnknownAction { kind: WidgetKind, action: String },

    /// An action or factory argument has the wrong shape.
    #[error("invalid argument for {action}: expected {expected}")]
    InvalidArgument {
        action: String,
        expected: &'static str,
    },

    /// No factory is registered under this name.
    #[error("unknown widget: {0}")]
    UnknownWidget(String),

    /// Argument could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WidgetError {
    /// Create an unknown action error.
    pub fn unknown_action(kind: WidgetKind, action: impl Into<String>) -> Self {
        Self::UnknownAction {
            kind,
            action: action.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid(action: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidArgument {
            action: action.into(),
            expected,
        }
    }
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Every interactive component kind, named as it is bound in markup
/// (`x-data="mwTabs('account')"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Accordion,
    AccordionMulti,
    Tabs,
    Dialog,
    Sheet,
    Dropdown,
    Popover,
    Collapsible,
    Switch,
    Checkbox,
    RadioGroup,
    Tooltip,
    HoverCard,
    Command,
    Slider,
    Pagination,
    Toggle,
    ToggleGroup,
    AlertDialog,
    ContextMenu,
    Combobox,
    Carousel,
    Resizable,
    InputOtp,
    Progress,
    DatePicker,
    Calendar,
    Sidebar,
}

impl WidgetKind {
    /// All kinds in registration order.
    pub const ALL: [Self; 28] = [
        Self::Accordion,
        Self::AccordionMulti,
        Self::Tabs,
        Self::Dialog,
        Self::Sheet,
        Self::Dropdown,
        Self::Popover,
        Self::Collapsible,
        Self::Switch,
        Self::Checkbox,
        Self::RadioGroup,
        Self::Tooltip,
        Self::HoverCard,
        Self::Command,
        Self::Slider,
        Self::Pagination,
        Self::Toggle,
        Self::ToggleGroup,
        Self::AlertDialog,
        Self::ContextMenu,
        Self::Combobox,
        Self::Carousel,
        Self::Resizable,
        Self::InputOtp,
        Self::Progress,
        Self::DatePicker,
        Self::Calendar,
        Self::Sidebar,
    ];

    /// Name used in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accordion => "mwAccordion",
            Self::AccordionMulti => "mwAccordionMulti",
            Self::Tabs => "mwTabs",
            Self::Dialog => "mwDialog",
            Self::Sheet => "mwSheet",
            Self::Dropdown => "mwDropdown",
            Self::Popover => "mwPopover",
            Self::Collapsible => "mwCollapsible",
            Self::Switch => "mwSwitch",
            Self::Checkbox => "mwCheckbox",
            Self::RadioGroup => "mwRadioGroup",
            Self::Tooltip => "mwTooltip",
            Self::HoverCard => "mwHoverCard",
            Self::Command => "mwCommand",
            Self::Slider => "mwSlider",
            Self::Pagination => "mwPagination",
            Self::Toggle => "mwToggle",
            Self::ToggleGroup => "mwToggleGroup",
            Self::AlertDialog => "mwAlertDialog",
            Self::ContextMenu => "mwContextMenu",
            Self::Combobox => "mwCombobox",
            Self::Carousel => "mwCarousel",
            Self::Resizable => "mwResizable",
            Self::InputOtp => "mwInputOTP",
            Self::Progress => "mwProgress",
            Self::DatePicker => "mwDatePicker",
            Self::Calendar => "mwCalendar",
            Self::Sidebar => "mwSidebar",
        }
    }

    /// Look up a kind by its markup name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one interactive component instance.
pub trait Widget: fmt::Debug + Send {
    /// Kind of this instance.
    fn kind(&self) -> WidgetKind;

    /// Current state as JSON.
    fn snapshot(&self) -> Value;

    /// Run an action by name.
    ///
    /// Mutating actions return `null`; queries (`isOpen`, `matches`, ...)
    /// return their answer.
    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value>;
}

pub(crate) fn arg_str<'a>(action: &str, arg: Option<&'a Value>) -> Result<&'a str> {
    arg.and_then(Value::as_str)
        .ok_or_else(|| WidgetError::invalid(action, "a string"))
}

pub(crate) fn arg_i64(action: &str, arg: Option<&Value>) -> Result<i64> {
    arg.and_then(Value::as_i64)
        .ok_or_else(|| WidgetError::invalid(action, "an integer"))
}

pub(crate) fn arg_f64(action: &str, arg: Option<&Value>) -> Result<f64> {
    arg.and_then(Value::as_f64)
        .ok_or_else(|| WidgetError::invalid(action, "a number"))
}

/// Positional factory argument, treating `null` as absent.
pub(crate) fn nth(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(WidgetKind::from_name("mwInputOTP"), Some(WidgetKind::InputOtp));
        assert_eq!(WidgetKind::from_name("mwUnknown"), None);
    }

    #[test]
    fn test_arg_helpers() {
        assert_eq!(arg_str("select", Some(&json!("a"))).unwrap(), "a");
        assert_eq!(arg_i64("goTo", Some(&json!(3))).unwrap(), 3);
        assert!((arg_f64("set", Some(&json!(2.5))).unwrap() - 2.5).abs() < f64::EPSILON);

        let err = arg_str("select", None).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument for select: expected a string");
    }

    #[test]
    fn test_nth_skips_null() {
        let args = [json!(null), json!(5)];
        assert!(nth(&args, 0).is_none());
        assert_eq!(nth(&args, 1), Some(&json!(5)));
        assert!(nth(&args, 2).is_none());
    }
}
