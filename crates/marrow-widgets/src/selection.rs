//! Selection widgets: accordions, tabs, radio groups, toggles.

use serde_json::{Value, json};

use crate::widget::{Result, Widget, WidgetError, WidgetKind, arg_str, nth};

/// Accordion with at most one open item.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    active: Option<String>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id`, or close it if it is already open.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.active = None;
        } else {
            self.active = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

impl Widget for Accordion {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Accordion
    }

    fn snapshot(&self) -> Value {
        json!({ "activeItem": self.active })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "toggle" => {
                self.toggle(arg_str(action, arg)?);
                Ok(Value::Null)
            }
            "isOpen" => Ok(Value::Bool(self.is_open(arg_str(action, arg)?))),
            _ => Err(WidgetError::unknown_action(self.kind(), action)),
        }
    }
}

/// Accordion where any number of items may be open.
#[derive(Debug, Clone, Default)]
pub struct AccordionMulti {
    open_items: Vec<String>,
}

impl AccordionMulti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        toggle_member(&mut self.open_items, id);
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_items.iter().any(|item| item == id)
    }

    /// Open items in the order they were opened.
    pub fn open_items(&self) -> &[String] {
        &self.open_items
    }
}

impl Widget for AccordionMulti {
    fn kind(&self) -> WidgetKind {
        WidgetKind::AccordionMulti
    }

    fn snapshot(&self) -> Value {
        json!({ "openItems": self.open_items })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "toggle" => {
                self.toggle(arg_str(action, arg)?);
                Ok(Value::Null)
            }
            "isOpen" => Ok(Value::Bool(self.is_open(arg_str(action, arg)?))),
            _ => Err(WidgetError::unknown_action(self.kind(), action)),
        }
    }
}

/// Remove `value` if present, otherwise append it.
fn toggle_member(items: &mut Vec<String>, value: &str) {
    match items.iter().position(|item| item == value) {
        Some(idx) => {
            items.remove(idx);
        }
        None => items.push(value.to_string()),
    }
}

/// One active value out of many: tabs and radio groups.
#[derive(Debug, Clone)]
pub struct SingleSelect {
    kind: WidgetKind,
    value: String,
}

impl SingleSelect {
    /// Tabs with an initially active tab (empty for none).
    pub fn tabs(initial: impl Into<String>) -> Self {
        Self {
            kind: WidgetKind::Tabs,
            value: initial.into(),
        }
    }

    /// Radio group with an initial selection (empty for none).
    pub fn radio_group(initial: impl Into<String>) -> Self {
        Self {
            kind: WidgetKind::RadioGroup,
            value: initial.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn select(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value == value
    }

    fn field(&self) -> &'static str {
        match self.kind {
            WidgetKind::Tabs => "active",
            _ => "selected",
        }
    }
}

impl Widget for SingleSelect {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn snapshot(&self) -> Value {
        json!({ self.field(): self.value })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match (self.kind, action) {
            (WidgetKind::Tabs, "setActive") | (_, "select") => {
                self.select(arg_str(action, arg)?);
                Ok(Value::Null)
            }
            (WidgetKind::Tabs, "isActive") | (_, "isSelected") => {
                Ok(Value::Bool(self.is_selected(arg_str(action, arg)?)))
            }
            _ => Err(WidgetError::unknown_action(self.kind, action)),
        }
    }
}

/// Boolean on/off state: switches, checkboxes and toggle buttons.
#[derive(Debug, Clone)]
pub struct Toggle {
    kind: WidgetKind,
    on: bool,
}

impl Toggle {
    pub fn new(kind: WidgetKind, initial: bool) -> Self {
        Self { kind, on: initial }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }
}

impl Widget for Toggle {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn snapshot(&self) -> Value {
        let field = match self.kind {
            WidgetKind::Toggle => "pressed",
            _ => "checked",
        };
        json!({ field: self.on })
    }

    fn dispatch(&mut self, action: &str, _arg: Option<&Value>) -> Result<Value> {
        match action {
            "toggle" => {
                self.toggle();
                Ok(Value::Null)
            }
            _ => Err(WidgetError::unknown_action(self.kind, action)),
        }
    }
}

/// Selection mode of a toggle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    Single,
    Multiple,
}

impl GroupMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "multiple" => Some(Self::Multiple),
            _ => None,
        }
    }
}

/// A row of toggle buttons.
///
/// In single mode selecting the current value clears it.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    mode: GroupMode,
    selected: Vec<String>,
}

impl ToggleGroup {
    pub fn single(initial: Option<&str>) -> Self {
        Self {
            mode: GroupMode::Single,
            selected: initial
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .into_iter()
                .collect(),
        }
    }

    pub fn multiple(initial: Vec<String>) -> Self {
        Self {
            mode: GroupMode::Multiple,
            selected: initial,
        }
    }

    pub fn mode(&self) -> GroupMode {
        self.mode
    }

    pub fn select(&mut self, value: &str) {
        match self.mode {
            GroupMode::Single => {
                if self.is_selected(value) {
                    self.selected.clear();
                } else {
                    self.selected = vec![value.to_string()];
                }
            }
            GroupMode::Multiple => toggle_member(&mut self.selected, value),
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Selected values; at most one in single mode.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}

impl Widget for ToggleGroup {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ToggleGroup
    }

    fn snapshot(&self) -> Value {
        match self.mode {
            GroupMode::Single => json!({
                "type": "single",
                "value": self.selected.first().map_or("", String::as_str),
            }),
            GroupMode::Multiple => json!({ "type": "multiple", "value": self.selected }),
        }
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "select" => {
                self.select(arg_str(action, arg)?);
                Ok(Value::Null)
            }
            "isSelected" => Ok(Value::Bool(self.is_selected(arg_str(action, arg)?))),
            _ => Err(WidgetError::unknown_action(self.kind(), action)),
        }
    }
}

fn initial_str(kind: WidgetKind, args: &[Value]) -> Result<String> {
    match nth(args, 0) {
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| WidgetError::invalid(kind.as_str(), "a string")),
        None => Ok(String::new()),
    }
}

pub(crate) fn tabs(args: &[Value]) -> Result<Box<dyn Widget>> {
    Ok(Box::new(SingleSelect::tabs(initial_str(WidgetKind::Tabs, args)?)))
}

pub(crate) fn radio_group(args: &[Value]) -> Result<Box<dyn Widget>> {
    Ok(Box::new(SingleSelect::radio_group(initial_str(
        WidgetKind::RadioGroup,
        args,
    )?)))
}

pub(crate) fn toggle(kind: WidgetKind, args: &[Value]) -> Result<Box<dyn Widget>> {
    let initial = match nth(args, 0) {
        Some(v) => v
            .as_bool()
            .ok_or_else(|| WidgetError::invalid(kind.as_str(), "a boolean"))?,
        None => false,
    };
    Ok(Box::new(Toggle::new(kind, initial)))
}

pub(crate) fn toggle_group(args: &[Value]) -> Result<Box<dyn Widget>> {
    let name = WidgetKind::ToggleGroup.as_str();
    let mode = match nth(args, 0) {
        Some(v) => v
            .as_str()
            .and_then(GroupMode::from_name)
            .ok_or_else(|| WidgetError::invalid(name, "\"single\" or \"multiple\""))?,
        None => GroupMode::Single,
    };

    let group = match mode {
        GroupMode::Single => ToggleGroup::single(nth(args, 1).and_then(Value::as_str)),
        GroupMode::Multiple => {
            let initial = match nth(args, 1) {
                Some(v) => serde_json::from_value(v.clone())?,
                None => Vec::new(),
            };
            ToggleGroup::multiple(initial)
        }
    };
    Ok(Box::new(group))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_single_open() {
        let mut accordion = Accordion::new();
        accordion.toggle("a");
        assert!(accordion.is_open("a"));

        accordion.toggle("b");
        assert!(!accordion.is_open("a"));
        assert!(accordion.is_open("b"));

        accordion.toggle("b");
        assert_eq!(accordion.snapshot(), json!({ "activeItem": null }));
    }

    #[test]
    fn test_accordion_multi() {
        let mut accordion = AccordionMulti::new();
        accordion.toggle("a");
        accordion.toggle("b");
        accordion.toggle("a");

        assert_eq!(accordion.open_items(), ["b".to_string()]);
        assert_eq!(
            accordion.dispatch("isOpen", Some(&json!("b"))).unwrap(),
            json!(true)
        );
    }

    #[test]
    fn test_tabs() {
        let mut tabs = tabs(&[json!("account")]).unwrap();
        assert_eq!(tabs.snapshot(), json!({ "active": "account" }));

        tabs.dispatch("setActive", Some(&json!("password"))).unwrap();
        assert_eq!(
            tabs.dispatch("isActive", Some(&json!("password"))).unwrap(),
            json!(true)
        );
        assert!(tabs.dispatch("setActive", None).is_err());
    }

    #[test]
    fn test_radio_group() {
        let mut radio = radio_group(&[]).unwrap();
        assert_eq!(radio.snapshot(), json!({ "selected": "" }));

        radio.dispatch("select", Some(&json!("comfortable"))).unwrap();
        assert_eq!(radio.snapshot(), json!({ "selected": "comfortable" }));
        assert!(radio.dispatch("setActive", Some(&json!("x"))).is_err());
    }

    #[test]
    fn test_toggle_family() {
        let mut switch = toggle(WidgetKind::Switch, &[json!(true)]).unwrap();
        switch.dispatch("toggle", None).unwrap();
        assert_eq!(switch.snapshot(), json!({ "checked": false }));

        let mut pressed = toggle(WidgetKind::Toggle, &[]).unwrap();
        pressed.dispatch("toggle", None).unwrap();
        assert_eq!(pressed.snapshot(), json!({ "pressed": true }));
    }

    #[test]
    fn test_toggle_group_single() {
        let mut group = ToggleGroup::single(Some("bold"));
        group.select("italic");
        assert_eq!(group.selected(), ["italic".to_string()]);

        group.select("italic");
        assert!(group.selected().is_empty());
        assert_eq!(group.snapshot(), json!({ "type": "single", "value": "" }));
    }

    #[test]
    fn test_toggle_group_multiple() {
        let mut group = toggle_group(&[json!("multiple"), json!(["bold"])]).unwrap();
        group.dispatch("select", Some(&json!("underline"))).unwrap();
        group.dispatch("select", Some(&json!("bold"))).unwrap();

        assert_eq!(
            group.snapshot(),
            json!({ "type": "multiple", "value": ["underline"] })
        );
    }

    #[test]
    fn test_toggle_group_bad_mode() {
        let err = toggle_group(&[json!("several")]).unwrap_err();
        assert!(matches!(err, WidgetError::InvalidArgument { .. }));
    }
}
