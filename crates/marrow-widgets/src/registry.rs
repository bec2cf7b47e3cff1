//! Widget factories keyed by kind.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::{
    calendar, disclosure,
    disclosure::{AlertDialog, ContextMenu, Hover},
    otp, range, search,
    search::Command,
    selection,
    selection::{Accordion, AccordionMulti},
    widget::{Result, Widget, WidgetError, WidgetKind},
};

/// Builds a widget from positional arguments, as written in markup
/// (`mwSlider(0, 100, 25)`).
pub type WidgetFactory = fn(&[Value]) -> Result<Box<dyn Widget>>;

/// Registry of widget factories.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    factories: IndexMap<WidgetKind, WidgetFactory>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in widget.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in WidgetKind::ALL {
            registry.register(kind, default_factory(kind));
        }
        registry
    }

    /// Register or replace the factory for `kind`.
    pub fn register(&mut self, kind: WidgetKind, factory: WidgetFactory) {
        self.factories.insert(kind, factory);
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = WidgetKind> + '_ {
        self.factories.keys().copied()
    }

    pub fn contains(&self, kind: WidgetKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Create a widget instance.
    pub fn create(&self, kind: WidgetKind, args: &[Value]) -> Result<Box<dyn Widget>> {
        let factory = self
            .factories
            .get(&kind)
            .ok_or_else(|| WidgetError::UnknownWidget(kind.as_str().to_string()))?;
        debug!(kind = %kind, args = args.len(), "creating widget");
        factory(args)
    }

    /// Create a widget instance from its markup name.
    pub fn create_by_name(&self, name: &str, args: &[Value]) -> Result<Box<dyn Widget>> {
        let kind =
            WidgetKind::from_name(name).ok_or_else(|| WidgetError::UnknownWidget(name.to_string()))?;
        self.create(kind, args)
    }
}

fn default_factory(kind: WidgetKind) -> WidgetFactory {
    match kind {
        WidgetKind::Accordion => |_| Ok(Box::new(Accordion::new())),
        WidgetKind::AccordionMulti => |_| Ok(Box::new(AccordionMulti::new())),
        WidgetKind::Tabs => selection::tabs,
        WidgetKind::RadioGroup => selection::radio_group,
        WidgetKind::Dialog => |_| Ok(disclosure::closed(WidgetKind::Dialog)),
        WidgetKind::Sheet => |_| Ok(disclosure::closed(WidgetKind::Sheet)),
        WidgetKind::Dropdown => |_| Ok(disclosure::closed(WidgetKind::Dropdown)),
        WidgetKind::Popover => |_| Ok(disclosure::closed(WidgetKind::Popover)),
        WidgetKind::Collapsible => |_| Ok(disclosure::closed(WidgetKind::Collapsible)),
        WidgetKind::Sidebar => disclosure::sidebar,
        WidgetKind::AlertDialog => |_| Ok(Box::new(AlertDialog::new())),
        WidgetKind::ContextMenu => |_| Ok(Box::new(ContextMenu::new())),
        WidgetKind::Tooltip => |_| Ok(Box::new(Hover::tooltip())),
        WidgetKind::HoverCard => |_| Ok(Box::new(Hover::hover_card())),
        WidgetKind::Switch => |args| selection::toggle(WidgetKind::Switch, args),
        WidgetKind::Checkbox => |args| selection::toggle(WidgetKind::Checkbox, args),
        WidgetKind::Toggle => |args| selection::toggle(WidgetKind::Toggle, args),
        WidgetKind::ToggleGroup => selection::toggle_group,
        WidgetKind::Command => |_| Ok(Box::new(Command::new())),
        WidgetKind::Combobox => search::combobox,
        WidgetKind::Slider => range::slider,
        WidgetKind::Progress => range::progress,
        WidgetKind::Resizable => range::resizable,
        WidgetKind::Pagination => range::pagination,
        WidgetKind::Carousel => range::carousel,
        WidgetKind::InputOtp => otp::input_otp,
        WidgetKind::Calendar => calendar::calendar,
        WidgetKind::DatePicker => calendar::date_picker,
    }
}
