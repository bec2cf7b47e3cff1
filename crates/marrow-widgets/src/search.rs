//! Searchable widgets: the command palette and combobox.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::widget::{Result, Widget, WidgetError, WidgetKind, arg_str, nth};

/// Case-insensitive substring match; an empty query matches everything.
fn matches_query(query: &str, text: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

/// Command palette with a search box.
#[derive(Debug, Clone, Default)]
pub struct Command {
    open: bool,
    search: String,
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Open with an empty search.
    pub fn show(&mut self) {
        self.open = true;
        self.search.clear();
    }

    /// Close and clear the search.
    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Whether an item labelled `text` is visible for the current search.
    pub fn matches(&self, text: &str) -> bool {
        matches_query(&self.search, text)
    }
}

impl Widget for Command {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Command
    }

    fn snapshot(&self) -> Value {
        json!({ "open": self.open, "search": self.search })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "show" => self.show(),
            "close" => self.close(),
            "setSearch" => self.set_search(arg_str(action, arg)?),
            "matches" => return Ok(Value::Bool(self.matches(arg_str(action, arg)?))),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

/// A combobox option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboItem {
    pub label: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl ComboItem {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Searchable select.
#[derive(Debug, Clone, Default)]
pub struct Combobox {
    open: bool,
    search: String,
    selected: Option<ComboItem>,
    items: Vec<ComboItem>,
}

impl Combobox {
    pub fn new(items: Vec<ComboItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&ComboItem> {
        self.selected.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Items whose label contains the search text.
    pub fn filtered(&self) -> Vec<&ComboItem> {
        self.items
            .iter()
            .filter(|item| matches_query(&self.search, &item.label))
            .collect()
    }

    /// Select an item, show its label in the search box and close.
    pub fn select(&mut self, item: ComboItem) {
        self.search = item.label.clone();
        self.selected = Some(item);
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

impl Widget for Combobox {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Combobox
    }

    fn snapshot(&self) -> Value {
        json!({
            "open": self.open,
            "search": self.search,
            "selected": self.selected,
            "filtered": self.filtered(),
        })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "toggle" => self.toggle(),
            "setSearch" => self.set_search(arg_str(action, arg)?),
            "select" => {
                let item = arg.ok_or_else(|| WidgetError::invalid(action, "an item"))?;
                self.select(serde_json::from_value(item.clone())?);
            }
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

pub(crate) fn combobox(args: &[Value]) -> Result<Box<dyn Widget>> {
    let items = match nth(args, 0) {
        Some(v) => serde_json::from_value(v.clone())?,
        None => Vec::new(),
    };
    Ok(Box::new(Combobox::new(items)))
}
