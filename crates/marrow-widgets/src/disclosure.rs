//! Open/closed widgets: dialogs, sheets, menus, popovers, tooltips.

use serde::Serialize;
use serde_json::{Value, json};

use crate::widget::{Result, Widget, WidgetError, WidgetKind, arg_i64, nth};

/// A panel that is either open or closed.
///
/// Backs dialogs, sheets, dropdowns, popovers, collapsibles and the sidebar.
#[derive(Debug, Clone)]
pub struct Disclosure {
    kind: WidgetKind,
    open: bool,
}

impl Disclosure {
    /// Create a closed disclosure.
    pub fn new(kind: WidgetKind) -> Self {
        Self { kind, open: false }
    }

    /// Create a disclosure with an initial state.
    pub fn with_open(kind: WidgetKind, open: bool) -> Self {
        Self { kind, open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

impl Widget for Disclosure {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn snapshot(&self) -> Value {
        json!({ "open": self.open })
    }

    fn dispatch(&mut self, action: &str, _arg: Option<&Value>) -> Result<Value> {
        match action {
            "show" => self.show(),
            "close" => self.close(),
            "toggle" => self.toggle(),
            _ => return Err(WidgetError::unknown_action(self.kind, action)),
        }
        Ok(Value::Null)
    }
}

/// Factory for plain disclosures, closed by default.
pub(crate) fn closed(kind: WidgetKind) -> Box<dyn Widget> {
    Box::new(Disclosure::new(kind))
}

/// Factory for the sidebar, open unless the first argument is `false`.
pub(crate) fn sidebar(args: &[Value]) -> Result<Box<dyn Widget>> {
    let open = match nth(args, 0) {
        Some(v) => v
            .as_bool()
            .ok_or_else(|| WidgetError::invalid("mwSidebar", "a boolean"))?,
        None => true,
    };
    Ok(Box::new(Disclosure::with_open(WidgetKind::Sidebar, open)))
}

/// How an alert dialog was last dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertOutcome {
    Confirmed,
    Cancelled,
}

/// A modal that must be confirmed or cancelled.
#[derive(Debug, Clone, Default)]
pub struct AlertDialog {
    open: bool,
    outcome: Option<AlertOutcome>,
}

impl AlertDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Outcome of the most recent confirm or cancel.
    pub fn outcome(&self) -> Option<AlertOutcome> {
        self.outcome
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn confirm(&mut self) {
        self.outcome = Some(AlertOutcome::Confirmed);
        self.close();
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(AlertOutcome::Cancelled);
        self.close();
    }
}

impl Widget for AlertDialog {
    fn kind(&self) -> WidgetKind {
        WidgetKind::AlertDialog
    }

    fn snapshot(&self) -> Value {
        json!({ "open": self.open, "outcome": self.outcome })
    }

    fn dispatch(&mut self, action: &str, _arg: Option<&Value>) -> Result<Value> {
        match action {
            "show" => self.show(),
            "close" => self.close(),
            "confirm" => self.confirm(),
            "cancel" => self.cancel(),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

/// A menu opened at a pointer position.
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    open: bool,
    x: i64,
    y: i64,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Open at client coordinates.
    pub fn show_at(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl Widget for ContextMenu {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ContextMenu
    }

    fn snapshot(&self) -> Value {
        json!({ "open": self.open, "x": self.x, "y": self.y })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "show" => {
                let x = arg_i64(action, arg.and_then(|a| a.get("x")))?;
                let y = arg_i64(action, arg.and_then(|a| a.get("y")))?;
                self.show_at(x, y);
            }
            "close" => self.close(),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

/// Delay before a hover card appears.
pub const HOVER_ENTER_DELAY_MS: u64 = 200;

/// Delay before a hover card disappears.
pub const HOVER_LEAVE_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingChange {
    show: bool,
    due_ms: u64,
}

/// Hover-driven visibility with optional enter and leave delays.
///
/// Delayed changes are held as pending until [`Hover::tick`] reaches their
/// due time. A new enter or leave replaces any pending change.
#[derive(Debug, Clone)]
pub struct Hover {
    kind: WidgetKind,
    show: bool,
    enter_delay_ms: u64,
    leave_delay_ms: u64,
    pending: Option<PendingChange>,
}

impl Hover {
    /// Tooltip: shows and hides immediately.
    pub fn tooltip() -> Self {
        Self {
            kind: WidgetKind::Tooltip,
            show: false,
            enter_delay_ms: 0,
            leave_delay_ms: 0,
            pending: None,
        }
    }

    /// Hover card: shows after 200 ms, hides after 100 ms.
    pub fn hover_card() -> Self {
        Self {
            kind: WidgetKind::HoverCard,
            show: false,
            enter_delay_ms: HOVER_ENTER_DELAY_MS,
            leave_delay_ms: HOVER_LEAVE_DELAY_MS,
            pending: None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.show
    }

    /// Pointer entered at `now_ms`.
    pub fn enter(&mut self, now_ms: u64) {
        self.schedule(true, now_ms + self.enter_delay_ms, now_ms);
    }

    /// Pointer left at `now_ms`.
    pub fn leave(&mut self, now_ms: u64) {
        self.schedule(false, now_ms + self.leave_delay_ms, now_ms);
    }

    /// Apply a pending change that is due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(change) = self.pending.filter(|p| p.due_ms <= now_ms) {
            self.show = change.show;
            self.pending = None;
        }
    }

    fn schedule(&mut self, show: bool, due_ms: u64, now_ms: u64) {
        self.pending = Some(PendingChange { show, due_ms });
        self.tick(now_ms);
    }
}

impl Widget for Hover {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn snapshot(&self) -> Value {
        json!({
            "show": self.show,
            "pendingDueMs": self.pending.map(|p| p.due_ms),
        })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        let now_ms = arg.and_then(Value::as_u64).unwrap_or(0);
        match action {
            "enter" => self.enter(now_ms),
            "leave" => self.leave(now_ms),
            "tick" => self.tick(now_ms),
            _ => return Err(WidgetError::unknown_action(self.kind, action)),
        }
        Ok(Value::Null)
    }
}
