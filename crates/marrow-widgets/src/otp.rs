//! One-time password input.

use serde_json::{Value, json};

use crate::widget::{Result, Widget, WidgetError, WidgetKind, arg_i64, arg_str, nth};

/// Default number of slots.
pub const DEFAULT_LENGTH: usize = 6;

/// A row of single-character slots with focus tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOtp {
    values: Vec<String>,
    focus: usize,
}

impl InputOtp {
    /// Create `length` empty slots. Returns `None` for zero slots.
    pub fn new(length: usize) -> Option<Self> {
        (length > 0).then(|| Self {
            values: vec![String::new(); length],
            focus: 0,
        })
    }

    /// Number of slots.
    pub fn length(&self) -> usize {
        self.values.len()
    }

    /// Slot that currently has focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Concatenation of all slots.
    pub fn code(&self) -> String {
        self.values.concat()
    }

    /// Input into slot `index`. Only the last character is kept and focus
    /// advances when a character was entered.
    pub fn input(&mut self, index: usize, text: &str) -> Result<()> {
        let len = self.values.len();
        let slot = self.slot_mut("input", index)?;
        *slot = text.chars().last().map(String::from).unwrap_or_default();

        if !slot.is_empty() && index + 1 < len {
            self.focus = index + 1;
        }
        Ok(())
    }

    /// Key pressed in slot `index`. Backspace over an empty slot moves focus
    /// back.
    pub fn keydown(&mut self, index: usize, key: &str) -> Result<()> {
        let empty = self.slot_mut("keydown", index)?.is_empty();
        if key == "Backspace" && empty && index > 0 {
            self.focus = index - 1;
        }
        Ok(())
    }

    fn slot_mut(&mut self, action: &str, index: usize) -> Result<&mut String> {
        self.values
            .get_mut(index)
            .ok_or_else(|| WidgetError::invalid(action, "a slot index"))
    }
}

impl Widget for InputOtp {
    fn kind(&self) -> WidgetKind {
        WidgetKind::InputOtp
    }

    fn snapshot(&self) -> Value {
        json!({
            "length": self.values.len(),
            "values": self.values,
            "code": self.code(),
            "focus": self.focus,
        })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        let index = |arg: Option<&Value>| -> Result<usize> {
            let raw = arg_i64(action, arg.and_then(|a| a.get("index")))?;
            usize::try_from(raw).map_err(|_| WidgetError::invalid(action, "a slot index"))
        };

        match action {
            "input" => {
                let text = arg_str(action, arg.and_then(|a| a.get("value")))?;
                self.input(index(arg)?, text)?;
            }
            "keydown" => {
                let key = arg_str(action, arg.and_then(|a| a.get("key")))?;
                self.keydown(index(arg)?, key)?;
            }
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

pub(crate) fn input_otp(args: &[Value]) -> Result<Box<dyn Widget>> {
    let name = WidgetKind::InputOtp.as_str();
    let length = match nth(args, 0) {
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| WidgetError::invalid(name, "a slot count"))?,
        None => DEFAULT_LENGTH,
    };
    let otp = InputOtp::new(length).ok_or_else(|| WidgetError::invalid(name, "at least one slot"))?;
    Ok(Box::new(otp))
}
