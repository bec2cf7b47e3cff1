//! Numeric widgets: slider, progress, resizable panels, pagination, carousel.

use serde_json::{Value, json};

use crate::widget::{Result, Widget, WidgetError, WidgetKind, arg_f64, arg_i64, nth};

/// Minimum split of a resizable panel group, in percent.
pub const MIN_SPLIT: f64 = 10.0;

/// Maximum split of a resizable panel group, in percent.
pub const MAX_SPLIT: f64 = 90.0;

fn number_arg(kind: WidgetKind, args: &[Value], index: usize, default: f64) -> Result<f64> {
    match nth(args, index) {
        Some(v) => v
            .as_f64()
            .ok_or_else(|| WidgetError::invalid(kind.as_str(), "a number")),
        None => Ok(default),
    }
}

fn count_arg(kind: WidgetKind, args: &[Value], index: usize, default: u64) -> Result<u64> {
    match nth(args, index) {
        Some(v) => v
            .as_u64()
            .ok_or_else(|| WidgetError::invalid(kind.as_str(), "a non-negative integer")),
        None => Ok(default),
    }
}

/// Range input.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    value: f64,
}

impl Slider {
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        Self { min, max, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    /// Position of the value between min and max, in percent.
    ///
    /// A zero-width range reports 0.
    pub fn percentage(&self) -> f64 {
        let width = self.max - self.min;
        if width == 0.0 {
            return 0.0;
        }
        (self.value - self.min) / width * 100.0
    }
}

impl Widget for Slider {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Slider
    }

    fn snapshot(&self) -> Value {
        json!({
            "min": self.min,
            "max": self.max,
            "value": self.value,
            "percentage": self.percentage(),
        })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "input" | "set" => {
                self.set(arg_f64(action, arg)?);
                Ok(Value::Null)
            }
            "percentage" => Ok(json!(self.percentage())),
            _ => Err(WidgetError::unknown_action(self.kind(), action)),
        }
    }
}

/// Progress bar clamped to 0..=100.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    value: f64,
}

impl Progress {
    pub fn new(initial: f64) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(0.0, 100.0);
    }
}

impl Widget for Progress {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Progress
    }

    fn snapshot(&self) -> Value {
        json!({ "value": self.value })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "set" => {
                self.set(arg_f64(action, arg)?);
                Ok(Value::Null)
            }
            _ => Err(WidgetError::unknown_action(self.kind(), action)),
        }
    }
}

/// Two panels split by a draggable handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Resizable {
    split: f64,
    dragging: bool,
}

impl Resizable {
    pub fn new(initial_split: f64) -> Self {
        Self {
            split: initial_split,
            dragging: false,
        }
    }

    pub fn split(&self) -> f64 {
        self.split
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    /// Pointer moved to `offset` within a container of `width`.
    ///
    /// Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, offset: f64, width: f64) {
        if !self.dragging || width <= 0.0 {
            return;
        }
        self.split = (offset / width * 100.0).clamp(MIN_SPLIT, MAX_SPLIT);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

impl Widget for Resizable {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Resizable
    }

    fn snapshot(&self) -> Value {
        json!({ "split": self.split, "dragging": self.dragging })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "startDrag" => self.start_drag(),
            "drag" => {
                let offset = arg_f64(action, arg.and_then(|a| a.get("offset")))?;
                let width = arg_f64(action, arg.and_then(|a| a.get("width")))?;
                self.drag_to(offset, width);
            }
            "endDrag" => self.end_drag(),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

/// Page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current: u64,
    total: u64,
}

impl Pagination {
    pub fn new(total: u64, current: u64) -> Self {
        Self { current, total }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    /// Go to `page`; out-of-range pages are ignored.
    pub fn go_to(&mut self, page: i64) {
        if let Ok(page) = u64::try_from(page) {
            if (1..=self.total).contains(&page) {
                self.current = page;
            }
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.signed_current().saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.go_to(self.signed_current().saturating_sub(1));
    }

    fn signed_current(&self) -> i64 {
        i64::try_from(self.current).unwrap_or(i64::MAX)
    }

    /// Pages within two of the current page, clamped to the valid range.
    pub fn pages(&self) -> Vec<u64> {
        let start = self.current.saturating_sub(2).max(1);
        let end = self.current.saturating_add(2).min(self.total);
        (start..=end).collect()
    }
}

impl Widget for Pagination {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Pagination
    }

    fn snapshot(&self) -> Value {
        json!({
            "current": self.current,
            "totalPages": self.total,
            "pages": self.pages(),
        })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "goTo" => self.go_to(arg_i64(action, arg)?),
            "next" => self.next(),
            "prev" => self.prev(),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

/// Slide show whose navigation wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: u64,
    count: u64,
}

impl Carousel {
    /// Create a carousel of `count` slides. Returns `None` for zero slides.
    pub fn new(count: u64) -> Option<Self> {
        (count > 0).then_some(Self { current: 0, count })
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.count;
    }

    pub fn prev(&mut self) {
        self.current = self.current.checked_sub(1).unwrap_or(self.count - 1);
    }

    /// Jump to slide `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: i64) {
        if let Ok(index) = u64::try_from(index) {
            if index < self.count {
                self.current = index;
            }
        }
    }
}

impl Widget for Carousel {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Carousel
    }

    fn snapshot(&self) -> Value {
        json!({ "current": self.current, "count": self.count })
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        match action {
            "next" => self.next(),
            "prev" => self.prev(),
            "goTo" => self.go_to(arg_i64(action, arg)?),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

pub(crate) fn slider(args: &[Value]) -> Result<Box<dyn Widget>> {
    let kind = WidgetKind::Slider;
    Ok(Box::new(Slider::new(
        number_arg(kind, args, 0, 0.0)?,
        number_arg(kind, args, 1, 100.0)?,
        number_arg(kind, args, 2, 50.0)?,
    )))
}

pub(crate) fn progress(args: &[Value]) -> Result<Box<dyn Widget>> {
    Ok(Box::new(Progress::new(number_arg(
        WidgetKind::Progress,
        args,
        0,
        0.0,
    )?)))
}

pub(crate) fn resizable(args: &[Value]) -> Result<Box<dyn Widget>> {
    Ok(Box::new(Resizable::new(number_arg(
        WidgetKind::Resizable,
        args,
        0,
        50.0,
    )?)))
}

pub(crate) fn pagination(args: &[Value]) -> Result<Box<dyn Widget>> {
    let kind = WidgetKind::Pagination;
    Ok(Box::new(Pagination::new(
        count_arg(kind, args, 0, 10)?,
        count_arg(kind, args, 1, 1)?,
    )))
}

pub(crate) fn carousel(args: &[Value]) -> Result<Box<dyn Widget>> {
    let kind = WidgetKind::Carousel;
    let carousel = Carousel::new(count_arg(kind, args, 0, 3)?)
        .ok_or_else(|| WidgetError::invalid(kind.as_str(), "at least one slide"))?;
    Ok(Box::new(carousel))
}
