//! Month calendar and date picker.

use chrono::{Datelike, Local, NaiveDate};
use serde_json::{Value, json};

use crate::widget::{Result, Widget, WidgetError, WidgetKind, arg_i64, nth};

/// Label shown by an empty date picker.
pub const EMPTY_LABEL: &str = "Pick a date";

/// Format of a selected date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inline calendar or popover date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMode {
    Inline,
    Picker,
}

/// A month view with a selectable day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    mode: CalendarMode,
    year: i32,
    /// 1-based month.
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    open: bool,
}

impl Calendar {
    /// Create a calendar showing the month of `today`.
    pub fn new(mode: CalendarMode, today: NaiveDate) -> Self {
        Self {
            mode,
            year: today.year(),
            month: today.month(),
            selected: None,
            today,
            open: false,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn first_of_month(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Full month name, e.g. `March`.
    pub fn month_name(&self) -> String {
        self.first_of_month()
            .map(|d| d.format("%B").to_string())
            .unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.and_then(|d| d.pred_opt()).map_or(0, |d| d.day())
    }

    /// Weekday of the first day, Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first_of_month()
            .map_or(0, |d| d.weekday().num_days_from_sunday())
    }

    /// Grid cells: leading blanks up to the first weekday, then each day.
    pub fn days(&self) -> Vec<Option<u32>> {
        (0..self.first_weekday())
            .map(|_| None)
            .chain((1..=self.days_in_month()).map(Some))
            .collect()
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// Select `day` of the shown month. Days outside the month are ignored.
    /// A date picker closes after selecting.
    pub fn select(&mut self, day: u32) {
        let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, day) else {
            return;
        };
        self.selected = Some(date);
        if self.mode == CalendarMode::Picker {
            self.open = false;
        }
    }

    fn in_shown_month(&self, date: NaiveDate, day: u32) -> bool {
        date.day() == day && date.month() == self.month && date.year() == self.year
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected
            .is_some_and(|date| self.in_shown_month(date, day))
    }

    pub fn is_today(&self, day: u32) -> bool {
        self.in_shown_month(self.today, day)
    }

    /// Selected date as `YYYY-MM-DD`, or the empty label.
    pub fn formatted(&self) -> String {
        self.selected.map_or_else(
            || EMPTY_LABEL.to_string(),
            |date| date.format(DATE_FORMAT).to_string(),
        )
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

impl Widget for Calendar {
    fn kind(&self) -> WidgetKind {
        match self.mode {
            CalendarMode::Inline => WidgetKind::Calendar,
            CalendarMode::Picker => WidgetKind::DatePicker,
        }
    }

    fn snapshot(&self) -> Value {
        let mut state = json!({
            "year": self.year,
            "month": self.month,
            "monthName": self.month_name(),
            "days": self.days(),
            "selected": self.selected.map(|d| d.format(DATE_FORMAT).to_string()),
        });
        if self.mode == CalendarMode::Picker {
            state["open"] = json!(self.open);
            state["formatted"] = json!(self.formatted());
        }
        state
    }

    fn dispatch(&mut self, action: &str, arg: Option<&Value>) -> Result<Value> {
        let day = |arg: Option<&Value>| -> Result<u32> {
            u32::try_from(arg_i64(action, arg)?).map_err(|_| WidgetError::invalid(action, "a day"))
        };

        match (self.mode, action) {
            (_, "prevMonth") => self.prev_month(),
            (_, "nextMonth") => self.next_month(),
            (_, "selectDate") => {
                // Blank grid cells are null.
                if arg.is_some_and(|a| !a.is_null()) {
                    self.select(day(arg)?);
                }
            }
            (_, "isSelected") => return Ok(Value::Bool(self.is_selected(day(arg)?))),
            (_, "isToday") => return Ok(Value::Bool(self.is_today(day(arg)?))),
            (CalendarMode::Picker, "toggle") => self.toggle(),
            _ => return Err(WidgetError::unknown_action(self.kind(), action)),
        }
        Ok(Value::Null)
    }
}

fn today_arg(kind: WidgetKind, args: &[Value]) -> Result<NaiveDate> {
    match nth(args, 0) {
        Some(v) => v
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
            .ok_or_else(|| WidgetError::invalid(kind.as_str(), "a YYYY-MM-DD date")),
        None => Ok(Local::now().date_naive()),
    }
}

pub(crate) fn calendar(args: &[Value]) -> Result<Box<dyn Widget>> {
    let today = today_arg(WidgetKind::Calendar, args)?;
    Ok(Box::new(Calendar::new(CalendarMode::Inline, today)))
}

pub(crate) fn date_picker(args: &[Value]) -> Result<Box<dyn Widget>> {
    let today = today_arg(WidgetKind::DatePicker, args)?;
    Ok(Box::new(Calendar::new(CalendarMode::Picker, today)))
}
