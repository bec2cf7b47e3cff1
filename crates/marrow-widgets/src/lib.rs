//! Marrow Widgets Library
//!
//! Headless state for the interactive Marrow UI components. Each instance
//! owns its state; timers are replaced by explicit clock arguments.
//!
//! # Modules
//!
//! - [`widget`] - The [`Widget`] trait, [`WidgetKind`] and errors
//! - [`registry`] - Factories keyed by kind
//! - [`disclosure`] - Dialogs, sheets, menus, popovers, tooltips
//! - [`selection`] - Accordions, tabs, radio groups, toggles
//! - [`search`] - Command palette and combobox
//! - [`range`] - Slider, progress, resizable panels, pagination, carousel
//! - [`otp`] - One-time password input
//! - [`calendar`] - Calendar and date picker
//! - [`toast`] - Toast notification store

pub mod calendar;
pub mod disclosure;
pub mod otp;
pub mod range;
pub mod registry;
pub mod search;
pub mod selection;
pub mod toast;
pub mod widget;

pub use calendar::{Calendar, CalendarMode};
pub use disclosure::{AlertDialog, AlertOutcome, ContextMenu, Disclosure, Hover};
pub use otp::InputOtp;
pub use range::{Carousel, Pagination, Progress, Resizable, Slider};
pub use registry::{WidgetFactory, WidgetRegistry};
pub use search::{ComboItem, Combobox, Command};
pub use selection::{Accordion, AccordionMulti, GroupMode, SingleSelect, Toggle, ToggleGroup};
pub use toast::{DEFAULT_DURATION_MS, Toast, ToastInput, ToastStore};
pub use widget::{Result, Widget, WidgetError, WidgetKind};
