//! Toast notification store.
//!
//! Toasts expire by clock rather than by timer: callers pass the current
//! time in milliseconds and call [`ToastStore::expire`] to drop due toasts.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifetime of a toast that does not set one.
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// A toast request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastInput {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Optional style variant (`destructive`, `success`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Lifetime in milliseconds. `None` uses the default; `0` never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// A displayed toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Time after which the toast is removed; `None` for sticky toasts.
    pub expires_at_ms: Option<u64>,
}

/// Ordered collection of live toasts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToastStore {
    items: Vec<Toast>,
    #[serde(skip)]
    next_id: u64,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live toasts, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a toast at `now_ms` and return its id.
    pub fn add(&mut self, input: ToastInput, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        let duration = input.duration.unwrap_or(DEFAULT_DURATION_MS);
        let expires_at_ms = (duration != 0).then(|| now_ms.saturating_add(duration));

        debug!(id, duration, "toast added");
        self.items.push(Toast {
            id,
            title: input.title,
            description: input.description,
            variant: input.variant,
            expires_at_ms,
        });
        id
    }

    /// Remove a toast by id. Returns whether it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Remove every toast due at `now_ms` and return their ids.
    pub fn expire(&mut self, now_ms: u64) -> Vec<u64> {
        let mut expired = Vec::new();
        self.items.retain(|t| {
            let due = t.expires_at_ms.is_some_and(|at| at <= now_ms);
            if due {
                expired.push(t.id);
            }
            !due
        });
        expired
    }
}
