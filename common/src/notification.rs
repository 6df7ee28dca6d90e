//! User-facing notification contract.
//!
//! A notification is a fixed (identity key, severity, message) triple. The
//! [`Toaster`] keeps the visible ones and refuses a second notification with
//! a key that is already on screen, so rapid repeated submits collapse into a
//! single toast instead of stacking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
}

/// Stable label used to de-duplicate notifications of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKey {
    CreatedSuccessfully,
    Error,
}

impl NotificationKey {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKey::CreatedSuccessfully => "CreatedSuccessfully",
            NotificationKey::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub key: NotificationKey,
    pub severity: Severity,
    pub message: &'static str,
}

pub const DISH_CREATED: Notification = Notification {
    key: NotificationKey::CreatedSuccessfully,
    severity: Severity::Success,
    message: "Dish created successfully",
};

pub const SUBMIT_FAILED: Notification = Notification {
    key: NotificationKey::Error,
    severity: Severity::Error,
    message: "Something went wrong",
};

/// Visible notifications, oldest first.
///
/// Every successful `push` gets a fresh generation number. Timers expire a
/// toast through [`Toaster::expire`] with that number, so a timer started for
/// an earlier appearance of the same key cannot remove a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toaster {
    visible: Vec<(Notification, u64)>,
    next_generation: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` unless one with the same key is already visible.
    /// Returns the generation of the new toast, which the caller hands back
    /// to `expire` when its display time is over.
    pub fn push(&mut self, notification: Notification) -> Option<u64> {
        if self.is_visible(notification.key) {
            return None;
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        self.visible.push((notification, generation));
        Some(generation)
    }

    /// Removes the toast with `key` whatever its generation, e.g. on click.
    pub fn dismiss(&mut self, key: NotificationKey) -> bool {
        let before = self.visible.len();
        self.visible.retain(|(notification, _)| notification.key != key);
        self.visible.len() != before
    }

    /// Removes the toast with `key` only if it is still the appearance that
    /// was given `generation`.
    pub fn expire(&mut self, key: NotificationKey, generation: u64) -> bool {
        let before = self.visible.len();
        self.visible
            .retain(|(notification, shown)| notification.key != key || *shown != generation);
        self.visible.len() != before
    }

    pub fn is_visible(&self, key: NotificationKey) -> bool {
        self.visible.iter().any(|(notification, _)| notification.key == key)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|(notification, _)| notification)
    }
}
