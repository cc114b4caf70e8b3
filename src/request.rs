use crate::category::Category;
use crate::notifier::{Audio, DurationClass};

pub const DEFAULT_TIMEOUT_SECS: i64 = 5;

/// A validated request to show one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub category: Category,
    pub title: String,
    pub message: String,
    pub timeout_secs: i64,
    pub auto_close: bool,
}

impl NotificationRequest {
    pub fn duration(&self) -> DurationClass {
        if self.auto_close {
            DurationClass::Short
        } else {
            DurationClass::Long
        }
    }

    pub fn audio(&self) -> Audio {
        self.category.palette().audio
    }
}
