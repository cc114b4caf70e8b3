pub mod desktop;

use std::path::PathBuf;

/// Display length hint understood by the notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationClass {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audio {
    Default,
    Silent,
}

/// Everything the surface needs to render one popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub app_name: String,
    pub title: String,
    pub body: String,
    pub icon: Option<PathBuf>,
    pub duration: DurationClass,
    pub timeout_secs: i64,
    pub audio: Audio,
    pub dismiss_on_click: bool,
}

pub trait Notifier {
    fn notify(&self, toast: &Toast) -> anyhow::Result<()>;
}

pub type DynNotifier = dyn Notifier;

pub use desktop::DesktopNotifier;
