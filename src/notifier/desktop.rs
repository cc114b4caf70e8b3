use anyhow::Context as _;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::Hint;
use notify_rust::{Notification, Timeout};

use crate::notifier::{Audio, DurationClass, Notifier, Toast};

#[cfg(all(unix, not(target_os = "macos")))]
const DEFAULT_SOUND: &str = "message-new-instant";
#[cfg(not(all(unix, not(target_os = "macos"))))]
const DEFAULT_SOUND: &str = "Default";

pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        DesktopNotifier
    }
}

fn timeout_for(toast: &Toast) -> Timeout {
    match toast.duration {
        DurationClass::Long => Timeout::Never,
        DurationClass::Short if toast.timeout_secs <= 0 => Timeout::Default,
        DurationClass::Short => {
            let millis = toast.timeout_secs.saturating_mul(1000);
            Timeout::Milliseconds(u32::try_from(millis).unwrap_or(u32::MAX))
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn apply_xdg_hints(notification: &mut Notification, toast: &Toast) {
    if toast.audio == Audio::Silent {
        notification.hint(Hint::SuppressSound(true));
    }

    // Clicking removes the popup instead of leaving it in the history.
    if toast.dismiss_on_click {
        notification
            .hint(Hint::Resident(false))
            .hint(Hint::Transient(true));
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn apply_xdg_hints(_notification: &mut Notification, _toast: &Toast) {}

impl Notifier for DesktopNotifier {
    fn notify(&self, toast: &Toast) -> anyhow::Result<()> {
        let mut notification = Notification::new();
        notification
            .appname(&toast.app_name)
            .summary(&toast.title)
            .body(&toast.body)
            .timeout(timeout_for(toast));

        if let Some(ref icon) = toast.icon {
            notification.icon(&icon.to_string_lossy());
        }

        if toast.audio == Audio::Default {
            notification.sound_name(DEFAULT_SOUND);
        }

        apply_xdg_hints(&mut notification, toast);

        notification
            .show()
            .context("Notification service rejected the request")?;

        Ok(())
    }
}
