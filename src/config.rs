use core::time::Duration;
use std::env;
use std::path::PathBuf;

use crate::icon::IconSource;

pub const DEFAULT_APP_NAME: &str = "Notify CLI";

/// Wait after handing the popup over, the surface shows it asynchronously.
pub const GRACE_PERIOD: Duration = Duration::from_millis(500);

pub struct Config {
    pub app_name: String,
    pub icon_dir: PathBuf,
    pub icon_source: IconSource,
    pub grace_period: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let app_name = lookup("NOTIFY_APP_NAME")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned());

        let icon_dir = lookup("NOTIFY_ICON_DIR")
            .filter(|dir| !dir.is_empty())
            .map_or_else(env::temp_dir, |dir| {
                PathBuf::from(shellexpand::tilde(&dir).into_owned())
            });

        let icon_source = match lookup("NOTIFY_ICON_SOURCE").as_deref() {
            None | Some("" | "synthesized") => IconSource::Synthesized,
            Some("embedded") => IconSource::Embedded,
            Some(other) => {
                log::warn!("Ignoring unknown NOTIFY_ICON_SOURCE '{other}', using synthesized icons");
                IconSource::Synthesized
            }
        };

        Self {
            app_name,
            icon_dir,
            icon_source,
            grace_period: GRACE_PERIOD,
        }
    }
}
