use std::thread;

use crate::config::Config;
use crate::icon::{self, TransientIcon};
use crate::notifier::{DynNotifier, Toast};
use crate::request::NotificationRequest;

pub struct Dispatcher<'a> {
    config: &'a Config,
    notifier: &'a DynNotifier,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a Config, notifier: &'a DynNotifier) -> Self {
        Self { config, notifier }
    }

    /// Shows one notification. Only a failure of the surface itself is an error;
    /// the icon is best effort and removed again on return.
    pub fn dispatch(&self, request: &NotificationRequest) -> anyhow::Result<()> {
        let icon = self.prepare_icon(request);

        let toast = Toast {
            app_name: self.config.app_name.clone(),
            title: request.title.clone(),
            body: request.message.clone(),
            icon: icon.as_ref().map(|icon| icon.path().to_path_buf()),
            duration: request.duration(),
            timeout_secs: request.timeout_secs,
            audio: request.audio(),
            dismiss_on_click: true,
        };

        log::debug!("{} Dispatching {toast:?}", request.category.palette().symbol);
        self.notifier.notify(&toast)?;

        thread::sleep(self.config.grace_period);

        Ok(())
    }

    fn prepare_icon(&self, request: &NotificationRequest) -> Option<TransientIcon> {
        icon::write(
            request.category,
            &self.config.icon_dir,
            self.config.icon_source,
        )
        .inspect_err(|e| log::debug!("Continuing without icon: {e:#}"))
        .ok()
    }
}
