//! Native message dialog used for blocking alerts.

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use waste_core::Notifier;

/// Shows each alert in a modal warning dialog and waits for OK.
pub struct DialogNotifier {
    title: &'static str,
}

impl DialogNotifier {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

impl Notifier for DialogNotifier {
    fn alert(&mut self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(self.title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
