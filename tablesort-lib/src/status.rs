//! User-visible status reporting.

use log::warn;

/// Destination for errors the user should see, such as a bad URL hash.
pub trait StatusSink {
    /// Report a message.
    fn report(&mut self, message: &str);
}

/// Fallback sink that writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn report(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// Collects messages, e.g. to render them in a status area later.
impl StatusSink for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn report(&mut self, message: &str) {
        (**self).report(message);
    }
}
