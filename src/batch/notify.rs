//! User-facing notifications and viewport hooks.

/// Fire-and-forget messages to the user.
pub trait Notifier {
    /// Show `message`.
    fn notify(&mut self, message: &str);
}

/// A notifier that keeps every message.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    messages: Vec<String>,
}

impl NotificationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
        self.messages.push(message.to_string());
    }
}

/// Brings sorted layers into view after a successful batch.
pub trait Viewport {
    /// Focus the layers with the given ids.
    fn focus(&mut self, ids: &[String]);
}

/// A viewport that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewport;

impl Viewport for NoViewport {
    fn focus(&mut self, _ids: &[String]) {}
}
