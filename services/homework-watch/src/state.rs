//! Notification suppression state
//!
//! Remembers the last successfully notified status and error text so a
//! repeated identical state never re-triggers a send. Held in process
//! memory only; a restart starts clean.

/// Last-notified status and error, owned by the poll loop
#[derive(Debug, Default)]
pub struct NotificationState {
    last_status: Option<String>,
    last_error: Option<String>,
}

impl NotificationState {
    /// Whether `status` differs from the last successfully notified status
    pub fn is_new_status(&self, status: &str) -> bool {
        self.last_status.as_deref() != Some(status)
    }

    /// Record a successfully notified status
    pub fn record_status(&mut self, status: &str) {
        self.last_status = Some(status.to_string());
    }

    /// Whether `message` differs from the last successfully notified error
    pub fn is_new_error(&self, message: &str) -> bool {
        self.last_error.as_deref() != Some(message)
    }

    /// Record a successfully notified error message
    pub fn record_error(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
    }
}
