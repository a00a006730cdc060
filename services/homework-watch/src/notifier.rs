//! Notifier trait for sending messages

use async_trait::async_trait;

/// Trait for sending a plain-text notification
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Send a notification
    async fn notify(&self, text: &str) -> crate::Result<()>;
}

/// Attempt exactly one send, containing any failure.
///
/// A failed send is logged and reported as `false`; it never propagates, so
/// a messaging outage cannot take the poll loop down with it.
pub async fn send_contained(notifier: &dyn Notifier, text: &str) -> bool {
    match notifier.notify(text).await {
        Ok(()) => {
            tracing::info!("Sent notification via {}: {}", notifier.type_name(), text);
            true
        }
        Err(e) => {
            tracing::error!(
                "Failed to send notification via {}: {}. Message was: {}",
                notifier.type_name(),
                e,
                text
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedNotifier {
        succeed: bool,
    }

    #[async_trait]
    impl Notifier for FixedNotifier {
        fn type_name(&self) -> &str {
            "fixed"
        }

        async fn notify(&self, _text: &str) -> crate::Result<()> {
            if self.succeed {
                Ok(())
            } else {
                Err(crate::WatchError::Notifier("send failed".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn successful_send_reports_true() {
        let notifier = FixedNotifier { succeed: true };
        assert!(send_contained(&notifier, "hello").await);
    }

    #[tokio::test]
    async fn failed_send_is_contained_and_reports_false() {
        let notifier = FixedNotifier { succeed: false };
        assert!(!send_contained(&notifier, "hello").await);
    }
}
