//! Engine: the poll loop
//!
//! Runs fetch -> validate -> extract -> notify cycles forever. Every error
//! raised inside a cycle is caught once at the cycle boundary and reported
//! through the notifier, with consecutive identical notifications
//! suppressed; the inter-cycle sleep runs whether the cycle succeeded or
//! failed.

use std::sync::Arc;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, CursorPolicy};
use crate::notifier::{send_contained, Notifier};
use crate::response;
use crate::review_client::ReviewClient;
use crate::state::NotificationState;
use crate::verdict::format_status_change;
use crate::{Result, WatchError};

/// The engine polls the review API and dispatches notifications
pub struct Engine {
    client: ReviewClient,
    notifier: Arc<dyn Notifier>,
    poll_interval: std::time::Duration,
    cursor_policy: CursorPolicy,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        client: ReviewClient,
        notifier: Arc<dyn Notifier>,
        config: &Config,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            poll_interval: config.poll_interval,
            cursor_policy: config.cursor_policy,
            cancel,
        }
    }

    /// Run poll cycles until the cancellation token is triggered.
    ///
    /// `start_cursor` is the Unix timestamp bounding the first fetch
    /// window. The notification state lives here, outside the cycle body,
    /// so suppression survives across iterations.
    pub async fn run(&self, start_cursor: i64) {
        let mut cursor = start_cursor;
        let mut state = NotificationState::default();

        loop {
            self.run_cycle(&mut cursor, &mut state).await;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Poll loop cancelled");
                    break;
                }
            }
        }
    }

    /// Run a single poll cycle. Never fails: every error is captured here
    /// and turned into a (deduplicated) failure notification.
    pub async fn run_cycle(&self, cursor: &mut i64, state: &mut NotificationState) {
        match self.poll_once(*cursor, state).await {
            Ok(current_date) => {
                if self.cursor_policy == CursorPolicy::Advance {
                    if let Some(server_time) = current_date {
                        // The cursor is monotone; a stale server time is ignored.
                        if server_time > *cursor {
                            tracing::debug!("Advancing cursor {} -> {}", cursor, server_time);
                            *cursor = server_time;
                        }
                    }
                }
            }
            Err(err) => {
                let message = format!("Сбой в работе программы: {err}");
                tracing::error!("{message}");
                if state.is_new_error(&message) {
                    if send_contained(self.notifier.as_ref(), &message).await {
                        state.record_error(&message);
                    }
                } else {
                    tracing::debug!("Error unchanged, notification suppressed");
                }
            }
        }
    }

    /// One fetch-validate-extract-notify pass. Returns the response's
    /// `current_date` for cursor advancement.
    async fn poll_once(
        &self,
        cursor: i64,
        state: &mut NotificationState,
    ) -> Result<Option<i64>> {
        let response = self.client.fetch(cursor).await?;
        let feed = response::validate(response)?;
        tracing::debug!("Fetched {} homework records", feed.homeworks.len());

        match feed.homeworks.first() {
            Some(record) => self.notify_if_changed(record, state).await?,
            None => tracing::debug!("No homework records in the fetch window"),
        }

        Ok(feed.current_date)
    }

    /// Send a status-change notification for the most recent submission,
    /// unless its status matches the last notified one.
    async fn notify_if_changed(
        &self,
        record: &Value,
        state: &mut NotificationState,
    ) -> Result<()> {
        let status = record
            .get("status")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingField("status"))?;

        if !state.is_new_status(status) {
            tracing::debug!("Homework status unchanged: {}", status);
            return Ok(());
        }

        let message = format_status_change(record)?;
        if send_contained(self.notifier.as_ref(), &message).await {
            state.record_status(status);
        }
        Ok(())
    }
}
