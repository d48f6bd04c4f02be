//! The ephemeral message board.
//!
//! Every message lives for a fixed TTL after it is posted. Expired messages are
//! dropped on every list and every accepted post, and by a background
//! sweep that runs on its own period, so memory is reclaimed even when nobody
//! is reading.
//!
//! All access to the underlying sequence goes through one `tokio` mutex; each
//! operation holds it for its whole read-filter-write step.

mod config;
mod error;
mod message;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub use config::{BoardConfig, MESSAGE_TTL, SWEEP_INTERVAL};
pub use error::ValidationError;
pub use message::Message;

use message::Entry;

#[derive(Clone)]
pub struct Board {
    entries: Arc<Mutex<Vec<Entry>>>,
    config: Arc<BoardConfig>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns every live message in the order it was posted.
    ///
    /// Expired entries are removed from the board before the snapshot is taken.
    pub async fn list(&self) -> Vec<Message> {
        let mut entries = self.entries.lock().await;
        prune(&mut entries, Instant::now());

        entries.iter().map(|entry| entry.message().clone()).collect()
    }

    /// Posts a new message and returns it.
    ///
    /// `username` and `text` must contain something other than whitespace.
    /// On success the message gets a fresh id, is stamped with the current time
    /// and is appended to the end of the board.
    pub async fn append(
        &self,
        username: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Message, ValidationError> {
        let username = username.into();
        let text = text.into();

        let mut entries = self.entries.lock().await;
        // a rejected post leaves the board untouched
        if username.trim().is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if text.trim().is_empty() {
            return Err(ValidationError::MissingText);
        }

        let now = Instant::now();
        prune(&mut entries, now);

        let message = Message::new(username, text);
        entries.push(Entry::new(message.clone(), now + self.config.ttl));
        tracing::debug!(id = %message.id, username = %message.username, "message posted");

        Ok(message)
    }

    /// Drops every expired message, returning how many were removed.
    pub async fn sweep(&self) -> usize {
        let mut entries = self.entries.lock().await;
        prune(&mut entries, Instant::now())
    }

    /// Starts the background sweep on the current runtime.
    ///
    /// The first sweep happens one full interval after this call. The task
    /// runs until the runtime shuts down.
    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        let board = self.clone();
        let period = self.config.sweep_interval;
        tokio::spawn(async move { board.sweep_loop(period).await })
    }

    async fn sweep_loop(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = self.sweep().await;
            tracing::debug!(removed, "expired messages cleared");
        }
    }

    #[cfg(test)]
    async fn stored_len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

fn prune(entries: &mut Vec<Entry>, now: Instant) -> usize {
    let before = entries.len();
    entries.retain(|entry| !entry.is_expired(now));
    before - entries.len()
}
