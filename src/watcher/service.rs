use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::crawler::{self, models::ListingSnapshot};
use crate::notifier::LineNotifier;
use crate::storage::state_file::{PersistedState, StateStore};

use super::diff;
use super::message;

/// How a successful run ended, reported as a one-line status by main.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Baseline,
    NoChanges,
    Notified,
}

pub struct WatchService {
    cfg: Config,
    store: StateStore,
    notifier: LineNotifier,
}

impl WatchService {
    pub fn new(cfg: Config) -> Self {
        let store = StateStore::new(cfg.state_path.clone());
        let notifier = LineNotifier::new(cfg.line_token.clone());
        Self {
            cfg,
            store,
            notifier,
        }
    }

    /// One full pass: load prior state, fetch the page, settle the diff.
    pub async fn run(&self) -> Result<RunOutcome> {
        let prev = self.store.load().await.seen;
        let curr = crawler::fetch_listing_snapshot(&self.cfg).await?;
        self.settle(prev, curr).await
    }

    async fn settle(&self, prev: ListingSnapshot, curr: ListingSnapshot) -> Result<RunOutcome> {
        if prev.is_empty() {
            info!(count = curr.len(), "No prior snapshot, saving baseline");
            self.store.save(&PersistedState { seen: curr }).await?;
            return Ok(RunOutcome::Baseline);
        }

        let changes = diff::detect_changes(&prev, &curr);
        if changes.is_empty() {
            // re-save even when identical so the stored document always
            // reflects the latest fetch
            self.store.save(&PersistedState { seen: curr }).await?;
            return Ok(RunOutcome::NoChanges);
        }

        info!(
            new = changes.new.len(),
            updated = changes.updated.len(),
            "Listing changes detected"
        );

        let text = message::build_message(&changes, &self.cfg.open_url);

        // The snapshot is committed only after delivery succeeds, so an
        // undelivered notification is re-detected and retried next run.
        self.notifier.send_broadcast(&text).await?;
        self.store.save(&PersistedState { seen: curr }).await?;

        Ok(RunOutcome::Notified)
    }
}
