use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::crawler::models::ListingSnapshot;

/// The single durable document: `{"seen": {"<id>": "<timestamp>", ...}}`.
/// Fully replaced at the end of every run, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub seen: ListingSnapshot,
}

/// Outcome of reading the state file. Kept as an explicit enum so the
/// policy stays visible: corruption resets to empty, it never aborts a
/// run. Transport and delivery errors elsewhere do abort.
#[derive(Debug)]
enum StateRead {
    Loaded(PersistedState),
    Missing,
    Malformed,
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the prior state, falling back to an empty one when the file
    /// is absent or does not hold a valid state document. Worst case the
    /// watcher re-baselines and skips one round of notifications.
    pub async fn load(&self) -> PersistedState {
        match self.read_state().await {
            StateRead::Loaded(state) => state,
            StateRead::Missing => {
                debug!(path = %self.path.display(), "No state file yet, starting empty");
                PersistedState::default()
            }
            StateRead::Malformed => {
                warn!(path = %self.path.display(), "Discarding malformed state file");
                PersistedState::default()
            }
        }
    }

    async fn read_state(&self) -> StateRead {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return StateRead::Missing,
        };

        match serde_json::from_str(&raw) {
            Ok(state) => StateRead::Loaded(state),
            Err(_) => StateRead::Malformed,
        }
    }

    /// Overwrites the state document. A write failure is fatal: without
    /// durable state the next run would re-notify or mis-baseline.
    pub async fn save(&self, state: &PersistedState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("failed to write state file {}", self.path.display()))?;
        Ok(())
    }
}
