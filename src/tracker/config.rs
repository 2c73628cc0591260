//! Tracker configuration.

use crate::tracker::error::BuildError;
use serde::{Deserialize, Serialize};

/// How the notification following a redo-to-latest is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EchoPolicy {
    /// Consume the next notification unconditionally
    #[default]
    AbsorbAny,

    /// Consume it only if it equals the replayed record; otherwise
    /// treat it as a genuine edit
    AbsorbMatching,
}

/// Settings for a [`HistoryTracker`](crate::tracker::HistoryTracker).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum snapshots retained; the oldest is evicted beyond it
    pub capacity: Option<usize>,

    /// Ignore a genuine edit equal to the newest snapshot
    pub skip_duplicates: bool,

    pub echo_policy: EchoPolicy,
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.capacity == Some(0) {
            return Err(BuildError::ZeroCapacity);
        }
        Ok(())
    }
}
