//! Undo/redo history tracker.
//!
//! The tracker receives a full record every time the host form reports a
//! change, including the changes caused by applying its own `undo`/`redo`
//! results. It classifies each notification as a genuine edit (appended) or
//! an echo of its own outbound action (absorbed).
//!
//! # Example
//!
//! ```rust
//! use formstate::record_struct;
//! use formstate::tracker::HistoryTracker;
//!
//! record_struct! {
//!     pub struct Profile {
//!         name: String = String::new(),
//!         age: u32 = 0,
//!     }
//! }
//!
//! let profile = |name: &str, age| Profile { name: name.to_string(), age };
//!
//! let mut tracker = HistoryTracker::new();
//! tracker.record_change(profile("A", 1));
//! tracker.record_change(profile("B", 2));
//!
//! let previous = tracker.undo();
//! assert_eq!(previous, profile("A", 1));
//! tracker.record_change(previous); // echo of applying the undo
//!
//! let latest = tracker.redo();
//! assert_eq!(latest, profile("B", 2));
//! tracker.record_change(latest); // echo of the redo, absorbed
//!
//! assert_eq!(tracker.history().len(), 2);
//! ```

mod builder;
mod config;
mod error;

pub use builder::TrackerBuilder;
pub use config::{EchoPolicy, TrackerConfig};
pub use error::BuildError;

use crate::core::{Position, Record, SnapshotHistory};

/// How a change notification was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A genuine edit was captured as the newest snapshot
    Appended,

    /// The notification echoed an undo/redo and left history untouched
    Absorbed,

    /// A genuine edit equal to the newest snapshot was ignored
    Skipped,
}

/// Snapshot history plus a position within it.
#[derive(Clone, Debug)]
pub struct HistoryTracker<R: Record> {
    history: SnapshotHistory<R>,
    position: Position,
    config: TrackerConfig,
    baseline: R,
}

impl<R: Record> Default for HistoryTracker<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> HistoryTracker<R> {
    /// Create an unbounded tracker whose baseline is `R::blank()`
    pub fn new() -> Self {
        Self::from_parts(TrackerConfig::default(), R::blank())
    }

    pub fn builder() -> TrackerBuilder<R> {
        TrackerBuilder::new()
    }

    pub(crate) fn from_parts(config: TrackerConfig, baseline: R) -> Self {
        Self {
            history: SnapshotHistory::new(),
            position: Position::Editing,
            config,
            baseline,
        }
    }

    /// Classify a change notification from the host form.
    ///
    /// While editing, the record is appended. While undone, the
    /// notification is absorbed. Right after a redo to the newest snapshot,
    /// the notification is treated as that redo's echo according to the
    /// configured [`EchoPolicy`].
    pub fn record_change(&mut self, record: R) -> RecordOutcome {
        match self.position {
            Position::Editing => self.append(record),
            Position::Undone { depth } => {
                tracing::trace!(depth, "Change absorbed while undone");
                RecordOutcome::Absorbed
            }
            Position::PendingEcho => {
                self.position = Position::Editing;
                let matches_replayed = record == *self.current();
                match self.config.echo_policy {
                    EchoPolicy::AbsorbAny => {
                        tracing::trace!(matches_replayed, "Redo echo absorbed");
                        RecordOutcome::Absorbed
                    }
                    EchoPolicy::AbsorbMatching if matches_replayed => {
                        tracing::trace!("Redo echo absorbed");
                        RecordOutcome::Absorbed
                    }
                    EchoPolicy::AbsorbMatching => {
                        tracing::debug!("Change after redo differs from replayed record");
                        self.append(record)
                    }
                }
            }
        }
    }

    fn append(&mut self, record: R) -> RecordOutcome {
        if self.config.skip_duplicates
            && self.history.latest().is_some_and(|s| s.record == record)
        {
            tracing::trace!("Duplicate edit skipped");
            return RecordOutcome::Skipped;
        }

        let sequence = self.history.push(record).sequence;

        if let Some(capacity) = self.config.capacity {
            while self.history.len() > capacity {
                if let Some(evicted) = self.history.evict_oldest() {
                    tracing::debug!(sequence = evicted.sequence, capacity, "Oldest snapshot evicted");
                }
            }
        }

        tracing::debug!(sequence, len = self.history.len(), "Snapshot recorded");
        RecordOutcome::Appended
    }

    /// Step one snapshot back and return the record to apply.
    ///
    /// Past the oldest snapshot this returns the baseline; repeating it
    /// keeps returning the baseline.
    pub fn undo(&mut self) -> R {
        let from = self.position;
        self.position = self.position.after_undo(self.history.len());
        let index = self.position.displayed_index(self.history.len());

        tracing::debug!(
            from = from.name(),
            to = self.position.name(),
            offset = self.position.offset(),
            ?index,
            "Undo"
        );
        if index.is_none() {
            tracing::debug!("Undo reached baseline");
        }

        self.current().clone()
    }

    /// Step one snapshot forward and return the record to apply.
    ///
    /// Reaching the newest snapshot returns it and arms echo absorption, so
    /// the notification produced by applying it does not duplicate it.
    /// Redo at the newest snapshot replays it again.
    pub fn redo(&mut self) -> R {
        let from = self.position;
        self.position = self.position.after_redo();

        tracing::debug!(
            from = from.name(),
            to = self.position.name(),
            offset = self.position.offset(),
            "Redo"
        );
        if self.history.is_empty() {
            tracing::debug!("Redo on empty history replays baseline");
        }

        self.current().clone()
    }

    /// The record the host should currently be displaying.
    pub fn current(&self) -> &R {
        self.position
            .displayed_index(self.history.len())
            .and_then(|index| self.history.get(index))
            .map_or(&self.baseline, |snapshot| &snapshot.record)
    }

    /// Whether undo has anything recorded to work with.
    ///
    /// Undo itself is always callable and degrades to the baseline.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether the next undo moves to a different state, i.e. the baseline
    /// has not been reached yet.
    pub fn has_meaningful_undo(&self) -> bool {
        self.position.offset() < self.history.len()
    }

    pub fn can_redo(&self) -> bool {
        self.position.offset() > 0
    }

    pub fn history(&self) -> &SnapshotHistory<R> {
        &self.history
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset()
    }

    /// Index of the newest snapshot, `None` while empty.
    pub fn cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn baseline(&self) -> &R {
        &self.baseline
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Drop all history and return to editing.
    pub fn reset(&mut self) {
        tracing::debug!(dropped = self.history.len(), "History reset");
        self.history.clear();
        self.position = Position::Editing;
    }
}
