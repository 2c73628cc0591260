//! Ordered snapshot history.
//!
//! Holds the snapshots produced by genuine edits, oldest first. The
//! history only grows at the newest end; it shrinks by dropping the newest
//! entry or by evicting the oldest one when a capacity limit applies.

use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A record captured at one instant.
///
/// # Example
///
/// ```rust
/// use formstate::core::{Record, SnapshotHistory};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Note { text: String }
///
/// impl Record for Note {
///     fn blank() -> Self { Self { text: String::new() } }
/// }
///
/// let mut history = SnapshotHistory::new();
/// let snapshot = history.push(Note { text: "draft".to_string() });
/// assert_eq!(snapshot.sequence, 0);
/// assert_eq!(snapshot.record.text, "draft");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<R: Record> {
    /// Full copy of every field value
    pub record: R,
    /// Capture order, stable across eviction
    pub sequence: u64,
    /// When the snapshot was captured
    pub recorded_at: DateTime<Utc>,
}

/// Ordered sequence of snapshots.
///
/// # Example
///
/// ```rust
/// use formstate::core::{Record, SnapshotHistory};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter { value: i64 }
///
/// impl Record for Counter {
///     fn blank() -> Self { Self { value: 0 } }
/// }
///
/// let mut history = SnapshotHistory::new();
/// assert_eq!(history.cursor(), None);
///
/// history.push(Counter { value: 1 });
/// history.push(Counter { value: 2 });
///
/// assert_eq!(history.cursor(), Some(1));
/// assert_eq!(history.records(), vec![&Counter { value: 1 }, &Counter { value: 2 }]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SnapshotHistory<R: Record> {
    snapshots: Vec<Snapshot<R>>,
    next_sequence: u64,
}

impl<R: Record> Default for SnapshotHistory<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> SnapshotHistory<R> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Capture a record as the newest snapshot.
    pub fn push(&mut self, record: R) -> &Snapshot<R> {
        let snapshot = Snapshot {
            record,
            sequence: self.next_sequence,
            recorded_at: Utc::now(),
        };
        self.next_sequence += 1;
        self.snapshots.push(snapshot);
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Remove and return the newest snapshot.
    pub fn pop_latest(&mut self) -> Option<Snapshot<R>> {
        self.snapshots.pop()
    }

    /// Remove and return the oldest snapshot.
    pub fn evict_oldest(&mut self) -> Option<Snapshot<R>> {
        if self.snapshots.is_empty() {
            None
        } else {
            Some(self.snapshots.remove(0))
        }
    }

    /// Get the snapshot at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&Snapshot<R>> {
        self.snapshots.get(index)
    }

    /// Get the newest snapshot.
    pub fn latest(&self) -> Option<&Snapshot<R>> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the most recently committed snapshot.
    ///
    /// `None` while the history is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    /// Records in capture order.
    pub fn records(&self) -> Vec<&R> {
        self.snapshots.iter().map(|s| &s.record).collect()
    }

    /// All snapshots in capture order.
    pub fn snapshots(&self) -> &[Snapshot<R>] {
        &self.snapshots
    }

    /// Time spanned from the oldest to the newest capture.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.snapshots.first(), self.snapshots.last()) {
            let duration = last.recorded_at.signed_duration_since(first.recorded_at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Drop every snapshot. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Entry {
        name: String,
        age: u32,
    }

    impl Record for Entry {
        fn blank() -> Self {
            Self {
                name: String::new(),
                age: 0,
            }
        }
    }

    fn entry(name: &str, age: u32) -> Entry {
        Entry {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: SnapshotHistory<Entry> = SnapshotHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.cursor(), None);
        assert!(history.latest().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn push_advances_cursor() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));
        assert_eq!(history.cursor(), Some(0));
        history.push(entry("b", 2));
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.latest().unwrap().record, entry("b", 2));
    }

    #[test]
    fn sequence_is_monotonic() {
        let mut history = SnapshotHistory::new();
        let first = history.push(entry("a", 1)).sequence;
        let second = history.push(entry("b", 2)).sequence;
        history.pop_latest();
        let third = history.push(entry("c", 3)).sequence;

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(third, 2);
    }

    #[test]
    fn pop_latest_removes_newest() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));
        history.push(entry("b", 2));

        let popped = history.pop_latest().unwrap();
        assert_eq!(popped.record, entry("b", 2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn evict_oldest_removes_front() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));
        history.push(entry("b", 2));

        let evicted = history.evict_oldest().unwrap();
        assert_eq!(evicted.record, entry("a", 1));
        assert_eq!(history.records(), vec![&entry("b", 2)]);
        assert_eq!(history.get(0).unwrap().sequence, 1);
    }

    #[test]
    fn evict_on_empty_is_none() {
        let mut history: SnapshotHistory<Entry> = SnapshotHistory::new();
        assert!(history.evict_oldest().is_none());
        assert!(history.pop_latest().is_none());
    }

    #[test]
    fn records_preserve_capture_order() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));
        history.push(entry("b", 2));
        history.push(entry("c", 3));

        let records = history.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], &entry("a", 1));
        assert_eq!(records[1], &entry("b", 2));
        assert_eq!(records[2], &entry("c", 3));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.push(entry("b", 2));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn clear_keeps_sequence_counting() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.push(entry("b", 2)).sequence, 1);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = SnapshotHistory::new();
        history.push(entry("a", 1));
        history.push(entry("b", 2));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: SnapshotHistory<Entry> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.records(), deserialized.records());
    }
}
