//! Formstate: undo/redo history for multi-field data-entry forms
//!
//! Formstate records a full snapshot of a form's record on every change
//! and lets the form step backward and forward through those snapshots.
//! The tracker is a small state machine with a pure core; wiring it to a
//! live form happens in a thin session shell.
//!
//! # Core Concepts
//!
//! - **Record**: Fixed-shape field values via the `Record` trait
//! - **History**: Ordered snapshots produced by genuine edits
//! - **Position**: Where the form stands relative to the newest snapshot
//! - **Echo**: The change notification caused by applying an undo/redo,
//!   which the tracker absorbs instead of recording
//!
//! # Example
//!
//! ```rust
//! use formstate::record_struct;
//! use formstate::HistoryTracker;
//!
//! record_struct! {
//!     pub struct Profile {
//!         name: String = String::new(),
//!         email: String = String::new(),
//!         age: u32 = 0,
//!     }
//! }
//!
//! let edit = |name: &str| Profile {
//!     name: name.to_string(),
//!     email: String::new(),
//!     age: 0,
//! };
//!
//! let mut tracker = HistoryTracker::new();
//! tracker.record_change(edit("A"));
//! tracker.record_change(edit("B"));
//! tracker.record_change(edit("C"));
//!
//! assert_eq!(tracker.undo(), edit("B"));
//! assert_eq!(tracker.undo(), edit("A"));
//! assert_eq!(tracker.undo(), Profile { name: String::new(), email: String::new(), age: 0 });
//! assert_eq!(tracker.redo(), edit("A"));
//! ```

mod macros;

pub mod core;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{Position, Record, Snapshot, SnapshotHistory};
pub use session::{Applied, Form, FormSession, Notify};
pub use tracker::{HistoryTracker, RecordOutcome, TrackerBuilder, TrackerConfig};
