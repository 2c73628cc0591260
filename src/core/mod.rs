//! Core history types and logic.
//!
//! This module contains the pure core of the tracker:
//! - Record definitions via the `Record` trait
//! - Snapshot history storage
//! - Tagged position with pure transition functions
//!
//! Nothing here talks to a host form; wiring lives in `session`.

mod history;
mod position;
mod record;

pub use history::{Snapshot, SnapshotHistory};
pub use position::Position;
pub use record::Record;
