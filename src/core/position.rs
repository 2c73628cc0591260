//! Where the tracker stands relative to its newest snapshot.
//!
//! Position replaces a raw offset counter plus a one-shot discard flag with
//! a tagged value. All transition functions here are pure; the tracker
//! applies them and does the indexing.

use serde::{Deserialize, Serialize};

/// Tracker position.
///
/// # Example
///
/// ```rust
/// use formstate::core::Position;
///
/// let position = Position::Editing.after_undo(3);
/// assert_eq!(position, Position::Undone { depth: 1 });
/// assert_eq!(position.displayed_index(3), Some(1));
///
/// let position = position.after_redo();
/// assert_eq!(position, Position::PendingEcho);
/// assert_eq!(position.displayed_index(3), Some(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Position {
    /// At the newest snapshot; change notifications are genuine edits
    #[default]
    Editing,

    /// Stepped `depth` snapshots back via undo
    Undone { depth: usize },

    /// The last outbound action replayed the newest snapshot (or the
    /// baseline on an empty history) and the next notification is its echo
    PendingEcho,
}

impl Position {
    /// Name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Undone { .. } => "Undone",
            Self::PendingEcho => "PendingEcho",
        }
    }

    /// Steps back from the newest snapshot. Zero unless undone.
    pub fn offset(&self) -> usize {
        match self {
            Self::Undone { depth } => *depth,
            _ => 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }

    pub fn is_pending_echo(&self) -> bool {
        matches!(self, Self::PendingEcho)
    }

    /// Position after one undo over a history of `len` snapshots.
    ///
    /// Depth is clamped to `len`; one step past the oldest snapshot is the
    /// baseline and further undos stay there. An empty history has nothing
    /// to step back through, so the baseline is replayed as an echo.
    pub fn after_undo(self, len: usize) -> Self {
        if len == 0 {
            return Self::PendingEcho;
        }
        let depth = match self {
            Self::Undone { depth } => depth.saturating_add(1).min(len),
            Self::Editing | Self::PendingEcho => 1,
        };
        Self::Undone { depth }
    }

    /// Position after one redo.
    ///
    /// Reaching (or already being at) the newest snapshot always yields
    /// `PendingEcho`; the offset never goes below zero.
    pub fn after_redo(self) -> Self {
        match self {
            Self::Undone { depth } if depth > 1 => Self::Undone { depth: depth - 1 },
            _ => Self::PendingEcho,
        }
    }

    /// Index of the snapshot this position displays, or `None` for the
    /// baseline.
    pub fn displayed_index(&self, len: usize) -> Option<usize> {
        len.checked_sub(1 + self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_editing() {
        assert_eq!(Position::default(), Position::Editing);
        assert_eq!(Position::default().offset(), 0);
    }

    #[test]
    fn undo_from_editing_is_depth_one() {
        assert_eq!(
            Position::Editing.after_undo(2),
            Position::Undone { depth: 1 }
        );
        assert_eq!(
            Position::PendingEcho.after_undo(2),
            Position::Undone { depth: 1 }
        );
    }

    #[test]
    fn undo_depth_is_clamped_to_len() {
        let position = Position::Undone { depth: 3 }.after_undo(3);
        assert_eq!(position, Position::Undone { depth: 3 });
        assert_eq!(position.displayed_index(3), None);
    }

    #[test]
    fn undo_on_empty_history_replays_baseline() {
        let position = Position::Editing.after_undo(0);
        assert_eq!(position, Position::PendingEcho);
        assert_eq!(position.displayed_index(0), None);
    }

    #[test]
    fn redo_walks_forward_then_pends_echo() {
        let position = Position::Undone { depth: 2 }.after_redo();
        assert_eq!(position, Position::Undone { depth: 1 });

        let position = position.after_redo();
        assert_eq!(position, Position::PendingEcho);
    }

    #[test]
    fn redo_at_latest_never_goes_negative() {
        assert_eq!(Position::Editing.after_redo(), Position::PendingEcho);
        assert_eq!(Position::PendingEcho.after_redo(), Position::PendingEcho);
        assert_eq!(Position::PendingEcho.offset(), 0);
    }

    #[test]
    fn displayed_index_walks_backward() {
        assert_eq!(Position::Editing.displayed_index(3), Some(2));
        assert_eq!(Position::Undone { depth: 1 }.displayed_index(3), Some(1));
        assert_eq!(Position::Undone { depth: 2 }.displayed_index(3), Some(0));
        assert_eq!(Position::Undone { depth: 3 }.displayed_index(3), None);
    }

    #[test]
    fn displayed_index_tolerates_overshoot() {
        assert_eq!(Position::Undone { depth: 9 }.displayed_index(3), None);
        assert_eq!(Position::Editing.displayed_index(0), None);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Position::Editing.name(), "Editing");
        assert_eq!(Position::Undone { depth: 4 }.name(), "Undone");
        assert_eq!(Position::PendingEcho.name(), "PendingEcho");
    }
}
