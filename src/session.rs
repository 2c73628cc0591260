//! Host form wiring around the tracker.
//!
//! The core tracker is a pure state machine over owned records. A session
//! is the shell that connects it to a live form: it forwards edits, applies
//! undo/redo results wholesale, and feeds the resulting change notification
//! back into the tracker before returning. That feedback is the re-entrant
//! echo the tracker is built to classify.

use crate::core::Record;
use crate::tracker::{HistoryTracker, RecordOutcome};

/// Whether replacing a form's values emitted a change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notify {
    Changed,
    Silent,
}

/// A host form holding one record's worth of field values.
pub trait Form {
    type Record: Record;

    /// Copy every field value out of the form.
    fn snapshot(&self) -> Self::Record;

    /// Replace every field value (not a merge).
    fn replace_all(&mut self, record: Self::Record) -> Notify;
}

/// Result of applying an undo or redo to the form
#[derive(Clone, Debug, PartialEq)]
pub struct Applied<R: Record> {
    /// The record written into the form
    pub record: R,

    /// How the tracker classified the echo notification
    pub echo: RecordOutcome,
}

/// A form plus the tracker that records its history.
///
/// # Example
///
/// ```rust
/// use formstate::record_struct;
/// use formstate::session::{Form, FormSession, Notify};
///
/// record_struct! {
///     pub struct Contact {
///         name: String = String::new(),
///     }
/// }
///
/// struct ContactForm {
///     values: Contact,
/// }
///
/// impl Form for ContactForm {
///     type Record = Contact;
///
///     fn snapshot(&self) -> Contact {
///         self.values.clone()
///     }
///
///     fn replace_all(&mut self, record: Contact) -> Notify {
///         self.values = record;
///         Notify::Changed
///     }
/// }
///
/// let mut session = FormSession::new(ContactForm { values: Contact { name: String::new() } });
/// session.edit(|form| form.values.name = "Ada".to_string());
/// session.edit(|form| form.values.name = "Ada L.".to_string());
///
/// session.undo();
/// assert_eq!(session.form().values.name, "Ada");
///
/// session.redo();
/// assert_eq!(session.form().values.name, "Ada L.");
/// assert_eq!(session.tracker().history().len(), 2);
/// ```
pub struct FormSession<F: Form> {
    form: F,
    tracker: HistoryTracker<F::Record>,
}

impl<F: Form> FormSession<F> {
    /// Create a session with a default tracker
    pub fn new(form: F) -> Self {
        Self::with_tracker(form, HistoryTracker::new())
    }

    pub fn with_tracker(form: F, tracker: HistoryTracker<F::Record>) -> Self {
        Self { form, tracker }
    }

    /// Mutate the form, then report the change.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) -> RecordOutcome {
        f(&mut self.form);
        self.notify_changed()
    }

    /// Report the form's current values as a change notification.
    pub fn notify_changed(&mut self) -> RecordOutcome {
        let record = self.form.snapshot();
        self.tracker.record_change(record)
    }

    /// Undo one step and apply the result to the form
    pub fn undo(&mut self) -> Applied<F::Record> {
        let record = self.tracker.undo();
        self.apply(record)
    }

    /// Redo one step and apply the result to the form
    pub fn redo(&mut self) -> Applied<F::Record> {
        let record = self.tracker.redo();
        self.apply(record)
    }

    fn apply(&mut self, record: F::Record) -> Applied<F::Record> {
        let echo = match self.form.replace_all(record.clone()) {
            Notify::Changed => self.notify_changed(),
            Notify::Silent => {
                // The tracker still expects the echo; without it the next
                // genuine edit would be consumed in its place.
                tracing::trace!("Form applied silently; synthesizing echo");
                self.tracker.record_change(record.clone())
            }
        };
        Applied { record, echo }
    }

    pub fn can_undo(&self) -> bool {
        self.tracker.can_undo()
    }

    pub fn has_meaningful_undo(&self) -> bool {
        self.tracker.has_meaningful_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.tracker.can_redo()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn tracker(&self) -> &HistoryTracker<F::Record> {
        &self.tracker
    }

    pub fn into_parts(self) -> (F, HistoryTracker<F::Record>) {
        (self.form, self.tracker)
    }
}
