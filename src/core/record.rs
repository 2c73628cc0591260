//! The Record trait for form snapshots.
//!
//! A record is the full set of field values a form holds at one instant.
//! The tracker captures owned copies of records and hands owned copies
//! back, so it never aliases state held by the host form.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for fixed-shape form records.
///
/// # Required Traits
///
/// - `Clone`: snapshots are owned copies taken at capture time
/// - `PartialEq`: records are compared to detect echoes and duplicates
/// - `Debug`: records are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: records can be inspected and exported
///
/// # Example
///
/// ```rust
/// use formstate::core::Record;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Contact {
///     name: String,
///     email: String,
///     age: u32,
/// }
///
/// impl Record for Contact {
///     fn blank() -> Self {
///         Self {
///             name: String::new(),
///             email: String::new(),
///             age: 0,
///         }
///     }
/// }
///
/// assert!(Contact::blank().is_blank());
/// ```
pub trait Record:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The freshly-initialized shape of the form.
    ///
    /// This is what `undo` hands back once every recorded snapshot has
    /// been walked past.
    fn blank() -> Self;

    /// Check whether this record equals the blank shape.
    fn is_blank(&self) -> bool {
        *self == Self::blank()
    }
}
