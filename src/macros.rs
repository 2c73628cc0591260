//! Macros for declaring form records.

/// Declare a fixed-shape record struct and implement `Record` for it.
///
/// Each field lists its blank value, which together form the record
/// returned once undo runs past the oldest snapshot. Fields are public so
/// a host form can read and write them directly.
///
/// # Example
///
/// ```
/// use formstate::core::Record;
/// use formstate::record_struct;
///
/// record_struct! {
///     pub struct Profile {
///         name: String = String::new(),
///         email: String = String::new(),
///         age: u32 = 0,
///         subscribed: bool = false,
///     }
/// }
///
/// let blank = Profile::blank();
/// assert!(blank.name.is_empty());
/// assert_eq!(blank.age, 0);
/// ```
#[macro_export]
macro_rules! record_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $blank:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty
            ),*
        }

        impl $crate::core::Record for $name {
            fn blank() -> Self {
                Self {
                    $($field: $blank),*
                }
            }
        }
    };
}
