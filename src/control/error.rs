//! Error types for the control structures.

/// Represents an attempt to read the payload of an empty value.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{EmptyAccessError, Maybe};
///
/// let error = Maybe::<i32>::Nothing.from_maybe().unwrap_err();
/// assert_eq!(error, EmptyAccessError { type_name: "Maybe", method_name: "from_maybe" });
/// assert_eq!(
///     format!("{error}"),
///     "Maybe::from_maybe: no value present (called on Nothing)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAccessError {
    /// The name of the type that was empty.
    pub type_name: &'static str,
    /// The name of the method that needed a value.
    pub method_name: &'static str,
}

impl std::fmt::Display for EmptyAccessError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: no value present (called on Nothing)",
            self.type_name, self.method_name
        )
    }
}

impl std::error::Error for EmptyAccessError {}
