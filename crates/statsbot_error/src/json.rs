//! Stats body parse failures.

/// A stats API body that is not a stats object.
///
/// Only logged: the fetch reports it to callers as an
/// [`UpstreamError`](crate::UpstreamError).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed stats body: {} (line {} in {})", message, line, file)]
pub struct JsonError {
    /// Parser message, including the position in the body
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Record a parse failure at the caller's location.
    ///
    /// ```
    /// use statsbot_error::JsonError;
    ///
    /// let err = JsonError::new("expected value at line 1 column 1");
    /// assert!(err.to_string().starts_with("Malformed stats body: expected value"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
