//! Upstream error type surfaced by the stats fetch.

/// The stats API could not produce a result for a lookup key.
///
/// Raised for every outbound failure: network error, non-success status, or an
/// unparseable body. The cause is logged where the error is created and is not
/// carried here, so callers cannot tell the failure modes apart.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: stats request for '{}' failed at line {} in {}", key, line, file)]
pub struct UpstreamError {
    /// Lookup key of the failed request
    pub key: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new UpstreamError for `key` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use statsbot_error::UpstreamError;
    ///
    /// let err = UpstreamError::new("123");
    /// assert_eq!(err.key, "123");
    /// assert!(err.to_string().contains("'123'"));
    /// ```
    #[track_caller]
    pub fn new(key: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: key.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
