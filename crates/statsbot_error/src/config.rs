//! Settings that cannot be loaded or used.

/// Bad or missing statsbot setting, such as an unparsable `api_base` or a
/// config file that does not parse.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the setting
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use statsbot_error::{ConfigError, StatsbotError, StatsbotErrorKind};
    ///
    /// let err: StatsbotError = ConfigError::new("api_base must not be empty").into();
    /// assert!(matches!(err.kind(), StatsbotErrorKind::Config(_)));
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
