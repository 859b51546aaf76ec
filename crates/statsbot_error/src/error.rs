//! Top-level error wrapper types.

use crate::{ConfigError, UpstreamError};

/// Errors statsbot returns to its callers.
///
/// Transport and parse failures never appear here: the fetch logs them as
/// [`HttpError`](crate::HttpError) or [`JsonError`](crate::JsonError) and
/// returns [`UpstreamError`].
///
/// # Examples
///
/// ```
/// use statsbot_error::{StatsbotError, StatsbotErrorKind, UpstreamError};
///
/// let err: StatsbotError = UpstreamError::new("123").into();
/// assert!(matches!(err.kind(), StatsbotErrorKind::Upstream(_)));
/// assert!(format!("{}", err).contains("Upstream Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StatsbotErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Stats API failure, as seen by callers of the fetch
    #[from(UpstreamError)]
    Upstream(UpstreamError),
}

/// Statsbot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use statsbot_error::{ConfigError, StatsbotResult};
///
/// fn might_fail() -> StatsbotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Statsbot Error: {}", _0)]
pub struct StatsbotError(Box<StatsbotErrorKind>);

impl StatsbotError {
    /// Create a new error from a kind.
    pub fn new(kind: StatsbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StatsbotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StatsbotErrorKind
impl<T> From<T> for StatsbotError
where
    T: Into<StatsbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for statsbot operations.
pub type StatsbotResult<T> = std::result::Result<T, StatsbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_from_constructors() {
        let config: StatsbotError = ConfigError::new("api_base must not be empty").into();
        let upstream: StatsbotError = UpstreamError::new("123").into();

        assert!(matches!(config.kind(), StatsbotErrorKind::Config(_)));
        match upstream.kind() {
            StatsbotErrorKind::Upstream(e) => assert_eq!(e.key, "123"),
            other => panic!("unexpected kind: {}", other),
        }
    }
}
