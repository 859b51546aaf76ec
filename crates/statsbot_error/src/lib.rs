//! Error types for statsbot.
//!
//! This crate provides the error types shared by every statsbot crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the wrapper struct pattern:
//! - Each `*Error` struct carries a message and the source location where it was raised
//! - All constructors use `#[track_caller]` for automatic location capture
//! - `StatsbotErrorKind` collects them, `StatsbotError` boxes the kind
//!
//! Callers of the stats fetch only ever see [`UpstreamError`]. The finer
//! grained [`HttpError`] and [`JsonError`] describe the cause and are logged at
//! the boundary where they are collapsed.
//!
//! # Examples
//!
//! ```
//! use statsbot_error::{StatsbotResult, UpstreamError};
//!
//! fn fetch_stats(key: &str) -> StatsbotResult<String> {
//!     Err(UpstreamError::new(key))?
//! }
//!
//! match fetch_stats("123") {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod upstream;

pub use config::ConfigError;
pub use error::{StatsbotError, StatsbotErrorKind, StatsbotResult};
pub use http::HttpError;
pub use json::JsonError;
pub use upstream::UpstreamError;
