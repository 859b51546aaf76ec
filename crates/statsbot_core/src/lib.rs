//! Core data types for statsbot.
//!
//! [`StatsResult`] is the record returned by the stats API, with every field
//! optional. [`StatsPanel`] is its presentation form, where absent fields turn
//! into the `"N/A"` marker. Nothing upstream of the panel invents values.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod panel;
mod stats;

pub use panel::{NOT_AVAILABLE, PanelField, StatsPanel, failure_message};
pub use stats::{StatValue, StatsResult};
