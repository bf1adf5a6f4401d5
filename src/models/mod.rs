//! Response models, one per API action.
//!
//! Pool-scoped actions answer with an envelope keyed by the action name:
//!
//! ```json
//! {"getpoolhashrate": {"version": "1.0.0", "runtime": 4.1, "data": 123456.7}}
//! ```
//!
//! That wrapper is modelled once as [`MphEnvelope`]. The envelope key is always
//! required so that a body meant for another action fails to decode instead of
//! producing an empty value.

pub mod pool;
pub mod statistics;
pub mod user;

pub use pool::*;
pub use statistics::*;
pub use user::*;

use serde::Deserialize;

/// `{"version": .., "runtime": .., "data": T}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphEnvelope<T> {
    #[serde(default)]
    pub version: String,
    /// Server-side processing time in milliseconds
    #[serde(default, with = "crate::serde_util::number_or_string")]
    pub runtime: f64,
    pub data: T,
}
