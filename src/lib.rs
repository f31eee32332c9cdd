//! # u-mathutils
//!
//! Small numeric helpers for the U-Engine ecosystem: an arithmetic mean,
//! a bounded random integer, and decimal rounding.
//!
//! ## Modules
//!
//! - [`stats`] — Arithmetic mean with compensated summation
//! - [`random`] — Bounded random integers, seeded generators
//! - [`rounding`] — Rounding to a number of decimal places
//! - [`error`] — The shared invalid-argument error
//!
//! ## Fail-soft contract
//!
//! [`average`], [`random_int`] and [`round`] never panic on bad input.
//! They emit a `tracing` error event on [`LOG_TARGET`] and return
//! `f64::NAN`, which callers detect with [`f64::is_nan`]. Each has a
//! `try_*` counterpart returning [`Result`] for callers that prefer a
//! typed failure.
//!
//! ```
//! use u_mathutils::{average, round, try_average, MathError};
//! assert_eq!(round(average(&[1.0, 2.0, 2.0]), 2), 1.67);
//! assert!(average(&[]).is_nan());
//! assert_eq!(try_average(&[]), Err(MathError::EmptyInput));
//! ```
//!
//! ## Features
//!
//! - `logging` — [`init_logging`] installs an `EnvFilter`-driven subscriber
//! - `serde` — `Serialize`/`Deserialize` for [`RoundingMode`]

pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod random;
pub mod rounding;
pub mod stats;
mod validate;

pub use error::{MathError, Result};
#[cfg(feature = "logging")]
pub use logging::init_logging;
pub use random::{random_int, try_random_int};
pub use rounding::{
    round, round_to_integer, round_with_mode, try_round, try_round_with_mode, RoundingMode,
};
pub use stats::{average, try_average};

/// `tracing` target for every diagnostic emitted by this crate.
pub const LOG_TARGET: &str = "u_mathutils";

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
