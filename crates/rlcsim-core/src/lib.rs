//! Circuit parameter model for rlcsim.
//!
//! This crate provides:
//! - [`Topology`]: the closed set of series loops (R, RC, RL, RLC)
//! - [`ParameterSet`]: validated circuit constants
//! - [`RawParameters`]: unvalidated text input and SI-suffix parsing
//! - [`Error`]: the error kinds shared by every rlcsim crate

pub mod error;
pub mod params;
pub mod topology;
pub mod units;

pub use error::{Error, Result};
pub use params::{ParameterSet, RawParameters};
pub use topology::Topology;
pub use units::{format_value, parse_value};
