//! Analysis runners for frequency sweep and transient simulation.

pub mod sweep;
pub mod transient;

pub use sweep::run_sweep;
pub use transient::{TransientConfig, run_transient};
