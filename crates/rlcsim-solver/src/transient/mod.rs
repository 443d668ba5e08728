//! Transient step-response engine.
//!
//! Every waveform is a closed-form analytic solution, dispatched on the
//! circuit topology:
//!
//! - **RC**: capacitor charge `V(1 - e^(-t/τ))` and discharge `V·e^(-t/τ)`, `τ = RC`
//! - **RL**: current growth `(V/R)(1 - e^(-t/τ))` and decay from the growth
//!   curve's final value, `τ = L/R`
//! - **RLC**: one of three damping-regime formulas over a fixed 10 ms window
//! - **R**: no time behavior, rejected with `UnsupportedOperation`
//!
//! # Module Structure
//!
//! - [`types`] - Windows, time constants and waveform constants
//! - [`result`] - Result types with interpolation support
//! - [`solver`] - Main solver functions

pub mod result;
pub mod solver;
pub mod types;

pub use result::{Quantity, Series, SeriesKind, TimeSample, TransientResult};
pub use solver::{damping_params, default_span, solve_transient, solve_transient_with};
pub use types::{
    DampingParams, FIRST_ORDER_POINTS, MAX_TIME_POINTS, RLC_POINTS, RLC_WINDOW, TIME_CONSTANTS_SPAN,
    TimeConstants, TimeSpan, rlc_coefficients,
};
