//! Response engines for series R, RC, RL and RLC circuits.
//!
//! This crate provides:
//! - Steady-state AC frequency sweeps with sampled resonance detection
//! - Closed-form transient step responses
//! - Damping regime classification for RLC loops
//! - Batch sweeps, optionally parallel (`parallel` feature)
//!
//! Every entry point is a pure function of its inputs.
//!
//! ```
//! use rlcsim_core::{ParameterSet, Topology};
//! use rlcsim_solver::{SweepParams, sweep};
//!
//! let params = ParameterSet::new(Topology::RLC, 80.0, 10e-3, 150e-9, 50.0).unwrap();
//! let result = sweep(&params, &SweepParams::default()).unwrap();
//! assert_eq!(result.len(), 500);
//! assert!(result.resonant_frequency.is_some());
//! ```

pub mod batch;
pub mod damping;
pub mod sweep;
pub mod transient;

pub use batch::{BatchConfig, sweep_batch, sweep_batch_with};
pub use damping::{DampingClassifier, DampingRegime, classify};
pub use rlcsim_core::{Error, ParameterSet, Result, Topology};
pub use sweep::{
    FrequencySample, MAX_SWEEP_POINTS, SweepParams, SweepResult, analytic_resonance, capacitive_reactance,
    generate_frequencies, impedance, inductive_reactance, sweep,
};
pub use transient::{
    DampingParams, Quantity, Series, SeriesKind, TimeConstants, TimeSample, TimeSpan,
    TransientResult, damping_params, default_span, solve_transient, solve_transient_with,
};

/// Run a transient analysis. Alias for [`solve_transient`].
pub fn transient(params: &ParameterSet, span: Option<TimeSpan>) -> Result<TransientResult> {
    solve_transient(params, span)
}
