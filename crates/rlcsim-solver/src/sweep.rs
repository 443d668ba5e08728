//! Steady-state AC frequency sweep.
//!
//! Every point is a closed-form evaluation of the series impedance
//! `Z = R + j(X_L - X_C)` and the current magnitude `|I| = V / |Z|`.
//! The resonant frequency is found the way a swept measurement finds it:
//! it is the sampled frequency with the smallest impedance, not the
//! closed-form `1/(2π√(LC))`.

use std::f64::consts::PI;

use num_complex::Complex;
use rlcsim_core::{Error, ParameterSet, Result, Topology};
use serde::Serialize;

/// Largest point count a sweep accepts.
pub const MAX_SWEEP_POINTS: usize = 10_000_000;

/// Frequency sweep parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepParams {
    /// Start frequency (Hz).
    pub fstart: f64,
    /// Stop frequency (Hz).
    pub fstop: f64,
    /// Total number of points, both endpoints included.
    pub num_points: usize,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            fstart: 100.0,
            fstop: 50_000.0,
            num_points: 500,
        }
    }
}

impl SweepParams {
    /// Create sweep parameters for a frequency range.
    pub fn new(fstart: f64, fstop: f64, num_points: usize) -> Self {
        Self {
            fstart,
            fstop,
            num_points,
        }
    }

    /// Set the number of points.
    pub fn with_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Check that the range is positive and increasing, with a point count
    /// between 2 and [`MAX_SWEEP_POINTS`].
    pub fn validate(&self) -> Result<()> {
        if !self.fstart.is_finite() || self.fstart <= 0.0 {
            return Err(Error::invalid(
                "fstart",
                format!("must be a positive frequency, got {}", self.fstart),
            ));
        }
        if !self.fstop.is_finite() || self.fstop <= 0.0 {
            return Err(Error::invalid(
                "fstop",
                format!("must be a positive frequency, got {}", self.fstop),
            ));
        }
        if self.fstart >= self.fstop {
            return Err(Error::invalid(
                "fstop",
                format!(
                    "must be greater than fstart ({} >= {})",
                    self.fstart, self.fstop
                ),
            ));
        }
        if self.num_points < 2 {
            return Err(Error::invalid(
                "num_points",
                format!("at least 2 points required, got {}", self.num_points),
            ));
        }
        if self.num_points > MAX_SWEEP_POINTS {
            return Err(Error::invalid(
                "num_points",
                format!(
                    "at most {} points allowed, got {}",
                    MAX_SWEEP_POINTS, self.num_points
                ),
            ));
        }
        Ok(())
    }
}

/// Generate logarithmically spaced frequencies, both endpoints included.
///
/// `f_i = 10^(log10(fstart) + i * (log10(fstop) - log10(fstart)) / (n - 1))`
pub fn generate_frequencies(params: &SweepParams) -> Vec<f64> {
    if params.num_points <= 1 {
        return vec![params.fstart];
    }
    let lo = params.fstart.log10();
    let hi = params.fstop.log10();
    let step = (hi - lo) / (params.num_points as f64 - 1.0);
    (0..params.num_points)
        .map(|i| 10.0_f64.powf(lo + step * i as f64))
        .collect()
}

/// Inductive reactance `X_L = 2πfL` (zero without an inductor).
pub fn inductive_reactance(params: &ParameterSet, frequency: f64) -> f64 {
    if params.topology().has_inductor() {
        2.0 * PI * frequency * params.inductance()
    } else {
        0.0
    }
}

/// Capacitive reactance `X_C = 1/(2πfC)` (zero without a capacitor).
pub fn capacitive_reactance(params: &ParameterSet, frequency: f64) -> f64 {
    if params.topology().has_capacitor() {
        1.0 / (2.0 * PI * frequency * params.capacitance())
    } else {
        0.0
    }
}

/// Complex series impedance at a frequency.
pub fn impedance(params: &ParameterSet, frequency: f64) -> Complex<f64> {
    let r = params.total_resistance();
    let x_l = inductive_reactance(params, frequency);
    let x_c = capacitive_reactance(params, frequency);

    match params.topology() {
        Topology::R => Complex::new(r, 0.0),
        Topology::RL => Complex::new(r, x_l),
        Topology::RC => Complex::new(r, -x_c),
        Topology::RLC => Complex::new(r, x_l - x_c),
    }
}

/// Closed-form resonant frequency `1/(2π√(LC))`, for RLC loops only.
pub fn analytic_resonance(params: &ParameterSet) -> Option<f64> {
    match params.topology() {
        Topology::RLC => {
            let lc = params.inductance() * params.capacitance();
            Some(1.0 / (2.0 * PI * lc.sqrt()))
        }
        Topology::R | Topology::RC | Topology::RL => None,
    }
}

/// A single frequency point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencySample {
    /// Frequency (Hz).
    pub frequency: f64,
    /// Current magnitude (A).
    pub current_amplitude: f64,
    /// Impedance magnitude (Ω).
    pub impedance: f64,
}

/// Result of a frequency sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Topology that was swept.
    pub topology: Topology,
    /// All points, in ascending frequency order.
    pub points: Vec<FrequencySample>,
    /// Sampled frequency of minimum impedance (RLC only).
    pub resonant_frequency: Option<f64>,
    /// Closed-form resonance for reference (RLC only).
    pub analytic_resonance: Option<f64>,
}

impl SweepResult {
    /// Get all frequency values.
    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }

    /// Get all current magnitudes.
    pub fn currents(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.current_amplitude).collect()
    }

    /// The point with the largest current.
    pub fn peak(&self) -> Option<&FrequencySample> {
        self.points
            .iter()
            .max_by(|a, b| a.current_amplitude.total_cmp(&b.current_amplitude))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Run a frequency sweep.
///
/// # Arguments
/// * `params` - Validated circuit parameters
/// * `sweep` - Frequency range and point count
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if the sweep range is invalid.
pub fn sweep(params: &ParameterSet, sweep: &SweepParams) -> Result<SweepResult> {
    sweep.validate()?;

    let amplitude = params.source_amplitude();
    let mut points = Vec::with_capacity(sweep.num_points);
    let mut z_min = f64::INFINITY;
    let mut f_min = None;

    for frequency in generate_frequencies(sweep) {
        let z = impedance(params, frequency).norm();
        if z < z_min {
            z_min = z;
            f_min = Some(frequency);
        }
        points.push(FrequencySample {
            frequency,
            current_amplitude: amplitude / z,
            impedance: z,
        });
    }

    let resonant_frequency = match params.topology() {
        Topology::RLC => f_min,
        Topology::R | Topology::RC | Topology::RL => None,
    };

    log::debug!(
        "{} sweep {}..{} Hz ({} points), |Z|min = {:.4} ohm, resonance = {:?}",
        params.topology(),
        sweep.fstart,
        sweep.fstop,
        points.len(),
        z_min,
        resonant_frequency
    );

    Ok(SweepResult {
        topology: params.topology(),
        points,
        resonant_frequency,
        analytic_resonance: analytic_resonance(params),
    })
}
