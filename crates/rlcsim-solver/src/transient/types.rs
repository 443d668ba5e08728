//! Type definitions for transient analysis.

use rlcsim_core::{Error, Result};
use serde::Serialize;

/// Number of time constants covered by the default RC/RL window.
pub const TIME_CONSTANTS_SPAN: f64 = 5.0;

/// Default number of samples for RC and RL responses.
pub const FIRST_ORDER_POINTS: usize = 500;

/// Fixed observation window for RLC responses (s).
///
/// Not scaled to `α` or `ω₀`: fast circuits look compressed and slow
/// ones look truncated.
pub const RLC_WINDOW: f64 = 0.01;

/// Default number of samples for RLC responses.
pub const RLC_POINTS: usize = 1000;

/// Largest sample count a [`TimeSpan`] accepts.
pub const MAX_TIME_POINTS: usize = 10_000_000;

/// Illustrative initial-condition constants for the RLC waveforms.
///
/// These do not depend on the source amplitude.
pub mod rlc_coefficients {
    /// Overdamped: `A1·e^(s1·t) + A2·e^(s2·t)`.
    pub const OVERDAMPED_A1: f64 = 5.0;
    pub const OVERDAMPED_A2: f64 = -5.0;
    /// Critically damped: `(A + B·t)·e^(-α·t)`.
    pub const CRITICAL_A: f64 = 5.0;
    pub const CRITICAL_B: f64 = 5.0;
    /// Underdamped: `e^(-α·t)·(A·cos(ω_d·t) + B·sin(ω_d·t))`.
    pub const UNDERDAMPED_A: f64 = 5.0;
    pub const UNDERDAMPED_B: f64 = 0.0;
}

/// Explicit time window for a transient response, overriding the
/// topology default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSpan {
    /// Stop time (s). Sampling always starts at 0.
    pub tstop: f64,
    /// Number of uniformly spaced samples, both endpoints included.
    pub num_points: usize,
}

impl TimeSpan {
    pub fn new(tstop: f64, num_points: usize) -> Self {
        Self { tstop, num_points }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tstop.is_finite() || self.tstop <= 0.0 {
            return Err(Error::invalid(
                "tstop",
                format!("must be a positive time, got {}", self.tstop),
            ));
        }
        if self.num_points < 2 {
            return Err(Error::invalid(
                "num_points",
                format!("at least 2 points required, got {}", self.num_points),
            ));
        }
        if self.tstop / (self.num_points as f64 - 1.0) <= 0.0 {
            return Err(Error::invalid(
                "tstop",
                format!(
                    "too short to resolve {} points, got {} s",
                    self.num_points, self.tstop
                ),
            ));
        }
        if self.num_points > MAX_TIME_POINTS {
            return Err(Error::invalid(
                "num_points",
                format!(
                    "at most {} points allowed, got {}",
                    MAX_TIME_POINTS, self.num_points
                ),
            ));
        }
        Ok(())
    }

    /// Uniformly spaced sample times `t_i = i * tstop / (n - 1)`.
    pub fn times(&self) -> Vec<f64> {
        let step = self.tstop / (self.num_points as f64 - 1.0);
        (0..self.num_points).map(|i| i as f64 * step).collect()
    }
}

/// Time constants of a first-order response.
///
/// `charge` applies while the source is connected (loop resistance
/// `R + Rs`), `discharge` once it is removed (`R` alone). They are equal
/// when there is no damping resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeConstants {
    /// Charge / growth time constant (s).
    pub charge: f64,
    /// Discharge / decay time constant (s).
    pub discharge: f64,
}

/// Second-order parameters of an RLC loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DampingParams {
    /// Damping coefficient `α = R/(2L)` (1/s).
    pub alpha: f64,
    /// Natural frequency `ω₀ = 1/√(LC)` (rad/s).
    pub omega0: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_uniform() {
        let span = TimeSpan::new(1.0, 5);
        assert_eq!(span.times(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_validate() {
        assert!(TimeSpan::new(1e-3, 2).validate().is_ok());
        assert!(TimeSpan::new(0.0, 10).validate().is_err());
        assert!(TimeSpan::new(-1.0, 10).validate().is_err());
        assert!(TimeSpan::new(f64::INFINITY, 10).validate().is_err());
        assert!(TimeSpan::new(1e-3, 1).validate().is_err());
    }

    #[test]
    fn test_validate_point_limit() {
        assert!(TimeSpan::new(1.0, MAX_TIME_POINTS).validate().is_ok());
        let err = TimeSpan::new(1.0, usize::MAX).validate().unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("num_points"));
    }
}
