//! Damping regime classification for series RLC transients.

use std::fmt;

use serde::Serialize;

/// Qualitative shape of a second-order RLC step response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingRegime {
    /// `α > ω₀`: two distinct real roots, no oscillation.
    Overdamped,
    /// `α == ω₀`: repeated real root.
    CriticallyDamped,
    /// `α < ω₀`: complex roots, decaying oscillation at `ω_d`.
    Underdamped,
}

impl DampingRegime {
    pub fn label(self) -> &'static str {
        match self {
            DampingRegime::Overdamped => "overdamped",
            DampingRegime::CriticallyDamped => "critically damped",
            DampingRegime::Underdamped => "underdamped",
        }
    }
}

impl fmt::Display for DampingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify by direct comparison of `α` and `ω₀`.
///
/// The critical case needs exact floating-point equality, so it is only hit
/// by parameter sets that make `R/(2L)` and `1/√(LC)` bit-identical.
pub fn classify(alpha: f64, omega0: f64) -> DampingRegime {
    DampingClassifier::exact().classify(alpha, omega0)
}

/// Regime classifier with an optional relative tolerance on the critical case.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DampingClassifier {
    /// `|α - ω₀| <= tolerance * ω₀` counts as critically damped.
    /// Zero means exact equality.
    pub tolerance: f64,
}

impl DampingClassifier {
    /// Exact comparison, no tolerance band.
    pub fn exact() -> Self {
        Self { tolerance: 0.0 }
    }

    /// Treat values within a relative band around `ω₀` as critical.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    pub fn classify(&self, alpha: f64, omega0: f64) -> DampingRegime {
        if alpha == omega0 || (alpha - omega0).abs() <= self.tolerance * omega0.abs() {
            DampingRegime::CriticallyDamped
        } else if alpha > omega0 {
            DampingRegime::Overdamped
        } else {
            DampingRegime::Underdamped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_regimes() {
        assert_eq!(classify(1000.0, 500.0), DampingRegime::Overdamped);
        assert_eq!(classify(500.0, 500.0), DampingRegime::CriticallyDamped);
        assert_eq!(classify(500.0, 1000.0), DampingRegime::Underdamped);
    }

    #[test]
    fn test_exact_misses_near_critical() {
        let omega0 = 500.0;
        let alpha = omega0 * (1.0 + 1e-12);
        assert_eq!(classify(alpha, omega0), DampingRegime::Overdamped);
        assert_eq!(
            classify(omega0 * (1.0 - 1e-12), omega0),
            DampingRegime::Underdamped
        );
    }

    #[test]
    fn test_tolerance_band() {
        let c = DampingClassifier::with_tolerance(1e-6);
        assert_eq!(c.classify(500.0001, 500.0), DampingRegime::CriticallyDamped);
        assert_eq!(c.classify(499.9999, 500.0), DampingRegime::CriticallyDamped);
        assert_eq!(c.classify(501.0, 500.0), DampingRegime::Overdamped);
        assert_eq!(c.classify(499.0, 500.0), DampingRegime::Underdamped);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DampingRegime::Overdamped.to_string(), "overdamped");
        assert_eq!(
            DampingRegime::CriticallyDamped.to_string(),
            "critically damped"
        );
        assert_eq!(DampingRegime::Underdamped.label(), "underdamped");
    }
}
