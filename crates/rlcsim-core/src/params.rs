//! Validated circuit parameters.
//!
//! A [`ParameterSet`] can only be obtained through a validating constructor,
//! so the analysis engines never see a zero resistance, a non-positive
//! capacitance on a capacitive loop or a missing inductance on an inductive
//! one. Values for elements the topology does not contain are ignored and
//! stored as zero.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::topology::Topology;
use crate::units::parse_value;

/// Circuit constants for a single series loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSet {
    topology: Topology,
    resistance: f64,
    inductance: f64,
    capacitance: f64,
    source_amplitude: f64,
    damping_resistance: f64,
}

impl ParameterSet {
    /// Build a parameter set from numeric values.
    ///
    /// # Arguments
    /// * `topology` - Which elements are in the loop
    /// * `resistance` - R in ohms, must be > 0
    /// * `inductance` - L in henries, must be > 0 for RL and RLC
    /// * `capacitance` - C in farads, must be > 0 for RC and RLC
    /// * `source_amplitude` - Source voltage in volts, must be > 0
    pub fn new(
        topology: Topology,
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        source_amplitude: f64,
    ) -> Result<Self> {
        let resistance = require_positive("resistance", resistance)?;
        let source_amplitude = require_positive("source_amplitude", source_amplitude)?;

        let inductance = if topology.has_inductor() {
            require_positive("inductance", inductance)?
        } else {
            0.0
        };
        let capacitance = if topology.has_capacitor() {
            require_positive("capacitance", capacitance)?
        } else {
            0.0
        };

        Ok(Self {
            topology,
            resistance,
            inductance,
            capacitance,
            source_amplitude,
            damping_resistance: 0.0,
        })
    }

    /// Build a parameter set from raw text fields.
    ///
    /// Each field accepts SPICE-style SI suffixes (`10m`, `150n`, `4.7k`).
    /// Fields for elements the topology does not contain are not parsed.
    pub fn from_raw(raw: &RawParameters) -> Result<Self> {
        let topology: Topology = raw.topology.parse()?;

        let resistance = parse_field("resistance", &raw.resistance)?;
        let source_amplitude = parse_field("source_amplitude", &raw.source_amplitude)?;
        let inductance = if topology.has_inductor() {
            parse_field("inductance", &raw.inductance)?
        } else {
            0.0
        };
        let capacitance = if topology.has_capacitor() {
            parse_field("capacitance", &raw.capacitance)?
        } else {
            0.0
        };

        let params = Self::new(topology, resistance, inductance, capacitance, source_amplitude)?;

        match raw.damping_resistance.as_deref().map(str::trim) {
            None | Some("") => Ok(params),
            Some(text) => {
                let rs = parse_field("damping_resistance", text)?;
                params.with_damping_resistance(rs)
            }
        }
    }

    /// Add a series damping resistance that is only in the loop while the
    /// source is connected. Must be >= 0.
    pub fn with_damping_resistance(mut self, damping_resistance: f64) -> Result<Self> {
        if !damping_resistance.is_finite() {
            return Err(Error::invalid("damping_resistance", "non-numeric value"));
        }
        if damping_resistance < 0.0 {
            return Err(Error::invalid(
                "damping_resistance",
                format!("must be >= 0, got {}", damping_resistance),
            ));
        }
        self.damping_resistance = damping_resistance;
        Ok(self)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Resistance (Ω).
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Inductance (H). Zero when the topology has no inductor.
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Capacitance (F). Zero when the topology has no capacitor.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Source amplitude (V).
    pub fn source_amplitude(&self) -> f64 {
        self.source_amplitude
    }

    /// Series damping resistance (Ω).
    pub fn damping_resistance(&self) -> f64 {
        self.damping_resistance
    }

    /// Loop resistance with the source connected: `R + Rs`.
    pub fn total_resistance(&self) -> f64 {
        self.resistance + self.damping_resistance
    }
}

/// Unvalidated text inputs, as collected from a form or command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawParameters {
    pub topology: String,
    pub resistance: String,
    pub inductance: String,
    pub capacitance: String,
    pub source_amplitude: String,
    pub damping_resistance: Option<String>,
}

fn parse_field(name: &'static str, text: &str) -> Result<f64> {
    parse_value(text)
        .ok_or_else(|| Error::invalid(name, format!("non-numeric value '{}'", text.trim())))
}

fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid(name, "non-numeric value"));
    }
    if value <= 0.0 {
        return Err(Error::invalid(name, format!("must be > 0, got {}", value)));
    }
    Ok(value)
}
