//! Result types for transient analysis.

use std::fmt;

use rlcsim_core::Topology;
use serde::Serialize;

use super::types::{DampingParams, TimeConstants};
use crate::damping::DampingRegime;

/// Physical quantity carried by a waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Voltage,
    Current,
}

impl Quantity {
    /// SI unit symbol.
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Voltage => "V",
            Quantity::Current => "A",
        }
    }
}

/// Which waveform a series holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// RC capacitor voltage while charging.
    Charge,
    /// RC capacitor voltage while discharging.
    Discharge,
    /// RL current while growing.
    Growth,
    /// RL current while decaying.
    Decay,
    /// RLC response.
    Response,
}

impl SeriesKind {
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Charge => "charge",
            SeriesKind::Discharge => "discharge",
            SeriesKind::Growth => "growth",
            SeriesKind::Decay => "decay",
            SeriesKind::Response => "response",
        }
    }

    pub fn quantity(self) -> Quantity {
        match self {
            SeriesKind::Charge | SeriesKind::Discharge | SeriesKind::Response => Quantity::Voltage,
            SeriesKind::Growth | SeriesKind::Decay => Quantity::Current,
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single (time, value) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSample {
    /// Time (s).
    pub time: f64,
    /// Voltage (V) or current (A), depending on the series.
    pub value: f64,
}

/// One named waveform sampled on the result's time base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub kind: SeriesKind,
    pub values: Vec<f64>,
}

/// Result of a transient analysis.
///
/// All series share the same time base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransientResult {
    /// Topology that was simulated.
    pub topology: Topology,
    /// Sample times (s), ascending from 0.
    pub times: Vec<f64>,
    /// Named waveforms, each with one value per time.
    pub series: Vec<Series>,
    /// Damping regime (RLC only).
    pub regime: Option<DampingRegime>,
    /// `α` and `ω₀` (RLC only).
    pub damping: Option<DampingParams>,
    /// Time constants (RC and RL only).
    pub time_constants: Option<TimeConstants>,
}

impl TransientResult {
    /// Get all time values.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Look up a series by kind.
    pub fn series(&self, kind: SeriesKind) -> Option<&Series> {
        self.series.iter().find(|s| s.kind == kind)
    }

    /// The first series: charge, growth or the RLC response.
    pub fn primary(&self) -> Option<&Series> {
        self.series.first()
    }

    /// Get a series as (time, value) samples.
    pub fn waveform(&self, kind: SeriesKind) -> Option<Vec<TimeSample>> {
        self.series(kind).map(|s| {
            self.times
                .iter()
                .zip(&s.values)
                .map(|(&time, &value)| TimeSample { time, value })
                .collect()
        })
    }

    /// Charge/growth time constant (RC and RL only).
    pub fn time_constant(&self) -> Option<f64> {
        self.time_constants.map(|tc| tc.charge)
    }

    /// Interpolate a series at a specific time.
    ///
    /// Uses linear interpolation between the two nearest samples.
    /// Returns None if the series is absent or time is outside the window.
    pub fn value_at(&self, kind: SeriesKind, time: f64) -> Option<f64> {
        let values = &self.series(kind)?.values;
        let first = *self.times.first()?;
        let last = *self.times.last()?;
        if !(first..=last).contains(&time) {
            return None;
        }

        // First sample at or after `time`
        let hi = self.times.partition_point(|&t| t < time);
        if hi == 0 {
            return values.first().copied();
        }
        let lo = hi - 1;
        let (t0, t1) = (self.times[lo], self.times[hi]);
        let frac = (time - t0) / (t1 - t0);
        Some(values[lo] * (1.0 - frac) + values[hi] * frac)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> TransientResult {
        TransientResult {
            topology: Topology::RC,
            times: vec![0.0, 1.0, 2.0],
            series: vec![
                Series {
                    kind: SeriesKind::Charge,
                    values: vec![0.0, 10.0, 20.0],
                },
                Series {
                    kind: SeriesKind::Discharge,
                    values: vec![20.0, 10.0, 0.0],
                },
            ],
            regime: None,
            damping: None,
            time_constants: Some(TimeConstants {
                charge: 1.0,
                discharge: 1.0,
            }),
        }
    }

    #[test]
    fn test_waveform_pairs() {
        let result = ramp();
        let wf = result.waveform(SeriesKind::Discharge).unwrap();
        assert_eq!(wf.len(), 3);
        assert_eq!(wf[1], TimeSample { time: 1.0, value: 10.0 });
        assert!(result.waveform(SeriesKind::Growth).is_none());
    }

    #[test]
    fn test_value_at_interpolates() {
        let result = ramp();
        assert_eq!(result.value_at(SeriesKind::Charge, 0.0), Some(0.0));
        assert_eq!(result.value_at(SeriesKind::Charge, 1.0), Some(10.0));
        assert_eq!(result.value_at(SeriesKind::Charge, 1.5), Some(15.0));
        assert_eq!(result.value_at(SeriesKind::Charge, 2.0), Some(20.0));
        assert_eq!(result.value_at(SeriesKind::Discharge, 0.25), Some(17.5));
        assert_eq!(result.value_at(SeriesKind::Charge, 2.5), None);
        assert_eq!(result.value_at(SeriesKind::Charge, -0.1), None);
    }

    #[test]
    fn test_series_quantities() {
        assert_eq!(SeriesKind::Charge.quantity(), Quantity::Voltage);
        assert_eq!(SeriesKind::Growth.quantity().unit(), "A");
        assert_eq!(SeriesKind::Response.quantity().unit(), "V");
        assert_eq!(ramp().primary().unwrap().kind, SeriesKind::Charge);
        assert_eq!(ramp().time_constant(), Some(1.0));
    }
}
