//! Closed-form step responses for RC, RL and RLC loops.

use rlcsim_core::{Error, ParameterSet, Result, Topology};

use super::result::{Series, SeriesKind, TransientResult};
use super::types::{
    DampingParams, FIRST_ORDER_POINTS, RLC_POINTS, RLC_WINDOW, TIME_CONSTANTS_SPAN,
    TimeConstants, TimeSpan, rlc_coefficients,
};
use crate::damping::{DampingClassifier, DampingRegime};

/// Run a transient analysis with exact critical-damping detection.
///
/// # Arguments
/// * `params` - Validated circuit parameters
/// * `span` - Optional window override; defaults to `5τ`/500 points for
///   RC and RL, and 10 ms/1000 points for RLC
///
/// # Errors
/// * [`Error::UnsupportedOperation`] for the resistor-only topology
/// * [`Error::InvalidParameter`] if `span` is invalid
pub fn solve_transient(params: &ParameterSet, span: Option<TimeSpan>) -> Result<TransientResult> {
    solve_transient_with(params, span, &DampingClassifier::exact())
}

/// Run a transient analysis with a custom damping classifier.
pub fn solve_transient_with(
    params: &ParameterSet,
    span: Option<TimeSpan>,
    classifier: &DampingClassifier,
) -> Result<TransientResult> {
    let span = match span {
        Some(span) => {
            span.validate()?;
            span
        }
        None => default_span(params)?,
    };

    match params.topology() {
        Topology::R => Err(unsupported()),
        Topology::RC => rc_response(params, span),
        Topology::RL => rl_response(params, span),
        Topology::RLC => rlc_response(params, span, classifier),
    }
}

/// Window used when the caller gives none: `5τ`/500 points for RC and RL
/// (`τ` taken with the source connected), 10 ms/1000 points for RLC.
///
/// # Errors
/// * [`Error::UnsupportedOperation`] for the resistor-only topology
/// * [`Error::InvalidParameter`] if the time constant under- or overflows
pub fn default_span(params: &ParameterSet) -> Result<TimeSpan> {
    let span = match params.topology() {
        Topology::R => return Err(unsupported()),
        Topology::RC | Topology::RL => {
            let tc = time_constants(params)?;
            TimeSpan::new(TIME_CONSTANTS_SPAN * tc.charge, FIRST_ORDER_POINTS)
        }
        Topology::RLC => TimeSpan::new(RLC_WINDOW, RLC_POINTS),
    };
    span.validate()?;
    Ok(span)
}

/// `α = (R + Rs)/(2L)` and `ω₀ = 1/√(LC)`.
pub fn damping_params(params: &ParameterSet) -> DampingParams {
    DampingParams {
        alpha: params.total_resistance() / (2.0 * params.inductance()),
        omega0: 1.0 / (params.inductance() * params.capacitance()).sqrt(),
    }
}

fn unsupported() -> Error {
    Error::UnsupportedOperation("only RC, RL and RLC circuits have a time response".to_string())
}

/// Charge/discharge (RC) or growth/decay (RL) time constants.
fn time_constants(params: &ParameterSet) -> Result<TimeConstants> {
    let tc = match params.topology() {
        Topology::RL => TimeConstants {
            charge: params.inductance() / params.total_resistance(),
            discharge: params.inductance() / params.resistance(),
        },
        _ => TimeConstants {
            charge: params.total_resistance() * params.capacitance(),
            discharge: params.resistance() * params.capacitance(),
        },
    };
    for tau in [tc.charge, tc.discharge] {
        if !tau.is_finite() || tau <= 0.0 {
            return Err(Error::invalid(
                "time_constant",
                format!("must be a positive finite time, got {} s", tau),
            ));
        }
    }
    Ok(tc)
}

fn rc_response(params: &ParameterSet, span: TimeSpan) -> Result<TransientResult> {
    let v = params.source_amplitude();
    let tc = time_constants(params)?;
    let times = span.times();

    let charge = times
        .iter()
        .map(|&t| v * (1.0 - (-t / tc.charge).exp()))
        .collect();
    let discharge = times
        .iter()
        .map(|&t| v * (-t / tc.discharge).exp())
        .collect();

    log::debug!(
        "RC transient: tau_charge = {:.6e} s, tau_discharge = {:.6e} s, {} points",
        tc.charge,
        tc.discharge,
        times.len()
    );

    Ok(TransientResult {
        topology: Topology::RC,
        times,
        series: vec![
            Series {
                kind: SeriesKind::Charge,
                values: charge,
            },
            Series {
                kind: SeriesKind::Discharge,
                values: discharge,
            },
        ],
        regime: None,
        damping: None,
        time_constants: Some(tc),
    })
}

fn rl_response(params: &ParameterSet, span: TimeSpan) -> Result<TransientResult> {
    let i_final = params.source_amplitude() / params.total_resistance();
    let tc = time_constants(params)?;
    let times = span.times();

    let growth: Vec<f64> = times
        .iter()
        .map(|&t| i_final * (1.0 - (-t / tc.charge).exp()))
        .collect();

    // Decay starts from the growth current at 5τ, not at V/R, whatever
    // window is being sampled.
    let i0 = i_final * (1.0 - (-TIME_CONSTANTS_SPAN).exp());
    let decay = times
        .iter()
        .map(|&t| i0 * (-t / tc.discharge).exp())
        .collect();

    log::debug!(
        "RL transient: tau_growth = {:.6e} s, tau_decay = {:.6e} s, I0(decay) = {:.6e} A",
        tc.charge,
        tc.discharge,
        i0
    );

    Ok(TransientResult {
        topology: Topology::RL,
        times,
        series: vec![
            Series {
                kind: SeriesKind::Growth,
                values: growth,
            },
            Series {
                kind: SeriesKind::Decay,
                values: decay,
            },
        ],
        regime: None,
        damping: None,
        time_constants: Some(tc),
    })
}

fn rlc_response(
    params: &ParameterSet,
    span: TimeSpan,
    classifier: &DampingClassifier,
) -> Result<TransientResult> {
    use rlc_coefficients::*;

    let damping = damping_params(params);
    let DampingParams { alpha, omega0 } = damping;
    if !alpha.is_finite() || !omega0.is_finite() {
        return Err(Error::invalid(
            "inductance",
            format!(
                "damping parameters out of range (alpha = {}, omega0 = {})",
                alpha, omega0
            ),
        ));
    }
    let regime = classifier.classify(alpha, omega0);
    let times = span.times();

    let values: Vec<f64> = match regime {
        DampingRegime::Overdamped => {
            let root = ((alpha - omega0) * (alpha + omega0)).sqrt();
            let s1 = -alpha + root;
            let s2 = -alpha - root;
            times
                .iter()
                .map(|&t| OVERDAMPED_A1 * (s1 * t).exp() + OVERDAMPED_A2 * (s2 * t).exp())
                .collect()
        }
        DampingRegime::CriticallyDamped => times
            .iter()
            .map(|&t| (CRITICAL_A + CRITICAL_B * t) * (-alpha * t).exp())
            .collect(),
        DampingRegime::Underdamped => {
            // Clamped so a tolerance-classified near-critical loop stays real
            let omega_d = (omega0 * omega0 - alpha * alpha).max(0.0).sqrt();
            times
                .iter()
                .map(|&t| {
                    (-alpha * t).exp()
                        * (UNDERDAMPED_A * (omega_d * t).cos() + UNDERDAMPED_B * (omega_d * t).sin())
                })
                .collect()
        }
    };

    if values.iter().any(|v: &f64| !v.is_finite()) {
        return Err(Error::invalid(
            "inductance",
            format!(
                "response overflows for alpha = {:e}, omega0 = {:e}",
                alpha, omega0
            ),
        ));
    }

    log::debug!(
        "RLC transient: alpha = {:.4}, omega0 = {:.4}, regime = {}",
        alpha,
        omega0,
        regime
    );

    Ok(TransientResult {
        topology: Topology::RLC,
        times,
        series: vec![Series {
            kind: SeriesKind::Response,
            values,
        }],
        regime: Some(regime),
        damping: Some(damping),
        time_constants: None,
    })
}
