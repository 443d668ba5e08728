//! Circuit parameter collection from flags and parameter files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rlcsim_core::{ParameterSet, RawParameters};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_TOPOLOGY: &str = "RLC";
pub const DEFAULT_RESISTANCE: &str = "80";
pub const DEFAULT_INDUCTANCE: &str = "10m";
pub const DEFAULT_CAPACITANCE: &str = "150n";
pub const DEFAULT_VOLTAGE: &str = "50";

/// Circuit options shared by every analysis.
///
/// Values accept SI suffixes (`10m`, `150n`, `4.7k`). Flags override the
/// parameter file, which overrides the built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct CircuitArgs {
    /// Circuit topology: R, RC, RL or RLC
    #[arg(short, long)]
    pub topology: Option<String>,

    /// Resistance (ohm)
    #[arg(short = 'R', long)]
    pub resistance: Option<String>,

    /// Inductance (H)
    #[arg(short = 'L', long)]
    pub inductance: Option<String>,

    /// Capacitance (F). A trailing `F` is the femto prefix, not farads:
    /// write `1` or `1.0` for one farad, `1fF` for one femtofarad
    #[arg(short = 'C', long)]
    pub capacitance: Option<String>,

    /// Source amplitude (V)
    #[arg(long, alias = "amplitude")]
    pub voltage: Option<String>,

    /// Series damping resistance, only present while the source is connected (ohm)
    #[arg(long = "rs")]
    pub damping_resistance: Option<String>,

    /// JSON file with circuit parameters
    #[arg(long = "params")]
    pub params_file: Option<PathBuf>,
}

/// Circuit parameters as stored in a JSON file. Numbers and strings are
/// both accepted for values.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParamsFile {
    topology: Option<String>,
    resistance: Option<Value>,
    inductance: Option<Value>,
    capacitance: Option<Value>,
    #[serde(alias = "voltage")]
    source_amplitude: Option<Value>,
    damping_resistance: Option<Value>,
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn load_params_file(path: &Path) -> Result<ParamsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading parameter file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing parameter file {}", path.display()))
}

impl CircuitArgs {
    /// Merge flags, file and defaults into raw text parameters.
    pub fn to_raw(&self) -> Result<RawParameters> {
        let file = match &self.params_file {
            Some(path) => load_params_file(path)?,
            None => ParamsFile::default(),
        };

        let pick = |flag: &Option<String>, from_file: Option<Value>, default: &str| {
            flag.clone()
                .or_else(|| from_file.map(value_text))
                .unwrap_or_else(|| default.to_string())
        };

        Ok(RawParameters {
            topology: self
                .topology
                .clone()
                .or(file.topology)
                .unwrap_or_else(|| DEFAULT_TOPOLOGY.to_string()),
            resistance: pick(&self.resistance, file.resistance, DEFAULT_RESISTANCE),
            inductance: pick(&self.inductance, file.inductance, DEFAULT_INDUCTANCE),
            capacitance: pick(&self.capacitance, file.capacitance, DEFAULT_CAPACITANCE),
            source_amplitude: pick(&self.voltage, file.source_amplitude, DEFAULT_VOLTAGE),
            damping_resistance: self
                .damping_resistance
                .clone()
                .or_else(|| file.damping_resistance.map(value_text)),
        })
    }

    /// Build validated circuit parameters.
    pub fn to_parameter_set(&self) -> Result<ParameterSet> {
        let raw = self.to_raw()?;
        log::debug!("raw parameters: {:?}", raw);
        ParameterSet::from_raw(&raw).context("invalid circuit parameters")
    }
}
