//! Series circuit topologies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which passive elements are present in the series loop.
///
/// Every topology includes the resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Topology {
    /// Resistor only.
    R,
    /// Resistor and capacitor.
    RC,
    /// Resistor and inductor.
    RL,
    /// Resistor, inductor and capacitor.
    #[default]
    RLC,
}

impl Topology {
    /// All topologies, in order of increasing complexity.
    pub const ALL: [Topology; 4] = [Topology::R, Topology::RC, Topology::RL, Topology::RLC];

    /// Whether the loop contains an inductor.
    pub fn has_inductor(self) -> bool {
        matches!(self, Topology::RL | Topology::RLC)
    }

    /// Whether the loop contains a capacitor.
    pub fn has_capacitor(self) -> bool {
        matches!(self, Topology::RC | Topology::RLC)
    }

    /// Canonical short name.
    pub fn name(self) -> &'static str {
        match self {
            Topology::R => "R",
            Topology::RC => "RC",
            Topology::RL => "RL",
            Topology::RLC => "RLC",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R" => Ok(Topology::R),
            "RC" => Ok(Topology::RC),
            "RL" => Ok(Topology::RL),
            "RLC" => Ok(Topology::RLC),
            other => Err(Error::invalid(
                "topology",
                format!("unknown topology '{}' (expected R, RC, RL or RLC)", other),
            )),
        }
    }
}
