//! Transient step-response analysis.

use std::path::Path;

use anyhow::{Context, Result};
use rlcsim_core::ParameterSet;
use rlcsim_solver::{DampingClassifier, TimeSpan, solve_transient_with};
use serde::Serialize;

use crate::output::{print_json, print_transient, write_csv_file, write_transient_csv};

/// Transient options as echoed in JSON reports.
#[derive(Debug, Clone, Serialize)]
pub struct TransientConfig {
    pub span: Option<TimeSpan>,
    pub classifier: DampingClassifier,
}

/// Run a transient analysis and report it.
pub fn run_transient(
    params: &ParameterSet,
    config: &TransientConfig,
    csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let result = solve_transient_with(params, config.span, &config.classifier)
        .context("transient analysis failed")?;

    if let Some(regime) = result.regime {
        log::info!("{} response", regime);
    }

    if let Some(path) = csv {
        write_csv_file(path, |w| write_transient_csv(w, &result))?;
    }

    if json {
        print_json(params, config, &result)
    } else {
        print_transient(params, &result);
        Ok(())
    }
}
