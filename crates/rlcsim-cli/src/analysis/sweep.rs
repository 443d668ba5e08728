//! AC frequency sweep.

use std::path::Path;

use anyhow::{Context, Result};
use rlcsim_core::ParameterSet;
use rlcsim_solver::{SweepParams, sweep};

use crate::output::{print_json, print_sweep, write_csv_file, write_sweep_csv};

/// Run a frequency sweep and report it.
pub fn run_sweep(
    params: &ParameterSet,
    sweep_params: &SweepParams,
    csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let result = sweep(params, sweep_params).context("frequency sweep failed")?;

    if let Some(f_res) = result.resonant_frequency {
        log::info!("sampled resonance at {:.2} Hz", f_res);
    }

    if let Some(path) = csv {
        write_csv_file(path, |w| write_sweep_csv(w, &result))?;
    }

    if json {
        print_json(params, sweep_params, &result)
    } else {
        print_sweep(params, sweep_params, &result);
        Ok(())
    }
}
