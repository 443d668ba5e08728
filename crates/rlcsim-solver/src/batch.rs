//! Batch sweeps over many parameter sets.
//!
//! Each parameter set is swept independently. With the `parallel` feature
//! the batch is spread over rayon's work-stealing thread pool; without it,
//! or for batches below the threshold, points are processed sequentially.
//! Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rlcsim_core::{ParameterSet, Result};

use crate::sweep::{SweepParams, SweepResult, sweep};

/// Configuration for batch execution.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum batch size to use parallel execution (below this, sequential is faster).
    pub min_batch_for_parallel: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            min_batch_for_parallel: 4,
        }
    }
}

impl BatchConfig {
    /// Set the minimum parallel threshold.
    pub fn with_min_parallel(mut self, min: usize) -> Self {
        self.min_batch_for_parallel = min;
        self
    }

    /// Decide whether a batch of `len` parameter sets runs in parallel.
    pub fn use_parallel(&self, len: usize) -> bool {
        #[cfg(feature = "parallel")]
        {
            len >= self.min_batch_for_parallel && rayon::current_num_threads() > 1
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = len;
            false
        }
    }
}

/// Sweep every parameter set over the same frequency range.
///
/// The first failure aborts the batch.
pub fn sweep_batch(params: &[ParameterSet], sweep_params: &SweepParams) -> Result<Vec<SweepResult>> {
    sweep_batch_with(params, sweep_params, &BatchConfig::default())
}

/// [`sweep_batch`] with explicit batch configuration.
pub fn sweep_batch_with(
    params: &[ParameterSet],
    sweep_params: &SweepParams,
    config: &BatchConfig,
) -> Result<Vec<SweepResult>> {
    sweep_params.validate()?;

    if config.use_parallel(params.len()) {
        log::debug!("Parallel batch sweep ({} parameter sets)", params.len());
        #[cfg(feature = "parallel")]
        {
            return params.par_iter().map(|p| sweep(p, sweep_params)).collect();
        }
    }

    log::debug!("Sequential batch sweep ({} parameter sets)", params.len());
    params.iter().map(|p| sweep(p, sweep_params)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlcsim_core::Topology;

    fn family() -> Vec<ParameterSet> {
        [20.0, 40.0, 80.0, 160.0, 320.0]
            .iter()
            .map(|&r| ParameterSet::new(Topology::RLC, r, 10e-3, 150e-9, 50.0).unwrap())
            .collect()
    }

    #[test]
    fn test_batch_preserves_order() {
        let params = family();
        let results = sweep_batch(&params, &SweepParams::default()).unwrap();
        assert_eq!(results.len(), params.len());
        for (p, r) in params.iter().zip(&results) {
            let single = sweep(p, &SweepParams::default()).unwrap();
            assert_eq!(&single, r);
        }
    }

    #[test]
    fn test_batch_peaks_fall_with_resistance() {
        let results = sweep_batch(&family(), &SweepParams::default()).unwrap();
        let peaks: Vec<f64> = results
            .iter()
            .map(|r| r.peak().unwrap().current_amplitude)
            .collect();
        assert!(peaks.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_sequential_threshold() {
        let config = BatchConfig::default().with_min_parallel(usize::MAX);
        assert!(!config.use_parallel(10));
        let results = sweep_batch_with(&family(), &SweepParams::default(), &config).unwrap();
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(sweep_batch(&family(), &SweepParams::new(10.0, 1.0, 5)).is_err());
        assert!(sweep_batch(&[], &SweepParams::default()).unwrap().is_empty());
    }
}
