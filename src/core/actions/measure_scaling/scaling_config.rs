use std::num::NonZeroUsize;

use crate::core::actions::measure_scaling::errors::HarnessError;
use crate::core::actions::measure_scaling::speedup_model::DEFAULT_PREDICTION_MAX_WORKERS;

pub const DEFAULT_WORKER_COUNTS: [usize; 8] = [1, 2, 4, 6, 8, 12, 16, 18];
pub const DEFAULT_REPETITIONS: usize = 5;
pub const DEFAULT_BASELINE_REPETITIONS: usize = 1;

/// Parameters of a scaling sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingConfig {
    pub worker_counts: Vec<usize>,
    /// Parallel runs per worker count.
    pub repetitions: usize,
    /// Serial runs averaged into each baseline.
    pub baseline_repetitions: usize,
    /// Upper bound of the predicted Amdahl/Gustafson curves.
    pub prediction_max_workers: usize,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            worker_counts: DEFAULT_WORKER_COUNTS.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            baseline_repetitions: DEFAULT_BASELINE_REPETITIONS,
            prediction_max_workers: DEFAULT_PREDICTION_MAX_WORKERS,
        }
    }
}

impl ScalingConfig {
    #[must_use]
    pub fn with_worker_counts(worker_counts: Vec<usize>, repetitions: usize) -> Self {
        Self {
            worker_counts,
            repetitions,
            ..Self::default()
        }
    }

    /// Checks every parameter and returns the distinct worker counts in
    /// ascending order.
    pub fn validated_worker_counts(&self) -> Result<Vec<NonZeroUsize>, HarnessError> {
        if self.worker_counts.is_empty() {
            return Err(HarnessError::NoWorkerCounts);
        }
        if self.repetitions == 0 {
            return Err(HarnessError::ZeroRepetitions);
        }
        if self.baseline_repetitions == 0 {
            return Err(HarnessError::ZeroBaselineRepetitions);
        }

        let mut counts = self
            .worker_counts
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                NonZeroUsize::new(count).ok_or(HarnessError::ZeroWorkerCount { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        counts.sort();
        counts.dedup();

        Ok(counts)
    }
}
