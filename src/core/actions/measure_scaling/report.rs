use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::actions::measure_scaling::speedup_model::{
    ModelError, SpeedupModel, fit_speedup_model,
};
use crate::core::actions::measure_scaling::statistics::Statistics;
use crate::core::actions::schedule::errors::ScheduleError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingProtocol {
    Strong,
    Weak,
}

impl fmt::Display for ScalingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong => write!(f, "strong"),
            Self::Weak => write!(f, "weak"),
        }
    }
}

/// Measurements for one worker count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingEntry {
    pub worker_count: usize,
    pub width: u32,
    pub height: u32,
    pub mean_secs: f64,
    pub std_dev_secs: f64,
    pub samples_secs: Vec<f64>,
    /// Serial time the speedup is taken against. Absent when the baseline
    /// failed.
    pub baseline_secs: Option<f64>,
    pub speedup: Option<f64>,
    pub ideal_speedup: f64,
}

impl ScalingEntry {
    #[must_use]
    pub fn new(
        worker_count: usize,
        width: u32,
        height: u32,
        parallel: Statistics,
        baseline_secs: Option<f64>,
    ) -> Self {
        let speedup = baseline_secs
            .filter(|_| parallel.mean > 0.0)
            .map(|baseline| baseline / parallel.mean);

        Self {
            worker_count,
            width,
            height,
            mean_secs: parallel.mean,
            std_dev_secs: parallel.std_dev,
            samples_secs: parallel.samples,
            baseline_secs,
            speedup,
            ideal_speedup: worker_count as f64,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Baseline,
    Parallel,
}

/// A configuration whose measurement was abandoned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationFailure {
    /// `None` for the single strong-scaling serial baseline.
    pub worker_count: Option<usize>,
    pub width: u32,
    pub height: u32,
    pub stage: FailureStage,
    #[serde(serialize_with = "serialize_display")]
    pub error: ScheduleError,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Outcome of a whole sweep: every configuration that completed plus every
/// one that failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingReport {
    pub protocol: ScalingProtocol,
    pub max_iterations: u32,
    pub base_width: u32,
    pub base_height: u32,
    /// Strong scaling only: the shared serial baseline.
    pub serial_mean_secs: Option<f64>,
    /// Ascending worker count.
    pub entries: Vec<ScalingEntry>,
    pub failures: Vec<ConfigurationFailure>,
}

impl ScalingReport {
    #[must_use]
    pub fn entry(&self, worker_count: usize) -> Option<&ScalingEntry> {
        self.entries.iter().find(|e| e.worker_count == worker_count)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fits `(S, P)` from the entry measured with `reference` workers, or
    /// from the largest worker count that has a baseline.
    pub fn fit_model(&self, reference: Option<usize>) -> Result<SpeedupModel, ModelError> {
        let mut candidates = self.entries.iter().filter(|e| e.baseline_secs.is_some());
        let entry = match reference {
            Some(workers) => candidates
                .find(|e| e.worker_count == workers)
                .ok_or(ModelError::MissingReference(workers))?,
            None => candidates
                .max_by_key(|e| e.worker_count)
                .ok_or(ModelError::MissingReference(0))?,
        };

        match entry.baseline_secs {
            Some(baseline) => fit_speedup_model(baseline, entry.mean_secs, entry.worker_count),
            None => Err(ModelError::MissingReference(entry.worker_count)),
        }
    }
}
