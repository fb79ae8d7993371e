use std::fmt;
use std::num::NonZeroUsize;

use thiserror::Error;

use crate::core::util::available_workers::available_workers;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ExecutionModeError {
    #[error("worker count must be greater than zero")]
    ZeroWorkers,
}

/// How many workers a parallel run uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WorkerCount {
    /// Whatever hardware parallelism the host reports.
    #[default]
    Auto,
    Fixed(NonZeroUsize),
}

impl WorkerCount {
    pub fn fixed(workers: usize) -> Result<Self, ExecutionModeError> {
        NonZeroUsize::new(workers)
            .map(Self::Fixed)
            .ok_or(ExecutionModeError::ZeroWorkers)
    }

    #[must_use]
    pub fn resolve(self) -> NonZeroUsize {
        match self {
            Self::Auto => available_workers(),
            Self::Fixed(workers) => workers,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    Serial,
    Parallel(WorkerCount),
}

impl ExecutionMode {
    /// `None` means one worker per available hardware thread.
    pub fn parallel(workers: Option<usize>) -> Result<Self, ExecutionModeError> {
        let count = match workers {
            Some(workers) => WorkerCount::fixed(workers)?,
            None => WorkerCount::Auto,
        };

        Ok(Self::Parallel(count))
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::Parallel(WorkerCount::Auto) => write!(f, "parallel(auto)"),
            Self::Parallel(WorkerCount::Fixed(n)) => write!(f, "parallel({n})"),
        }
    }
}

/// How rows are handed out to parallel workers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PartitionPolicy {
    /// Rows are stolen one at a time from a rayon pool.
    #[default]
    WorkStealing,
    /// Each worker owns one contiguous band of rows.
    StaticBands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_workers_is_a_configuration_error() {
        assert_eq!(WorkerCount::fixed(0), Err(ExecutionModeError::ZeroWorkers));
        assert_eq!(
            ExecutionMode::parallel(Some(0)),
            Err(ExecutionModeError::ZeroWorkers)
        );
    }

    #[test]
    fn test_explicit_worker_count_resolves_to_itself() {
        let count = WorkerCount::fixed(6).unwrap();

        assert_eq!(count.resolve().get(), 6);
    }

    #[test]
    fn test_auto_resolves_to_available_parallelism() {
        assert_eq!(WorkerCount::Auto.resolve(), available_workers());
        assert_eq!(
            ExecutionMode::parallel(None),
            Ok(ExecutionMode::Parallel(WorkerCount::Auto))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ExecutionMode::Serial.to_string(), "serial");
        assert_eq!(
            ExecutionMode::parallel(Some(4)).unwrap().to_string(),
            "parallel(4)"
        );
        assert_eq!(ExecutionMode::parallel(None).unwrap().to_string(), "parallel(auto)");
    }
}
