use thiserror::Error;

use crate::core::actions::schedule::errors::ScheduleError;
use crate::core::data::viewport::ViewportError;

/// Reasons a sweep is refused before it starts, or a direct measurement
/// fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarnessError {
    #[error("worker count list is empty")]
    NoWorkerCounts,
    #[error("worker count at position {index} is zero")]
    ZeroWorkerCount { index: usize },
    #[error("repetition count must be greater than zero")]
    ZeroRepetitions,
    #[error("baseline repetition count must be greater than zero")]
    ZeroBaselineRepetitions,
    #[error("invalid scaled viewport for {workers} workers: {source}")]
    Viewport {
        workers: usize,
        #[source]
        source: ViewportError,
    },
    #[error("measurement failed: {0}")]
    Measurement(#[from] ScheduleError),
}
