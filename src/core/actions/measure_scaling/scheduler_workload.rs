use std::num::NonZeroUsize;
use std::time::Duration;

use crate::core::actions::measure_scaling::ports::workload::Workload;
use crate::core::actions::schedule::errors::ScheduleError;
use crate::core::actions::schedule::scheduler::Scheduler;
use crate::core::data::execution_mode::PartitionPolicy;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;

/// Times real Mandelbrot computations. Each run builds a fresh scheduler, and
/// so a fresh worker pool of the requested size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SchedulerWorkload {
    policy: PartitionPolicy,
}

impl SchedulerWorkload {
    #[must_use]
    pub fn new(policy: PartitionPolicy) -> Self {
        Self { policy }
    }
}

impl Workload for SchedulerWorkload {
    fn run(
        &self,
        viewport: &Viewport,
        cap: IterationCap,
        workers: Option<NonZeroUsize>,
    ) -> Result<Duration, ScheduleError> {
        let scheduler = match workers {
            Some(workers) => Scheduler::parallel(workers, self.policy),
            None => Scheduler::serial(),
        };

        scheduler.run(viewport, cap).map(|run| run.elapsed)
    }
}
