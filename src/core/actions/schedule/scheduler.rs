use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::row_task::RowTask;
use crate::core::actions::schedule::errors::ScheduleError;
use crate::core::data::execution_mode::{ExecutionMode, PartitionPolicy};
use crate::core::data::image_matrix::ImageMatrix;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotRowTask;

/// Output of one scheduled computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledRun {
    pub matrix: ImageMatrix,
    /// Wall-clock time from just before dispatch to just after the matrix was
    /// assembled. Pool start-up and the join of every worker are included.
    pub elapsed: Duration,
}

/// `"serial"` when no worker count is given, `"parallel"` otherwise.
#[must_use]
pub(crate) fn mode_label(workers: Option<NonZeroUsize>) -> &'static str {
    if workers.is_some() {
        "parallel"
    } else {
        "serial"
    }
}

/// Dispatches row tasks serially or to a worker pool.
///
/// The worker count is fixed when the scheduler is built; `WorkerCount::Auto`
/// is resolved against the host at that point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scheduler {
    workers: Option<NonZeroUsize>,
    policy: PartitionPolicy,
}

impl Scheduler {
    #[must_use]
    pub fn new(mode: ExecutionMode, policy: PartitionPolicy) -> Self {
        let workers = match mode {
            ExecutionMode::Serial => None,
            ExecutionMode::Parallel(count) => Some(count.resolve()),
        };

        Self { workers, policy }
    }

    #[must_use]
    pub fn serial() -> Self {
        Self::new(ExecutionMode::Serial, PartitionPolicy::default())
    }

    #[must_use]
    pub fn parallel(workers: NonZeroUsize, policy: PartitionPolicy) -> Self {
        Self {
            workers: Some(workers),
            policy,
        }
    }

    /// `None` in serial mode.
    #[must_use]
    pub fn workers(&self) -> Option<NonZeroUsize> {
        self.workers
    }

    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        mode_label(self.workers)
    }

    pub fn run(&self, viewport: &Viewport, cap: IterationCap) -> Result<ScheduledRun, ScheduleError> {
        self.run_task(&MandelbrotRowTask::new(*viewport, cap))
    }

    pub fn run_task<T>(&self, task: &T) -> Result<ScheduledRun, ScheduleError>
    where
        T: RowTask + Sync,
    {
        let (width, height) = (task.width(), task.height());
        debug!(
            mode = self.mode_label(),
            policy = ?self.policy,
            width,
            height,
            "dispatching rows"
        );

        let start = Instant::now();
        let rows = match self.workers {
            None => generate_fractal_serial(task)?,
            Some(workers) => match self.policy {
                PartitionPolicy::WorkStealing => generate_fractal_parallel_rayon(task, workers)?,
                PartitionPolicy::StaticBands => {
                    generate_fractal_parallel_scoped_threads(task, workers)?
                }
            },
        };
        let matrix = ImageMatrix::from_rows(width, height, rows)?;
        let elapsed = start.elapsed();

        info!(
            mode = self.mode_label(),
            width,
            height,
            workers = self.workers.map_or(1, NonZeroUsize::get),
            elapsed_secs = elapsed.as_secs_f64(),
            "computation finished"
        );

        Ok(ScheduledRun { matrix, elapsed })
    }
}

/// Computes the escape-time matrix of `viewport` with the default
/// (work-stealing) partitioning.
pub fn compute(
    cap: IterationCap,
    mode: ExecutionMode,
    viewport: &Viewport,
) -> Result<ImageMatrix, ScheduleError> {
    Scheduler::new(mode, PartitionPolicy::default())
        .run(viewport, cap)
        .map(|run| run.matrix)
}
