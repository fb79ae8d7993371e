use std::num::NonZeroUsize;
use std::time::Duration;

use crate::core::actions::schedule::errors::ScheduleError;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;

/// Something the scaling harness can time.
///
/// `workers == None` asks for a serial run.
pub trait Workload {
    fn run(
        &self,
        viewport: &Viewport,
        cap: IterationCap,
        workers: Option<NonZeroUsize>,
    ) -> Result<Duration, ScheduleError>;
}
