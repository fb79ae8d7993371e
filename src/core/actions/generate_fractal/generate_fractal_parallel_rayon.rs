use std::num::NonZeroUsize;

use rayon::prelude::*;
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::actions::generate_fractal::errors::{GenerateFractalError, compute_row_guarded};
use crate::core::actions::generate_fractal::ports::row_task::RowTask;
use crate::core::data::image_matrix::PixelResult;

/// Generates every row on a dedicated rayon pool of `workers` threads.
///
/// Rows are stolen one at a time, so expensive rows near the set do not stall
/// a whole band. The pool lives only for this call and its threads are joined
/// before it returns. The indexed `collect` keeps rows in index order whatever
/// order the workers finish in.
pub fn generate_fractal_parallel_rayon<T>(
    task: &T,
    workers: NonZeroUsize,
) -> Result<Vec<Vec<PixelResult>>, GenerateFractalError<T::Failure>>
where
    T: RowTask + Sync,
{
    install_scoped(worker_pool(workers), || {
        (0..task.height())
            .into_par_iter()
            .map(|y| compute_row_guarded(task, y))
            .collect()
    })?
}

fn worker_pool(workers: NonZeroUsize) -> ThreadPoolBuilder {
    ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|index| format!("mandelscale-worker-{index}"))
}

// Worker threads are spawned in a thread scope, so every one has exited when
// this returns.
fn install_scoped<R, OP>(builder: ThreadPoolBuilder, op: OP) -> Result<R, ThreadPoolBuildError>
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    builder.build_scoped(|thread| thread.run(), |pool| pool.install(op))
}
