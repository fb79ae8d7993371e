use std::num::NonZeroUsize;

/// Hardware parallelism of the host, or 1 when it cannot be queried.
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
