use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how parallel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Spawn one worker per hardware execution unit on the global Rayon thread pool.
    #[default]
    Auto,

    /// Run a single worker on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run `n` workers on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// The number of workers this strategy spawns.
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::InvalidThreadCount`] for `Fixed(0)`.
    pub fn num_workers(&self) -> Result<usize, ParallelError> {
        match *self {
            ExecutionStrategy::Auto => Ok(available_workers()),
            ExecutionStrategy::Serial => Ok(1),
            ExecutionStrategy::Fixed(0) => Err(ParallelError::InvalidThreadCount(0)),
            ExecutionStrategy::Fixed(n) => Ok(n),
        }
    }
}

/// The number of hardware execution units, or 1 if it can not be detected.
pub fn available_workers() -> usize {
    match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(e) => {
            log::warn!("failed to detect hardware concurrency, using a single worker: {e}");
            1
        }
    }
}

/// The columns owned by a worker in a strided partition of `start..end`.
///
/// Worker `k` of `n` owns the columns `start + k, start + k + n, start + k + 2n, ...`.
/// Together the workers cover every column exactly once.
pub fn strided_columns(
    worker: usize,
    num_workers: usize,
    start: usize,
    end: usize,
) -> std::iter::StepBy<std::ops::Range<usize>> {
    (start + worker..end).step_by(num_workers.max(1))
}

/// Run `f(worker, num_workers)` once per worker and collect the results in worker order.
///
/// The call blocks until every worker has finished. Each worker is expected to
/// restrict itself to the columns returned by [`strided_columns`].
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `f` - The work of a single worker.
///
/// # Returns
///
/// One result per worker, indexed by the worker number.
pub fn par_strided_columns<R, F>(
    strategy: ExecutionStrategy,
    f: F,
) -> Result<Vec<R>, ParallelError>
where
    R: Send,
    F: Fn(usize, usize) -> R + Sync + Send,
{
    let num_workers = strategy.num_workers()?;

    match strategy {
        ExecutionStrategy::Serial => Ok(vec![f(0, 1)]),
        ExecutionStrategy::Auto => Ok((0..num_workers)
            .into_par_iter()
            .map(|worker| f(worker, num_workers))
            .collect::<Vec<_>>()),
        ExecutionStrategy::Fixed(_) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_workers)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            Ok(pool.install(|| {
                (0..num_workers)
                    .into_par_iter()
                    .map(|worker| f(worker, num_workers))
                    .collect::<Vec<_>>()
            }))
        }
    }
}
