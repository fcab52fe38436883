//! Worker pools that run one task per worker and wait for all of them.

use clap::ValueEnum;

use crate::error::{SumError, SumResult};

/// Runs a batch of per-worker tasks and returns once every task is done.
pub trait Executor {
    /// Number of workers the static partition should be built for.
    fn worker_count(&self) -> usize;

    /// Calls `task(worker_id, item)` once for every item in `work`.
    fn run_workers<W, F>(&self, work: Vec<W>, task: F)
    where
        W: Send,
        F: Fn(usize, W) + Sync;
}

/// Backed by a dedicated rayon pool.
///
/// The thread count comes from the environment (`RAYON_NUM_THREADS` or the
/// number of CPUs), never from the chunk size.
#[derive(Debug)]
pub struct ThreadPool {
    pool: rayon::ThreadPool,
}

impl ThreadPool {
    pub fn new() -> SumResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("parsum-worker-{i}"))
            .build()?;
        log::debug!("built worker pool with {} threads", pool.current_num_threads());
        Ok(ThreadPool { pool })
    }

    /// Pool with an exact thread count, mostly for tests.
    pub fn with_threads(threads: usize) -> SumResult<Self> {
        if threads == 0 {
            return Err(SumError::NoWorkers);
        }
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(ThreadPool { pool })
    }
}

impl Executor for ThreadPool {
    fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn run_workers<W, F>(&self, work: Vec<W>, task: F)
    where
        W: Send,
        F: Fn(usize, W) + Sync,
    {
        let task = &task;
        // The scope does not return until every spawned task has finished.
        self.pool.scope(move |scope| {
            for (worker, item) in work.into_iter().enumerate() {
                scope.spawn(move |_| task(worker, item));
            }
        });
    }
}

/// Single-threaded stand-in that runs the workers one after another.
#[derive(Debug, Clone, Copy)]
pub struct Serial {
    workers: usize,
}

impl Serial {
    pub fn new(workers: usize) -> SumResult<Self> {
        if workers == 0 {
            return Err(SumError::NoWorkers);
        }
        Ok(Serial { workers })
    }
}

impl Default for Serial {
    fn default() -> Self {
        Serial { workers: 1 }
    }
}

impl Executor for Serial {
    fn worker_count(&self) -> usize {
        self.workers
    }

    fn run_workers<W, F>(&self, work: Vec<W>, task: F)
    where
        W: Send,
        F: Fn(usize, W) + Sync,
    {
        for (worker, item) in work.into_iter().enumerate() {
            task(worker, item);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExecutorKind {
    /// Rayon thread pool sized by the environment.
    #[default]
    Threads,
    /// Run every worker on the calling thread.
    Serial,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_serial_runs_in_worker_order() -> SumResult<()> {
        let serial = Serial::new(3)?;
        let seen = Mutex::new(Vec::new());
        serial.run_workers(vec!['a', 'b', 'c'], |worker, item| {
            seen.lock().unwrap().push((worker, item));
        });
        assert_eq!(seen.into_inner().unwrap(), vec![(0, 'a'), (1, 'b'), (2, 'c')]);
        Ok(())
    }

    #[test]
    fn test_thread_pool_runs_every_task_before_returning() -> SumResult<()> {
        let pool = ThreadPool::with_threads(4)?;
        assert_eq!(pool.worker_count(), 4);
        let done = AtomicUsize::new(0);
        pool.run_workers((0..16).collect(), |_, n: usize| {
            done.fetch_add(n, Ordering::SeqCst);
        });
        assert_eq!(done.load(Ordering::SeqCst), (0..16).sum::<usize>());
        Ok(())
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(Serial::new(0), Err(SumError::NoWorkers)));
        assert!(matches!(ThreadPool::with_threads(0), Err(SumError::NoWorkers)));
    }
}
