use std::ops::Range;

use num_traits::WrappingAdd;

use crate::block_iterator::StaticPartition;
use crate::error::{SumError, SumResult};
use crate::executor::Executor;

/// The integer type the CLI reads and sums.
pub type Element = i32;

/// A block of the output together with the index range it covers.
type OutBlock<'a, T> = (Range<usize>, &'a mut [T]);

/// Adds `a` and `b` element by element on `executor`.
///
/// The index space is cut into blocks of `chunk` indices and the blocks are
/// handed out round-robin to the executor's workers. Sums wrap on overflow.
pub fn parallel_sum<T, E>(a: &[T], b: &[T], chunk: usize, executor: &E) -> SumResult<Vec<T>>
where
    T: WrappingAdd + Copy + Default + Send + Sync,
    E: Executor,
{
    check_len(a.len(), b.len())?;
    let partition = StaticPartition::new(a.len(), chunk, executor.worker_count())?;
    let mut result = vec![T::default(); a.len()];
    sum_into(a, b, &mut result, &partition, executor)?;
    Ok(result)
}

/// Writes `a[i] + b[i]` into `out[i]` following a prebuilt partition.
///
/// Each worker receives the disjoint output slices of the blocks it owns, so
/// every index is written by exactly one task.
pub fn sum_into<T, E>(
    a: &[T],
    b: &[T],
    out: &mut [T],
    partition: &StaticPartition,
    executor: &E,
) -> SumResult<()>
where
    T: WrappingAdd + Copy + Send + Sync,
    E: Executor,
{
    check_len(a.len(), b.len())?;
    check_len(a.len(), out.len())?;
    check_len(a.len(), partition.len())?;

    let work = split_by_worker(out, partition);
    executor.run_workers(work, |worker, blocks| {
        log::debug!("worker {} summing {} blocks", worker, blocks.len());
        for (range, dst) in blocks {
            log::trace!("worker {} block {:?}", worker, range);
            add_block(&a[range.clone()], &b[range], dst);
        }
    });
    Ok(())
}

/// Plain single loop, used as the reference result.
pub fn sequential_sum<T: WrappingAdd + Copy>(a: &[T], b: &[T]) -> SumResult<Vec<T>> {
    check_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x.wrapping_add(y)).collect())
}

fn add_block<T: WrappingAdd + Copy>(a: &[T], b: &[T], dst: &mut [T]) {
    for ((out, x), y) in dst.iter_mut().zip(a).zip(b) {
        *out = x.wrapping_add(y);
    }
}

/// Carves `out` into one mutable slice per block and groups them by owner.
fn split_by_worker<'a, T>(
    mut out: &'a mut [T],
    partition: &StaticPartition,
) -> Vec<Vec<OutBlock<'a, T>>> {
    let mut per_worker: Vec<Vec<OutBlock<'a, T>>> =
        (0..partition.worker_count()).map(|_| Vec::new()).collect();

    // Blocks are ascending and contiguous, so each one is a prefix of what is left.
    for block in partition.blocks() {
        let (head, tail) = std::mem::take(&mut out).split_at_mut(block.range.len());
        out = tail;
        per_worker[block.worker].push((block.range.clone(), head));
    }
    per_worker
}

fn check_len(left: usize, right: usize) -> SumResult<()> {
    if left != right {
        return Err(SumError::LengthMismatch { left, right });
    }
    Ok(())
}
