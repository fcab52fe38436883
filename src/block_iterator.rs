use std::ops::Range;

use crate::error::{SumError, SumResult};

/// Iterator over contiguous index blocks of `[0, len)`.
///
/// Every block holds `chunk` indices except possibly the last one.
#[derive(Debug, Clone)]
pub struct BlockIterator {
    len: usize,
    chunk: usize,
    next: usize,
}

impl BlockIterator {
    pub fn new(len: usize, chunk: usize) -> Self {
        BlockIterator { len, chunk, next: 0 }
    }
}

impl Iterator for BlockIterator {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.chunk == 0 || self.next >= self.len {
            return None;
        }
        let start = self.next;
        let end = start.saturating_add(self.chunk).min(self.len);
        self.next = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.chunk == 0 {
            0
        } else {
            (self.len - self.next.min(self.len)).div_ceil(self.chunk)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockIterator {}

/// Splits `[0, len)` into blocks of `chunk` indices.
pub fn blocks(len: usize, chunk: usize) -> BlockIterator {
    BlockIterator::new(len, chunk)
}

/// One unit of work: a contiguous range and the worker that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub range: Range<usize>,
    pub worker: usize,
}

/// A static, round-robin assignment of blocks to workers.
///
/// Block `k` goes to worker `k % workers`. The assignment is decided once and
/// never rebalanced.
#[derive(Debug, Clone)]
pub struct StaticPartition {
    len: usize,
    chunk: usize,
    workers: usize,
    blocks: Vec<Block>,
}

impl StaticPartition {
    pub fn new(len: usize, chunk: usize, workers: usize) -> SumResult<Self> {
        if chunk == 0 {
            return Err(SumError::ZeroChunk);
        }
        if workers == 0 {
            return Err(SumError::NoWorkers);
        }

        let blocks: Vec<Block> = blocks(len, chunk)
            .enumerate()
            .map(|(index, range)| Block {
                index,
                range,
                worker: index % workers,
            })
            .collect();

        log::debug!(
            "partitioned {} indices into {} blocks of {} over {} workers",
            len,
            blocks.len(),
            chunk,
            workers
        );

        Ok(StaticPartition {
            len,
            chunk,
            workers,
            blocks,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk(&self) -> usize {
        self.chunk
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// All blocks in ascending index order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The ranges owned by `worker`, in ascending order.
    pub fn worker_ranges(&self, worker: usize) -> Vec<Range<usize>> {
        self.blocks
            .iter()
            .filter(|block| block.worker == worker)
            .map(|block| block.range.clone())
            .collect()
    }
}
