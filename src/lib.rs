//! Element-wise sum of two integer arrays over a statically partitioned
//! worker pool, with an interactive front end.

pub mod arithmetic;
pub mod block_iterator;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod output;
pub mod session;

pub use arithmetic::{parallel_sum, sequential_sum, sum_into, Element};
pub use block_iterator::{blocks, Block, BlockIterator, StaticPartition};
pub use config::Settings;
pub use error::{Field, SumError, SumResult};
pub use executor::{Executor, ExecutorKind, Serial, ThreadPool};
