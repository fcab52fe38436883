use std::fmt;
use std::io;

use thiserror::Error;

pub type SumResult<T> = Result<T, SumError>;

/// Which positive integer was being read when validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    Chunk,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Size => "array size",
            Field::Chunk => "chunk size",
        }
    }

    /// Text shown before reading the value.
    pub const fn prompt(&self) -> &'static str {
        match self {
            Field::Size => "Enter the array size: ",
            Field::Chunk => "Enter the chunk size for each worker: ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SumError {
    #[error("Invalid input. The {field} must be a positive integer (got {value:?}).")]
    NotPositive { field: Field, value: String },

    #[error("Invalid option {0:?}. Exiting the program.")]
    InvalidOption(String),

    #[error("Input ended while reading the {0}.")]
    UnexpectedEof(&'static str),

    #[error("chunk size must be greater than zero")]
    ZeroChunk,

    #[error("worker count must be greater than zero")]
    NoWorkers,

    #[error("array lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("failed to build the worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SumError {
    /// Every failure ends the run with the same status.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Errors caused by what the user typed, as opposed to I/O or library misuse.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SumError::NotPositive { .. } | SumError::InvalidOption(_) | SumError::UnexpectedEof(_)
        )
    }
}
