//! The interactive flow: sizes, fill, parallel sum, preview.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::thread;

use crate::arithmetic::{parallel_sum, Element};
use crate::config::Settings;
use crate::error::{Field, SumResult};
use crate::executor::{ExecutorKind, Serial, ThreadPool};
use crate::input::{random_arrays, seeded_rng, FillMode, Prompter};
use crate::output::write_preview;

const BANNER: &str = "   ++\n  ++++\n   ++\n\
                      This program adds two integer arrays element by element \
                      using a pool of parallel workers.\n\n";

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub chunk: usize,
    pub a: Vec<Element>,
    pub b: Vec<Element>,
    pub result: Vec<Element>,
}

/// Runs one session, reading answers from `reader` and writing to `writer`.
///
/// Validation failures are reported on `writer` before the error is returned.
pub fn run<R: BufRead, W: Write>(settings: &Settings, reader: R, writer: W) -> SumResult<Outcome> {
    let mut prompter = Prompter::new(reader, writer);
    interact(settings, &mut prompter).inspect_err(|err| {
        if err.is_user_facing() {
            if let Err(io) = writeln!(prompter.writer(), "\n{err}") {
                log::warn!("could not report error to the user: {}", io);
            }
        }
    })
}

fn interact<R: BufRead, W: Write>(
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> SumResult<Outcome> {
    prompter.prompt(BANNER)?;
    let size = prompter.read_positive(Field::Size)?;
    let chunk = prompter.read_positive(Field::Chunk)?;

    let (a, b) = match prompter.read_fill_mode()? {
        FillMode::Random => {
            let arrays = random_arrays(&mut seeded_rng(settings.seed), size);
            writeln!(prompter.writer(), "Arrays filled with random values.")?;
            arrays
        }
        FillMode::Manual => {
            let a = prompter.read_array("array 1", size)?;
            let b = prompter.read_array("array 2", size)?;
            (a, b)
        }
    };

    log::info!("summing {} elements in chunks of {}", size, chunk);
    let result = compute(settings.executor, &a, &b, chunk)?;

    write_preview(prompter.writer(), &a, &b, &result, settings.preview)?;
    Ok(Outcome {
        chunk,
        a,
        b,
        result,
    })
}

fn compute(kind: ExecutorKind, a: &[Element], b: &[Element], chunk: usize) -> SumResult<Vec<Element>> {
    match kind {
        ExecutorKind::Threads => parallel_sum(a, b, chunk, &ThreadPool::new()?),
        ExecutorKind::Serial => {
            let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
            parallel_sum(a, b, chunk, &Serial::new(workers)?)
        }
    }
}
