//! Reading sizes, the fill mode and array values from an interactive stream.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arithmetic::Element;
use crate::error::{Field, SumError, SumResult};

/// Random values are drawn from `[0, RANDOM_BOUND)`.
pub const RANDOM_BOUND: Element = 100;

/// How the two arrays get their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Manual,
}

/// Whitespace-separated token reader with prompts written to `writer`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: &str) -> SumResult<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Next token, pulling more lines as needed. `None` at end of input.
    fn next_token(&mut self) -> SumResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Drops whatever is left of the current line.
    fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Reads a strictly positive integer for `field`.
    ///
    /// Values are limited to the `i32` range; anything larger is rejected
    /// like any other invalid token.
    pub fn read_positive(&mut self, field: Field) -> SumResult<usize> {
        self.prompt(field.prompt())?;

        let token = self
            .next_token()?
            .ok_or(SumError::UnexpectedEof(field.as_str()))?;
        match token.parse::<i32>() {
            Ok(value) if value > 0 => {
                usize::try_from(value).map_err(|_| SumError::NotPositive { field, value: token })
            }
            _ => Err(SumError::NotPositive { field, value: token }),
        }
    }

    /// Shows the fill menu and reads the choice.
    pub fn read_fill_mode(&mut self) -> SumResult<FillMode> {
        self.prompt(
            "\nSelect an option:\n\
             1. Fill the arrays with random values\n\
             2. Enter the values manually\n\
             Option: ",
        )?;
        let token = self
            .next_token()?
            .ok_or(SumError::UnexpectedEof("menu option"))?;
        match token.parse::<i64>() {
            Ok(1) => Ok(FillMode::Random),
            Ok(2) => Ok(FillMode::Manual),
            _ => Err(SumError::InvalidOption(token)),
        }
    }

    /// Reads `len` integers, asking again whenever a token is not an integer.
    pub fn read_array(&mut self, label: &str, len: usize) -> SumResult<Vec<Element>> {
        writeln!(self.writer, "Enter the values for {label}:")?;
        let mut values = Vec::with_capacity(len);
        for i in 0..len {
            self.prompt(&format!("Element {}: ", i + 1))?;
            values.push(self.read_element()?);
        }
        Ok(values)
    }

    fn read_element(&mut self) -> SumResult<Element> {
        loop {
            let token = self
                .next_token()?
                .ok_or(SumError::UnexpectedEof("array values"))?;
            match token.parse::<Element>() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::warn!("rejected element {:?}: {}", token, err);
                    self.discard_line();
                    self.prompt("Invalid input. Enter an integer: ")?;
                }
            }
        }
    }
}

/// Generator seeded from `seed`, or from the wall clock when none is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    });
    log::info!("random seed {}", seed);
    StdRng::seed_from_u64(seed)
}

/// Fills two arrays of `len` values in `[0, RANDOM_BOUND)`, drawing `a[i]` then `b[i]`.
pub fn random_arrays<G: Rng>(rng: &mut G, len: usize) -> (Vec<Element>, Vec<Element>) {
    let mut a = Vec::with_capacity(len);
    let mut b = Vec::with_capacity(len);
    for _ in 0..len {
        a.push(rng.random_range(0..RANDOM_BOUND));
        b.push(rng.random_range(0..RANDOM_BOUND));
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_writer()).unwrap()
    }

    #[test]
    fn test_reads_positive_values() -> SumResult<()> {
        let mut p = prompter("12\n 3 \n");
        assert_eq!(p.read_positive(Field::Size)?, 12);
        assert_eq!(p.read_positive(Field::Chunk)?, 3);
        let out = output(p);
        assert!(out.contains("Enter the array size: "));
        assert!(out.contains("Enter the chunk size for each worker: "));
        Ok(())
    }

    #[test]
    fn test_rejects_zero_negative_and_garbage() {
        for bad in ["0", "-5", "abc", "2.5", "2147483648", "4000000000000000000"] {
            let mut p = prompter(bad);
            match p.read_positive(Field::Size) {
                Err(SumError::NotPositive { field, value }) => {
                    assert_eq!(field, Field::Size);
                    assert_eq!(value, bad);
                }
                other => panic!("expected NotPositive for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepts_largest_i32() -> SumResult<()> {
        let mut p = prompter("2147483647\n");
        assert_eq!(p.read_positive(Field::Chunk)?, 2_147_483_647);
        Ok(())
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let mut p = prompter("");
        assert!(matches!(
            p.read_positive(Field::Chunk),
            Err(SumError::UnexpectedEof("chunk size"))
        ));
    }

    #[test]
    fn test_menu_choices() -> SumResult<()> {
        assert_eq!(prompter("1\n").read_fill_mode()?, FillMode::Random);
        assert_eq!(prompter("2\n").read_fill_mode()?, FillMode::Manual);
        assert!(matches!(
            prompter("3\n").read_fill_mode(),
            Err(SumError::InvalidOption(ref s)) if s == "3"
        ));
        assert!(matches!(
            prompter("random\n").read_fill_mode(),
            Err(SumError::InvalidOption(_))
        ));
        Ok(())
    }

    #[test]
    fn test_manual_entry_reprompts_on_garbage() -> SumResult<()> {
        let mut p = prompter("4\nx y\n-7\n9 10\n");
        let values = p.read_array("array 1", 4)?;
        assert_eq!(values, vec![4, -7, 9, 10]);
        let out = output(p);
        assert_eq!(out.matches("Invalid input. Enter an integer: ").count(), 1);
        assert!(out.starts_with("Enter the values for array 1:\nElement 1: "));
        Ok(())
    }

    #[test]
    fn test_manual_entry_stops_at_end_of_input() {
        let mut p = prompter("1\nnope\n");
        assert!(matches!(
            p.read_array("array 2", 3),
            Err(SumError::UnexpectedEof("array values"))
        ));
    }

    #[test]
    fn test_random_arrays_in_range_and_reproducible() {
        let (a, b) = random_arrays(&mut seeded_rng(Some(42)), 500);
        assert_eq!(a.len(), 500);
        assert_eq!(b.len(), 500);
        assert!(a.iter().chain(&b).all(|v| (0..RANDOM_BOUND).contains(v)));

        let again = random_arrays(&mut seeded_rng(Some(42)), 500);
        assert_eq!((a, b), again);
    }
}
