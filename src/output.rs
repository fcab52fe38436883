use std::fmt::Display;
use std::io::{self, Write};

/// Default number of elements shown per array.
pub const PREVIEW_LIMIT: usize = 10;

/// The first `limit` values, space-separated.
pub fn format_row<T: Display>(values: &[T], limit: usize) -> String {
    values
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the leading elements of both inputs and of the result.
pub fn write_preview<W: Write, T: Display>(
    writer: &mut W,
    a: &[T],
    b: &[T],
    result: &[T],
    limit: usize,
) -> io::Result<()> {
    let shown = result.len().min(limit);
    writeln!(writer, "\nFirst {shown} elements of the arrays:")?;
    writeln!(writer, "Array 1: {}", format_row(a, shown))?;
    writeln!(writer, "Array 2: {}", format_row(b, shown))?;
    writeln!(writer, "Result: {}", format_row(result, shown))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_arrays_are_shown_whole() -> io::Result<()> {
        let mut out = Vec::new();
        write_preview(
            &mut out,
            &[1, 2, 3, 4, 5],
            &[10, 20, 30, 40, 50],
            &[11, 22, 33, 44, 55],
            PREVIEW_LIMIT,
        )?;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nFirst 5 elements of the arrays:\n\
             Array 1: 1 2 3 4 5\n\
             Array 2: 10 20 30 40 50\n\
             Result: 11 22 33 44 55\n"
        );
        Ok(())
    }

    #[test]
    fn test_long_arrays_are_truncated() {
        let values: Vec<i32> = (0..12).collect();
        assert_eq!(format_row(&values, PREVIEW_LIMIT), "0 1 2 3 4 5 6 7 8 9");
        assert_eq!(format_row(&values, 0), "");
    }
}
