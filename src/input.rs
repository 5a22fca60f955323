//! Line-based input reader.
//!
//! Format: the first non-blank line holds the matrix count `n`, followed by
//! `n + 1` lines holding one dimension each. Blank lines are skipped and
//! anything after the last dimension is ignored.

use std::io::BufRead;

use crate::dims::Dimensions;
use crate::error::{Error, Result};

/// Upper bound on the dimension buffer reserved up front.
const MAX_PREALLOCATED: usize = 1024;

/// Read a matrix count and its dimension sequence from `reader`.
pub fn read_dimensions<R: BufRead>(reader: R) -> Result<Dimensions> {
    let mut values = NumberedValues::new(reader);

    let count = match values.next_value()? {
        Some((line, raw)) => raw.parse::<usize>().map_err(|_| {
            Error::invalid(format!(
                "line {line}: matrix count must be a non-negative integer, got {raw:?}"
            ))
        })?,
        None => return Err(Error::invalid("empty input: expected a matrix count")),
    };
    if count == 0 {
        return Err(Error::invalid("matrix count must be at least 1"));
    }

    let expected = count
        .checked_add(1)
        .ok_or_else(|| Error::invalid(format!("matrix count {count} is too large")))?;
    // The count is untrusted; grow with the values actually read.
    let mut dims = Vec::with_capacity(expected.min(MAX_PREALLOCATED));
    while dims.len() < expected {
        let Some((line, raw)) = values.next_value()? else {
            return Err(Error::invalid(format!(
                "expected {expected} dimensions for {count} matrices, found {}",
                dims.len()
            )));
        };
        let value = raw.parse::<i64>().map_err(|_| {
            Error::invalid(format!("line {line}: dimension must be an integer, got {raw:?}"))
        })?;
        if value <= 0 {
            return Err(Error::invalid(format!(
                "line {line}: dimension must be positive, got {value}"
            )));
        }
        dims.push(value);
    }

    #[cfg(feature = "tracing")]
    if values.next_value().ok().flatten().is_some() {
        tracing::debug!(count, "ignoring input after the last dimension");
    }

    Dimensions::new(dims)
}

/// Parse the line-based format from an in-memory string.
pub fn parse_dimensions(text: &str) -> Result<Dimensions> {
    read_dimensions(text.as_bytes())
}

/// Iterator over trimmed non-blank lines paired with their 1-based number.
struct NumberedValues<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> NumberedValues<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_value(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.split_whitespace().nth(1).is_some() {
                return Err(Error::invalid(format!(
                    "line {}: expected a single integer, got {trimmed:?}",
                    self.line_no
                )));
            }
            return Ok(Some((self.line_no, trimmed.to_string())));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_well_formed_input() {
        let dims = parse_dimensions("3\n10\n100\n5\n50\n").unwrap();
        assert_eq!(dims.as_slice(), &[10, 100, 5, 50]);
    }

    #[test]
    fn tolerates_blank_lines_and_padding() {
        let dims = parse_dimensions("\n 2 \n\n10\r\n20\n  30\n").unwrap();
        assert_eq!(dims.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn ignores_trailing_lines() {
        let dims = parse_dimensions("1\n4\n5\n6\nnot a number\n").unwrap();
        assert_eq!(dims.as_slice(), &[4, 5]);
    }

    #[test]
    fn missing_dimensions_are_reported() {
        let err = parse_dimensions("3\n10\n100\n").unwrap_err();
        assert!(err.to_string().contains("expected 4 dimensions"), "{err}");
        assert!(err.to_string().contains("found 2"), "{err}");
    }

    #[test]
    fn non_integer_token_names_line() {
        let err = parse_dimensions("2\n10\nten\n30\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        assert!(parse_dimensions("1\n0\n5\n").is_err());
        assert!(parse_dimensions("1\n-3\n5\n").is_err());
    }

    #[test]
    fn zero_and_missing_count_rejected() {
        assert!(parse_dimensions("0\n5\n").is_err());
        assert!(parse_dimensions("").is_err());
        assert!(parse_dimensions("   \n\n").is_err());
        assert!(parse_dimensions("-1\n").is_err());
    }

    #[test]
    fn maximal_count_is_invalid_input() {
        let input = format!("{}\n1\n2\n", usize::MAX);
        let err = parse_dimensions(&input).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("too large"), "{err}");
    }

    #[test]
    fn huge_count_reports_shortfall_without_allocating() {
        let err = parse_dimensions("100000000000000000\n1\n2\n").unwrap_err();
        assert!(err.to_string().contains("found 2"), "{err}");
        assert!(
            err.to_string().contains("expected 100000000000000001 dimensions"),
            "{err}"
        );
    }

    #[test]
    fn two_tokens_on_one_line_rejected() {
        let err = parse_dimensions("1\n4 5\n").unwrap_err();
        assert!(err.to_string().contains("single integer"), "{err}");
    }
}
