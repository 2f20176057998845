//! Line-oriented cursor shared by the dataset loader and the weight store.
//!
//! Both formats are whitespace-delimited and positional: every record lives on
//! a known line, separated from its neighbours by blank lines. The cursor
//! tracks 1-based line numbers so parse failures can point at the offending
//! line, and builds errors through `err` so each format reports its own
//! error variant.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use crate::error::{PerceptronError, Result};

pub(crate) type ErrorFn = fn(usize, String) -> PerceptronError;

pub(crate) struct LineCursor<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
    last_line: usize,
    err: ErrorFn,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str, err: ErrorFn) -> Self {
        LineCursor {
            lines: text.lines().enumerate().peekable(),
            last_line: 0,
            err,
        }
    }

    /// Builds a format error pointing at `line`.
    pub fn error(&self, line: usize, message: impl Into<String>) -> PerceptronError {
        (self.err)(line, message.into())
    }

    /// Number of the last consumed line, 0 before the first.
    pub fn line(&self) -> usize {
        self.last_line
    }

    /// The next line is blank, or there is none.
    pub fn at_blank_or_end(&mut self) -> bool {
        self.lines.peek().map_or(true, |(_, line)| line.trim().is_empty())
    }

    /// Consumes the next line; hitting end of file is an error naming `what`.
    pub fn expect_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        match self.lines.next() {
            Some((idx, line)) => {
                self.last_line = idx + 1;
                Ok((idx + 1, line))
            }
            None => Err(self.error(
                self.last_line + 1,
                format!("unexpected end of file, expected {what}"),
            )),
        }
    }

    /// Consumes a run of one or more blank lines preceding `what`.
    pub fn expect_separator(&mut self, what: &str) -> Result<()> {
        let (line_no, line) = self.expect_line(&format!("blank line before {what}"))?;
        if !line.trim().is_empty() {
            return Err(self.error(line_no, format!("expected blank line before {what}, found '{}'", line.trim())));
        }
        while let Some((idx, line)) = self.lines.peek() {
            if !line.trim().is_empty() {
                break;
            }
            self.last_line = idx + 1;
            self.lines.next();
        }
        Ok(())
    }

    /// Parses the next line as exactly `count` values.
    pub fn parse_row<T: FromStr>(&mut self, count: usize, what: &str) -> Result<Vec<T>> {
        let (line_no, line) = self.expect_line(what)?;
        let cells = tokens(line);
        if cells.len() != count {
            return Err(self.error(
                line_no,
                format!("{what}: expected {count} values, got {}", cells.len()),
            ));
        }
        cells.iter()
            .map(|cell| {
                cell.parse::<T>().map_err(|_| {
                    self.error(line_no, format!("{what}: '{cell}' is not a valid number"))
                })
            })
            .collect()
    }

    /// Parses the next line as a single value.
    pub fn parse_scalar<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let mut row = self.parse_row::<T>(1, what)?;
        Ok(row.remove(0))
    }
}

/// Splits a line into whitespace-delimited tokens, dropping any trailing
/// `// annotation`.
pub(crate) fn tokens(line: &str) -> Vec<&str> {
    let content = match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    };
    content.split_whitespace().collect()
}
