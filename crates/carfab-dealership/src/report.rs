//! Order report
//!
//! [`OrderReport`] is the client's output surface: the ordered lines
//! produced while fulfilling one bundle order. The core never prints;
//! callers route these lines to a console, log, or JSON sink.

use carfab_product::{CarKind, Region};
use serde::Serialize;
use std::fmt;

/// Ordered descriptive output of one bundle order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    /// Region whose family fulfilled the order
    pub region: Region,
    /// Car sub-kind that was ordered
    pub kind: CarKind,
    /// Description lines, in emission order
    pub lines: Vec<String>,
}

impl OrderReport {
    /// Create an empty report for one order
    #[inline]
    #[must_use]
    pub fn new(region: Region, kind: CarKind) -> Self {
        Self {
            region,
            kind,
            lines: Vec::new(),
        }
    }

    /// Append one description line
    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Iterate over description lines in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of description lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the report carries no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for OrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
