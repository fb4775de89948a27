//! Line I/O driver
//!
//! Reads the whole input before writing anything: slice and negative-index
//! resolution need the total line count, so streaming resolution is not
//! possible. Lines are kept as raw bytes with their original terminators so
//! selected lines are emitted byte-for-byte.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::expression;

/// Read all lines from `reader`, terminators included, into a collection
/// whose index 0 is an empty placeholder so that line 1 sits at position 1.
/// The final line is kept even when it has no terminator.
pub fn read_lines<R: BufRead>(reader: &mut R) -> Result<Vec<Vec<u8>>> {
    let mut lines = vec![Vec::new()];

    loop {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Run one selection: read everything, resolve the plan, then stream the
/// selected lines to `output` with a flush per line. The plan is computed in
/// full before the first write, so a resolver error never produces partial
/// output.
pub fn run<R: BufRead, W: Write>(expression: &str, input: &mut R, output: &mut W) -> Result<()> {
    let lines = read_lines(input)?;
    let line_count = lines.len() - 1;

    let plan = expression::resolve_expression(expression, line_count)?;
    debug!(line_count, selected = plan.len(), "resolved selection plan");

    for index in plan {
        output.write_all(&lines[index])?;
        output.flush()?;
    }

    Ok(())
}
