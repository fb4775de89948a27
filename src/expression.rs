//! Selection expression parsing and resolution
//!
//! An expression is a comma-separated list of parts. Each part is either a
//! dash range (`5-10`, direction inferred from the endpoints) or a pythonic
//! subscript (`-1`, `2:`, `::-1`, ...) evaluated against the conceptual
//! 0-based list `[0, 1, ..., N]`, where position 0 is a placeholder so that
//! line 1 is the first input line. Resolution is pure: it turns the
//! expression and the total line count into the ordered list of line numbers
//! to emit, and never touches I/O.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PickError, Result};

/// One comma-separated unit of a selection expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// `A-B`: inclusive 1-based run, descending when `start >= end`
    DashRange { start: usize, end: usize },
    /// Bare subscript, negative values wrap from the end
    Index(i64),
    /// `start:stop:step` slice with Python semantics; `None` means omitted
    Slice {
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    },
}

fn dash_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Whole-part match only: a part like "1-2-3" must not half-match here.
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)[ \t]*-[ \t]*([0-9]+)$").expect("dash-range pattern is valid")
    })
}

/// Parse a single trimmed, non-empty part.
///
/// The dash-range grammar is tried first so that parts like `5-10` are never
/// misread as subscripts; the subscript grammar covers everything else.
pub fn parse_part(part: &str) -> Result<Part> {
    if let Some(caps) = dash_range_re().captures(part) {
        let start = parse_line_number(&caps[1], part)?;
        let end = parse_line_number(&caps[2], part)?;
        if start == 0 || end == 0 {
            return Err(PickError::InvalidRange(part.to_string()));
        }
        return Ok(Part::DashRange { start, end });
    }

    if let Some(parsed) = parse_subscript(part)? {
        return Ok(parsed);
    }

    Err(PickError::InvalidExpression(part.to_string()))
}

fn parse_line_number(digits: &str, part: &str) -> Result<usize> {
    // Overflowing usize means the endpoint is beyond any real input; the
    // grammar matched, so report the part rather than a parse detail.
    digits
        .parse()
        .map_err(|_| PickError::InvalidExpression(part.to_string()))
}

/// Try the pythonic-subscript grammar: up to two `:` separators, each field
/// empty or an optionally-negative integer. Returns `Ok(None)` when the part
/// does not match the grammar at all.
fn parse_subscript(part: &str) -> Result<Option<Part>> {
    let fields: Vec<&str> = part.split(':').collect();
    if fields.len() > 3 {
        return Ok(None);
    }

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        match parse_subscript_field(field) {
            Some(value) => values.push(value),
            None => return Ok(None),
        }
    }

    let parsed = match values.as_slice() {
        [Some(index)] => Part::Index(*index),
        // A lone empty field is an empty part, which the caller skips before
        // parsing; reject it rather than guessing.
        [None] => return Ok(None),
        [start, stop] => Part::Slice {
            start: *start,
            stop: *stop,
            step: None,
        },
        [start, stop, step] => Part::Slice {
            start: *start,
            stop: *stop,
            step: *step,
        },
        _ => return Ok(None),
    };

    if let Part::Slice { step: Some(0), .. } = parsed {
        return Err(PickError::ZeroStep(part.to_string()));
    }

    Ok(Some(parsed))
}

/// Parse one slice field: empty (omitted) or an integer, with tabs/spaces
/// permitted around the number and between a `-` sign and its digits.
fn parse_subscript_field(field: &str) -> Option<Option<i64>> {
    let text = field.trim_matches([' ', '\t']);
    if text.is_empty() {
        return Some(None);
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start_matches([' ', '\t'])),
        None => (false, text),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(Some(if negative { -value } else { value }))
}

/// Resolve a full expression against `line_count` input lines.
///
/// Splits on commas, skips empty parts, and concatenates each part's
/// positions in order. Every returned index satisfies
/// `1 <= idx <= line_count`. Any failing part aborts the whole resolution,
/// so callers can compute the plan fully before writing anything.
pub fn resolve_expression(expression: &str, line_count: usize) -> Result<Vec<usize>> {
    let mut plan = Vec::new();

    for raw in expression.split(',') {
        let part = raw.trim();
        if part.is_empty() {
            continue;
        }
        let parsed = parse_part(part)?;
        resolve_part(&parsed, line_count, &mut plan)?;
    }

    Ok(plan)
}

fn resolve_part(part: &Part, line_count: usize, plan: &mut Vec<usize>) -> Result<()> {
    match *part {
        Part::DashRange { start, end } => {
            if start < end {
                // Ascending run: a start past the input yields nothing, an
                // end past the input truncates to the last line.
                let lo = start.min(line_count + 1);
                let hi = end.min(line_count);
                if lo <= hi {
                    plan.extend(lo..=hi);
                }
            } else {
                // Descending run (start >= end, a single line when equal).
                let hi = start.min(line_count);
                let lo = end.min(line_count + 1);
                if lo <= hi {
                    plan.extend((lo..=hi).rev());
                }
            }
        }
        Part::Index(index) => {
            let len = line_count as i64 + 1;
            let pos = if index < 0 { index + len } else { index };
            if !(0..len).contains(&pos) {
                return Err(PickError::IndexOutOfRange { index, line_count });
            }
            // Position 0 is the placeholder, addressable but never emitted.
            if pos != 0 {
                plan.push(pos as usize);
            }
        }
        Part::Slice { start, stop, step } => {
            let step = step.unwrap_or(1);
            let len = line_count as i64 + 1;
            let begin = match start {
                Some(value) => clamp_slice_bound(value, len, step),
                None if step < 0 => len - 1,
                None => 0,
            };
            let end = match stop {
                Some(value) => clamp_slice_bound(value, len, step),
                None if step < 0 => -1,
                None => len,
            };

            let mut pos = begin;
            while (step > 0 && pos < end) || (step < 0 && pos > end) {
                if pos != 0 {
                    plan.push(pos as usize);
                }
                pos += step;
            }
        }
    }

    Ok(())
}

/// Normalize one slice bound the way CPython's `slice.indices()` does:
/// negative values wrap from the end, then everything is clamped to the
/// valid iteration range for the step direction.
fn clamp_slice_bound(value: i64, len: i64, step: i64) -> i64 {
    let mut v = value;
    if v < 0 {
        v += len;
        if v < 0 {
            v = if step < 0 { -1 } else { 0 };
        }
    } else if v >= len {
        v = if step < 0 { len - 1 } else { len };
    }
    v
}
