//! Record parser for `EastAsianWidth.txt` lines
//!
//! Pure parsing functions with no I/O. Each line is either blank, a comment,
//! or a `;`-separated record whose first field is `HEX` or `HEX..HEX` and
//! whose second field is a category tag.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{CodePointRange, DisplayWidth, Result, WideSet, WidthError};

/// Parse one line, returning the range if its category is wide
///
/// Comments and blank lines produce `Ok(None)`, as do records whose category
/// is not in `wide_set`. The range field is validated before the category is
/// looked at, so a malformed range on a narrow record still fails.
pub fn parse_line(
    line: &str,
    line_number: usize,
    wide_set: &WideSet<'_>,
) -> Result<Option<CodePointRange>> {
    let data = match line.find('#') {
        Some(comment_pos) => &line[..comment_pos],
        None => line,
    };
    let data = data.trim();
    if data.is_empty() {
        return Ok(None);
    }

    let mut fields = data.split(';').map(str::trim);
    let range_field = fields.next().unwrap_or_default();
    let range = parse_code_point_range(range_field, line_number)?;

    let tag = fields.next().ok_or(WidthError::MissingCategory { line: line_number })?;

    match wide_set.classify_tag(tag) {
        DisplayWidth::IsWide => Ok(Some(range)),
        DisplayWidth::IsNarrow => Ok(None),
    }
}

/// Parse every line of a data file in order, collecting the wide ranges
///
/// Line numbers in errors are 1-based. Parsing stops at the first error.
pub fn parse_records(text: &str, wide_set: &WideSet<'_>) -> Result<Vec<CodePointRange>> {
    let mut ranges = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(range) = parse_line(line, index + 1, wide_set)? {
            ranges.push(range);
        }
    }
    Ok(ranges)
}

/// Parse a code point field in the form `HEX` or `HEX..HEX`
pub fn parse_code_point_range(field: &str, line_number: usize) -> Result<CodePointRange> {
    let malformed = || WidthError::MalformedRange {
        line: line_number,
        text: field.to_string(),
    };

    let mut parts = field.split("..");
    let start = parts.next().and_then(parse_hex).ok_or_else(malformed)?;
    let end = match parts.next() {
        Some(end_str) => parse_hex(end_str).ok_or_else(malformed)?,
        None => start,
    };

    // "A..B..C" is not a range
    if parts.next().is_some() {
        return Err(malformed());
    }

    CodePointRange::new(start, end).ok_or_else(malformed)
}

/// Parse an unsigned hexadecimal value with overflow protection
///
/// Only ASCII hex digits are accepted: no sign, no `0x` prefix, no
/// surrounding whitespace.
fn parse_hex(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }

    let mut result: u32 = 0;
    for byte in s.bytes() {
        let digit = (byte as char).to_digit(16)?;
        result = result.checked_mul(16)?.checked_add(digit)?;
    }

    Some(result)
}
