// crates/fact-logic/src/format.rs
// ============================================================================
// Module: Message Formatter
// Description: Positional `{n}` substitution over raw message templates.
// Purpose: Render raw templates plus prettified arguments into final text.
// Dependencies: crate::{error, prettifier}, serde_json
// ============================================================================

//! ## Overview
//! Templates use zero-based positional placeholders (`{0}`, `{1}`, ...). Any
//! other text, including braces that do not enclose a decimal index, is copied
//! verbatim. When no arguments are supplied the template is returned untouched,
//! even if it contains placeholder-like text.
//!
//! ## Invariants
//! - A placeholder index at or beyond the argument count is an error; the
//!   formatter never truncates or silently skips it.
//! - Arguments are prettified once each, before substitution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::error::FactError;
use crate::error::FactResult;
use crate::prettifier::Prettifier;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats a raw template with prettified argument values
///
/// # Errors
///
/// Returns [`FactError::PlaceholderOutOfRange`] when the template references an
/// index beyond `args`.
pub fn format_message(
    template: &str,
    args: &[Value],
    prettifier: &dyn Prettifier,
) -> FactResult<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }
    let rendered: Vec<String> = args.iter().map(|arg| prettifier.prettify(arg)).collect();
    format_positional(template, &rendered)
}

/// Substitutes already-rendered strings into a positional template
///
/// # Errors
///
/// Returns [`FactError::PlaceholderOutOfRange`] when the template references an
/// index beyond `args`.
pub fn format_positional<S: AsRef<str>>(template: &str, args: &[S]) -> FactResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[.. open]);
        let candidate = &rest[open + 1 ..];
        match placeholder_index(candidate) {
            Some((index, consumed)) => {
                let value = args.get(index).ok_or_else(|| FactError::PlaceholderOutOfRange {
                    index,
                    available: args.len(),
                    template: template.to_string(),
                })?;
                out.push_str(value.as_ref());
                rest = &candidate[consumed ..];
            }
            None => {
                out.push('{');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Parses `digits}` at the start of `text`, returning the index and bytes consumed
///
/// An index too large for `usize` saturates to `usize::MAX` so it is reported
/// as out of range instead of being copied through.
fn placeholder_index(text: &str) -> Option<(usize, usize)> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || text.as_bytes().get(digits) != Some(&b'}') {
        return None;
    }
    let index = text[.. digits].parse::<usize>().unwrap_or(usize::MAX);
    Some((index, digits + 1))
}

// ============================================================================
// SECTION: Unit Tests
// ============================================================================
