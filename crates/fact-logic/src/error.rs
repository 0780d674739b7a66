// crates/fact-logic/src/error.rs
// ============================================================================
// Module: Fact Error Definitions
// Description: Structured diagnostics for fact formatting and composition.
// Purpose: Surface formatting and deferred-operand failures to callers.
// Dependencies: serde::{Deserialize, Serialize}, thiserror
// ============================================================================

//! ## Overview
//! Centralizes the failures the fact algebra can report. Formatting errors are
//! raised while a template is rendered; operand errors are raised by whichever
//! call first forces a deferred operand and are memoized with the operand, so
//! every later observer sees the same failure.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors that can occur while composing or rendering facts
///
/// # Invariants
/// - Variants are cloneable so a memoized operand failure can be handed to
///   every caller that forces the same operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum FactError {
    // ============================================================================
    // SECTION: Formatting Errors
    // ============================================================================
    /// A template referenced a positional placeholder with no matching argument
    #[error("placeholder {{{index}}} is out of range for {available} argument(s) in {template:?}")]
    PlaceholderOutOfRange {
        /// Placeholder index found in the template
        index: usize,
        /// Number of arguments supplied
        available: usize,
        /// Template being formatted
        template: String,
    },

    // ============================================================================
    // SECTION: Operand Errors
    // ============================================================================
    /// The computation behind a deferred operand failed
    #[error("deferred operand failed: {0}")]
    Operand(String),

    /// The computation behind a deferred operand panicked and left no value
    #[error("deferred operand is unavailable: its computation did not complete")]
    OperandUnavailable,
}

impl FactError {
    /// Creates an operand failure with a custom message
    pub fn operand(message: impl Into<String>) -> Self {
        Self::Operand(message.into())
    }

    /// Returns true when the error came from forcing a deferred operand
    #[must_use]
    pub const fn is_operand_failure(&self) -> bool {
        matches!(self, Self::Operand(_) | Self::OperandUnavailable)
    }
}

// ============================================================================
// SECTION: Conversion Helpers
// ============================================================================

impl From<String> for FactError {
    fn from(message: String) -> Self {
        Self::Operand(message)
    }
}

impl From<&str> for FactError {
    fn from(message: &str) -> Self {
        Self::Operand(message.to_string())
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for fact operations
pub type FactResult<T = ()> = Result<T, FactError>;
