// crates/fact-suite/src/error.rs
// ============================================================================
// Module: Fact Suite Errors
// Description: Errors raised while resolving parameters and loading config.
// Purpose: One error type for every fail-closed path in the suite crate.
// Dependencies: crate::params, thiserror
// ============================================================================

//! ## Overview
//! Every fallible operation in this crate returns [`ConfigError`]. Parameter
//! resolution reports conflicting or out-of-range overrides with the kind
//! that caused them; file loading keeps the coarse `Io`/`Parse`/`Invalid`
//! split used by configuration loaders.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::params::ParamKind;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Parameter resolution and configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// More than one override of the same kind was supplied.
    #[error("{count} {kind} overrides supplied; at most one is allowed")]
    ArityConflict {
        /// Kind supplied more than once.
        kind: ParamKind,
        /// Number of overrides of that kind.
        count: usize,
    },
    /// An override or configured value is out of range.
    #[error("invalid {kind}: {reason}")]
    InvalidValue {
        /// Kind whose value was rejected.
        kind: ParamKind,
        /// Why the value was rejected.
        reason: String,
    },
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an [`ConfigError::InvalidValue`] for `kind`.
    pub fn invalid_value(kind: ParamKind, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            reason: reason.into(),
        }
    }
}
