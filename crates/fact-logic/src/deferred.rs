// crates/fact-logic/src/deferred.rs
// ============================================================================
// Module: Deferred Operands
// Description: Call-by-need right-hand operands for fact composition.
// Purpose: Evaluate a costly operand at most once, only when its content is needed.
// Dependencies: crate::{error, fact}, std::sync
// ============================================================================

//! ## Overview
//! The right-hand side of `and`/`or` is a suspended computation. Composition
//! forces it only when the left-hand polarity does not already decide the
//! outcome; rendering forces it when it needs the operand's text.
//!
//! ## Invariants
//! - The computation runs at most once across every clone of a [`Deferred`],
//!   including concurrent forcing from several threads.
//! - The outcome, success or failure, is memoized; later forces observe the
//!   same result without re-running anything.
//! - A computation that panics leaves the cell empty and later forces report
//!   [`FactError::OperandUnavailable`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

use crate::error::FactError;
use crate::error::FactResult;
use crate::fact::Fact;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One-shot computation producing the operand
type Thunk = Box<dyn FnOnce() -> FactResult<Fact> + Send>;

/// Shared memoization cell behind every clone of a [`Deferred`]
struct DeferredCell {
    /// Memoized outcome, written exactly once
    value: OnceLock<FactResult<Fact>>,
    /// Pending computation, taken by the first forcer
    thunk: Mutex<Option<Thunk>>,
}

/// Lazily evaluated, memoized fact operand
///
/// Cloning shares the underlying cell, so forcing any clone forces them all.
#[derive(Clone)]
pub struct Deferred {
    /// Shared cell holding the computation and its memoized outcome
    cell: Arc<DeferredCell>,
}

// ============================================================================
// SECTION: Construction
// ============================================================================

impl Deferred {
    /// Defers an infallible computation
    pub fn new<F>(compute: F) -> Self
    where
        F: FnOnce() -> Fact + Send + 'static,
    {
        Self::try_new(move || Ok(compute()))
    }

    /// Defers a computation that may fail
    ///
    /// The error is reported by whichever call forces the operand first and
    /// memoized for every later caller.
    pub fn try_new<F>(compute: F) -> Self
    where
        F: FnOnce() -> FactResult<Fact> + Send + 'static,
    {
        Self {
            cell: Arc::new(DeferredCell {
                value: OnceLock::new(),
                thunk: Mutex::new(Some(Box::new(compute))),
            }),
        }
    }

    /// Wraps an already evaluated fact
    #[must_use]
    pub fn ready(fact: Fact) -> Self {
        Self {
            cell: Arc::new(DeferredCell {
                value: OnceLock::from(Ok(fact)),
                thunk: Mutex::new(None),
            }),
        }
    }
}

impl From<Fact> for Deferred {
    fn from(fact: Fact) -> Self {
        Self::ready(fact)
    }
}

// ============================================================================
// SECTION: Forcing
// ============================================================================

impl Deferred {
    /// Forces the operand, running its computation if nobody has yet
    ///
    /// Concurrent callers block until the single evaluation completes.
    ///
    /// # Errors
    ///
    /// Returns the memoized [`FactError`] when the computation failed, or
    /// [`FactError::OperandUnavailable`] when it panicked.
    pub fn force(&self) -> FactResult<&Fact> {
        let outcome = self.cell.value.get_or_init(|| {
            let thunk = match self.cell.thunk.lock() {
                Ok(mut guard) => guard.take(),
                Err(poisoned) => poisoned.into_inner().take(),
            };
            thunk.map_or(Err(FactError::OperandUnavailable), |compute| compute())
        });
        outcome.as_ref().map_err(FactError::clone)
    }

    /// Returns true once the operand has been evaluated (successfully or not)
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.cell.value.get().is_some()
    }

    /// Returns the memoized outcome without forcing
    #[must_use]
    pub fn peek(&self) -> Option<&FactResult<Fact>> {
        self.cell.value.get()
    }

    /// Returns true when both handles share the same memoization cell
    #[must_use]
    pub fn shares_cell_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

// ============================================================================
// SECTION: Debug
// ============================================================================

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            None => f.write_str("Deferred(<pending>)"),
            Some(Ok(fact)) => f.debug_tuple("Deferred").field(fact).finish(),
            Some(Err(err)) => f.debug_tuple("Deferred").field(err).finish(),
        }
    }
}
