// crates/fact-logic/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and fact fixtures for integration tests.
// ============================================================================
//! ## Overview
//! Shared helpers for Result-based assertions plus small fact fixtures:
//! two-template leaves and deferred operands that count or fail when forced.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]
#![allow(dead_code, reason = "Each test binary uses a different subset of the shared helpers.")]

use std::error::Error;
use std::fmt;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use fact_logic::Deferred;
use fact_logic::Fact;
use fact_logic::FactError;
use fact_logic::LeafMessages;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across fact integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Returns an error describing both values when they differ.
///
/// # Errors
/// Returns a `TestError` when `actual != expected`.
pub fn ensure_eq<T>(actual: &T, expected: &T, context: &str) -> TestResult
where
    T: PartialEq + Debug + ?Sized,
{
    ensure(actual == expected, format!("{context}: expected {expected:?}, got {actual:?}"))
}

// ========================================================================
// Fact Fixtures
// ========================================================================

/// True leaf whose statement is `"{name} held"`.
pub fn yes(name: &str) -> Fact {
    Fact::yes(LeafMessages::new(format!("{name} did not hold"), format!("{name} held")))
}

/// False leaf whose statement is `"{name} did not hold"`.
pub fn no(name: &str) -> Fact {
    Fact::no(LeafMessages::new(format!("{name} did not hold"), format!("{name} held")))
}

/// Deferred operand that increments `counter` each time its computation runs.
pub fn counted(fact: Fact, counter: &Arc<AtomicUsize>) -> Deferred {
    let counter = Arc::clone(counter);
    Deferred::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        fact
    })
}

/// Deferred operand whose computation always fails.
pub fn exploding(reason: &str) -> Deferred {
    let reason = reason.to_string();
    Deferred::try_new(move || Err(FactError::operand(reason)))
}

/// Fresh shared counter for [`counted`].
pub fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

/// Reads a counter created by [`counter`].
pub fn count(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
