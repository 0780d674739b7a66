// crates/fact-logic/src/lib.rs
// ============================================================================
// Module: Fact Logic Root
// Description: Public API surface for the fact algebra.
// Purpose: Wire together facts, deferred operands, formatting, and rendering.
// Dependencies: crate::{deferred, error, fact, format, i18n, leaf, prettifier, render, trace}
// ============================================================================

//! ## Overview
//! A fact is the outcome of one assertion paired with the messages that
//! explain it. Facts compose with short-circuiting `and`/`or` over deferred
//! right-hand operands, invert with `!`, and render into either a one-line
//! sentence or an indented tree depending on how many leaves they hold.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod deferred;
pub mod error;
pub mod fact;
pub mod format;
pub mod i18n;
pub mod leaf;
pub mod prettifier;
pub mod render;
pub mod trace;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use deferred::Deferred;
pub use error::FactError;
pub use error::FactResult;
pub use fact::Composite;
pub use fact::Fact;
pub use fact::Operator;
pub use format::format_message;
pub use format::format_positional;
pub use i18n::Locale;
pub use i18n::SUPPORTED_LOCALES;
pub use leaf::LeafMessages;
pub use leaf::LeafParams;
pub use leaf::MessageArgs;
pub use leaf::MessageRole;
pub use prettifier::DefaultPrettifier;
pub use prettifier::PlainPrettifier;
pub use prettifier::Prettifier;
pub use prettifier::SharedPrettifier;
pub use render::RenderMode;
pub use render::Renderer;
pub use render::TREE_MODE_COMPLEXITY;
pub use trace::CollectingTrace;
pub use trace::CompositionEvent;
pub use trace::FactTrace;
pub use trace::JsonLineTrace;
pub use trace::NoopTrace;
pub use trace::RenderEvent;
pub use trace::TraceEvent;

// ============================================================================
// SECTION: Convenience Constructors
// ============================================================================

/// Convenience functions for creating facts without spelling out payloads
pub mod convenience {
    use super::Deferred;
    use super::Fact;
    use super::LeafMessages;

    /// Creates a true leaf from two templates
    #[must_use]
    pub fn yes(raw_failure: &str, raw_negated_failure: &str) -> Fact {
        Fact::yes(LeafMessages::new(raw_failure, raw_negated_failure))
    }

    /// Creates a false leaf from two templates
    #[must_use]
    pub fn no(raw_failure: &str, raw_negated_failure: &str) -> Fact {
        Fact::no(LeafMessages::new(raw_failure, raw_negated_failure))
    }

    /// Inverts a fact
    #[must_use]
    pub fn not(fact: Fact) -> Fact {
        fact.negate()
    }

    /// Defers an infallible fact computation
    pub fn lazy<F>(compute: F) -> Deferred
    where
        F: FnOnce() -> Fact + Send + 'static,
    {
        Deferred::new(compute)
    }
}
