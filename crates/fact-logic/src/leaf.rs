// crates/fact-logic/src/leaf.rs
// ============================================================================
// Module: Leaf Messages
// Description: Raw templates, arguments, and prettifier carried by leaf facts.
// Purpose: Provide the named construction modes for leaf message payloads.
// Dependencies: crate::{error, format, prettifier}, serde_json, smallvec
// ============================================================================

//! ## Overview
//! A leaf fact owns four raw templates (failure, negated failure, and their
//! mid-sentence variants), one argument list per template, and the prettifier
//! that renders those arguments. Callers rarely need all eight pieces, so the
//! constructors here fill the rest in from what they were given.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use smallvec::SmallVec;

use crate::error::FactResult;
use crate::format::format_message;
use crate::prettifier::Prettifier;
use crate::prettifier::SharedPrettifier;
use crate::prettifier::default_prettifier;

// ============================================================================
// SECTION: Message Roles
// ============================================================================

/// The four message roles every fact answers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    /// Text explaining why the fact does not hold
    Failure,
    /// Text explaining why the negation of the fact does not hold
    NegatedFailure,
    /// [`MessageRole::Failure`] phrased to continue a sentence
    MidSentenceFailure,
    /// [`MessageRole::NegatedFailure`] phrased to continue a sentence
    MidSentenceNegatedFailure,
}

impl MessageRole {
    /// All roles in declaration order
    pub const ALL: [Self; 4] = [
        Self::Failure,
        Self::NegatedFailure,
        Self::MidSentenceFailure,
        Self::MidSentenceNegatedFailure,
    ];

    /// Returns the role a negated fact reads from the fact it wraps
    #[must_use]
    pub const fn negated(self) -> Self {
        match self {
            Self::Failure => Self::NegatedFailure,
            Self::NegatedFailure => Self::Failure,
            Self::MidSentenceFailure => Self::MidSentenceNegatedFailure,
            Self::MidSentenceNegatedFailure => Self::MidSentenceFailure,
        }
    }

    /// Returns the mid-sentence counterpart of this role
    #[must_use]
    pub const fn mid_sentence(self) -> Self {
        match self {
            Self::Failure | Self::MidSentenceFailure => Self::MidSentenceFailure,
            Self::NegatedFailure | Self::MidSentenceNegatedFailure => {
                Self::MidSentenceNegatedFailure
            }
        }
    }

    /// Returns true for the two mid-sentence roles
    #[must_use]
    pub const fn is_mid_sentence(self) -> bool {
        matches!(self, Self::MidSentenceFailure | Self::MidSentenceNegatedFailure)
    }

    /// Returns true for the two negated-failure roles
    #[must_use]
    pub const fn is_negated(self) -> bool {
        matches!(self, Self::NegatedFailure | Self::MidSentenceNegatedFailure)
    }
}

// ============================================================================
// SECTION: Leaf Payload
// ============================================================================

/// Argument list for a single message template
pub type MessageArgs = SmallVec<[Value; 2]>;

/// Every template and argument list of a leaf, specified independently
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeafParams {
    /// Template describing why the fact does not hold
    pub raw_failure_message: String,
    /// Template describing why the negated fact does not hold
    pub raw_negated_failure_message: String,
    /// Mid-sentence variant of the failure template
    pub raw_mid_sentence_failure_message: String,
    /// Mid-sentence variant of the negated failure template
    pub raw_mid_sentence_negated_failure_message: String,
    /// Arguments for the failure template
    pub failure_message_args: Vec<Value>,
    /// Arguments for the negated failure template
    pub negated_failure_message_args: Vec<Value>,
    /// Arguments for the mid-sentence failure template
    pub mid_sentence_failure_message_args: Vec<Value>,
    /// Arguments for the mid-sentence negated failure template
    pub mid_sentence_negated_failure_message_args: Vec<Value>,
}

/// Raw templates, arguments, and prettifier owned by a leaf fact
///
/// # Invariants
/// - Immutable once built; the builder-style helpers consume and return `Self`.
#[derive(Clone)]
pub struct LeafMessages {
    /// Template describing why the fact does not hold
    raw_failure_message: String,
    /// Template describing why the negated fact does not hold
    raw_negated_failure_message: String,
    /// Mid-sentence variant of the failure template
    raw_mid_sentence_failure_message: String,
    /// Mid-sentence variant of the negated failure template
    raw_mid_sentence_negated_failure_message: String,
    /// Arguments for the failure template
    failure_message_args: MessageArgs,
    /// Arguments for the negated failure template
    negated_failure_message_args: MessageArgs,
    /// Arguments for the mid-sentence failure template
    mid_sentence_failure_message_args: MessageArgs,
    /// Arguments for the mid-sentence negated failure template
    mid_sentence_negated_failure_message_args: MessageArgs,
    /// Renders argument values for display
    prettifier: SharedPrettifier,
}

// ============================================================================
// SECTION: Construction Modes
// ============================================================================

impl LeafMessages {
    /// Two templates, no arguments; mid-sentence variants equal the plain ones
    pub fn new(raw_failure: impl Into<String>, raw_negated_failure: impl Into<String>) -> Self {
        let failure = raw_failure.into();
        let negated = raw_negated_failure.into();
        Self::with_mid_sentence(failure.clone(), negated.clone(), failure, negated)
    }

    /// Four explicit templates, no arguments
    pub fn with_mid_sentence(
        raw_failure: impl Into<String>,
        raw_negated_failure: impl Into<String>,
        raw_mid_sentence_failure: impl Into<String>,
        raw_mid_sentence_negated_failure: impl Into<String>,
    ) -> Self {
        Self {
            raw_failure_message: raw_failure.into(),
            raw_negated_failure_message: raw_negated_failure.into(),
            raw_mid_sentence_failure_message: raw_mid_sentence_failure.into(),
            raw_mid_sentence_negated_failure_message: raw_mid_sentence_negated_failure.into(),
            failure_message_args: MessageArgs::new(),
            negated_failure_message_args: MessageArgs::new(),
            mid_sentence_failure_message_args: MessageArgs::new(),
            mid_sentence_negated_failure_message_args: MessageArgs::new(),
            prettifier: default_prettifier(),
        }
    }

    /// Two templates sharing one argument list across all four roles
    pub fn with_args(
        raw_failure: impl Into<String>,
        raw_negated_failure: impl Into<String>,
        args: impl IntoIterator<Item = Value>,
    ) -> Self {
        let args: MessageArgs = args.into_iter().collect();
        let mut messages = Self::new(raw_failure, raw_negated_failure);
        messages.failure_message_args = args.clone();
        messages.negated_failure_message_args = args.clone();
        messages.mid_sentence_failure_message_args = args.clone();
        messages.mid_sentence_negated_failure_message_args = args;
        messages
    }

    /// Two templates with separate failure and negated-failure arguments
    ///
    /// Mid-sentence argument lists mirror the plain ones.
    pub fn with_split_args(
        raw_failure: impl Into<String>,
        raw_negated_failure: impl Into<String>,
        failure_args: impl IntoIterator<Item = Value>,
        negated_failure_args: impl IntoIterator<Item = Value>,
    ) -> Self {
        let failure_args: MessageArgs = failure_args.into_iter().collect();
        let negated_args: MessageArgs = negated_failure_args.into_iter().collect();
        let mut messages = Self::new(raw_failure, raw_negated_failure);
        messages.mid_sentence_failure_message_args = failure_args.clone();
        messages.mid_sentence_negated_failure_message_args = negated_args.clone();
        messages.failure_message_args = failure_args;
        messages.negated_failure_message_args = negated_args;
        messages
    }

    /// Full form: four templates and four argument lists
    #[must_use]
    pub fn from_params(params: LeafParams) -> Self {
        Self {
            raw_failure_message: params.raw_failure_message,
            raw_negated_failure_message: params.raw_negated_failure_message,
            raw_mid_sentence_failure_message: params.raw_mid_sentence_failure_message,
            raw_mid_sentence_negated_failure_message: params
                .raw_mid_sentence_negated_failure_message,
            failure_message_args: params.failure_message_args.into(),
            negated_failure_message_args: params.negated_failure_message_args.into(),
            mid_sentence_failure_message_args: params.mid_sentence_failure_message_args.into(),
            mid_sentence_negated_failure_message_args: params
                .mid_sentence_negated_failure_message_args
                .into(),
            prettifier: default_prettifier(),
        }
    }

    /// Replaces the prettifier used for every argument list
    #[must_use]
    pub fn with_prettifier<P>(mut self, prettifier: P) -> Self
    where
        P: Prettifier + 'static,
    {
        self.prettifier = Arc::new(prettifier);
        self
    }

    /// Replaces the prettifier with an existing shared handle
    #[must_use]
    pub fn with_shared_prettifier(mut self, prettifier: SharedPrettifier) -> Self {
        self.prettifier = prettifier;
        self
    }
}

// ============================================================================
// SECTION: Accessors
// ============================================================================

impl LeafMessages {
    /// Returns the raw template for a role
    #[must_use]
    pub fn raw(&self, role: MessageRole) -> &str {
        match role {
            MessageRole::Failure => &self.raw_failure_message,
            MessageRole::NegatedFailure => &self.raw_negated_failure_message,
            MessageRole::MidSentenceFailure => &self.raw_mid_sentence_failure_message,
            MessageRole::MidSentenceNegatedFailure => {
                &self.raw_mid_sentence_negated_failure_message
            }
        }
    }

    /// Returns the argument list for a role
    #[must_use]
    pub fn args(&self, role: MessageRole) -> &[Value] {
        match role {
            MessageRole::Failure => &self.failure_message_args,
            MessageRole::NegatedFailure => &self.negated_failure_message_args,
            MessageRole::MidSentenceFailure => &self.mid_sentence_failure_message_args,
            MessageRole::MidSentenceNegatedFailure => {
                &self.mid_sentence_negated_failure_message_args
            }
        }
    }

    /// Returns the prettifier applied to arguments
    #[must_use]
    pub fn prettifier(&self) -> &dyn Prettifier {
        self.prettifier.as_ref()
    }

    /// Formats the message for a role
    ///
    /// # Errors
    ///
    /// Returns [`crate::FactError::PlaceholderOutOfRange`] when the template
    /// references a missing argument.
    pub fn format(&self, role: MessageRole) -> FactResult<String> {
        format_message(self.raw(role), self.args(role), self.prettifier())
    }
}

impl fmt::Debug for LeafMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafMessages")
            .field("raw_failure_message", &self.raw_failure_message)
            .field("raw_negated_failure_message", &self.raw_negated_failure_message)
            .field("raw_mid_sentence_failure_message", &self.raw_mid_sentence_failure_message)
            .field(
                "raw_mid_sentence_negated_failure_message",
                &self.raw_mid_sentence_negated_failure_message,
            )
            .field("failure_message_args", &self.failure_message_args)
            .field("negated_failure_message_args", &self.negated_failure_message_args)
            .field("mid_sentence_failure_message_args", &self.mid_sentence_failure_message_args)
            .field(
                "mid_sentence_negated_failure_message_args",
                &self.mid_sentence_negated_failure_message_args,
            )
            .finish_non_exhaustive()
    }
}
