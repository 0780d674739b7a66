// crates/fact-logic/src/fact.rs
// ============================================================================
// Module: Fact Core Types
// Description: Boolean outcomes with renderable messages and their algebra.
// Purpose: Define `Fact`, its six variants, and the AND/OR/NOT combinators.
// Dependencies: crate::{deferred, error, leaf, render, trace}, serde
// ============================================================================

//! ## Overview
//! A [`Fact`] is the outcome of one assertion: a polarity (Yes/No) plus the
//! messages that explain it. Leaves carry their own templates; negations and
//! composites carry only their children, and every message they report is
//! derived from those children by the renderer.
//!
//! ## Invariants
//! - Composite polarity follows the operator's truth table and is fixed at
//!   construction; reading it never forces a deferred operand.
//! - Negation flips polarity and swaps message roles pairwise.
//! - Facts are immutable; clones share structure and memoization cells.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::deferred::Deferred;
use crate::error::FactResult;
use crate::leaf::LeafMessages;
use crate::leaf::MessageRole;
use crate::render::Renderer;
use crate::trace::CompositionEvent;
use crate::trace::FactTrace;
use crate::trace::NoopTrace;

// ============================================================================
// SECTION: Operator
// ============================================================================

/// Binary operator joining two facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl Operator {
    /// Returns the token shown between operands in tree renderings
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Returns true when `lhs` alone decides the result
    #[must_use]
    pub const fn short_circuits(self, lhs_is_yes: bool) -> bool {
        match self {
            Self::And => !lhs_is_yes,
            Self::Or => lhs_is_yes,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ============================================================================
// SECTION: Composite Node
// ============================================================================

/// Operator node shared by both composite variants
///
/// # Invariants
/// - Holds no message templates; text comes from `lhs` and `rhs`.
#[derive(Debug, Clone)]
pub struct Composite {
    /// Operator joining the operands
    operator: Operator,
    /// Evaluated left operand
    lhs: Arc<Fact>,
    /// Deferred right operand, forced only when its content is needed
    rhs: Deferred,
}

impl Composite {
    /// Returns the operator joining the operands
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the left operand
    #[must_use]
    pub fn lhs(&self) -> &Fact {
        &self.lhs
    }

    /// Returns the deferred right operand without forcing it
    #[must_use]
    pub const fn rhs(&self) -> &Deferred {
        &self.rhs
    }

    /// Forces and returns the right operand
    ///
    /// # Errors
    ///
    /// Returns the operand's memoized failure.
    pub fn force_rhs(&self) -> FactResult<&Fact> {
        self.rhs.force()
    }
}

// ============================================================================
// SECTION: Fact Definition
// ============================================================================

/// Outcome of an assertion with renderable messages
///
/// Every consumer matches all six variants explicitly; adding a variant is a
/// compile error at each of them.
#[derive(Debug, Clone)]
pub enum Fact {
    /// True leaf outcome
    LeafYes(Arc<LeafMessages>),
    /// False leaf outcome
    LeafNo(Arc<LeafMessages>),
    /// True AND/OR combination
    CompositeYes(Composite),
    /// False AND/OR combination
    CompositeNo(Composite),
    /// Negation of a false fact
    NegatedToYes(Arc<Fact>),
    /// Negation of a true fact
    NegatedToNo(Arc<Fact>),
}

// ============================================================================
// SECTION: Constructors
// ============================================================================

impl Fact {
    /// Creates a true leaf
    #[must_use]
    pub fn yes(messages: LeafMessages) -> Self {
        Self::LeafYes(Arc::new(messages))
    }

    /// Creates a false leaf
    #[must_use]
    pub fn no(messages: LeafMessages) -> Self {
        Self::LeafNo(Arc::new(messages))
    }

    /// Creates a leaf whose polarity is `is_yes`
    #[must_use]
    pub fn leaf(is_yes: bool, messages: LeafMessages) -> Self {
        if is_yes { Self::yes(messages) } else { Self::no(messages) }
    }
}

// ============================================================================
// SECTION: Polarity and Structure
// ============================================================================

impl Fact {
    /// Returns true for the three Yes variants
    #[must_use]
    pub const fn is_yes(&self) -> bool {
        match self {
            Self::LeafYes(_) | Self::CompositeYes(_) | Self::NegatedToYes(_) => true,
            Self::LeafNo(_) | Self::CompositeNo(_) | Self::NegatedToNo(_) => false,
        }
    }

    /// Returns true for the three No variants
    #[must_use]
    pub const fn is_no(&self) -> bool {
        !self.is_yes()
    }

    /// Returns the leaf count of this fact's tree
    ///
    /// Forces every deferred operand in the tree.
    ///
    /// # Errors
    ///
    /// Returns the failure of any deferred operand that cannot be forced.
    pub fn complexity(&self) -> FactResult<usize> {
        match self {
            Self::LeafYes(_) | Self::LeafNo(_) => Ok(1),
            Self::NegatedToYes(inner) | Self::NegatedToNo(inner) => inner.complexity(),
            Self::CompositeYes(node) | Self::CompositeNo(node) => {
                Ok(node.lhs().complexity()? + node.force_rhs()?.complexity()?)
            }
        }
    }

    /// Returns the leaf payload for leaf variants
    #[must_use]
    pub fn leaf_messages(&self) -> Option<&LeafMessages> {
        match self {
            Self::LeafYes(messages) | Self::LeafNo(messages) => Some(messages.as_ref()),
            Self::CompositeYes(_)
            | Self::CompositeNo(_)
            | Self::NegatedToYes(_)
            | Self::NegatedToNo(_) => None,
        }
    }

    /// Returns the operator node for composite variants
    #[must_use]
    pub const fn as_composite(&self) -> Option<&Composite> {
        match self {
            Self::CompositeYes(node) | Self::CompositeNo(node) => Some(node),
            Self::LeafYes(_) | Self::LeafNo(_) | Self::NegatedToYes(_) | Self::NegatedToNo(_) => {
                None
            }
        }
    }

    /// Returns the wrapped fact for negated variants
    #[must_use]
    pub fn negated_inner(&self) -> Option<&Self> {
        match self {
            Self::NegatedToYes(inner) | Self::NegatedToNo(inner) => Some(inner.as_ref()),
            Self::LeafYes(_) | Self::LeafNo(_) | Self::CompositeYes(_) | Self::CompositeNo(_) => {
                None
            }
        }
    }
}

// ============================================================================
// SECTION: Composition
// ============================================================================

impl Fact {
    /// Combines this fact with a deferred operand using AND
    ///
    /// A No left operand decides the result without forcing `rhs`.
    ///
    /// # Errors
    ///
    /// Returns the operand's failure when `rhs` had to be forced.
    pub fn and(self, rhs: impl Into<Deferred>) -> FactResult<Self> {
        self.compose(Operator::And, rhs.into(), &mut NoopTrace)
    }

    /// Combines this fact with a deferred operand using OR
    ///
    /// A Yes left operand decides the result without forcing `rhs`.
    ///
    /// # Errors
    ///
    /// Returns the operand's failure when `rhs` had to be forced.
    pub fn or(self, rhs: impl Into<Deferred>) -> FactResult<Self> {
        self.compose(Operator::Or, rhs.into(), &mut NoopTrace)
    }

    /// AND with a trace hook observing the composition
    ///
    /// # Errors
    ///
    /// Returns the operand's failure when `rhs` had to be forced.
    pub fn and_with_trace<T>(self, rhs: impl Into<Deferred>, trace: &mut T) -> FactResult<Self>
    where
        T: FactTrace,
    {
        self.compose(Operator::And, rhs.into(), trace)
    }

    /// OR with a trace hook observing the composition
    ///
    /// # Errors
    ///
    /// Returns the operand's failure when `rhs` had to be forced.
    pub fn or_with_trace<T>(self, rhs: impl Into<Deferred>, trace: &mut T) -> FactResult<Self>
    where
        T: FactTrace,
    {
        self.compose(Operator::Or, rhs.into(), trace)
    }

    /// Inverts polarity; never forces anything
    #[must_use]
    pub fn negate(self) -> Self {
        if self.is_yes() {
            Self::NegatedToNo(Arc::new(self))
        } else {
            Self::NegatedToYes(Arc::new(self))
        }
    }

    /// Builds the composite node, forcing `rhs` only when `self` does not decide
    fn compose<T>(self, operator: Operator, rhs: Deferred, trace: &mut T) -> FactResult<Self>
    where
        T: FactTrace,
    {
        let lhs_yes = self.is_yes();
        let rhs_required = !operator.short_circuits(lhs_yes);
        let is_yes = if rhs_required { rhs.force()?.is_yes() } else { lhs_yes };

        trace.on_composed(&CompositionEvent {
            operator,
            lhs_yes,
            rhs_required,
            is_yes,
        });

        let node = Composite {
            operator,
            lhs: Arc::new(self),
            rhs,
        };
        Ok(if is_yes { Self::CompositeYes(node) } else { Self::CompositeNo(node) })
    }
}

impl std::ops::Not for Fact {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

// ============================================================================
// SECTION: Messages
// ============================================================================

impl Fact {
    /// Formats the message for `role` with the default renderer
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn message(&self, role: MessageRole) -> FactResult<String> {
        Renderer::default().message(self, role)
    }

    /// Text explaining why this fact does not hold
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn failure_message(&self) -> FactResult<String> {
        self.message(MessageRole::Failure)
    }

    /// Text explaining why the negation of this fact does not hold
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn negated_failure_message(&self) -> FactResult<String> {
        self.message(MessageRole::NegatedFailure)
    }

    /// Mid-sentence variant of [`Fact::failure_message`]
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn mid_sentence_failure_message(&self) -> FactResult<String> {
        self.message(MessageRole::MidSentenceFailure)
    }

    /// Mid-sentence variant of [`Fact::negated_failure_message`]
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn mid_sentence_negated_failure_message(&self) -> FactResult<String> {
        self.message(MessageRole::MidSentenceNegatedFailure)
    }

    /// Renders the whole fact with the default renderer
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn render(&self) -> FactResult<String> {
        Renderer::default().render(self)
    }
}
