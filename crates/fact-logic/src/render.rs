// crates/fact-logic/src/render.rs
// ============================================================================
// Module: Fact Renderer
// Description: Converts fact trees into diagnostic strings.
// Purpose: Own every piece of text derived from composite and negated facts.
// Dependencies: crate::{error, fact, i18n, leaf, trace}, serde
// ============================================================================

//! ## Overview
//! Rendering picks one of two modes per top-level call. Small trees (fewer
//! than three leaves) read as one sentence, e.g. `Yes(a was 1, and b was 2)`.
//! Larger trees render as an indented outline with one leaf per line and the
//! operator token between siblings.
//!
//! The renderer is also the only place that derives messages for composite
//! and negated facts. A composite's messages are built from its children's
//! messages joined by localized connectors; a negation reads the wrapped
//! fact's messages through the role swap, which is equivalent to rewriting
//! `!(a && b)` as `!a || !b` before rendering.
//!
//! ## Invariants
//! - Leaves always render with simple-mode text, even inside tree mode.
//! - Tree indentation is two spaces per level, applied to every line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::error::FactResult;
use crate::fact::Composite;
use crate::fact::Fact;
use crate::fact::Operator;
use crate::i18n::Locale;
use crate::i18n::comma_and;
use crate::i18n::comma_but;
use crate::leaf::MessageRole;
use crate::trace::FactTrace;
use crate::trace::NoopTrace;
use crate::trace::RenderEvent;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Smallest complexity rendered in tree mode.
pub const TREE_MODE_COMPLEXITY: usize = 3;
/// Indentation added per tree level.
const INDENT: &str = "  ";
/// Label for true outcomes.
const YES_LABEL: &str = "Yes";
/// Label for false outcomes.
const NO_LABEL: &str = "No";

// ============================================================================
// SECTION: Render Mode
// ============================================================================

/// Rendering mode selected from a fact's complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Single sentence
    Simple,
    /// Indented multi-line outline
    Tree,
}

impl RenderMode {
    /// Returns the mode used for a tree of the given complexity
    #[must_use]
    pub const fn for_complexity(complexity: usize) -> Self {
        if complexity < TREE_MODE_COMPLEXITY { Self::Simple } else { Self::Tree }
    }
}

// ============================================================================
// SECTION: Renderer
// ============================================================================

/// Renders facts and derives their messages for one locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    /// Locale used for connectors
    locale: Locale,
}

impl Renderer {
    /// Creates a renderer for `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
        }
    }

    /// Returns the renderer's locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the mode `render` would use for `fact`
    ///
    /// # Errors
    ///
    /// Returns the failure of any deferred operand forced to count leaves.
    pub fn mode_for(&self, fact: &Fact) -> FactResult<RenderMode> {
        Ok(RenderMode::for_complexity(fact.complexity()?))
    }

    /// Renders `fact` in the mode its complexity selects
    ///
    /// Selecting the mode counts every leaf, so every deferred operand is
    /// forced even when the chosen sentence would only read the left operand.
    /// A `No && <failing>` composite therefore returns the operand's error here.
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn render(&self, fact: &Fact) -> FactResult<String> {
        self.render_with_trace(fact, &mut NoopTrace)
    }

    /// Renders `fact` and reports the outcome to `trace`
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn render_with_trace<T>(&self, fact: &Fact, trace: &mut T) -> FactResult<String>
    where
        T: FactTrace,
    {
        let complexity = fact.complexity()?;
        let mode = RenderMode::for_complexity(complexity);
        let rendered = match mode {
            RenderMode::Simple => self.simple(fact)?,
            RenderMode::Tree => self.tree(fact)?,
        };
        trace.on_rendered(&RenderEvent {
            complexity,
            mode,
            is_yes: fact.is_yes(),
            output_len: rendered.len(),
        });
        Ok(rendered)
    }
}

// ============================================================================
// SECTION: Messages
// ============================================================================

impl Renderer {
    /// Formats the message `fact` reports for `role`
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn message(&self, fact: &Fact, role: MessageRole) -> FactResult<String> {
        match fact {
            Fact::LeafYes(messages) | Fact::LeafNo(messages) => messages.format(role),
            Fact::NegatedToYes(inner) | Fact::NegatedToNo(inner) => {
                self.message(inner, role.negated())
            }
            Fact::CompositeYes(node) | Fact::CompositeNo(node) => {
                self.composite_message(node, role)
            }
        }
    }

    /// Returns the message describing what actually holds
    ///
    /// That is the failure message of a No fact and the negated failure
    /// message of a Yes fact.
    ///
    /// # Errors
    ///
    /// Returns formatting failures and the failures of forced operands.
    pub fn statement(&self, fact: &Fact, mid_sentence: bool) -> FactResult<String> {
        let role = match (fact.is_yes(), mid_sentence) {
            (true, false) => MessageRole::NegatedFailure,
            (true, true) => MessageRole::MidSentenceNegatedFailure,
            (false, false) => MessageRole::Failure,
            (false, true) => MessageRole::MidSentenceFailure,
        };
        self.message(fact, role)
    }

    /// Derives a composite's message for `role` from its operands
    fn composite_message(&self, node: &Composite, role: MessageRole) -> FactResult<String> {
        let lhs = node.lhs();
        let (failure, negated) = if role.is_mid_sentence() {
            (MessageRole::MidSentenceFailure, MessageRole::MidSentenceNegatedFailure)
        } else {
            (MessageRole::Failure, MessageRole::NegatedFailure)
        };

        match (node.operator(), role.is_negated()) {
            (Operator::And, false) if lhs.is_no() => self.message(lhs, failure),
            (Operator::And, false) => comma_but(
                self.locale,
                &self.message(lhs, negated)?,
                &self.message(node.force_rhs()?, MessageRole::MidSentenceFailure)?,
            ),
            (Operator::And, true) => comma_and(
                self.locale,
                &self.message(lhs, negated)?,
                &self.message(node.force_rhs()?, MessageRole::MidSentenceNegatedFailure)?,
            ),
            (Operator::Or, false) => comma_and(
                self.locale,
                &self.message(lhs, failure)?,
                &self.message(node.force_rhs()?, MessageRole::MidSentenceFailure)?,
            ),
            (Operator::Or, true) if lhs.is_yes() => self.message(lhs, negated),
            (Operator::Or, true) => comma_but(
                self.locale,
                &self.message(lhs, failure)?,
                &self.message(node.force_rhs()?, MessageRole::MidSentenceNegatedFailure)?,
            ),
        }
    }
}

// ============================================================================
// SECTION: Simple Mode
// ============================================================================

impl Renderer {
    /// Renders a fact as one sentence
    fn simple(&self, fact: &Fact) -> FactResult<String> {
        match fact {
            Fact::LeafYes(_) | Fact::LeafNo(_) => self.statement(fact, false),
            Fact::NegatedToYes(inner) | Fact::NegatedToNo(inner) => match inner.as_ref() {
                Fact::LeafYes(messages) | Fact::LeafNo(messages) => {
                    messages.format(MessageRole::NegatedFailure)
                }
                Fact::NegatedToYes(wrapped) | Fact::NegatedToNo(wrapped) => self.simple(wrapped),
                Fact::CompositeYes(_) | Fact::CompositeNo(_) => {
                    Ok(labelled(fact.is_yes(), &self.statement(fact, false)?))
                }
            },
            Fact::CompositeYes(node) | Fact::CompositeNo(node) => {
                Ok(labelled(fact.is_yes(), &self.composite_sentence(fact.is_yes(), node)?))
            }
        }
    }

    /// Builds the sentence inside a composite's `Yes(...)`/`No(...)` label
    fn composite_sentence(&self, is_yes: bool, node: &Composite) -> FactResult<String> {
        let lhs = node.lhs();
        match (is_yes, node.operator()) {
            (true, Operator::Or) if lhs.is_yes() => self.simple(lhs),
            (false, Operator::And) if lhs.is_no() => self.simple(lhs),
            (true, Operator::And) | (false, Operator::Or) => {
                comma_and(self.locale, &self.simple(lhs)?, &self.simple(node.force_rhs()?)?)
            }
            (true, Operator::Or) | (false, Operator::And) => {
                comma_but(self.locale, &self.simple(lhs)?, &self.simple(node.force_rhs()?)?)
            }
        }
    }
}

// ============================================================================
// SECTION: Tree Mode
// ============================================================================

impl Renderer {
    /// Renders a fact as an indented outline
    fn tree(&self, fact: &Fact) -> FactResult<String> {
        match fact {
            Fact::LeafYes(_) | Fact::LeafNo(_) => {
                Ok(labelled(fact.is_yes(), &self.statement(fact, false)?))
            }
            Fact::NegatedToYes(inner) | Fact::NegatedToNo(inner) => {
                Ok(format!("!{}", self.tree(inner)?))
            }
            Fact::CompositeYes(node) | Fact::CompositeNo(node) => {
                let lhs = indent(&self.tree(node.lhs())?);
                let rhs = indent(&self.tree(node.force_rhs()?)?);
                Ok(format!(
                    "{}(\n{lhs}\n{INDENT}{}\n{rhs}\n)",
                    label(fact.is_yes()),
                    node.operator().token()
                ))
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the polarity label
const fn label(is_yes: bool) -> &'static str {
    if is_yes { YES_LABEL } else { NO_LABEL }
}

/// Wraps `body` in the polarity label
fn labelled(is_yes: bool, body: &str) -> String {
    format!("{}({body})", label(is_yes))
}

/// Indents every line of `text` by one level
fn indent(text: &str) -> String {
    text.split('\n').map(|line| format!("{INDENT}{line}")).collect::<Vec<_>>().join("\n")
}
