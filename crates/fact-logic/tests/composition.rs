// crates/fact-logic/tests/composition.rs
// ============================================================================
// Module: Composition Tests
// Description: Truth tables, short-circuiting, and derived composite messages.
// ============================================================================
//! ## Overview
//! Integration tests for `and`/`or`: polarity follows the truth tables, the
//! deciding left operand never forces the right one, and composite messages
//! are assembled from the operands with the connector phrases.

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

mod support;

use fact_logic::Fact;
use fact_logic::FactError;
use fact_logic::Operator;
use support::TestResult;
use support::count;
use support::counted;
use support::counter;
use support::ensure;
use support::ensure_eq;
use support::exploding;
use support::no;
use support::yes;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a leaf named `name` with the given polarity.
fn leaf(name: &str, is_yes: bool) -> Fact {
    if is_yes { yes(name) } else { no(name) }
}

// ============================================================================
// SECTION: Truth Tables
// ============================================================================

#[test]
fn test_and_follows_truth_table() -> TestResult {
    for lhs in [true, false] {
        for rhs in [true, false] {
            let fact = leaf("a", lhs).and(leaf("b", rhs))?;
            ensure_eq(&fact.is_yes(), &(lhs && rhs), &format!("{lhs} && {rhs}"))?;
            ensure_eq(&fact.is_no(), &!(lhs && rhs), &format!("is_no for {lhs} && {rhs}"))?;
            let expected_variant = if lhs && rhs {
                matches!(fact, Fact::CompositeYes(_))
            } else {
                matches!(fact, Fact::CompositeNo(_))
            };
            ensure(expected_variant, format!("unexpected variant for {lhs} && {rhs}"))?;
        }
    }
    Ok(())
}

#[test]
fn test_or_follows_truth_table() -> TestResult {
    for lhs in [true, false] {
        for rhs in [true, false] {
            let fact = leaf("a", lhs).or(leaf("b", rhs))?;
            ensure_eq(&fact.is_yes(), &(lhs || rhs), &format!("{lhs} || {rhs}"))?;
        }
    }
    Ok(())
}

#[test]
fn test_operator_tokens_and_short_circuit_rules() -> TestResult {
    ensure_eq(&Operator::And.token(), &"&&", "and token")?;
    ensure_eq(&Operator::Or.to_string(), &"||".to_string(), "or display")?;
    ensure(Operator::And.short_circuits(false), "No && _ is decided")?;
    ensure(!Operator::And.short_circuits(true), "Yes && _ needs rhs")?;
    ensure(Operator::Or.short_circuits(true), "Yes || _ is decided")?;
    ensure(!Operator::Or.short_circuits(false), "No || _ needs rhs")?;
    Ok(())
}

// ============================================================================
// SECTION: Short-Circuiting
// ============================================================================

#[test]
fn test_no_and_never_forces_failing_operand() -> TestResult {
    let fact = no("a").and(exploding("must not run"))?;
    ensure(fact.is_no(), "expected No")?;
    let node = fact.as_composite().ok_or("expected composite")?;
    ensure_eq(&node.operator(), &Operator::And, "operator")?;
    ensure(!node.rhs().is_forced(), "rhs must stay unforced")?;
    Ok(())
}

#[test]
fn test_yes_or_never_forces_failing_operand() -> TestResult {
    let fact = yes("a").or(exploding("must not run"))?;
    ensure(fact.is_yes(), "expected Yes")?;
    let node = fact.as_composite().ok_or("expected composite")?;
    ensure(!node.rhs().is_forced(), "rhs must stay unforced")?;
    Ok(())
}

#[test]
fn test_undecided_composition_propagates_operand_failure() -> TestResult {
    let and_result = yes("a").and(exploding("boom"));
    ensure_eq(&and_result.err(), &Some(FactError::operand("boom")), "and failure")?;

    let or_result = no("a").or(exploding("bang"));
    let error = or_result.err().ok_or("expected failure")?;
    ensure(error.is_operand_failure(), "expected operand failure")?;
    ensure(error.to_string().contains("bang"), format!("unexpected message: {error}"))?;
    Ok(())
}

#[test]
fn test_decided_operand_is_forced_later_by_render() -> TestResult {
    let runs = counter();
    let fact = no("a").and(counted(yes("b"), &runs))?;
    ensure_eq(&count(&runs), &0, "composition")?;

    ensure_eq(&fact.render()?, &"No(a did not hold)".to_string(), "render")?;
    ensure_eq(&count(&runs), &1, "after render")?;
    ensure_eq(&fact.complexity()?, &2, "complexity")?;
    ensure_eq(&count(&runs), &1, "after complexity")?;
    Ok(())
}

#[test]
fn test_required_operand_is_forced_exactly_once() -> TestResult {
    let runs = counter();
    let fact = yes("a").and(counted(yes("b"), &runs))?;
    ensure_eq(&count(&runs), &1, "composition")?;
    ensure_eq(&fact.render()?, &"Yes(a held, and b held)".to_string(), "render")?;
    ensure_eq(&fact.failure_message()?, &"a held, but b did not hold".to_string(), "failure")?;
    ensure_eq(&count(&runs), &1, "after messages")?;
    Ok(())
}

#[test]
fn test_clones_share_one_memoized_operand() -> TestResult {
    let runs = counter();
    let operand = counted(no("b"), &runs);
    let first = no("a").or(operand.clone())?;
    let second = yes("c").and(operand)?;
    ensure_eq(&count(&runs), &1, "single evaluation")?;
    ensure(first.is_no() && second.is_no(), "both composites read the same No operand")?;
    Ok(())
}

#[test]
fn test_failing_operand_surfaces_at_render_when_deferred() -> TestResult {
    let fact = no("a").and(exploding("late"))?;
    ensure_eq(&fact.render().err(), &Some(FactError::operand("late")), "render")?;
    ensure_eq(&fact.complexity().err(), &Some(FactError::operand("late")), "complexity")?;
    ensure(fact.is_no(), "polarity stays readable")?;
    Ok(())
}

// ============================================================================
// SECTION: Composite Messages
// ============================================================================

#[test]
fn test_yes_and_yes_complexity_and_render() -> TestResult {
    let fact = yes("a").and(yes("b"))?;
    ensure(fact.is_yes(), "expected Yes")?;
    ensure_eq(&fact.complexity()?, &2, "complexity")?;
    ensure_eq(&fact.render()?, &"Yes(a held, and b held)".to_string(), "render")?;
    Ok(())
}

#[test]
fn test_and_messages_follow_lhs_polarity() -> TestResult {
    let lhs_false = no("a").and(yes("b"))?;
    ensure_eq(&lhs_false.failure_message()?, &"a did not hold".to_string(), "lhs false failure")?;
    ensure_eq(
        &lhs_false.negated_failure_message()?,
        &"a held, and b held".to_string(),
        "lhs false negated",
    )?;

    let rhs_false = yes("a").and(no("b"))?;
    ensure_eq(
        &rhs_false.failure_message()?,
        &"a held, but b did not hold".to_string(),
        "rhs false failure",
    )?;
    ensure_eq(&rhs_false.render()?, &"No(a held, but b did not hold)".to_string(), "render")?;
    Ok(())
}

#[test]
fn test_or_messages_follow_lhs_polarity() -> TestResult {
    let lhs_true = yes("a").or(no("b"))?;
    ensure_eq(&lhs_true.negated_failure_message()?, &"a held".to_string(), "lhs true negated")?;
    ensure_eq(&lhs_true.render()?, &"Yes(a held)".to_string(), "lhs true render")?;

    let both_false = no("a").or(no("b"))?;
    ensure_eq(
        &both_false.failure_message()?,
        &"a did not hold, and b did not hold".to_string(),
        "both false failure",
    )?;
    ensure_eq(
        &both_false.render()?,
        &"No(a did not hold, and b did not hold)".to_string(),
        "both false render",
    )?;

    let rhs_true = no("a").or(yes("b"))?;
    ensure_eq(
        &rhs_true.negated_failure_message()?,
        &"a did not hold, but b held".to_string(),
        "rhs true negated",
    )?;
    ensure_eq(&rhs_true.render()?, &"Yes(a did not hold, but b held)".to_string(), "render")?;
    Ok(())
}

#[test]
fn test_render_uses_plain_text_for_both_operands() -> TestResult {
    let upper_a = Fact::yes(fact_logic::LeafMessages::with_mid_sentence(
        "A fails", "A holds", "a fails", "a holds",
    ));
    let upper_b = Fact::yes(fact_logic::LeafMessages::with_mid_sentence(
        "B fails", "B holds", "b fails", "b holds",
    ));
    let fact = upper_a.clone().and(upper_b)?;
    ensure_eq(&fact.render()?, &"Yes(A holds, and B holds)".to_string(), "and")?;

    let failed = Fact::no(fact_logic::LeafMessages::with_mid_sentence(
        "C fails", "C holds", "c fails", "c holds",
    ));
    let but = upper_a.and(failed)?;
    ensure_eq(&but.render()?, &"No(A holds, but C fails)".to_string(), "but")?;
    Ok(())
}

// ============================================================================
// SECTION: Negated Composites
// ============================================================================

#[test]
fn test_negated_composite_reads_through_role_swap() -> TestResult {
    let fact = yes("a").and(yes("b"))?.negate();
    ensure(fact.is_no(), "expected No")?;
    ensure(matches!(fact, Fact::NegatedToNo(_)), "expected NegatedToNo")?;
    ensure_eq(&fact.complexity()?, &2, "complexity")?;
    ensure_eq(&fact.failure_message()?, &"a held, and b held".to_string(), "failure")?;
    ensure_eq(&fact.render()?, &"No(a held, and b held)".to_string(), "render")?;
    Ok(())
}

#[test]
fn test_negation_never_forces_operand() -> TestResult {
    let runs = counter();
    let fact = !no("a").and(counted(yes("b"), &runs))?;
    ensure(fact.is_yes(), "negated No is Yes")?;
    ensure_eq(&count(&runs), &0, "negation")?;
    let inner = fact.negated_inner().ok_or("expected negation")?;
    ensure(inner.is_no(), "inner keeps its polarity")?;
    Ok(())
}
