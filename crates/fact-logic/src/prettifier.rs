// crates/fact-logic/src/prettifier.rs
// ============================================================================
// Module: Prettifiers
// Description: Display rendering for message arguments.
// Purpose: Turn arbitrary structured values into stable, readable text.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Message arguments are arbitrary JSON values. A [`Prettifier`] decides how
//! each one reads inside a diagnostic: the default quotes strings and renders
//! collections as bracketed lists so that `"1"` and `1` stay distinguishable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Value;

// ============================================================================
// SECTION: Prettifier Trait
// ============================================================================

/// Converts an argument value into its display string
pub trait Prettifier: Send + Sync {
    /// Renders `value` for inclusion in a message
    fn prettify(&self, value: &Value) -> String;
}

impl<F> Prettifier for F
where
    F: Fn(&Value) -> String + Send + Sync,
{
    fn prettify(&self, value: &Value) -> String {
        self(value)
    }
}

/// Shared prettifier handle stored on leaf facts
pub type SharedPrettifier = Arc<dyn Prettifier>;

// ============================================================================
// SECTION: Default Prettifier
// ============================================================================

/// Quotes strings and brackets collections
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPrettifier;

impl Prettifier for DefaultPrettifier {
    fn prettify(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number.to_string(),
            Value::String(text) => format!("\"{text}\""),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|item| self.prettify(item)).collect();
                format!("[{}]", rendered.join(", "))
            }
            Value::Object(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(key, item)| format!("\"{key}\": {}", self.prettify(item)))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
        }
    }
}

// ============================================================================
// SECTION: Plain Prettifier
// ============================================================================

/// Leaves top-level strings unquoted; otherwise behaves like [`DefaultPrettifier`]
///
/// Useful when arguments are already display text, such as names or
/// pre-rendered sub-messages.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPrettifier;

impl Prettifier for PlainPrettifier {
    fn prettify(&self, value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => DefaultPrettifier.prettify(other),
        }
    }
}

/// Returns a shared handle to the default prettifier
#[must_use]
pub fn default_prettifier() -> SharedPrettifier {
    Arc::new(DefaultPrettifier)
}
