// crates/fact-logic/src/i18n.rs
// ============================================================================
// Module: Connector Catalog
// Description: Localized sentence connectors used when joining fact messages.
// Purpose: Keep composite message phrasing in one translatable catalog.
// Dependencies: crate::{error, format}, std::collections, std::sync::OnceLock
// ============================================================================

//! ## Overview
//! Composite facts never own message text; the renderer builds it by joining
//! the children's messages with a connector such as `"{0}, and {1}"`. The
//! connectors live in a small per-locale catalog and are applied through the
//! same positional formatter as leaf templates.
//!
//! ## Invariants
//! - Catalogs are built once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::FactResult;
use crate::format::format_positional;

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Supported message locales
///
/// # Invariants
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// Ordered list of supported locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Catalog key for the "X, and Y" connector.
pub const COMMA_AND: &str = "fact.comma_and";
/// Catalog key for the "X, but Y" connector.
pub const COMMA_BUT: &str = "fact.comma_but";

/// English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[(COMMA_AND, "{0}, and {1}"), (COMMA_BUT, "{0}, but {1}")];

/// Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[(COMMA_AND, "{0}, i {1}"), (COMMA_BUT, "{0}, però {1}")];

/// Returns the message catalog for the requested locale.
fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

/// Looks up the raw template for `key` in `locale`.
#[must_use]
pub fn template<'a>(locale: Locale, key: &'a str) -> &'a str {
    catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key)
}

// ============================================================================
// SECTION: Connectors
// ============================================================================

/// Joins two messages as "X, and Y".
///
/// # Errors
///
/// Returns a formatting error only if the catalog entry is malformed.
pub fn comma_and(locale: Locale, left: &str, right: &str) -> FactResult<String> {
    format_positional(template(locale, COMMA_AND), &[left, right])
}

/// Joins two messages as "X, but Y".
///
/// # Errors
///
/// Returns a formatting error only if the catalog entry is malformed.
pub fn comma_but(locale: Locale, left: &str, right: &str) -> FactResult<String> {
    format_positional(template(locale, COMMA_BUT), &[left, right])
}
