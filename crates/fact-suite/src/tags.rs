// crates/fact-suite/src/tags.rs
// ============================================================================
// Module: Test Tag Merging
// Description: Merges suite-wide labels into per-test tag maps.
// Purpose: Give every test of a suite the labels declared on the suite.
// Dependencies: std::collections
// ============================================================================

//! ## Overview
//! Tags map a test name to the set of labels attached to it. Labels declared
//! once for a whole suite are merged into the entry of every test the suite
//! owns, leaving tests outside the suite untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Test name to label set.
pub type TagMap = BTreeMap<String, BTreeSet<String>>;

// ============================================================================
// SECTION: Merging
// ============================================================================

/// Adds `labels` to every test in `test_names`.
///
/// Returns `tags` unchanged when `labels` is empty, so no empty entries are
/// created for untagged tests.
#[must_use]
pub fn merge_tags<I, S>(mut tags: TagMap, test_names: I, labels: &BTreeSet<String>) -> TagMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    if labels.is_empty() {
        return tags;
    }
    for name in test_names {
        tags.entry(name.into()).or_default().extend(labels.iter().cloned());
    }
    tags
}

/// Unions two tag maps entry by entry.
///
/// Entries of `right` with no labels are skipped.
#[must_use]
pub fn merge_tag_maps(mut left: TagMap, right: TagMap) -> TagMap {
    for (name, labels) in right {
        if labels.is_empty() {
            continue;
        }
        left.entry(name).or_default().extend(labels);
    }
    left
}
