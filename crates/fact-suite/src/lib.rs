// crates/fact-suite/src/lib.rs
// ============================================================================
// Module: Fact Suite Root
// Description: Suite-level plumbing built on the fact algebra.
// Purpose: Tag merging, property-check parameters, and suite configuration.
// Dependencies: crate::{config, error, params, tags}, fact-logic
// ============================================================================

//! ## Overview
//! `fact-suite` holds what a test suite needs around individual facts: the
//! labels attached to its tests, the parameters its property checks run
//! with, and a TOML configuration file that supplies defaults for both the
//! parameters and the fact renderer's locale.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod params;
pub mod tags;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::CONFIG_ENV_VAR;
pub use config::DEFAULT_CONFIG_NAME;
pub use config::MAX_CONFIG_FILE_SIZE;
pub use config::RenderConfig;
pub use config::SuiteConfig;
pub use error::ConfigError;
pub use params::ConfigParam;
pub use params::ParamKind;
pub use params::Parameters;
pub use params::PropertyCheckConfiguration;
pub use params::resolve;
pub use tags::TagMap;
pub use tags::merge_tag_maps;
pub use tags::merge_tags;
