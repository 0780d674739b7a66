// crates/fact-suite/tests/config.rs
// ============================================================================
// Module: Suite Configuration Tests
// Description: TOML loading, defaults, limits, and fail-closed validation.
// ============================================================================
//! ## Overview
//! Integration tests for `SuiteConfig` loading from disk and from text.

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

use std::fs;
use std::path::Path;

use fact_logic::Locale;
use fact_suite::ConfigError;
use fact_suite::ConfigParam;
use fact_suite::MAX_CONFIG_FILE_SIZE;
use fact_suite::PropertyCheckConfiguration;
use fact_suite::SuiteConfig;
use support::TestResult;
use support::assert_invalid;
use support::ensure;
use support::ensure_eq;
use tempfile::TempDir;

/// Writes `content` to `fact-suite.toml` inside `dir` and loads it.
fn load_from(dir: &TempDir, content: &[u8]) -> Result<SuiteConfig, ConfigError> {
    let path = dir.path().join("fact-suite.toml");
    fs::write(&path, content).map_err(|err| ConfigError::Io(err.to_string()))?;
    SuiteConfig::load(Some(&path))
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn test_empty_file_uses_defaults() -> TestResult {
    let dir = TempDir::new()?;
    let config = load_from(&dir, b"")?;
    ensure_eq(&config, &SuiteConfig::default(), "config")?;
    ensure_eq(&config.property_checks, &PropertyCheckConfiguration::default(), "checks")?;
    ensure_eq(&config.render.locale.as_str(), &"en", "locale")?;
    ensure_eq(&config.renderer()?.locale(), &Locale::En, "renderer locale")?;
    Ok(())
}

#[test]
fn test_partial_sections_keep_remaining_defaults() -> TestResult {
    let config = SuiteConfig::from_toml_str("[property_checks]\nworkers = 3\n")?;
    ensure_eq(&config.property_checks.workers, &3, "workers")?;
    ensure_eq(&config.property_checks.min_successful, &10, "min_successful")?;
    ensure_eq(&config.property_checks.size_range, &100, "size_range")?;
    Ok(())
}

// ============================================================================
// SECTION: Loading
// ============================================================================

#[test]
fn test_full_file_round_trips_into_renderer_and_parameters() -> TestResult {
    let dir = TempDir::new()?;
    let config = load_from(
        &dir,
        br#"
[property_checks]
min_successful = 20
max_discarded_factor = 2.5
min_size = 4
size_range = 16
workers = 2

[render]
locale = "ca-ES"
"#,
    )?;
    ensure_eq(&config.renderer()?.locale(), &Locale::Ca, "locale")?;

    let params = config.resolve(&[ConfigParam::workers(8)?])?;
    ensure_eq(&params.workers, &8, "override")?;
    ensure_eq(&params.min_successful, &20, "configured default")?;
    ensure_eq(&params.max_size, &20, "max_size")?;
    ensure_eq(&params.max_discarded(), &50, "max_discarded")?;
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() -> TestResult {
    let dir = TempDir::new()?;
    let result = SuiteConfig::load(Some(&dir.path().join("absent.toml")));
    ensure(matches!(result, Err(ConfigError::Io(_))), format!("expected io error, got {result:?}"))?;
    Ok(())
}

#[test]
fn test_oversized_file_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    let mut content = b"# padding\n".to_vec();
    content.resize(MAX_CONFIG_FILE_SIZE + 1, b'#');
    assert_invalid(load_from(&dir, &content), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn test_non_utf8_file_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    assert_invalid(load_from(&dir, &[0xff, 0xfe, 0x00]), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn test_overlong_path_component_is_rejected() -> TestResult {
    let component = "x".repeat(300);
    assert_invalid(SuiteConfig::load(Some(Path::new(&component))), "config path component too long")?;
    Ok(())
}

// ============================================================================
// SECTION: Fail-Closed Validation
// ============================================================================

#[test]
fn test_malformed_toml_is_a_parse_error() -> TestResult {
    assert_invalid(SuiteConfig::from_toml_str("[property_checks\n"), "config parse error")?;
    Ok(())
}

#[test]
fn test_unknown_fields_are_rejected() -> TestResult {
    assert_invalid(SuiteConfig::from_toml_str("[render]\ncolour = true\n"), "config parse error")?;
    assert_invalid(
        SuiteConfig::from_toml_str("[property_checks]\nmax_workers = 2\n"),
        "config parse error",
    )?;
    assert_invalid(SuiteConfig::from_toml_str("[unknown]\n"), "config parse error")?;
    Ok(())
}

#[test]
fn test_unsupported_locale_is_invalid() -> TestResult {
    assert_invalid(
        SuiteConfig::from_toml_str("[render]\nlocale = \"fr\"\n"),
        "render.locale \"fr\" is not one of: en, ca",
    )?;
    Ok(())
}

#[test]
fn test_out_of_range_values_are_invalid() -> TestResult {
    assert_invalid(
        SuiteConfig::from_toml_str("[property_checks]\nmin_successful = 0\n"),
        "invalid min_successful",
    )?;
    assert_invalid(
        SuiteConfig::from_toml_str("[property_checks]\nmax_discarded_factor = -1.0\n"),
        "invalid max_discarded_factor",
    )?;
    assert_invalid(
        SuiteConfig::from_toml_str("[property_checks]\nmin_size = -1\n"),
        "config parse error",
    )?;
    Ok(())
}
