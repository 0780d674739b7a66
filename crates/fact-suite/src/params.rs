// crates/fact-suite/src/params.rs
// ============================================================================
// Module: Property-Check Parameters
// Description: Default property-check configuration and per-call overrides.
// Purpose: Resolve overrides against defaults into effective parameters.
// Dependencies: crate::error, serde
// ============================================================================

//! ## Overview
//! A property check runs with a [`PropertyCheckConfiguration`] of defaults,
//! optionally adjusted by a list of [`ConfigParam`] overrides. [`resolve`]
//! merges the two into [`Parameters`]: each value comes from its override
//! when one is present and from the defaults otherwise.
//!
//! ## Invariants
//! - At most one override per [`ParamKind`]; duplicates are an
//!   [`ConfigError::ArityConflict`].
//! - `max_size == min_size + size_range` for every resolved [`Parameters`].
//! - Override values are validated when constructed; resolution only checks
//!   arity and the size rules.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default minimum number of successful evaluations.
pub const DEFAULT_MIN_SUCCESSFUL: u32 = 10;
/// Default ratio of discarded to successful evaluations tolerated.
pub const DEFAULT_MAX_DISCARDED_FACTOR: f64 = 5.0;
/// Default minimum generated size.
pub const DEFAULT_MIN_SIZE: u32 = 0;
/// Default span between minimum and maximum generated size.
pub const DEFAULT_SIZE_RANGE: u32 = 100;
/// Default number of workers.
pub const DEFAULT_WORKERS: u32 = 1;

/// Serde default for `min_successful`.
const fn default_min_successful() -> u32 {
    DEFAULT_MIN_SUCCESSFUL
}

/// Serde default for `max_discarded_factor`.
const fn default_max_discarded_factor() -> f64 {
    DEFAULT_MAX_DISCARDED_FACTOR
}

/// Serde default for `size_range`.
const fn default_size_range() -> u32 {
    DEFAULT_SIZE_RANGE
}

/// Serde default for `workers`.
const fn default_workers() -> u32 {
    DEFAULT_WORKERS
}

// ============================================================================
// SECTION: Parameter Kinds
// ============================================================================

/// Identifies one adjustable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Minimum successful evaluations.
    MinSuccessful,
    /// Discarded-to-successful ratio.
    MaxDiscardedFactor,
    /// Minimum generated size.
    MinSize,
    /// Maximum generated size.
    MaxSize,
    /// Span between minimum and maximum size.
    SizeRange,
    /// Worker count.
    Workers,
}

impl ParamKind {
    /// Every kind in declaration order.
    pub const ALL: [Self; 6] = [
        Self::MinSuccessful,
        Self::MaxDiscardedFactor,
        Self::MinSize,
        Self::MaxSize,
        Self::SizeRange,
        Self::Workers,
    ];

    /// Returns the snake-case name used in config files and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MinSuccessful => "min_successful",
            Self::MaxDiscardedFactor => "max_discarded_factor",
            Self::MinSize => "min_size",
            Self::MaxSize => "max_size",
            Self::SizeRange => "size_range",
            Self::Workers => "workers",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Rejects zero for kinds that must be positive.
fn ensure_positive(kind: ParamKind, value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::invalid_value(kind, "must be greater than zero"));
    }
    Ok(value)
}

/// Rejects negative, NaN, and infinite ratios.
fn ensure_factor(value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid_value(
            ParamKind::MaxDiscardedFactor,
            format!("must be finite and non-negative, got {value}"),
        ));
    }
    Ok(value)
}

// ============================================================================
// SECTION: Configuration Defaults
// ============================================================================

/// Default parameters for a property check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyCheckConfiguration {
    /// Minimum number of successful evaluations required.
    #[serde(default = "default_min_successful")]
    pub min_successful: u32,
    /// Discarded evaluations tolerated per successful one.
    #[serde(default = "default_max_discarded_factor")]
    pub max_discarded_factor: f64,
    /// Minimum generated size.
    #[serde(default)]
    pub min_size: u32,
    /// Span between minimum and maximum generated size.
    #[serde(default = "default_size_range")]
    pub size_range: u32,
    /// Number of workers evaluating the property.
    #[serde(default = "default_workers")]
    pub workers: u32,
}

impl Default for PropertyCheckConfiguration {
    fn default() -> Self {
        Self {
            min_successful: DEFAULT_MIN_SUCCESSFUL,
            max_discarded_factor: DEFAULT_MAX_DISCARDED_FACTOR,
            min_size: DEFAULT_MIN_SIZE,
            size_range: DEFAULT_SIZE_RANGE,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl PropertyCheckConfiguration {
    /// Validates every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero `min_successful` or
    /// `workers`, a negative or non-finite discard factor, or a size range
    /// that overflows the maximum size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(ParamKind::MinSuccessful, self.min_successful)?;
        ensure_factor(self.max_discarded_factor)?;
        ensure_positive(ParamKind::Workers, self.workers)?;
        self.min_size.checked_add(self.size_range).ok_or_else(|| {
            ConfigError::invalid_value(ParamKind::SizeRange, "min_size + size_range overflows")
        })?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Overrides
// ============================================================================

/// One override applied on top of a [`PropertyCheckConfiguration`].
///
/// Overrides are only built through the constructors below, so a value that
/// exists has already passed its kind's range check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigParam(Override);

/// Validated override payload.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Override {
    /// Minimum successful evaluations; positive.
    MinSuccessful(u32),
    /// Discarded-to-successful ratio; finite and non-negative.
    MaxDiscardedFactor(f64),
    /// Minimum generated size.
    MinSize(u32),
    /// Maximum generated size; must not be below the effective minimum.
    MaxSize(u32),
    /// Span between minimum and maximum size.
    SizeRange(u32),
    /// Worker count; positive.
    Workers(u32),
}

impl ConfigParam {
    /// Overrides the minimum successful evaluations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `value` is zero.
    pub fn min_successful(value: u32) -> Result<Self, ConfigError> {
        ensure_positive(ParamKind::MinSuccessful, value).map(|v| Self(Override::MinSuccessful(v)))
    }

    /// Overrides the discard factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `value` is negative or not finite.
    pub fn max_discarded_factor(value: f64) -> Result<Self, ConfigError> {
        ensure_factor(value).map(|v| Self(Override::MaxDiscardedFactor(v)))
    }

    /// Overrides the minimum size.
    #[must_use]
    pub const fn min_size(value: u32) -> Self {
        Self(Override::MinSize(value))
    }

    /// Overrides the maximum size.
    #[must_use]
    pub const fn max_size(value: u32) -> Self {
        Self(Override::MaxSize(value))
    }

    /// Overrides the size range.
    #[must_use]
    pub const fn size_range(value: u32) -> Self {
        Self(Override::SizeRange(value))
    }

    /// Overrides the worker count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `value` is zero.
    pub fn workers(value: u32) -> Result<Self, ConfigError> {
        ensure_positive(ParamKind::Workers, value).map(|v| Self(Override::Workers(v)))
    }

    /// Returns the kind this override adjusts.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self.0 {
            Override::MinSuccessful(_) => ParamKind::MinSuccessful,
            Override::MaxDiscardedFactor(_) => ParamKind::MaxDiscardedFactor,
            Override::MinSize(_) => ParamKind::MinSize,
            Override::MaxSize(_) => ParamKind::MaxSize,
            Override::SizeRange(_) => ParamKind::SizeRange,
            Override::Workers(_) => ParamKind::Workers,
        }
    }
}

// ============================================================================
// SECTION: Effective Parameters
// ============================================================================

/// Effective parameters after overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameters {
    /// Minimum number of successful evaluations required.
    pub min_successful: u32,
    /// Discarded evaluations tolerated per successful one.
    pub max_discarded_factor: f64,
    /// Minimum generated size.
    pub min_size: u32,
    /// Maximum generated size.
    pub max_size: u32,
    /// Span between minimum and maximum generated size.
    pub size_range: u32,
    /// Number of workers evaluating the property.
    pub workers: u32,
}

impl Parameters {
    /// Returns how many discarded evaluations are tolerated in total.
    ///
    /// That is `floor(max_discarded_factor * min_successful)`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The factor is validated finite and non-negative and float-to-int casts saturate."
    )]
    pub fn max_discarded(&self) -> u64 {
        (self.max_discarded_factor * f64::from(self.min_successful)).floor() as u64
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Finds the single override of `kind`, rejecting duplicates.
fn single<'a>(
    params: &'a [ConfigParam],
    kind: ParamKind,
) -> Result<Option<&'a ConfigParam>, ConfigError> {
    let mut matching = params.iter().filter(|param| param.kind() == kind);
    let first = matching.next();
    let extra = matching.count();
    if extra > 0 {
        return Err(ConfigError::ArityConflict {
            kind,
            count: extra + 1,
        });
    }
    Ok(first)
}

/// Resolves `params` against `defaults` into effective parameters.
///
/// # Errors
///
/// Returns [`ConfigError::ArityConflict`] when a kind is overridden more than
/// once, and [`ConfigError::InvalidValue`] when a value is out of range, the
/// maximum size is below the effective minimum size, or an explicit maximum
/// size disagrees with an explicit size range.
pub fn resolve(
    params: &[ConfigParam],
    defaults: &PropertyCheckConfiguration,
) -> Result<Parameters, ConfigError> {
    defaults.validate()?;
    let mut resolved = *defaults;
    let mut max_size = None;
    let mut explicit_range = None;

    for kind in ParamKind::ALL {
        let Some(param) = single(params, kind)? else {
            continue;
        };
        match param.0 {
            Override::MinSuccessful(value) => resolved.min_successful = value,
            Override::MaxDiscardedFactor(value) => resolved.max_discarded_factor = value,
            Override::MinSize(value) => resolved.min_size = value,
            Override::MaxSize(value) => max_size = Some(value),
            Override::SizeRange(value) => explicit_range = Some(value),
            Override::Workers(value) => resolved.workers = value,
        }
    }

    let min_size = resolved.min_size;
    let (max_size, size_range) = match (max_size, explicit_range) {
        (Some(max), range) => {
            let derived = max.checked_sub(min_size).ok_or_else(|| {
                ConfigError::invalid_value(
                    ParamKind::MaxSize,
                    format!("max_size {max} is below min_size {min_size}"),
                )
            })?;
            if let Some(range) = range.filter(|range| *range != derived) {
                return Err(ConfigError::invalid_value(
                    ParamKind::MaxSize,
                    format!("max_size {max} conflicts with min_size {min_size} + size_range {range}"),
                ));
            }
            (max, derived)
        }
        (None, range) => {
            let range = range.unwrap_or(resolved.size_range);
            let max = min_size.checked_add(range).ok_or_else(|| {
                ConfigError::invalid_value(ParamKind::SizeRange, "min_size + size_range overflows")
            })?;
            (max, range)
        }
    };

    Ok(Parameters {
        min_successful: resolved.min_successful,
        max_discarded_factor: resolved.max_discarded_factor,
        min_size,
        max_size,
        size_range,
        workers: resolved.workers,
    })
}
