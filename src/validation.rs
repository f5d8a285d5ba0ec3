//! Input validation for fixture generation and slot scheduling.
//!
//! Precondition violations are caller errors: they fail fast and are never
//! silently coerced. Every check runs and all problems are reported at once.
//! Detects:
//! - Rosters too small for a round-robin
//! - Duplicate competitor or fixture IDs
//! - Fixtures pairing a competitor with itself
//! - Fixtures referencing competitors without a preference record
//! - Non-positive slot durations
//! - Preference hours outside 0-23
//! - UTC offsets chrono cannot represent
//!
//! Infeasibility (no free slot for some fixture) is not a validation error;
//! it is reported through [`ScheduleResult`](crate::models::ScheduleResult).

use chrono::FixedOffset;
use log::warn;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::models::{Competitor, Fixture, MAX_HOUR};

/// Validation result.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A round-robin needs at least two competitors.
    InsufficientCompetitors,
    /// Two entities share the same ID.
    DuplicateId,
    /// A fixture has the same competitor on both sides.
    SelfPairing,
    /// A fixture references a competitor with no preference record.
    UnknownCompetitor,
    /// Slot step is zero or negative.
    InvalidSlotDuration,
    /// A preference hour lies outside 0-23.
    InvalidHour,
    /// UTC offset outside ±24 hours.
    InvalidUtcOffset,
}

/// All validation errors detected in one input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid scheduling input: {}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ValidationErrors {
    /// Detected errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any error of the given kind was detected.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.0.iter().any(|e| e.kind == kind)
    }

    pub(crate) fn single(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self(vec![ValidationError::new(kind, message)])
    }

    fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates a roster for round-robin generation.
///
/// Checks:
/// 1. At least two competitors
/// 2. No duplicate competitor IDs
pub fn validate_roster<S: AsRef<str>>(competitors: &[S]) -> ValidationResult {
    let mut errors = Vec::new();

    if competitors.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCompetitors,
            format!(
                "Round-robin needs at least 2 competitors, got {}",
                competitors.len()
            ),
        ));
    }

    let mut seen = HashSet::new();
    for c in competitors {
        if !seen.insert(c.as_ref()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate competitor ID: {}", c.as_ref()),
            ));
        }
    }

    ValidationErrors::into_result(errors)
}

/// Validates the input of a scheduling run.
///
/// Checks:
/// 1. Slot step is positive
/// 2. No duplicate competitor IDs, all preference hours within 0-23
/// 3. No duplicate fixture IDs
/// 4. No fixture pairs a competitor with itself
/// 5. Both sides of every fixture have a preference record
///
/// Inverted preference windows (`start > end`) are logged, not rejected.
pub fn validate_request(
    fixtures: &[Fixture],
    competitors: &[Competitor],
    step_ms: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if step_ms <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSlotDuration,
            format!("Slot duration must be positive, got {step_ms}ms"),
        ));
    }

    let mut competitor_ids = HashSet::new();
    for c in competitors {
        if !competitor_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate competitor ID: {}", c.id),
            ));
        }

        let pref = &c.preference;
        for hour in [pref.preferred_start_hour, pref.preferred_end_hour] {
            if hour > MAX_HOUR {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidHour,
                    format!("Competitor '{}' has preferred hour {hour} outside 0-23", c.id),
                ));
            }
        }
        if !pref.is_window_ordered() {
            warn!(
                "competitor '{}' has inverted preferred window {}..={}",
                c.id, pref.preferred_start_hour, pref.preferred_end_hour
            );
        }
    }

    let mut fixture_ids = HashSet::new();
    for f in fixtures {
        if !fixture_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate fixture ID: {}", f.id),
            ));
        }

        if f.pairing.is_self_pairing() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPairing,
                format!("Fixture '{}' pairs '{}' with itself", f.id, f.home()),
            ));
        }

        for side in [f.home(), f.away()] {
            if !competitor_ids.contains(side) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCompetitor,
                    format!("Fixture '{}' references unknown competitor '{side}'", f.id),
                ));
            }
        }
    }

    ValidationErrors::into_result(errors)
}

/// Validates a UTC offset given in minutes and converts it.
pub fn validate_utc_offset(minutes: i32) -> Result<FixedOffset, ValidationErrors> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            ValidationErrors::single(
                ValidationErrorKind::InvalidUtcOffset,
                format!("UTC offset of {minutes} minutes is out of range"),
            )
        })
}
