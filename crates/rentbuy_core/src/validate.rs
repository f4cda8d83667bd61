//! Raw input validation
//!
//! Parses raw text into a parameter's kind and applies its range check.
//! Failures are never fatal: the descriptor default is substituted and a
//! `ValidationWarning` is handed back for the caller to report.

use std::fmt;

use crate::params::{ParamDescriptor, ParamValue};

/// How the declared [low, high] range is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeCheck {
    /// Fall back only when a value is below `low` *and* above `high`.
    ///
    /// No value satisfies both, so out-of-range input passes through
    /// unchanged. This reproduces the calculator's long-standing behavior.
    #[default]
    Legacy,
    /// Fall back when a value is below `low` or above `high`.
    Strict,
}

impl RangeCheck {
    pub fn is_out_of_range(self, value: f64, low: f64, high: f64) -> bool {
        match self {
            RangeCheck::Legacy => value < low && value > high,
            RangeCheck::Strict => value < low || value > high,
        }
    }
}

/// Why a raw value was replaced by its default
#[derive(Debug, Clone, PartialEq)]
pub enum WarningReason {
    /// Not a number of the parameter's kind
    Unparseable,
    OutOfRange { low: f64, high: f64 },
}

/// A recovered validation failure
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub parameter: &'static str,
    pub given: String,
    pub reason: WarningReason,
    pub substituted: ParamValue,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            WarningReason::Unparseable => write!(
                f,
                "{}: could not read {:?} as a number, using default {}",
                self.parameter, self.given, self.substituted
            ),
            WarningReason::OutOfRange { low, high } => write!(
                f,
                "{}: you should enter a value between {low} and {high}, you gave {}; \
                 using default {}",
                self.parameter, self.given, self.substituted
            ),
        }
    }
}

/// Outcome of validating one raw value
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub value: ParamValue,
    pub warning: Option<ValidationWarning>,
}

/// Validate `given` against `descriptor`.
///
/// Text parameters are returned verbatim. Numeric parameters that fail to
/// parse, or that `check` rejects, come back as the descriptor default
/// together with a warning.
pub fn validate_value(descriptor: &ParamDescriptor, given: &str, check: RangeCheck) -> Validated {
    let fallback = |reason: WarningReason| {
        let substituted = descriptor.default_value();
        Validated {
            value: substituted.clone(),
            warning: Some(ValidationWarning {
                parameter: descriptor.name,
                given: given.to_string(),
                reason,
                substituted,
            }),
        }
    };

    let Some(value) = descriptor.kind.parse(given) else {
        return fallback(WarningReason::Unparseable);
    };

    if let (Some((low, high)), Some(v)) = (descriptor.kind.bounds(), value.as_f64()) {
        if check.is_out_of_range(v, low, high) {
            return fallback(WarningReason::OutOfRange { low, high });
        }
    }

    Validated {
        value,
        warning: None,
    }
}
