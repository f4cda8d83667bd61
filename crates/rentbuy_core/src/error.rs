use std::fmt;

use jiff::civil::Date;

use crate::date_math::MAX_YEAR;
use crate::inputs::MAX_YEARS;

/// Errors raised while turning raw parameters into typed assumptions
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// No value (not even a default) could be found for a parameter
    Missing(&'static str),
    /// A parameter was read as a different kind than it holds
    KindMismatch {
        name: &'static str,
        expected: &'static str,
    },
    /// A count of years outside what the calendar projections can cover
    YearsOutOfRange { name: &'static str, value: i64 },
    /// A parameter name that is not in the descriptor table
    UnknownParameter(String),
    /// The yearly projection would run past the last representable date
    HorizonOutOfRange { start: Date, years: u32 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Missing(name) => write!(f, "supply input: {name}"),
            InputError::KindMismatch { name, expected } => {
                write!(f, "parameter {name} does not hold {expected} value")
            }
            InputError::YearsOutOfRange { name, value } => write!(
                f,
                "parameter {name} must be between 0 and {MAX_YEARS} years (got {value})"
            ),
            InputError::UnknownParameter(name) => write!(f, "unknown parameter {name:?}"),
            InputError::HorizonOutOfRange { start, years } => write!(
                f,
                "a {years} year holding period from {start} runs past the year {MAX_YEAR}"
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Errors raised by the break-even search
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The iteration budget ran out before the residual fell within tolerance
    NoConvergence {
        iterations: usize,
        last_guess: f64,
        residual: f64,
    },
    /// The cost model produced NaN or infinity at some guess
    NonFiniteResidual { guess: f64, residual: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoConvergence {
                iterations,
                last_guess,
                residual,
            } => write!(
                f,
                "couldn't find the break-even rent after {iterations} iterations \
                 (last guess {last_guess:.2}, residual {residual:.2})"
            ),
            SolveError::NonFiniteResidual { guess, residual } => {
                write!(f, "non-finite residual {residual} at rent guess {guess}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Errors from a full rent-vs-buy analysis
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    Input(InputError),
    Solve(SolveError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Input(e) => write!(f, "{e}"),
            AnalysisError::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Input(e) => Some(e),
            AnalysisError::Solve(e) => Some(e),
        }
    }
}

impl From<InputError> for AnalysisError {
    fn from(err: InputError) -> Self {
        AnalysisError::Input(err)
    }
}

impl From<SolveError> for AnalysisError {
    fn from(err: SolveError) -> Self {
        AnalysisError::Solve(err)
    }
}
