//! Rent-versus-buy break-even engine
//!
//! This crate answers one household question: over a holding period, at what
//! monthly rent does renting cost exactly as much as buying? It provides:
//! - A fixed table of input parameters with defaults and valid ranges
//! - Validation of raw text inputs into typed values
//! - Financial primitives (compound growth, annuity payment, amortization)
//! - Year-by-year projections of appreciating costs
//! - Buyer and renter opportunity-cost models
//! - A bracketing/bisection solver for the break-even rent
//!
//! # Example
//!
//! ```ignore
//! use rentbuy_core::{Assumptions, SolverConfig, analyze};
//!
//! let assumptions = Assumptions::default();
//! let analysis = analyze(&assumptions, jiff::civil::date(2025, 1, 1), &SolverConfig::default())?;
//! println!("Rent below {:.2} to come out ahead", analysis.break_even.rent);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod buyer;
pub mod date_math;
pub mod error;
pub mod finance;
pub mod renter;
pub mod series;
pub mod solver;

// ============================================================================
// Input modules
// ============================================================================

pub mod inputs;
pub mod params;
pub mod validate;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Analysis, analyze, analyze_inputs, analyze_with_progress};
pub use buyer::{BuyerOutcome, BuyerYear, buyer_outcome};
pub use error::{AnalysisError, InputError, SolveError};
pub use inputs::{Assumptions, FilingStatus, InputSet};
pub use params::{PARAMETERS, ParamDescriptor, ParamKind, ParamValue};
pub use renter::{RenterYear, renter_opportunity_cost, renter_schedule};
pub use series::{YearSeries, YearValue};
pub use solver::{
    BisectionState, BreakEven, ProgressCallback, SearchPhase, SolverConfig, solve_break_even,
};
pub use validate::{RangeCheck, Validated, ValidationWarning, WarningReason};
