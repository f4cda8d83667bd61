//! Full rent-vs-buy analysis
//!
//! Runs the buyer model once, then searches for the monthly rent whose
//! renter opportunity cost matches the buyer's net cost.

use jiff::civil::Date;
use serde::Serialize;

use crate::buyer::{BuyerOutcome, buyer_outcome};
use crate::error::{AnalysisError, InputError};
use crate::inputs::{Assumptions, InputSet};
use crate::renter::{RenterYear, renter_opportunity_cost, renter_schedule};
use crate::solver::{BreakEven, ProgressCallback, SolverConfig, solve_break_even};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub holding_years: u32,
    pub buyer: BuyerOutcome,
    pub break_even: BreakEven,
    /// Renter costs at the break-even rent
    pub renter: Vec<RenterYear>,
}

pub fn analyze(
    a: &Assumptions,
    start: Date,
    config: &SolverConfig,
) -> Result<Analysis, AnalysisError> {
    analyze_with_progress(a, start, config, None)
}

/// Same as [`analyze`], reporting each solver iteration to `progress`.
pub fn analyze_with_progress(
    a: &Assumptions,
    start: Date,
    config: &SolverConfig,
    progress: Option<ProgressCallback>,
) -> Result<Analysis, AnalysisError> {
    let buyer = buyer_outcome(a, start)?;

    // The cost callback can't return an error; keep the first one aside
    let mut renter_failure: Option<InputError> = None;
    let solved = solve_break_even(
        buyer.net_cost,
        config.initial_guess(a.home_value),
        config,
        |rent| {
            renter_opportunity_cost(rent, a, start).unwrap_or_else(|e| {
                if renter_failure.is_none() {
                    renter_failure = Some(e);
                }
                f64::NAN
            })
        },
        progress,
    );
    if let Some(e) = renter_failure {
        return Err(e.into());
    }
    let break_even = solved?;
    let renter = renter_schedule(break_even.rent, a, start)?;

    Ok(Analysis {
        holding_years: a.holding_years,
        buyer,
        break_even,
        renter,
    })
}

/// Typed assumptions from a resolved input set, then [`analyze`].
pub fn analyze_inputs(
    inputs: &InputSet,
    start: Date,
    config: &SolverConfig,
) -> Result<Analysis, AnalysisError> {
    let a = Assumptions::from_inputs(inputs)?;
    analyze(&a, start, config)
}
