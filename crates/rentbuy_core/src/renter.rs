//! Renter cost model
//!
//! Rent and renter's insurance are projected year by year from an assumed
//! starting monthly rent, then compounded forward at the investment rate the
//! same way the buyer's expenses are.

use jiff::civil::Date;
use serde::Serialize;

use crate::error::InputError;
use crate::finance::compound_growth;
use crate::inputs::Assumptions;
use crate::series::{extrapolate_flat, extrapolate_on_base};

/// Renter's costs for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenterYear {
    pub date: Date,
    pub rent: f64,
    pub insurance: f64,
    pub net_expense: f64,
    /// `net_expense` compounded to the end of the holding period
    pub future_value: f64,
}

/// Year-by-year renter costs at `monthly_rent`.
pub fn renter_schedule(
    monthly_rent: f64,
    a: &Assumptions,
    start: Date,
) -> Result<Vec<RenterYear>, InputError> {
    let years = a.holding_years;
    let annual_rent = monthly_rent * 12.0;
    let rents = extrapolate_flat(annual_rent, years, a.rent_appreciation, start)?;
    let insurance =
        extrapolate_on_base(annual_rent, a.rent_appreciation, years, a.renter_insurance, start)?;

    let rows = rents
        .iter()
        .zip(&insurance)
        .enumerate()
        .map(|(i, (rent, ins))| {
            let net_expense = rent.value + ins.value;
            RenterYear {
                date: rent.date,
                rent: rent.value,
                insurance: ins.value,
                net_expense,
                future_value: compound_growth(net_expense, years - i as u32, a.investment_rate),
            }
        })
        .collect();
    Ok(rows)
}

/// Total renter opportunity cost at `monthly_rent`.
///
/// Strictly increasing in `monthly_rent` whenever the holding period is at
/// least a year and the growth rates stay above -100%.
pub fn renter_opportunity_cost(
    monthly_rent: f64,
    a: &Assumptions,
    start: Date,
) -> Result<f64, InputError> {
    let schedule = renter_schedule(monthly_rent, a, start)?;
    Ok(schedule.iter().map(|y| y.future_value).sum())
}
