//! Buyer cost model
//!
//! Works out what owning costs over the holding period, expressed as an
//! opportunity cost: every dollar spent on the home is compounded forward at
//! the investment rate to the end of the period, as if it had been invested
//! instead. The home's value at sale is then netted off.

use jiff::civil::Date;
use serde::Serialize;

use crate::error::InputError;
use crate::finance::{compound_growth, monthly_payment, remaining_principal};
use crate::inputs::Assumptions;
use crate::series::{extrapolate_flat, extrapolate_on_base};

/// Owner's costs for one year of the holding period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyerYear {
    pub date: Date,
    pub property_tax: f64,
    pub maintenance: f64,
    pub owner_insurance: f64,
    pub common_fees: f64,
    pub mortgage: f64,
    pub tax_saving: f64,
    /// Sum of the costs above less the tax saving
    pub net_expense: f64,
    /// `net_expense` compounded to the end of the holding period
    pub future_value: f64,
}

/// Everything the buyer model works out, intermediates included
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyerOutcome {
    /// Home value at the end of the period, before any deductions
    pub projected_value: f64,
    pub sale_loss: f64,
    /// Approximate capital-gains hit on a long hold
    pub capital_gains_adjustment: f64,
    pub monthly_payment: f64,
    /// Loan balance still owed at sale
    pub remaining_principal: f64,
    /// Down payment plus buying costs
    pub initial_buy_expense: f64,
    /// Compounded yearly expenses plus the compounded up-front expense
    pub opportunity_cost: f64,
    /// What the owner walks away with after selling
    pub final_home_value: f64,
    /// `opportunity_cost - final_home_value`; the figure renting must match
    pub net_cost: f64,
    pub years: Vec<BuyerYear>,
}

/// Value of the home at sale, after selling costs, the capital-gains
/// approximation and paying off the loan.
struct SaleProceeds {
    projected_value: f64,
    sale_loss: f64,
    capital_gains_adjustment: f64,
    remaining_principal: f64,
    net: f64,
}

fn sale_proceeds(a: &Assumptions) -> SaleProceeds {
    let years = a.holding_years;
    let projected_value = compound_growth(a.home_value, years, a.price_appreciation);
    let sale_loss = projected_value * (a.selling_loss / 100.0);
    let mut net = projected_value - sale_loss;

    // Gain over the exclusion is divided (not multiplied) by the marginal
    // rate. A zero rate would divide by zero and is treated as no adjustment.
    let mut capital_gains_adjustment = 0.0;
    if years > 3 && a.marginal_rate > 0.0 {
        let gain = net - a.home_value - a.filing_status.capital_gains_exclusion();
        if gain > 0.0 {
            capital_gains_adjustment = gain / a.marginal_rate;
            net -= capital_gains_adjustment;
        }
    }

    let mut remaining = 0.0;
    if years < a.mortgage_term_years {
        remaining = remaining_principal(
            a.loan_amount(),
            a.mortgage_term_years,
            a.mortgage_rate,
            a.mortgage_term_years - years,
        );
        net -= remaining;
    }

    SaleProceeds {
        projected_value,
        sale_loss,
        capital_gains_adjustment,
        remaining_principal: remaining,
        net,
    }
}

/// Run the buyer model. `start` dates the yearly rows.
pub fn buyer_outcome(a: &Assumptions, start: Date) -> Result<BuyerOutcome, InputError> {
    let years = a.holding_years;
    let sale = sale_proceeds(a);
    let payment = monthly_payment(a.loan_amount(), a.mortgage_rate, a.mortgage_term_years);
    let annual_mortgage = payment * 12.0;

    let property_taxes =
        extrapolate_on_base(a.home_value, a.price_appreciation, years, a.property_tax, start)?;
    let maintenance =
        extrapolate_on_base(a.home_value, a.price_appreciation, years, a.maintenance, start)?;
    let insurance =
        extrapolate_on_base(a.home_value, a.price_appreciation, years, a.owner_insurance, start)?;
    let common = extrapolate_flat(a.monthly_common * 12.0, years, a.inflation, start)?;

    let deduction = a.filing_status.standard_deduction();
    let mut opportunity_cost = 0.0;
    let mut rows = Vec::with_capacity(years as usize);

    let yearly = property_taxes
        .iter()
        .zip(&maintenance)
        .zip(&insurance)
        .zip(&common);
    for (i, (((tax, maint), ins), fees)) in yearly.enumerate() {
        let deductible = tax.value + annual_mortgage;
        let tax_saving = if deductible > deduction {
            (deductible - deduction) * (a.marginal_rate / 100.0)
        } else {
            0.0
        };
        let net_expense = maint.value + fees.value + ins.value + deductible - tax_saving;
        let future_value = compound_growth(net_expense, years - i as u32, a.investment_rate);
        opportunity_cost += future_value;

        rows.push(BuyerYear {
            date: tax.date,
            property_tax: tax.value,
            maintenance: maint.value,
            owner_insurance: ins.value,
            common_fees: fees.value,
            mortgage: annual_mortgage,
            tax_saving,
            net_expense,
            future_value,
        });
    }

    let initial_buy_expense = a.down_payment() + a.home_value * (a.buying_loss / 100.0);
    opportunity_cost += compound_growth(initial_buy_expense, years, a.investment_rate);

    Ok(BuyerOutcome {
        projected_value: sale.projected_value,
        sale_loss: sale.sale_loss,
        capital_gains_adjustment: sale.capital_gains_adjustment,
        monthly_payment: payment,
        remaining_principal: sale.remaining_principal,
        initial_buy_expense,
        opportunity_cost,
        final_home_value: sale.net,
        net_cost: opportunity_cost - sale.net,
        years: rows,
    })
}
