//! Financial primitives
//!
//! Rates passed as `rate_percent` are percentages; `periodic_rate` arguments
//! are plain fractions per period (`0.04 / 12` for 4% a year paid monthly).
//!
//! The annuity helpers follow the spreadsheet PMT/PPMT conventions: zero
//! future value, payments at the end of each period, and cash flows signed
//! from the borrower's side. Borrowing shows up as a negative present value
//! and yields a positive payment.

/// `principal × (1 + rate/100)^periods`
#[inline]
pub fn compound_growth(principal: f64, periods: u32, rate_percent: f64) -> f64 {
    principal * (1.0 + rate_percent / 100.0).powf(f64::from(periods))
}

/// Fixed payment that amortizes `present_value` over `periods` payments.
pub fn annuity_payment(periodic_rate: f64, periods: u32, present_value: f64) -> f64 {
    let n = f64::from(periods);
    if periodic_rate == 0.0 {
        return -present_value / n;
    }
    let growth = (1.0 + periodic_rate).powf(n);
    -present_value * periodic_rate * growth / (growth - 1.0)
}

/// Principal part of payment number `period` (1-based).
pub fn principal_payment(periodic_rate: f64, period: u32, periods: u32, present_value: f64) -> f64 {
    let payment = annuity_payment(periodic_rate, periods, present_value);
    if periodic_rate == 0.0 {
        return payment;
    }
    // Balance (borrower-signed) carried into this period
    let elapsed = f64::from(period.saturating_sub(1));
    let growth = (1.0 + periodic_rate).powf(elapsed);
    let balance = present_value * growth + payment * (growth - 1.0) / periodic_rate;
    let interest = -balance * periodic_rate;
    payment - interest
}

/// Level monthly mortgage payment on a positive `loan_amount`.
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    annuity_payment(annual_rate_percent / 1200.0, term_years * 12, -loan_amount)
}

/// Principal still owed after `paid` monthly payments, closed form.
pub fn remaining_balance(loan_amount: f64, annual_rate_percent: f64, term_years: u32, paid: u32) -> f64 {
    let rate = annual_rate_percent / 1200.0;
    let payment = monthly_payment(loan_amount, annual_rate_percent, term_years);
    if rate == 0.0 {
        return loan_amount - payment * f64::from(paid);
    }
    let growth = (1.0 + rate).powf(f64::from(paid));
    loan_amount * growth - payment * (growth - 1.0) / rate
}

/// Principal still owed when `remaining_years` of a `term_years` mortgage
/// are left, found by summing the principal paid month by month.
///
/// With `remaining_years >= term_years` nothing has been paid and the full
/// `loan_amount` comes back.
pub fn remaining_principal(
    loan_amount: f64,
    term_years: u32,
    annual_rate_percent: f64,
    remaining_years: u32,
) -> f64 {
    let rate = annual_rate_percent / 1200.0;
    let periods = term_years * 12;
    let paid = periods.saturating_sub(remaining_years * 12);

    let principal_paid: f64 = (1..=paid)
        .map(|period| principal_payment(rate, period, periods, -loan_amount))
        .sum();

    loan_amount - principal_paid
}
