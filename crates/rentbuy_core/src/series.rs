//! Year-by-year projections
//!
//! Each projection produces one `YearValue` per year of the holding period,
//! dated on successive anniversaries of a start date. Values grow before they
//! are emitted, so the first record already carries one year of growth.
//! A projection that would run past the last representable year fails with
//! [`InputError::HorizonOutOfRange`].

use jiff::civil::Date;
use serde::Serialize;

use crate::date_math::add_years;
use crate::error::InputError;

/// A projected value at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub date: Date,
    pub value: f64,
}

/// Ordered yearly projection, one record per year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct YearSeries(Vec<YearValue>);

impl YearSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, year: usize) -> Option<&YearValue> {
        self.0.get(year)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearValue> {
        self.0.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|y| y.value)
    }
}

impl<'a> IntoIterator for &'a YearSeries {
    type Item = &'a YearValue;
    type IntoIter = std::slice::Iter<'a, YearValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Shared loop: `next` advances the running quantity and returns the value
/// to record for that year.
fn project(
    years: u32,
    start: Date,
    mut next: impl FnMut() -> f64,
) -> Result<YearSeries, InputError> {
    let mut records = Vec::with_capacity(years as usize);
    let mut date = start;
    for _ in 0..years {
        date = add_years(date, 1).ok_or(InputError::HorizonOutOfRange { start, years })?;
        records.push(YearValue {
            date,
            value: next(),
        });
    }
    Ok(YearSeries(records))
}

/// `initial` compounding at `rate_percent` a year.
pub fn extrapolate_flat(
    initial: f64,
    years: u32,
    rate_percent: f64,
    start: Date,
) -> Result<YearSeries, InputError> {
    let growth = 1.0 + rate_percent / 100.0;
    let mut value = initial;
    project(years, start, || {
        value *= growth;
        value
    })
}

/// `rate_on_base_percent`% of a base that compounds at `base_growth_percent`
/// a year, such as property tax on an appreciating home.
pub fn extrapolate_on_base(
    base: f64,
    base_growth_percent: f64,
    years: u32,
    rate_on_base_percent: f64,
    start: Date,
) -> Result<YearSeries, InputError> {
    let growth = 1.0 + base_growth_percent / 100.0;
    let share = rate_on_base_percent / 100.0;
    let mut current = base;
    project(years, start, || {
        current *= growth;
        current * share
    })
}
