//! Resolved inputs
//!
//! `InputSet` is the validated name → value mapping built once at startup.
//! `Assumptions` is the typed view of it that the cost models consume.

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::InputError;
use crate::params::{PARAMETERS, ParamDescriptor, ParamValue, descriptor};
use crate::validate::{RangeCheck, ValidationWarning, validate_value};

/// Longest holding period or mortgage term the projections accept
pub const MAX_YEARS: u32 = 1000;

/// Validated parameter values, in descriptor order
#[derive(Debug, Clone, PartialEq)]
pub struct InputSet {
    entries: Vec<(&'static str, ParamValue)>,
    index: FxHashMap<&'static str, usize>,
}

impl InputSet {
    /// Every parameter at its default
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_entries(
            PARAMETERS
                .iter()
                .map(|d| (d.name, d.default_value()))
                .collect(),
        )
    }

    fn from_entries(entries: Vec<(&'static str, ParamValue)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, i))
            .collect();
        Self { entries, index }
    }

    /// Resolve every descriptor through `lookup` and validate the raw text.
    ///
    /// `lookup` returns the raw value for a descriptor, or `None` when nothing
    /// (not even a default) is available. Missing parameters are fatal;
    /// invalid ones are replaced by their defaults and reported as warnings.
    pub fn resolve<F>(
        mut lookup: F,
        check: RangeCheck,
    ) -> Result<(Self, Vec<ValidationWarning>), InputError>
    where
        F: FnMut(&ParamDescriptor) -> Option<String>,
    {
        let mut entries = Vec::with_capacity(PARAMETERS.len());
        let mut warnings = Vec::new();
        let mut missing = None;

        for d in &PARAMETERS {
            let Some(raw) = lookup(d) else {
                missing.get_or_insert(d.name);
                continue;
            };
            let validated = validate_value(d, &raw, check);
            if let Some(warning) = validated.warning {
                warnings.push(warning);
            }
            entries.push((d.name, validated.value));
        }

        if let Some(name) = missing {
            return Err(InputError::Missing(name));
        }

        Ok((Self::from_entries(entries), warnings))
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<(&'static str, &ParamValue), InputError> {
        let d = descriptor(name).ok_or_else(|| InputError::UnknownParameter(name.to_string()))?;
        let value = self.get(name).ok_or(InputError::Missing(d.name))?;
        Ok((d.name, value))
    }

    pub fn integer(&self, name: &str) -> Result<i64, InputError> {
        match self.lookup(name)? {
            (_, ParamValue::Integer(v)) => Ok(*v),
            (name, _) => Err(InputError::KindMismatch {
                name,
                expected: "an integer",
            }),
        }
    }

    /// Numeric value of a parameter; integers are widened
    pub fn real(&self, name: &str) -> Result<f64, InputError> {
        let (name, value) = self.lookup(name)?;
        value.as_f64().ok_or(InputError::KindMismatch {
            name,
            expected: "a numeric",
        })
    }

    pub fn text(&self, name: &str) -> Result<&str, InputError> {
        match self.lookup(name)? {
            (_, ParamValue::Text(v)) => Ok(v.as_str()),
            (name, _) => Err(InputError::KindMismatch {
                name,
                expected: "a text",
            }),
        }
    }

    fn years(&self, name: &str) -> Result<u32, InputError> {
        let value = self.integer(name)?;
        match u32::try_from(value) {
            Ok(years) if years <= MAX_YEARS => Ok(years),
            _ => {
                let (name, _) = self.lookup(name)?;
                Err(InputError::YearsOutOfRange { name, value })
            }
        }
    }
}

impl Serialize for InputSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Tax filing status, which sets the capital-gains exclusion and the
/// standard deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingStatus {
    Joint,
    Individual,
}

impl FilingStatus {
    /// `"yes"` means joint; anything else is an individual filer
    pub fn from_flag(flag: &str) -> Self {
        if flag == "yes" {
            FilingStatus::Joint
        } else {
            FilingStatus::Individual
        }
    }

    /// Home-sale gain excluded from capital-gains tax
    pub fn capital_gains_exclusion(self) -> f64 {
        match self {
            FilingStatus::Joint => 500_000.0,
            FilingStatus::Individual => 250_000.0,
        }
    }

    /// Yearly deductions below this are assumed to earn no tax saving
    pub fn standard_deduction(self) -> f64 {
        match self {
            FilingStatus::Joint => 12_600.0,
            FilingStatus::Individual => 9_300.0,
        }
    }
}

/// Typed financial assumptions. Rates are percentages (`4.0` means 4%).
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub home_value: f64,
    pub holding_years: u32,
    pub mortgage_rate: f64,
    pub down_payment_pct: f64,
    pub mortgage_term_years: u32,
    pub price_appreciation: f64,
    pub rent_appreciation: f64,
    pub inflation: f64,
    pub investment_rate: f64,
    pub property_tax: f64,
    pub filing_status: FilingStatus,
    pub marginal_rate: f64,
    pub buying_loss: f64,
    pub selling_loss: f64,
    pub maintenance: f64,
    pub owner_insurance: f64,
    pub monthly_common: f64,
    pub renter_insurance: f64,
}

impl Assumptions {
    pub fn from_inputs(inputs: &InputSet) -> Result<Self, InputError> {
        Ok(Self {
            home_value: inputs.real("home_val")?,
            holding_years: inputs.years("how_long")?,
            mortgage_rate: inputs.real("mort_per")?,
            down_payment_pct: inputs.real("down_pay")?,
            mortgage_term_years: inputs.years("mort_term")?,
            price_appreciation: inputs.real("price_appr")?,
            rent_appreciation: inputs.real("rent_appr")?,
            inflation: inputs.real("inflation")?,
            investment_rate: inputs.real("inv_rate")?,
            property_tax: inputs.real("prop_tax")?,
            filing_status: FilingStatus::from_flag(inputs.text("joint")?),
            marginal_rate: inputs.real("marg_rate")?,
            buying_loss: inputs.real("buy_loss")?,
            selling_loss: inputs.real("sell_loss")?,
            maintenance: inputs.real("maint")?,
            owner_insurance: inputs.real("own_ins")?,
            monthly_common: inputs.real("month_comm")?,
            renter_insurance: inputs.real("rent_ins")?,
        })
    }

    /// Cash paid toward the purchase up front
    pub fn down_payment(&self) -> f64 {
        self.home_value * (self.down_payment_pct / 100.0)
    }

    /// Amount borrowed
    pub fn loan_amount(&self) -> f64 {
        self.home_value - self.down_payment()
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            home_value: 750_000.0,
            holding_years: 30,
            mortgage_rate: 4.0,
            down_payment_pct: 10.0,
            mortgage_term_years: 30,
            price_appreciation: 4.0,
            rent_appreciation: 4.5,
            inflation: 3.0,
            investment_rate: 8.0,
            property_tax: 0.8,
            filing_status: FilingStatus::Joint,
            marginal_rate: 25.0,
            buying_loss: 1.5,
            selling_loss: 6.0,
            maintenance: 1.0,
            owner_insurance: 0.46,
            monthly_common: 500.0,
            renter_insurance: 0.5,
        }
    }
}
