//! Parameter descriptors
//!
//! Every input the calculator understands is described once, here, by a
//! `ParamDescriptor`. The command-line flags, the config file keys, and the
//! validator are all driven by this table, so adding a parameter means adding
//! one row.

use std::fmt;

use serde::Serialize;

/// Value kind of a parameter, with its valid range where one applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    Integer { low: i64, high: i64 },
    Real { low: f64, high: f64 },
    /// Free text; never range checked
    Text,
}

impl ParamKind {
    /// Short label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::Integer { .. } => "an integer",
            ParamKind::Real { .. } => "a real",
            ParamKind::Text => "a text",
        }
    }

    /// Inclusive (low, high) bounds as reals, if this kind has a range
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            ParamKind::Integer { low, high } => Some((low as f64, high as f64)),
            ParamKind::Real { low, high } => Some((low, high)),
            ParamKind::Text => None,
        }
    }

    /// Parse raw text as this kind. Returns `None` when the text is not a
    /// number of the right shape; ranges are not checked here.
    pub fn parse(&self, raw: &str) -> Option<ParamValue> {
        let trimmed = raw.trim();
        match self {
            ParamKind::Integer { .. } => trimmed.parse::<i64>().ok().map(ParamValue::Integer),
            ParamKind::Real { .. } => trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(ParamValue::Real),
            ParamKind::Text => Some(ParamValue::Text(raw.to_string())),
        }
    }
}

/// A validated parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric view of the value; integers widen to reals
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Integer(v) => Some(*v as f64),
            ParamValue::Real(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::Real(v) => write!(f, "{v}"),
            ParamValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Static description of one input parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Flag and config key, e.g. `home_val`
    pub name: &'static str,
    /// Human-readable prompt, used as help text
    pub prompt: &'static str,
    /// Default as it would be typed on the command line
    pub default: &'static str,
    pub kind: ParamKind,
}

impl ParamDescriptor {
    const fn integer(
        name: &'static str,
        prompt: &'static str,
        default: &'static str,
        low: i64,
        high: i64,
    ) -> Self {
        Self {
            name,
            prompt,
            default,
            kind: ParamKind::Integer { low, high },
        }
    }

    const fn real(
        name: &'static str,
        prompt: &'static str,
        default: &'static str,
        low: f64,
        high: f64,
    ) -> Self {
        Self {
            name,
            prompt,
            default,
            kind: ParamKind::Real { low, high },
        }
    }

    const fn text(name: &'static str, prompt: &'static str, default: &'static str) -> Self {
        Self {
            name,
            prompt,
            default,
            kind: ParamKind::Text,
        }
    }

    /// The default, parsed into this parameter's kind
    pub fn default_value(&self) -> ParamValue {
        // Every default in `PARAMETERS` parses; the text fallback only guards
        // descriptors built elsewhere.
        self.kind
            .parse(self.default)
            .unwrap_or_else(|| ParamValue::Text(self.default.to_string()))
    }
}

/// Every parameter, in prompt order
pub const PARAMETERS: [ParamDescriptor; 18] = [
    ParamDescriptor::integer("home_val", "Home Value", "750000", 100_000, 1_000_000),
    ParamDescriptor::integer("how_long", "How long do you plan to hold the home", "30", 2, 100),
    ParamDescriptor::real("mort_per", "Mortgage percent", "4.0", 1.0, 25.0),
    ParamDescriptor::integer("down_pay", "Down Payment %", "10", 1, 100),
    ParamDescriptor::integer("mort_term", "Mortgage Term", "30", 2, 40),
    ParamDescriptor::real("price_appr", "Price Appreciation %", "4.0", 1.0, 25.0),
    ParamDescriptor::real("rent_appr", "Rent Appreciation %", "4.5", 1.0, 25.0),
    ParamDescriptor::real("inflation", "Inflation %", "3.0", 1.0, 25.0),
    ParamDescriptor::real("inv_rate", "Investment Rate %", "8.0", 1.0, 25.0),
    ParamDescriptor::real("prop_tax", "Property Tax %", "0.8", 0.1, 10.0),
    ParamDescriptor::text("joint", "Joint (yes/no)", "yes"),
    ParamDescriptor::real("marg_rate", "Marginal Rate %", "25", 0.0, 25.0),
    ParamDescriptor::real("buy_loss", "Buying loss %", "1.5", 0.0, 25.0),
    ParamDescriptor::real("sell_loss", "Selling loss %", "6", 0.0, 25.0),
    ParamDescriptor::real("maint", "Maintenance %", "1", 0.1, 10.0),
    ParamDescriptor::real("own_ins", "Owner Insurance %", "0.46", 0.1, 10.0),
    ParamDescriptor::integer("month_comm", "Monthly Common", "500", 0, 5000),
    ParamDescriptor::real("rent_ins", "Renter Insurance %", "0.5", 0.1, 10.0),
];

/// Look up a descriptor by name
pub fn descriptor(name: &str) -> Option<&'static ParamDescriptor> {
    PARAMETERS.iter().find(|d| d.name == name)
}
