//! Report rendering
//!
//! Amounts are printed with two decimals, with comma thousands separators
//! unless grouping is turned off (`--nopretty`).

use std::fmt::Write;

use rentbuy_core::{Analysis, BuyerOutcome, InputSet};
use serde::Serialize;

/// How amounts are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Insert `,` between groups of three digits
    pub grouping: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { grouping: true }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `1234567.891` → `1,234,567.89` (or `1234567.89` without grouping)
pub fn format_amount(value: f64, config: FormatConfig) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let whole = if config.grouping {
        group_thousands(whole)
    } else {
        whole.to_string()
    };

    // No "-0.00" for values that round away
    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}{whole}.{cents}")
}

/// Buyer lines of the summary. These are known before the rent search runs,
/// so they are printed even when it fails.
pub fn render_buyer_summary(
    buyer: &BuyerOutcome,
    holding_years: u32,
    config: FormatConfig,
) -> String {
    let amount = |v| format_amount(v, config);

    let mut out = String::new();
    let _ = writeln!(out, "Initial buy expense: {}", amount(buyer.initial_buy_expense));
    let _ = writeln!(out, "Opportunity cost for buyer: {}", amount(buyer.opportunity_cost));
    let _ = writeln!(
        out,
        "Final value after {holding_years} years: {}",
        amount(buyer.final_home_value)
    );
    let _ = writeln!(out, "Net for buyer: {}", amount(buyer.net_cost));
    out
}

/// The summary lines
pub fn render_summary(analysis: &Analysis, config: FormatConfig) -> String {
    let mut out = render_buyer_summary(&analysis.buyer, analysis.holding_years, config);
    let _ = writeln!(
        out,
        "Start renting if rent is less than: {}",
        format_amount(analysis.break_even.rent, config)
    );
    out
}

/// Right-aligned text table
fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:>w$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("  "));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}

/// Year-by-year tables for the buyer and for the renter at the break-even rent
pub fn render_breakdown(analysis: &Analysis, config: FormatConfig) -> String {
    let amount = |v| format_amount(v, config);

    let buyer_rows: Vec<Vec<String>> = analysis
        .buyer
        .years
        .iter()
        .map(|y| {
            vec![
                y.date.to_string(),
                amount(y.property_tax),
                amount(y.maintenance),
                amount(y.owner_insurance),
                amount(y.common_fees),
                amount(y.mortgage),
                amount(y.tax_saving),
                amount(y.net_expense),
            ]
        })
        .collect();
    let renter_rows: Vec<Vec<String>> = analysis
        .renter
        .iter()
        .map(|y| {
            vec![
                y.date.to_string(),
                amount(y.rent),
                amount(y.insurance),
                amount(y.net_expense),
            ]
        })
        .collect();

    let mut out = render_table(
        "Buyer, by year:",
        &[
            "Date",
            "Property tax",
            "Maintenance",
            "Insurance",
            "Common",
            "Mortgage",
            "Tax saving",
            "Net",
        ],
        &buyer_rows,
    );
    out.push('\n');
    out.push_str(&render_table(
        &format!(
            "Renter at {} a month, by year:",
            amount(analysis.break_even.rent)
        ),
        &["Date", "Rent", "Insurance", "Net"],
        &renter_rows,
    ));
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a InputSet,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

/// The inputs and the full analysis as pretty-printed JSON
pub fn render_json(inputs: &InputSet, analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { inputs, analysis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rentbuy_core::{Assumptions, SolverConfig, analyze, buyer_outcome};

    const PLAIN: FormatConfig = FormatConfig { grouping: false };
    const PRETTY: FormatConfig = FormatConfig { grouping: true };

    fn default_analysis() -> Analysis {
        analyze(&Assumptions::default(), date(2025, 1, 1), &SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(1_234_567.891, PRETTY), "1,234,567.89");
        assert_eq!(format_amount(1_234_567.891, PLAIN), "1234567.89");
        assert_eq!(format_amount(999.999, PRETTY), "1,000.00");
        assert_eq!(format_amount(100_000.0, PRETTY), "100,000.00");
        assert_eq!(format_amount(12.5, PRETTY), "12.50");
        assert_eq!(format_amount(0.0, PRETTY), "0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-86_250.0, PRETTY), "-86,250.00");
        assert_eq!(format_amount(-0.001, PRETTY), "0.00");
    }

    #[test]
    fn test_summary_lines() {
        let text = render_summary(&default_analysis(), PRETTY);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Initial buy expense: 86,250.00",
                "Opportunity cost for buyer: 8,779,362.05",
                "Final value after 30 years: 2,245,131.43",
                "Net for buyer: 6,534,230.61",
                "Start renting if rent is less than: 2,659.75",
            ]
        );
    }

    #[test]
    fn test_buyer_summary_for_zero_year_hold() {
        let a = Assumptions {
            holding_years: 0,
            ..Assumptions::default()
        };
        let buyer = buyer_outcome(&a, date(2025, 1, 1)).unwrap();
        let text = render_buyer_summary(&buyer, 0, PRETTY);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Initial buy expense: 86,250.00",
                "Opportunity cost for buyer: 86,250.00",
                "Final value after 0 years: 30,000.00",
                "Net for buyer: 56,250.00",
            ]
        );
    }

    #[test]
    fn test_summary_without_grouping() {
        let text = render_summary(&default_analysis(), PLAIN);
        assert!(text.contains("Net for buyer: 6534230.61"));
        assert!(!text.contains(','));
    }

    #[test]
    fn test_breakdown_has_a_row_per_year() {
        let analysis = default_analysis();
        let text = render_breakdown(&analysis, PRETTY);
        assert!(text.starts_with("Buyer, by year:"));
        assert!(text.contains("Renter at 2,659.75 a month, by year:"));
        assert!(text.contains("2026-01-01"));
        assert!(text.contains("2055-01-01"));

        // Title, header and rule for each table, one line per year, one blank
        assert_eq!(text.lines().count(), 2 * (3 + 30) + 1);
    }

    #[test]
    fn test_json_report() {
        let analysis = default_analysis();
        let json = render_json(&InputSet::defaults(), &analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["inputs"]["home_val"], 750_000);
        assert_eq!(value["inputs"]["joint"], "yes");
        assert_eq!(value["holding_years"], 30);
        assert_eq!(value["buyer"]["years"].as_array().unwrap().len(), 30);
        assert_eq!(value["renter"][0]["date"], "2026-01-01");
        let rent = value["break_even"]["rent"].as_f64().unwrap();
        assert!((rent - analysis.break_even.rent).abs() < 1e-9);
    }
}
