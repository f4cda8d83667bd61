//! Full runs from argument lists
//!
//! These tests verify that:
//! - The default run prints the five summary lines
//! - Flags override the parameter file, which overrides defaults
//! - `--save-config` writes a file that reproduces the run
//! - Fatal problems surface as errors rather than output
//! - Substituted defaults are reported on the notice stream at any log level
//! - A failed rent search still prints the buyer figures

use std::fs;

use jiff::civil::{Date, date};
use tempfile::tempdir;

use crate::cli::Cli;
use crate::config::ParamFile;
use crate::{resolve_inputs, run};

fn today() -> Date {
    date(2025, 1, 1)
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["rentbuy"];
    argv.extend_from_slice(args);
    Cli::try_parse_args(argv).unwrap()
}

/// Result of a run along with everything it wrote
struct Captured {
    result: color_eyre::Result<()>,
    out: String,
    notices: String,
}

fn capture(cli: &Cli) -> Captured {
    let mut out = Vec::new();
    let mut notices = Vec::new();
    let result = run(cli, today(), &mut out, &mut notices);
    Captured {
        result,
        out: String::from_utf8(out).unwrap(),
        notices: String::from_utf8(notices).unwrap(),
    }
}

/// Report text of a run that is expected to succeed
fn report(cli: &Cli) -> color_eyre::Result<String> {
    let captured = capture(cli);
    captured.result.map(|()| captured.out)
}

#[test]
fn test_default_run() {
    let out = report(&cli(&[])).unwrap();
    assert_eq!(out.lines().count(), 5);
    assert!(out.contains("Initial buy expense: 86,250.00"));
    assert!(out.ends_with("Start renting if rent is less than: 2,659.75\n"));
}

#[test]
fn test_flags_change_the_result() {
    let out = report(&cli(&["--how_long", "10", "--nopretty"])).unwrap();
    assert!(out.contains("Final value after 10 years: 511780.50"), "{out}");
    assert!(out.contains("Net for buyer: 580705.81"), "{out}");
    assert!(out.contains("less than: 2464.31"), "{out}");
}

#[test]
fn test_flag_beats_file_beats_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inputs.yaml");
    fs::write(&path, "how_long: 10\nhome_val: 500000\n").unwrap();
    let path_arg = path.to_str().unwrap();

    let args = cli(&["--config", path_arg, "--home_val", "600000"]);
    let file = ParamFile::load(&path).unwrap();
    let (inputs, warnings) = resolve_inputs(&args, &file).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(inputs.integer("home_val").unwrap(), 600_000);
    assert_eq!(inputs.integer("how_long").unwrap(), 10);
    assert_eq!(inputs.real("mort_per").unwrap(), 4.0);
}

#[test]
fn test_saved_config_reproduces_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.yaml");
    let path_arg = path.to_str().unwrap();

    let first = report(&cli(&[
        "--how_long",
        "3",
        "--joint",
        "no",
        "--save-config",
        path_arg,
    ]))
    .unwrap();
    assert!(path.exists());

    let second = report(&cli(&["--config", path_arg])).unwrap();
    assert_eq!(first, second);
    assert!(second.contains("less than: 3,126.20"), "{second}");
}

#[test]
fn test_strict_range_check_replaces_low_home_value() {
    let legacy = report(&cli(&["--home_val", "50"])).unwrap();
    let strict = report(&cli(&["--home_val", "50", "--range-check", "strict"])).unwrap();
    let default = report(&cli(&[])).unwrap();

    assert_ne!(legacy, default);
    assert_eq!(strict, default);
}

#[test]
fn test_breakdown_and_as_of() {
    let out = report(&cli(&["--breakdown", "--as-of", "2030-06-15"])).unwrap();
    assert!(out.contains("Buyer, by year:"));
    assert!(out.contains("2031-06-15"));
    assert!(!out.contains("2026-01-01"));
}

#[test]
fn test_json_output() {
    let out = report(&cli(&["--json", "--how_long", "5"])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["holding_years"], 5);
    assert_eq!(value["inputs"]["how_long"], 5);
}

#[test]
fn test_unknown_file_key_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "home_value: 1\n").unwrap();

    let err = report(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:?}").contains("home_value"));
}

#[test]
fn test_negative_holding_period_is_fatal() {
    assert!(report(&cli(&["--how_long", "-4"])).is_err());
}

#[test]
fn test_substituted_default_is_reported_at_any_log_level() {
    let outcome = capture(&cli(&[
        "--home_val",
        "50",
        "--range-check",
        "strict",
        "--log-level",
        "error",
    ]));
    outcome.result.unwrap();
    assert_eq!(outcome.notices.lines().count(), 1, "{}", outcome.notices);
    assert!(outcome.notices.starts_with("warning: home_val:"), "{}", outcome.notices);
    assert!(outcome.notices.contains("750000"), "{}", outcome.notices);
    assert!(outcome.out.contains("Initial buy expense: 86,250.00"));
}

#[test]
fn test_clean_inputs_write_no_notices() {
    let outcome = capture(&cli(&["--how_long", "10"]));
    outcome.result.unwrap();
    assert!(outcome.notices.is_empty(), "{}", outcome.notices);
}

#[test]
fn test_failed_search_still_prints_buyer_figures() {
    // Nothing to rent over zero years, so no rent can match the buyer's cost
    let outcome = capture(&cli(&["--how_long", "0"]));
    let err = outcome.result.unwrap_err();
    assert!(format!("{err:?}").contains("break-even"), "{err:?}");

    let lines: Vec<&str> = outcome.out.lines().collect();
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
fn test_failed_search_prints_nothing_for_json() {
    let outcome = capture(&cli(&["--how_long", "0", "--json"]));
    assert!(outcome.result.is_err());
    assert!(outcome.out.is_empty());
}

#[test]
fn test_horizon_past_last_year_is_fatal() {
    let outcome = capture(&cli(&["--as-of", "9990-01-01"]));
    let err = outcome.result.unwrap_err();
    assert!(format!("{err:?}").contains("9999"), "{err:?}");
    assert!(outcome.out.is_empty());
}
