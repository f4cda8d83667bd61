//! Command-line surface
//!
//! Fixed options come from the `Cli` derive. Each input parameter gets its
//! own `--<name>` flag generated from the descriptor table, with the
//! descriptor's prompt as help text and its default as the default value.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use jiff::civil::Date;
use rentbuy_core::{PARAMETERS, ParamDescriptor, ParamKind, RangeCheck};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rentbuy")]
#[command(about = "Find the monthly rent below which renting beats buying")]
pub struct Cli {
    /// Print amounts without thousands separators
    #[arg(long)]
    pub nopretty: bool,

    /// How out-of-range inputs are treated
    #[arg(long, value_enum, default_value_t = RangeCheckArg::Legacy)]
    pub range_check: RangeCheckArg,

    /// YAML file of parameter values, applied under command-line flags
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the resolved parameters to a YAML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// First day of the holding period (default: today)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub as_of: Option<Date>,

    /// Also print year-by-year tables for both sides
    #[arg(long)]
    pub breakdown: bool,

    /// Print the analysis as JSON
    #[arg(long, conflicts_with = "breakdown")]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Raw parameter values, one per descriptor
    #[arg(skip)]
    pub params: Vec<ParamArg>,
}

/// Raw text for one parameter, and whether the user typed it
#[derive(Debug, Clone, PartialEq)]
pub struct ParamArg {
    pub name: &'static str,
    pub raw: String,
    pub explicit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeCheckArg {
    /// Only substitute a default when a value is below the low bound and above
    /// the high bound at once, so single-sided violations pass through
    Legacy,
    /// Substitute a default whenever a value leaves its range
    Strict,
}

impl From<RangeCheckArg> for RangeCheck {
    fn from(arg: RangeCheckArg) -> Self {
        match arg {
            RangeCheckArg::Legacy => RangeCheck::Legacy,
            RangeCheckArg::Strict => RangeCheck::Strict,
        }
    }
}

fn parse_date(s: &str) -> Result<Date, String> {
    s.parse::<Date>().map_err(|e| e.to_string())
}

fn param_flag(d: &ParamDescriptor) -> Arg {
    let value_name = match d.kind {
        ParamKind::Integer { .. } => "INT",
        ParamKind::Real { .. } => "NUM",
        ParamKind::Text => "TEXT",
    };
    Arg::new(d.name)
        .long(d.name)
        .help(d.prompt)
        .value_name(value_name)
        .default_value(d.default)
        .allow_negative_numbers(true)
        .help_heading("Parameters")
}

/// The full command, fixed options plus one flag per parameter
pub fn command() -> clap::Command {
    Cli::command().args(PARAMETERS.iter().map(param_flag))
}

impl Cli {
    /// Parse `std::env::args`, exiting with usage on error
    pub fn parse_args() -> Self {
        let matches = command().get_matches();
        Self::from_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut cli = Self::from_arg_matches(matches)?;
        cli.params = PARAMETERS
            .iter()
            .map(|d| ParamArg {
                name: d.name,
                raw: matches
                    .get_one::<String>(d.name)
                    .cloned()
                    .unwrap_or_else(|| d.default.to_string()),
                explicit: matches.value_source(d.name) == Some(ValueSource::CommandLine),
            })
            .collect();
        Ok(cli)
    }

    /// Value typed on the command line for `name`, if any
    pub fn explicit_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name && p.explicit)
            .map(|p| p.raw.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["rentbuy"];
        argv.extend_from_slice(args);
        Cli::try_parse_args(argv).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(!cli.nopretty);
        assert_eq!(cli.range_check, RangeCheckArg::Legacy);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.params.len(), PARAMETERS.len());
        assert!(cli.params.iter().all(|p| !p.explicit));

        let home = &cli.params[0];
        assert_eq!(home.name, "home_val");
        assert_eq!(home.raw, "750000");
    }

    #[test]
    fn test_parameter_flags() {
        let cli = parse(&["--how_long", "10", "--joint", "no", "--nopretty"]);
        assert!(cli.nopretty);
        assert_eq!(cli.explicit_param("how_long"), Some("10"));
        assert_eq!(cli.explicit_param("joint"), Some("no"));
        assert_eq!(cli.explicit_param("home_val"), None);
    }

    #[test]
    fn test_fixed_options() {
        let cli = parse(&[
            "--range-check",
            "strict",
            "--as-of",
            "2025-01-01",
            "--config",
            "in.yaml",
            "--save-config",
            "out.yaml",
            "--breakdown",
            "-l",
            "debug",
        ]);
        assert_eq!(RangeCheck::from(cli.range_check), RangeCheck::Strict);
        assert_eq!(cli.as_of, Some(jiff::civil::date(2025, 1, 1)));
        assert_eq!(cli.config, Some(PathBuf::from("in.yaml")));
        assert_eq!(cli.save_config, Some(PathBuf::from("out.yaml")));
        assert!(cli.breakdown);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_args(["rentbuy", "--as-of", "yesterday"]).is_err());
        assert!(Cli::try_parse_args(["rentbuy", "--range-check", "loose"]).is_err());
        assert!(Cli::try_parse_args(["rentbuy", "--home-val", "1"]).is_err());
        assert!(Cli::try_parse_args(["rentbuy", "--json", "--breakdown"]).is_err());
    }

    #[test]
    fn test_negative_parameter_values() {
        let cli = parse(&["--how_long", "-4", "--inflation", "-1.5"]);
        assert_eq!(cli.explicit_param("how_long"), Some("-4"));
        assert_eq!(cli.explicit_param("inflation"), Some("-1.5"));
    }

    #[test]
    fn test_numeric_flags_take_any_text() {
        // Validation happens later and falls back to the default
        let cli = parse(&["--inv_rate", "lots"]);
        assert_eq!(cli.explicit_param("inv_rate"), Some("lots"));
    }
}
