//! Rent-versus-buy calculator front end
//!
//! Resolves parameters from command-line flags, an optional parameter file and
//! the built-in defaults, runs the analysis from `rentbuy_core`, and renders
//! the report.

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod util;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use logging::init_logging;

use std::io::Write;

use color_eyre::eyre::WrapErr;
use jiff::civil::Date;
use rentbuy_core::{
    AnalysisError, Assumptions, BisectionState, InputSet, RangeCheck, SolverConfig,
    ValidationWarning, analyze_with_progress, buyer_outcome,
};

use crate::config::{ParamFile, save_inputs};
use crate::report::{
    FormatConfig, render_breakdown, render_buyer_summary, render_json, render_summary,
};

/// Build the input set. Command-line flags win over the parameter file,
/// which wins over the defaults.
pub fn resolve_inputs(
    cli: &Cli,
    file: &ParamFile,
) -> color_eyre::Result<(InputSet, Vec<ValidationWarning>)> {
    let check = RangeCheck::from(cli.range_check);
    let resolved = InputSet::resolve(
        |d| {
            cli.explicit_param(d.name)
                .or_else(|| file.get(d.name))
                .or_else(|| {
                    cli.params
                        .iter()
                        .find(|p| p.name == d.name)
                        .map(|p| p.raw.as_str())
                })
                .map(str::to_string)
        },
        check,
    )?;
    Ok(resolved)
}

/// Run one calculation, writing the report to `out`.
///
/// Defaults substituted for rejected inputs are reported on `notices` whatever
/// the log level. If the rent search fails, the buyer lines are still written
/// before the error is returned.
pub fn run(
    cli: &Cli,
    today: Date,
    out: &mut dyn Write,
    notices: &mut dyn Write,
) -> color_eyre::Result<()> {
    let file = match &cli.config {
        Some(path) => ParamFile::load(path)?,
        None => ParamFile::default(),
    };
    if !file.is_empty() {
        tracing::info!(count = file.len(), "loaded parameter file");
    }

    let (inputs, warnings) = resolve_inputs(cli, &file)?;
    for warning in &warnings {
        writeln!(notices, "warning: {warning}")?;
        tracing::debug!(
            parameter = warning.parameter,
            given = %warning.given,
            "substituted default"
        );
    }
    for (name, value) in inputs.iter() {
        tracing::info!(parameter = name, %value, "input");
    }

    if let Some(path) = &cli.save_config {
        save_inputs(path, &inputs)?;
        tracing::info!(path = %path.display(), "saved parameters");
    }

    let assumptions = Assumptions::from_inputs(&inputs).wrap_err("invalid parameters")?;
    let start = cli.as_of.unwrap_or(today);
    let format = FormatConfig {
        grouping: !cli.nopretty,
    };

    let mut log_iteration = |iteration: usize, state: &BisectionState| {
        tracing::debug!(
            iteration,
            phase = ?state.phase(),
            guess = state.guess,
            residual = state.residual,
            "break-even search"
        );
    };
    let result = analyze_with_progress(
        &assumptions,
        start,
        &SolverConfig::default(),
        Some(&mut log_iteration),
    );
    let analysis = match result {
        Ok(analysis) => analysis,
        Err(e @ AnalysisError::Solve(_)) => {
            if !cli.json {
                let buyer = buyer_outcome(&assumptions, start)?;
                let summary = render_buyer_summary(&buyer, assumptions.holding_years, format);
                out.write_all(summary.as_bytes())?;
            }
            return Err(e).wrap_err("could not compute the break-even rent");
        }
        Err(e) => return Err(e).wrap_err("could not compute the break-even rent"),
    };

    let buyer = &analysis.buyer;
    tracing::debug!(
        projected_value = buyer.projected_value,
        sale_loss = buyer.sale_loss,
        capital_gains_adjustment = buyer.capital_gains_adjustment,
        monthly_payment = buyer.monthly_payment,
        remaining_principal = buyer.remaining_principal,
        "buyer model"
    );
    tracing::info!(
        rent = analysis.break_even.rent,
        iterations = analysis.break_even.iterations,
        residual = analysis.break_even.residual,
        "break-even rent found"
    );

    if cli.json {
        let json = render_json(&inputs, &analysis).wrap_err("failed to serialize the analysis")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    out.write_all(render_summary(&analysis, format).as_bytes())?;
    if cli.breakdown {
        writeln!(out)?;
        out.write_all(render_breakdown(&analysis, format).as_bytes())?;
    }
    Ok(())
}
