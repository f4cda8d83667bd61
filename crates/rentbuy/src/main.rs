use rentbuy::{Cli, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();
    init_logging(&cli.log_level)?;

    let today = jiff::Zoned::now().date();
    run(
        &cli,
        today,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    Ok(())
}
