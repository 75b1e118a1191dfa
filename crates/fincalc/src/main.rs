use std::io::Write;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use fincalc::{Args, CalculatorConfig, commands, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(CalculatorConfig::default_data_dir);

    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| CalculatorConfig::path(&data_dir));
    let config = CalculatorConfig::load(&config_path)
        .wrap_err_with(|| format!("Failed to load {}", config_path.display()))?;

    tracing::info!(command = ?args.command, format = ?args.format, "running");
    let output = commands::run(&args.command, &config, &config_path, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
