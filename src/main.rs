use anyhow::Result;
use clap::Parser;
use tidyscript::cli::{
    handle_check_command, handle_clean_command, handle_config_command, handle_segments_command,
    load_config, Cli, CliCommand,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the cleaned text, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        CliCommand::Version => {
            println!("tidyscript {}", env!("CARGO_PKG_VERSION"));
        }
        CliCommand::Config(args) => {
            handle_config_command(args, cli.config.as_deref())?;
        }
        CliCommand::Check(args) => {
            let needed = handle_check_command(args)?;
            std::process::exit(if needed { 0 } else { 1 });
        }
        CliCommand::Clean(args) => {
            let config = load_config(cli.config.as_deref())?;
            handle_clean_command(args, &config)?;
        }
        CliCommand::Segments(args) => {
            let config = load_config(cli.config.as_deref())?;
            handle_segments_command(args, &config)?;
        }
    }

    Ok(())
}
