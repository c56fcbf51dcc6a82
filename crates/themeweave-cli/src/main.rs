//! themeweave: command-line front end for theme registries.

mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("themeweave=warn");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_directive)),
        )
        .init();

    tracing::debug!("themeweave v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(output) = commands::run(&args.command)? {
        println!("{}", output);
    }
    Ok(())
}
