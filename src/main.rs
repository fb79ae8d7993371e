use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Structured logging on stderr, filtered by RUST_LOG and defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = mandelscale::Cli::parse();

    mandelscale::run_cli(cli).inspect_err(|err| tracing::error!(%err, "command failed"))
}
