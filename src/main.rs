use anyhow::Result;
use clap::Parser;
use rgbd_launcher::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // launcher chatter goes to stderr; stdout stays clean for --probe output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = cli::run(cli)?;
    if code != 0 {
        // blender's failure passes through unmodified
        std::process::exit(code);
    }
    Ok(())
}
