use std::path::PathBuf;

use clap::Parser;

/// Print `<download_url>;<version>` for a PyPI JSON document and write
/// `version.str` next to it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the package metadata JSON file
    metadata: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let line = pypi_stamp::process(&cli.metadata).await?;
    println!("{}", line);
    Ok(())
}
