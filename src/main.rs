use anyhow::Context;
use clap::Parser;
use locdb_lib::AppConfig;
use std::path::PathBuf;

/// Merge localization export bundles into a single SQLite store
#[derive(Parser, Debug)]
#[command(name = "locdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Exported bundles (.dmg, .zip, or unpacked directories), processed in order
    #[arg(value_name = "ARCHIVE", required = true)]
    archives: Vec<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    locdb_lib::run(&config, &cli.archives)
        .await
        .with_context(|| format!("failed to convert into {}", config.database_path.display()))?;
    Ok(())
}
