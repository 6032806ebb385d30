use std::sync::Arc;

use tokio::io::BufReader;

use investor_profile::app::ProfileStore;
use investor_profile::config::AppConfig;
use investor_profile::shell;
use investor_profile::store::{Database, LibSqlBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interleave with the shell on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("📈 Investor Profile v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!("   Type `help` for commands, `quit` to exit.\n");

    let db: Arc<dyn Database> = Arc::new(LibSqlBackend::new_local(&config.db_path).await?);

    let mut store = ProfileStore::new(db, &config);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell::run(&mut store, stdin, &mut stdout).await?;

    Ok(())
}
