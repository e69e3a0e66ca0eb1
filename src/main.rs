//! LOOTLENS — Acquisition-cost analyzer for loot-box economies.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! builds the recipe catalog and analyzer, and serves the HTTP API
//! with graceful shutdown.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use lootlens::analyzer::AcquisitionAnalyzer;
use lootlens::catalog::RecipeCatalog;
use lootlens::config::AppConfig;
use lootlens::server;
use lootlens::server::routes::ServerState;

const BANNER: &str = r#"
 _     ___   ___ _____ _     _____ _   _ ____
| |   / _ \ / _ \_   _| |   | ____| \ | / ___|
| |  | | | | | | || | | |   |  _| |  \| \___ \
| |__| |_| | |_| || | | |___| |___| |\  |___) |
|_____\___/ \___/ |_| |_____|_____|_| \_|____/

  Acquisition-Cost Analyzer for Loot-Box Economies
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = AppConfig::load("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        drop_rate = cfg.analyzer.drop_rate,
        average_trial_cost = cfg.analyzer.average_trial_cost,
        "LOOTLENS starting up"
    );

    // -- Build catalog and analyzer ---------------------------------------

    let catalog = match cfg.catalog.path.as_deref() {
        Some(path) => {
            let catalog = RecipeCatalog::load(path)?;
            info!(path, recipes = catalog.len(), "Catalog loaded from file");
            catalog
        }
        None => {
            let catalog = RecipeCatalog::builtin();
            info!(recipes = catalog.len(), "Using built-in catalog");
            catalog
        }
    };

    let analyzer = AcquisitionAnalyzer::new(catalog, cfg.analyzer.clone());

    // -- Serve or print ----------------------------------------------------

    if cfg.server.enabled {
        let state = Arc::new(ServerState::new(analyzer));
        server::serve(state, cfg.server.port).await?;
        info!("LOOTLENS shut down cleanly.");
    } else {
        // Headless mode: render the baseline report once and exit.
        let result = analyzer.compare_methods(None, None, None)?;
        println!("{}", analyzer.render_report(&result));
    }

    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lootlens=info"));

    let json_logging = std::env::var("LOOTLENS_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
