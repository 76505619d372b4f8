use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use menu_core::{count_nodes, MenuCacheStore, MenuResolver, ResolutionSource};
use menu_infrastructure::{FileSessionStorage, HttpMenuRepository};
use menu_shared::config::AppConfig;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "menu-console",
    version,
    about = "Resolve and cache the permission-scoped navigation menu"
)]
struct Cli {
    /// Bearer token for the API proxy (overrides api.token)
    #[arg(long, env = "MENU_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Session directory holding the cached tree (overrides cache.storage_dir)
    #[arg(long)]
    storage_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigation tree, serving the cache first
    Resolve {
        /// Print the tree as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
    /// Fetch the tree now and overwrite the cache
    Refresh,
    /// Drop the cached tree
    Invalidate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(token) = cli.token {
        config.api.token = Some(token);
    }
    if let Some(dir) = cli.storage_dir {
        config.cache.storage_dir = dir;
    }

    menu_shared::telemetry::init_telemetry(&config.telemetry)?;
    info!("{} starting ({})", config.app.name, config.app.env);

    let storage = Arc::new(FileSessionStorage::new(&config.cache.storage_dir));
    let cache = MenuCacheStore::with_key(storage, config.cache.storage_key.clone());
    let repository = Arc::new(HttpMenuRepository::new(&config.api)?);
    info!("Menu endpoint: {}", repository.endpoint());

    let resolver = MenuResolver::new(
        repository,
        cache,
        Duration::from_secs(config.resolver.fetch_timeout_seconds),
    );

    match cli.command {
        Command::Resolve { json } => {
            let resolution = resolver.resolve_tracked().await;
            if resolution.source == ResolutionSource::Fallback {
                warn!("Menu resources unavailable, navigation is empty");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&resolution.tree)?);
            } else {
                print!("{}", render::render_outline(&resolution.tree));
            }

            // Let the revalidation finish so the next run sees the fresh tree.
            if let Some(refresh) = resolution.refresh {
                if let Err(e) = refresh.await {
                    error!("Background menu refresh panicked: {}", e);
                }
            }
        }
        Command::Refresh => {
            let tree = resolver.refresh().await?;
            println!("Cached {} menus ({} roots)", count_nodes(&tree), tree.len());
        }
        Command::Invalidate => {
            resolver.invalidate().await;
            println!("Menu cache cleared");
        }
    }

    Ok(())
}
