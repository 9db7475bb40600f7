//! shelfmood - personal book library curator and mood-based song recommender
//!
//! Serves a JSON API: book search and a per-session library with author
//! recommendations on one side, a static mood/energy/genre song picker on the other.

mod api;
mod config;
mod core;
mod models;
mod plugins;
mod stores;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::api::AppState;
use crate::config::{Paths, UserConfig};
use crate::plugins::GoogleBooksClient;
use crate::stores::SongCatalog;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// shelfmood - book curator and mood recommender
#[derive(Parser, Debug)]
#[command(name = "shelfmood")]
#[command(version)]
#[command(about = "Personal book library curator and mood-based song recommender")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8501)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };

    // keep http client internals quiet unless asked for
    let filter = tracing_subscriber::EnvFilter::new(format!(
        "{},hyper=warn,reqwest=warn",
        log_level
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("shelfmood v{} starting...", env!("CARGO_PKG_VERSION"));

    let paths = Paths::init(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let config = UserConfig::load()?;
    info!(
        "Book search: {} (max {} results, timeout {}s)",
        config.books_api_url, config.search_max_results, config.request_timeout_secs
    );

    start_shelfmood(args.host, args.port, config).await
}

async fn start_shelfmood(host: String, port: u16, config: UserConfig) -> Result<()> {
    let search = GoogleBooksClient::from_config(&config)?;
    let catalog = SongCatalog::builtin();
    info!("Song catalog genres: {:?}", catalog.genre_names());

    let state = actix_web::web::Data::new(AppState::new(
        Arc::new(search),
        catalog,
        config.recommendation_limit,
    ));

    // Drop idle sessions in the background
    let sweeper = state.clone();
    let max_idle = config.session_idle();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sweeper.sessions.purge_idle(max_idle);
            if purged > 0 {
                info!(
                    "Purged {} idle sessions ({} active)",
                    purged,
                    sweeper.sessions.count()
                );
            }
        }
    });

    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    use actix_cors::Cors;
    use actix_web::{middleware, App, HttpServer};

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
