use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "referral_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Response cache lives in SQLite, one connection per worker thread.
    let db = Database::new(config.cache_path.clone());
    if let Err(e) = init_db(&db) {
        error!("cache database initialization failed: {e}");
        std::process::exit(1);
    }

    let now = chrono::Utc::now().timestamp();
    match db.with_conn(|conn| crate::db::cache::purge_expired(conn, now, config.cache_ttl_secs)) {
        Ok(n) => info!(purged = n, "stale cache entries removed"),
        Err(e) => warn!("could not purge stale cache entries: {e}"),
    }

    let api = match ApiClient::new(config.api_base_url.clone(), config.http_timeout) {
        Ok(client) => client.with_cache(db, config.cache_ttl_secs),
        Err(e) => {
            error!("backend client setup failed: {e}");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.bind_addr,
        backend = %config.api_base_url,
        workers = config.max_workers,
        "starting referral dashboard"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &api) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
