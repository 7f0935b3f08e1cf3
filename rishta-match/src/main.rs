use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod compat;
mod config;
mod domain;
mod events;
mod models;
mod normalize;
mod routes;
mod schema;
mod services;

use config::AppConfig;
use rishta_shared::clients::db::{create_pool, DbPool};
use rishta_shared::clients::rabbitmq::RabbitMQClient;
use rishta_shared::clients::redis::RedisClient;

pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub rabbitmq: RabbitMQClient,
    pub redis: RedisClient,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rishta_shared::middleware::init_tracing("rishta-match");

    let config = AppConfig::load()?;
    let port = config.port;

    // Set JWT_SECRET env var for the auth extractor middleware
    std::env::set_var("JWT_SECRET", &config.jwt_secret);

    let db = create_pool(&config.database_url);
    let rabbitmq = RabbitMQClient::connect(&config.rabbitmq_url).await?;
    let redis = RedisClient::connect(&config.redis_url).await?;
    let metrics_handle = rishta_shared::middleware::init_metrics();

    let state = Arc::new(AppState { db, config, rabbitmq, redis, metrics_handle });

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::health::metrics))
        .route("/me", get(routes::profile::get_profile).patch(routes::profile::update_profile))
        .route("/preferences", get(routes::preferences::get_preferences).patch(routes::preferences::update_preferences))
        .route("/candidates", get(routes::candidates::list_candidates))
        .route("/interests", post(routes::interests::express_interest))
        .route("/interests/sent", get(routes::interests::list_sent))
        .route("/interests/received", get(routes::interests::list_received))
        .route("/interests/:id/respond", put(routes::interests::respond_interest))
        .layer(axum::middleware::from_fn(rishta_shared::middleware::metrics_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "rishta-match starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
