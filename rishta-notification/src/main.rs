use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod events;
mod models;
mod routes;
mod schema;
mod services;

use config::AppConfig;
use rishta_shared::clients::db::{create_pool, DbPool};
use rishta_shared::clients::email::EmailClient;
use rishta_shared::clients::rabbitmq::RabbitMQClient;
use rishta_shared::clients::sms::SmsClient;

pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub rabbitmq: RabbitMQClient,
    pub email: EmailClient,
    pub sms: SmsClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rishta_shared::middleware::init_tracing("rishta-notification");

    let config = AppConfig::load()?;
    let port = config.port;

    // Set JWT_SECRET env var for the auth extractor middleware
    std::env::set_var("JWT_SECRET", &config.jwt_secret);

    let db = create_pool(&config.database_url);
    let rabbitmq = RabbitMQClient::connect(&config.rabbitmq_url).await?;
    let email = EmailClient::new(&config.email_api_key, &config.email_from, &config.email_from_name);
    let sms = SmsClient::new(&config.sms_account_sid, &config.sms_auth_token, &config.sms_from_number);

    let state = Arc::new(AppState { db, config, rabbitmq, email, sms });

    // Spawn interest event subscriber
    let interest_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = events::subscriber::listen_interest_events(interest_state).await {
            tracing::error!(error = %e, "interest event subscriber failed");
        }
    });

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/notifications", get(routes::notifications::list_notifications))
        .route("/notifications/unread-count", get(routes::notifications::unread_count))
        .route("/notifications/mark-all-read", post(routes::notifications::mark_all_read))
        .route("/notifications/:id/read", post(routes::notifications::mark_read))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "rishta-notification starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
