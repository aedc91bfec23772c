#![allow(dead_code, unused)]
use axum::routing::get;
use axum::{Json, Router};
use dotenvy::dotenv;
use sqlx::PgPool;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use reviews_backend::api;
use reviews_backend::api::review::ReviewDoc;
use reviews_backend::config::Config;
use reviews_backend::db::pool::get_db_pool;

#[tokio::main]
async fn main() {
    dotenv().ok();
    Config::init();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let pool = get_db_pool().await;
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let config = Config::get();
    let app = Router::new()
        .merge(api::health::health_routes())
        .merge(api::review::review_routes())
        .nest_service("/reviews-module", ServeDir::new(&config.public_dir))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ReviewDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(pool.clone());

    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);

    run_server(app, shutdown_tx, pool).await;
    println!("Shutdown complete.");
}

async fn shutdown_signal(mut shutdown_rx: broadcast::Receiver<()>, pool: PgPool) {
    tokio::select! {
        _ = signal::ctrl_c() => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = shutdown_rx.recv() => tracing::info!("Received shutdown signal."),
    }
    pool.close().await;
    tracing::info!("Database pool closed. Server shutting down.");
}

async fn run_server(app: Router, shutdown_tx: broadcast::Sender<()>, pool: PgPool) {
    let addr = SocketAddr::from(([127, 0, 0, 1], Config::get().server_port));
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");

    let shutdown_signal = shutdown_signal(shutdown_tx.subscribe(), pool.clone());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .expect("Server encountered an error");
}
