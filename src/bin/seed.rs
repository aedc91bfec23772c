//! Offline seeding tool: wipes and regenerates the synthetic review corpus
//! for the whole attraction-id domain.

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use reviews_backend::config::Config;
use reviews_backend::db::pg::PgReviewStore;
use reviews_backend::db::pool::get_db_pool;
use reviews_backend::db::seed::{attraction_ids, generate_seed_data};
use reviews_backend::db::store::ReviewStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    Config::init();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let pool = get_db_pool().await;
    sqlx::migrate!().run(&pool).await?;

    let store = PgReviewStore::new(pool.clone());

    // Reseeding replaces anything previously generated for the domain.
    for attraction_id in attraction_ids() {
        store.delete_by_attraction(attraction_id).await?;
    }

    let corpus = generate_seed_data();
    info!(reviews = corpus.len(), "inserting seed corpus");
    store.insert_many(corpus).await?;

    pool.close().await;
    info!("seeding complete");
    Ok(())
}
