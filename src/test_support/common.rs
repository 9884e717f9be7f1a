use std::env;
use std::sync::{Arc, Once};

use actix_web::web;
use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bootstrap::{connect_and_migrate, load_dotenv};
use crate::game_management::ScoreboardService;
use crate::store::InMemoryGameStore;

static INIT: Once = Once::new();

pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sea_orm=info"));
        // Another test harness may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_test_writer())
            .try_init();
    });
}

/// Service over a fresh in-memory store, ready for `App::app_data`
pub fn in_memory_service() -> web::Data<ScoreboardService> {
    web::Data::new(ScoreboardService::new(Arc::new(InMemoryGameStore::new())))
}

/// Test bootstrap that loads .env, ensures *_test database, inits tracing, connects+migrates once
pub async fn test_bootstrap() -> DatabaseConnection {
    load_dotenv();
    let url = ensure_test_db();
    init_tracing_for_tests();
    connect_and_migrate(&url)
        .await
        .expect("DB connect or migration failed")
}

fn ensure_test_db() -> String {
    let url = env::var("DATABASE_URL").expect("DATABASE_URL is required for database tests");
    assert!(
        url.contains("_test"),
        "Refusing to run unless DATABASE_URL points to a *_test database. Current: {url}"
    );
    url
}
