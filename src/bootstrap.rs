use std::env;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use tokio::sync::OnceCell;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::store::{DatabaseGameStore, GameStore, InMemoryGameStore};

static DOTENV_INIT: OnceLock<()> = OnceLock::new();
static TRACING_INIT: OnceLock<()> = OnceLock::new();
static DB_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Load environment variables from .env file exactly once
pub fn load_dotenv() {
    DOTENV_INIT.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Initialize tracing exactly once
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sea_orm=info"));

        let is_production =
            env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production";

        if is_production {
            // JSON formatter for production
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            // Pretty formatter for development
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    });
}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
    /// Postgres URL; the in-memory store is used when unset
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| {
            warn!("CORS_ALLOWED_ORIGIN not set, using default");
            DEFAULT_CORS_ORIGIN.to_string()
        });

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
            database_url,
        })
    }
}

/// Connect to database and run migrations exactly once, return a cheap clone thereafter
pub async fn connect_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = DB_CONNECTION
        .get_or_try_init(|| async {
            info!("Database URL: {}", redact_db_url(database_url));

            let db: DatabaseConnection = Database::connect(database_url)
                .await
                .context("Failed to connect to database")?;

            info!("Connected to database successfully!");

            Migrator::up(&db, None)
                .await
                .context("Failed to run migrations")?;

            info!("Database migrations completed successfully!");

            Ok::<_, anyhow::Error>(db)
        })
        .await?;

    Ok(db.clone())
}

/// Pick the game store for this configuration
pub async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    match &config.database_url {
        Some(url) => {
            let db = connect_and_migrate(url).await?;
            Ok(Arc::new(DatabaseGameStore::new(db)))
        }
        None => {
            warn!("DATABASE_URL not set, games are kept in memory only");
            Ok(Arc::new(InMemoryGameStore::new()))
        }
    }
}

/// Helper to log a DB URL without credentials.
pub fn redact_db_url(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            if url[..colon_pos].contains("//") {
                let mut s = String::with_capacity(url.len());
                s.push_str(&url[..(colon_pos + 1)]);
                s.push_str("***");
                s.push_str(&url[at_pos..]);
                return s;
            }
        }
    }
    url.to_string()
}
