use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Connects with retries, then applies the embedded migrations when asked to.
    pub async fn new_pool(config: &DatabaseConfig, run_migrations: bool) -> Result<ConnectionPool> {
        let pool = Self::connect_with_retry(config).await?;

        if run_migrations {
            info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            info!("✅ Database migrations applied");
        }

        info!("✅ Database connected successfully");

        Ok(pool)
    }

    async fn connect_with_retry(config: &DatabaseConfig) -> Result<ConnectionPool> {
        let mut attempt = 1;

        loop {
            let result = PgPoolOptions::new()
                .max_connections(20)
                .min_connections(1)
                .acquire_timeout(Duration::from_secs(30))
                .idle_timeout(Duration::from_secs(600))
                .connect(&config.url)
                .await;

            match result {
                Ok(pool) => return Ok(pool),
                Err(e) if attempt < config.connect_attempts => {
                    warn!(
                        "Database not ready yet (attempt {attempt}/{}): {e}",
                        config.connect_attempts
                    );
                    tokio::time::sleep(config.connect_delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(e).context(format!(
                        "Failed to connect database after {} attempts",
                        config.connect_attempts
                    ));
                }
            }
        }
    }
}
