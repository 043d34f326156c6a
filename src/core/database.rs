//! Database - the single MySQL pool shared by every repository
//!
//! Every call goes through `execute`/`fetch_all`/`execute_raw`, which bound the
//! round-trip with the configured timeout. Statements are always bound with
//! `?` placeholders, never formatted into the SQL text.

use super::config::{DatabaseConfig, PoolSettings};
use super::error::{ConnectionError, PersistenceError};
use sqlx::mysql::{
    MySqlArguments, MySqlConnectOptions, MySqlPoolOptions, MySqlQueryResult, MySqlRow,
    MySqlSslMode,
};
use sqlx::query::{Query, QueryAs};
use sqlx::{Connection, FromRow, MySql, MySqlPool};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
    timeout: Duration,
}

impl Database {
    /// Opens the pool and verifies one connection with a ping.
    #[instrument(skip_all, fields(host = %config.host, database = %config.database))]
    pub async fn connect(
        config: &DatabaseConfig,
        settings: &PoolSettings,
    ) -> Result<Self, ConnectionError> {
        let ssl_mode = if config.require_ssl {
            MySqlSslMode::Required
        } else {
            MySqlSslMode::Preferred
        };
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.username)
            .password(&config.password)
            .ssl_mode(ssl_mode);

        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.timeout)
            .connect_with(options)
            .await
            .map_err(ConnectionError::Connect)?;

        let database = Self::from_pool(pool, settings.timeout);
        database.ping().await?;
        info!("Database connection established");
        Ok(database)
    }

    /// Wraps an already opened pool (tests, embedding).
    pub fn from_pool(pool: MySqlPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn ping(&self) -> Result<(), ConnectionError> {
        let mut conn = self.pool.acquire().await.map_err(ConnectionError::Ping)?;
        conn.ping().await.map_err(ConnectionError::Ping)
    }

    /// Runs a write statement; callers read `rows_affected()` / `last_insert_id()`.
    pub async fn execute<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Result<MySqlQueryResult, PersistenceError> {
        self.bounded(query.execute(&self.pool)).await
    }

    /// Runs a parameterless statement such as DDL.
    pub async fn execute_raw(&self, sql: &'static str) -> Result<MySqlQueryResult, PersistenceError> {
        self.bounded(sqlx::raw_sql(sql).execute(&self.pool)).await
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, MySql, T, MySqlArguments>,
    ) -> Result<Vec<T>, PersistenceError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, MySqlRow>,
    {
        self.bounded(query.fetch_all(&self.pool)).await
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, PersistenceError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(PersistenceError::Timeout(self.timeout)),
        }
    }

    pub async fn close(&self) {
        debug!("Closing database pool");
        self.pool.close().await;
        info!("Database pool closed");
    }
}
