//! PostgreSQL implementation of ClockRepository

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Connection, Error as SqlxError, PgConnection, PgPool};
use tokio::time::timeout;
use tracing::{debug, instrument};

use timecheck_core::traits::{ClockRepository, RepoResult};
use timecheck_core::{DomainError, ServerTime};

use super::error::map_db_error;

/// Default bound on one round-trip, pool acquire included
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL implementation of ClockRepository
#[derive(Clone)]
pub struct PgClockRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgClockRepository {
    /// Create a new PgClockRepository
    pub fn new(pool: PgPool) -> Self {
        Self::with_query_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    /// Create a repository whose round-trips give up after `query_timeout`
    pub fn with_query_timeout(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Explain why the pool could not open a connection
    ///
    /// The pool retries refused connects until its acquire timeout and then
    /// only reports `PoolTimedOut`; a single direct attempt recovers the
    /// underlying cause.
    async fn connect_failure(&self) -> DomainError {
        let options = self.pool.connect_options();

        match timeout(self.query_timeout, PgConnection::connect_with(&options)).await {
            Ok(Err(e)) => map_db_error(e),
            Ok(Ok(conn)) => {
                // Server came back between the two attempts
                let _ = conn.close().await;
                map_db_error(SqlxError::PoolTimedOut)
            }
            Err(_) => DomainError::database_failure(format!(
                "timed out connecting to database after {}ms",
                self.query_timeout.as_millis()
            )),
        }
    }
}

#[async_trait]
impl ClockRepository for PgClockRepository {
    #[instrument(skip(self))]
    async fn current_time(&self) -> RepoResult<ServerTime> {
        let query = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT now() AS now")
            .fetch_one(&self.pool);

        match timeout(self.query_timeout, query).await {
            Ok(Ok(now)) => Ok(ServerTime::new(now)),
            Ok(Err(SqlxError::PoolTimedOut)) if self.pool.size() == 0 => {
                debug!("pool has no live connections, connecting directly for the cause");
                Err(self.connect_failure().await)
            }
            Ok(Err(e)) => Err(map_db_error(e)),
            Err(_) => Err(DomainError::database_failure(format!(
                "query timed out after {}ms",
                self.query_timeout.as_millis()
            ))),
        }
    }
}
