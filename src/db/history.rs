//! QuestDB-backed price history store.
//!
//! One append and one bounded query per invocation; record expiry is the
//! store's job via the `expires_at` TTL hint, the core never deletes.

use crate::config::Config;
use crate::error::MonitorError;
use crate::models::PriceSample;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::{Client, NoTls};
use tracing::{error, warn};

/// Store interface the orchestrator depends on.
#[async_trait]
pub trait PriceHistoryStore: Send + Sync {
    /// At-most-once write of one sample. Failure must not abort the run.
    async fn append(&self, sample: &PriceSample) -> Result<(), MonitorError>;

    /// Up to `limit` most recent samples for `symbol`, newest-first.
    async fn query_recent(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PriceSample>, MonitorError>;
}

pub struct HistoryStore {
    table: String,
    client: Arc<RwLock<Option<Client>>>,
}

impl HistoryStore {
    /// Connect and ensure the schema exists. A failed connection yields a
    /// disconnected store whose operations degrade instead of aborting the
    /// invocation.
    pub async fn connect(config: &Config) -> Self {
        match tokio_postgres::connect(&config.questdb_url, NoTls).await {
            Ok((client, connection)) => {
                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        error!(error = %e, "history store connection error");
                    }
                });

                let store = Self {
                    table: config.history_table.clone(),
                    client: Arc::new(RwLock::new(Some(client))),
                };
                if let Err(e) = store.init_schema().await {
                    warn!(error = %e, "failed to initialize history schema");
                }
                store
            }
            Err(e) => {
                warn!(error = %e, "history store unavailable, continuing without persistence");
                Self {
                    table: config.history_table.clone(),
                    client: Arc::new(RwLock::new(None)),
                }
            }
        }
    }

    async fn init_schema(&self) -> Result<(), MonitorError> {
        let client = self.client.read().await;
        if let Some(ref c) = *client {
            // QuestDB syntax: designated TIMESTAMP first, PARTITION BY after.
            // symbol is the partition key, timestamp the sort key.
            let ddl = format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    timestamp TIMESTAMP,
                    symbol SYMBOL,
                    price STRING,
                    expires_at LONG
                ) TIMESTAMP(timestamp) PARTITION BY DAY",
                self.table
            );
            c.execute(ddl.as_str(), &[])
                .await
                .map_err(|e| MonitorError::StoreWriteFailed(format!("create table: {}", e)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl PriceHistoryStore for HistoryStore {
    async fn append(&self, sample: &PriceSample) -> Result<(), MonitorError> {
        let client = self.client.read().await;
        let Some(ref c) = *client else {
            return Err(MonitorError::StoreWriteFailed(
                "store not connected".to_string(),
            ));
        };

        let timestamp = chrono::DateTime::from_timestamp(sample.timestamp, 0)
            .ok_or_else(|| {
                MonitorError::StoreWriteFailed(format!(
                    "timestamp {} out of range",
                    sample.timestamp
                ))
            })?
            .naive_utc();

        let insert = format!(
            "INSERT INTO {} (timestamp, symbol, price, expires_at)
             VALUES ($1, $2, $3, $4)",
            self.table
        );
        c.execute(
            insert.as_str(),
            &[&timestamp, &sample.symbol, &sample.price, &sample.expires_at],
        )
        .await
        .map_err(|e| MonitorError::StoreWriteFailed(e.to_string()))?;

        Ok(())
    }

    async fn query_recent(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PriceSample>, MonitorError> {
        let client = self.client.read().await;
        let Some(ref c) = *client else {
            // Disconnected store reads as empty history.
            return Ok(Vec::new());
        };

        let select = format!(
            "SELECT timestamp, symbol, price, expires_at
             FROM {}
             WHERE symbol = $1
             ORDER BY timestamp DESC
             LIMIT {}",
            self.table, limit
        );
        let rows = c
            .query(select.as_str(), &[&symbol])
            .await
            .map_err(|e| MonitorError::StoreQueryFailed(e.to_string()))?;

        let mut samples = Vec::with_capacity(rows.len());
        for row in rows {
            let timestamp: chrono::NaiveDateTime = row.get(0);
            let symbol: String = row.get(1);
            let price: String = row.get(2);
            let expires_at: i64 = row.get(3);

            samples.push(PriceSample {
                symbol,
                timestamp: timestamp.and_utc().timestamp(),
                price,
                expires_at,
            });
        }

        Ok(samples)
    }
}
