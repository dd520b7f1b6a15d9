//! Startup schema handling: drop and recreate the Dog table, then seed it.
//!
//! The reset is destructive: every start wipes whatever the previous run stored.

use crate::error::StoreError;
use crate::model::seed_dogs;
use crate::service::{insert, DogStore};
use crate::sql;
use sqlx::PgPool;

/// Drop the Dog table if present and create it again.
pub async fn reset_schema(pool: &PgPool) -> Result<(), StoreError> {
    for stmt in [sql::drop_table(), sql::create_table()] {
        tracing::debug!(sql = %stmt, "ddl");
        sqlx::query(&stmt).execute(pool).await?;
    }
    Ok(())
}

/// Insert the fixed seed rows in one transaction.
pub async fn seed(pool: &PgPool) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    for dog in seed_dogs() {
        insert(&mut *tx, &dog).await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Check connectivity, then reset and seed. A failed check is logged and the reset is attempted anyway.
pub async fn bootstrap(store: &DogStore) -> Result<(), StoreError> {
    match store.ping().await {
        Ok(()) => tracing::info!("connection to the database established"),
        Err(e) => tracing::error!(error = %e, "unable to connect to the database"),
    }
    reset_schema(store.pool()).await?;
    seed(store.pool()).await?;
    tracing::info!(table = sql::DOGS_TABLE, rows = seed_dogs().len(), "schema reset and seeded");
    Ok(())
}
