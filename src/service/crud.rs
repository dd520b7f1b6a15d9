//! Data access for the Dog table.

use crate::error::StoreError;
use crate::model::{Dog, NewDog, Page, SortAttribute, SortOrder};
use crate::sql;
use sqlx::{PgExecutor, PgPool};

/// Typed create/list operations over the shared connection pool.
#[derive(Clone)]
pub struct DogStore {
    pool: PgPool,
}

impl DogStore {
    pub fn new(pool: PgPool) -> Self {
        DogStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip `SELECT 1` to prove the store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// One page of dogs ordered by `attribute` then id.
    pub async fn list(
        &self,
        attribute: SortAttribute,
        order: SortOrder,
        page: Page,
    ) -> Result<Vec<Dog>, StoreError> {
        let sql = sql::select_page(attribute, order);
        tracing::debug!(sql = %sql, limit = page.limit(), offset = page.offset(), "query");
        let rows = sqlx::query_as::<_, Dog>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert one dog. A taken name surfaces as `StoreError::UniqueViolation`.
    pub async fn create(&self, dog: &NewDog) -> Result<Dog, StoreError> {
        insert(&self.pool, dog).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, dog: &NewDog) -> Result<Dog, StoreError>
where
    E: PgExecutor<'e>,
{
    let sql = sql::insert();
    tracing::debug!(sql = %sql, name = %dog.name, "query");
    let row = sqlx::query_as::<_, Dog>(&sql)
        .bind(&dog.name)
        .bind(&dog.color)
        .bind(dog.tail_length)
        .bind(dog.weight)
        .fetch_one(executor)
        .await?;
    Ok(row)
}
