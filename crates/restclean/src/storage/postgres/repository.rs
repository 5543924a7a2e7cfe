//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use uuid::Uuid;

use restclean_core::product::Product;
use restclean_core::storage::{ProductRepository, RepositoryError, Result};

use super::error::map_sqlx_error;
use super::schema;

/// PostgreSQL-based repository implementation.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects to the server at `url` and creates the schema.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and creates the schema.
    pub async fn from_pool(pool: PgPool) -> Result<Self> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&pool)
            .await
            .map_err(|e| map_sqlx_error(e, "schema"))?;

        tracing::info!("successfully connected to db");
        Ok(Self { pool })
    }

    /// Runs a single statement in its own transaction and returns the
    /// number of affected rows.
    async fn execute_in_transaction(
        &self,
        sql: &'static str,
        id: Uuid,
        fields: Option<(&str, f64)>,
    ) -> std::result::Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let mut query = sqlx::query(sql).bind(id);
        if let Some((name, price)) = fields {
            query = query.bind(name.to_string()).bind(price);
        }
        let rows = query.execute(&mut *tx).await?.rows_affected();

        tx.commit().await?;
        Ok(rows)
    }
}

fn row_to_product(row: &PgRow) -> std::result::Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("uid")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
    })
}

#[async_trait]
impl ProductRepository for PostgresRepository {
    async fn save(&self, product: &Product) -> Result<Product> {
        self.execute_in_transaction(
            schema::INSERT_PRODUCT,
            product.id,
            Some((&product.name, product.price)),
        )
        .await
        .map_err(|e| map_sqlx_error(e, &product.id.to_string()))?;

        Ok(product.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product> {
        let row = sqlx::query(schema::SELECT_PRODUCT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, &id.to_string()))?;

        row_to_product(&row).map_err(|e| map_sqlx_error(e, &id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(schema::SELECT_ALL_PRODUCTS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "*"))?;

        rows.iter()
            .map(|row| row_to_product(row).map_err(|e| map_sqlx_error(e, "*")))
            .collect()
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let rows = self
            .execute_in_transaction(
                schema::UPDATE_PRODUCT,
                product.id,
                Some((&product.name, product.price)),
            )
            .await
            .map_err(|e| map_sqlx_error(e, &product.id.to_string()))?;

        if rows == 0 {
            return Err(RepositoryError::not_found(product.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let rows = self
            .execute_in_transaction(schema::DELETE_PRODUCT, id, None)
            .await
            .map_err(|e| map_sqlx_error(e, &id.to_string()))?;

        if rows == 0 {
            return Err(RepositoryError::not_found(id));
        }
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("connection to db closed");
    }
}
