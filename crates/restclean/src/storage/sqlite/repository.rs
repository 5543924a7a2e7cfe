//! SQLite repository implementation.
//!
//! Implements `ProductRepository` from `restclean_core::storage` using SQLite.
//! Every write runs as begin, prepare, execute, commit.

use async_trait::async_trait;
use rusqlite::Params;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use restclean_core::product::Product;
use restclean_core::storage::{ProductRepository, RepositoryError, Result};

use super::conversions::row_to_product;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Runs a single statement in its own transaction and returns the number of
/// affected rows.
fn execute_in_transaction<P: Params>(
    conn: &mut rusqlite::Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<usize> {
    let tx = conn.transaction()?;
    let rows = {
        let mut stmt = tx.prepare(sql)?;
        stmt.execute(params)?
    };
    tx.commit()?;
    Ok(rows)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The schema is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn save(&self, product: &Product) -> Result<Product> {
        let id = product.id.to_string();
        let name = product.name.clone();
        let price = product.price;

        self.conn
            .call(move |conn| {
                execute_in_transaction(conn, schema::INSERT_PRODUCT, rusqlite::params![id, name, price])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, product.id.to_string()))?;

        Ok(product.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PRODUCT_BY_ID)
                    .map_err(wrap_err)?;
                stmt.query_row([&id_str], row_to_product).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PRODUCTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_product).map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "*"))
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let id = product.id.to_string();
        let name = product.name.clone();
        let price = product.price;

        self.conn
            .call(move |conn| {
                let rows = execute_in_transaction(
                    conn,
                    schema::UPDATE_PRODUCT,
                    rusqlite::params![id, name, price],
                )
                .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, product.id.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = execute_in_transaction(conn, schema::DELETE_PRODUCT, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn close(&self) {
        match self.conn.clone().close().await {
            Ok(()) => tracing::info!("connection to db closed"),
            Err(err) => tracing::error!(error = %err, "Failed to close db connection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn test_product(name: &str, price: f64) -> Product {
        Product::new(name, price).with_id(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_save_then_find_round_trips() {
        let repo = test_repo().await;
        let product = test_product("Car", 1.23);

        let saved = repo.save(&product).await.unwrap();
        let found = repo.find_by_id(product.id).await.unwrap();

        assert_eq!(saved, product);
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let repo = test_repo().await;
        let id = Uuid::new_v4();

        let result = repo.find_by_id(id).await;

        assert_eq!(result, Err(RepositoryError::not_found(id)));
    }

    #[tokio::test]
    async fn test_save_duplicate_id_fails() {
        let repo = test_repo().await;
        let product = test_product("Car", 1.23);

        repo.save(&product).await.unwrap();
        let result = repo.save(&product).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_non_positive_price() {
        let repo = test_repo().await;

        let result = repo.save(&test_product("Car", 0.0)).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = test_repo().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        let car = test_product("Car", 1.23);
        let bike = test_product("Bike", 0.5);
        repo.save(&car).await.unwrap();
        repo.save(&bike).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![car, bike]);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = test_repo().await;
        let product = test_product("Car", 1.23);
        repo.save(&product).await.unwrap();

        let changed = Product::new("auto", 999.9).with_id(product.id);
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.find_by_id(product.id).await.unwrap(), changed);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = test_repo().await;

        let result = repo.update(&test_product("Car", 1.23)).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = test_repo().await;
        let product = test_product("Car", 1.23);
        repo.save(&product).await.unwrap();

        repo.delete(product.id).await.unwrap();

        assert!(repo.find_by_id(product.id).await.unwrap_err().is_not_found());
        assert!(repo.delete(product.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_calls_after_close_fail() {
        let repo = test_repo().await;

        repo.close().await;

        assert!(matches!(
            repo.find_all().await,
            Err(RepositoryError::ConnectionFailed(_))
        ));
    }
}
