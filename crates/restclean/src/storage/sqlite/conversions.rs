//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and products.

use rusqlite::Row;
use uuid::Uuid;

use restclean_core::product::Product;

/// Convert a SQLite row to a Product.
///
/// Expected columns: uid, name, price
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let uid: String = row.get(0)?;
    let name: String = row.get(1)?;
    let price: f64 = row.get(2)?;

    Ok(Product {
        id: parse_uuid(&uid)?,
        name,
        price,
    })
}

/// Parse a UUID stored as text.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
