//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the products table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    uid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    price REAL NOT NULL CHECK (price > 0)
);
"#;

pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (uid, name, price)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_PRODUCT_BY_ID: &str = r#"
SELECT uid, name, price
FROM products
WHERE uid = ?1
"#;

pub const SELECT_ALL_PRODUCTS: &str = r#"
SELECT uid, name, price
FROM products
ORDER BY rowid
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, price = ?3
WHERE uid = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM products
WHERE uid = ?1
"#;
