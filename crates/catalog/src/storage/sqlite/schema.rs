//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    price TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 0,
    created_on TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_products_category ON products(category);
"#;

pub const SELECT_ALL_PRODUCTS: &str = r#"
SELECT id, name, category, price, quantity, created_on
FROM products
ORDER BY id
"#;

pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (name, category, price, quantity, created_on)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, category = ?3, price = ?4, quantity = ?5, created_on = ?6
WHERE id = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM products WHERE id = ?1
"#;
