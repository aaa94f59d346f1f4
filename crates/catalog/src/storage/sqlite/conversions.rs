//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use catalog_core::catalog::Product;
use chrono::NaiveDate;
use rusqlite::Row;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a SQLite row to a Product.
///
/// Expected columns: id, name, category, price, quantity, created_on
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let category: String = row.get(2)?;
    let price: String = row.get(3)?;
    let quantity: i32 = row.get(4)?;
    let created_on: String = row.get(5)?;

    Ok(Product {
        id,
        name,
        category,
        price,
        quantity,
        created_on: parse_date(&created_on)?,
    })
}

/// Format a date as `YYYY-MM-DD` for storage.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
