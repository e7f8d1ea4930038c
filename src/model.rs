use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::FooStoreError;
use crate::results::DbRow;
use crate::types::RowValues;

/// One row of the `foo` table.
///
/// `id` and `timestamp` are assigned by the database when the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Foo {
    pub id: i64,
    pub value: String,
    pub timestamp: NaiveDateTime,
}

impl Foo {
    /// Map a row selected as `id, value, timestamp`.
    ///
    /// A NULL `value` reads as the empty string.
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError::ConversionError` if a column is missing or has the wrong type.
    pub fn from_row(row: &DbRow) -> Result<Self, FooStoreError> {
        let id = *column(row, "id")?
            .as_int()
            .ok_or_else(|| FooStoreError::ConversionError("id is not an integer".to_string()))?;

        let value = match column(row, "value")? {
            RowValues::Null => String::new(),
            RowValues::Text(text) => text.clone(),
            other => {
                return Err(FooStoreError::ConversionError(format!(
                    "value is not text: {other:?}"
                )));
            }
        };

        let timestamp = column(row, "timestamp")?.as_timestamp().ok_or_else(|| {
            FooStoreError::ConversionError(format!("timestamp of foo {id} is not a timestamp"))
        })?;

        Ok(Foo {
            id,
            value,
            timestamp,
        })
    }
}

fn column<'a>(row: &'a DbRow, name: &str) -> Result<&'a RowValues, FooStoreError> {
    row.get(name)
        .ok_or_else(|| FooStoreError::ConversionError(format!("missing column `{name}`")))
}
