use rusqlite::types::Value;

use crate::types::RowValues;

/// Convert a single `RowValues` to an owned rusqlite `Value`.
///
/// Owned values are required because binding happens on a blocking thread after the caller's
/// borrow has ended.
#[must_use]
pub fn row_value_to_sqlite_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        // Same text shape CURRENT_TIMESTAMP produces, so stored values compare and sort together.
        RowValues::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        RowValues::Null => Value::Null,
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// `SQLite` parameters in binding order.
#[derive(Debug, Clone, Default)]
pub struct Params(pub Vec<Value>);

impl Params {
    #[must_use]
    pub fn convert(params: &[RowValues]) -> Self {
        Params(params.iter().map(row_value_to_sqlite_value).collect())
    }

    #[must_use]
    pub fn as_values(&self) -> &[Value] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn converts_each_variant() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap();
        let params = Params::convert(&[
            RowValues::Int(1),
            RowValues::Bool(true),
            RowValues::Text("a".into()),
            RowValues::Timestamp(ts),
            RowValues::Null,
        ]);
        assert_eq!(
            params.as_values(),
            [
                Value::Integer(1),
                Value::Integer(1),
                Value::Text("a".into()),
                Value::Text("2024-01-02 03:04:05".into()),
                Value::Null,
            ]
        );
    }
}
