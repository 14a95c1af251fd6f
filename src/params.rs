use rusqlite::ToSql;
use rusqlite::types::Value;

use crate::value::SqlValue;

/// Convert a single [`SqlValue`] to a driver value.
#[must_use]
pub fn to_sqlite_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Int(i) => Value::Integer(*i),
        SqlValue::Float(f) => Value::Real(*f),
        SqlValue::Text(s) => Value::Text(s.clone()),
        SqlValue::Blob(bytes) => Value::Blob(bytes.clone()),
        SqlValue::Null => Value::Null,
    }
}

/// Positional parameter container for statement execution.
pub struct Params(Vec<Value>);

impl Params {
    /// Convert bound values in declared order, 1-based positionally.
    #[must_use]
    pub fn convert(values: &[SqlValue]) -> Self {
        Self(values.iter().map(to_sqlite_value).collect())
    }

    /// Borrow the underlying values.
    #[must_use]
    pub fn as_values(&self) -> &[Value] {
        &self.0
    }

    /// Build a borrowed params slice suitable for rusqlite execution.
    #[must_use]
    pub fn as_refs(&self) -> Vec<&dyn ToSql> {
        self.0.iter().map(|v| v as &dyn ToSql).collect()
    }
}
