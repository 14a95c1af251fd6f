use std::collections::HashMap;
use std::sync::Arc;

use rusqlite::Statement;
use rusqlite::types::Value;

use crate::error::StoreError;
use crate::params::Params;
use crate::value::SqlValue;

use super::row::StoreRow;

/// The rows returned by one query, in store delivery order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    rows: Vec<StoreRow>,
}

impl ResultSet {
    #[must_use]
    pub fn rows(&self) -> &[StoreRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Run a prepared statement and materialize every row.
    ///
    /// Rows are kept in the order the store delivers them; no client-side
    /// reordering happens, so a lookup on a non-unique field sees the
    /// store's first row first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Statement` if executing the query or reading
    /// a row fails.
    pub fn from_statement(stmt: &mut Statement<'_>, params: &Params) -> Result<Self, StoreError> {
        let column_names: Arc<Vec<String>> = Arc::new(
            stmt.column_names()
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        let column_index: Arc<HashMap<String, usize>> = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect(),
        );

        let param_refs = params.as_refs();
        let mut rows_iter = stmt.query(&param_refs[..])?;

        let mut rows = Vec::new();
        while let Some(row) = rows_iter.next()? {
            let mut values = Vec::with_capacity(column_names.len());
            for idx in 0..column_names.len() {
                values.push(extract_value(row, idx)?);
            }
            rows.push(StoreRow::with_index(
                Arc::clone(&column_names),
                Arc::clone(&column_index),
                values,
            ));
        }

        Ok(Self { rows })
    }
}

/// Extract a [`SqlValue`] from a driver row.
fn extract_value(row: &rusqlite::Row<'_>, idx: usize) -> Result<SqlValue, StoreError> {
    let value: Value = row.get(idx).map_err(StoreError::Statement)?;
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Integer(i) => SqlValue::Int(i),
        Value::Real(f) => SqlValue::Float(f),
        Value::Text(s) => SqlValue::Text(s),
        Value::Blob(b) => SqlValue::Blob(b),
    })
}
