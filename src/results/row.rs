use std::collections::HashMap;
use std::sync::Arc;

use crate::error::StoreError;
use crate::value::SqlValue;

/// A row from a query result.
///
/// Column names (and the name-to-index lookup built from them) are shared
/// across all rows in a result set.
#[derive(Debug, Clone)]
pub struct StoreRow {
    column_names: Arc<Vec<String>>,
    values: Vec<SqlValue>,
    column_index: Arc<HashMap<String, usize>>,
}

impl StoreRow {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<SqlValue>) -> Self {
        let column_index = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        Self {
            column_names,
            values,
            column_index,
        }
    }

    pub(crate) fn with_index(
        column_names: Arc<Vec<String>>,
        column_index: Arc<HashMap<String, usize>>,
        values: Vec<SqlValue>,
    ) -> Self {
        Self {
            column_names,
            values,
            column_index,
        }
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Get a value by column name, or None if the column is absent.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&SqlValue> {
        self.column_index
            .get(column_name)
            .and_then(|&idx| self.values.get(idx))
    }

    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Decode an integer column. Only a value the driver already returned
    /// as an integer passes; anything else is a materialization error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Materialization` if the column is missing,
    /// NULL, or not an integer.
    pub fn require_i64(
        &self,
        entity: &'static str,
        column: &'static str,
    ) -> Result<i64, StoreError> {
        let value = self.require(entity, column)?;
        value.as_int().ok_or_else(|| {
            StoreError::materialization(
                entity,
                column,
                format!("expected INTEGER, found {}", value.kind_name()),
            )
        })
    }

    /// Decode a float column. Any numeric value is accepted and narrowed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Materialization` if the column is missing,
    /// NULL, or non-numeric.
    pub fn require_f64(
        &self,
        entity: &'static str,
        column: &'static str,
    ) -> Result<f64, StoreError> {
        let value = self.require(entity, column)?;
        value.as_float().ok_or_else(|| {
            StoreError::materialization(
                entity,
                column,
                format!("expected REAL, found {}", value.kind_name()),
            )
        })
    }

    /// Decode a text column.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Materialization` if the column is missing,
    /// NULL, or not text.
    pub fn require_text(
        &self,
        entity: &'static str,
        column: &'static str,
    ) -> Result<String, StoreError> {
        let value = self.require(entity, column)?;
        value.as_text().map(str::to_owned).ok_or_else(|| {
            StoreError::materialization(
                entity,
                column,
                format!("expected TEXT, found {}", value.kind_name()),
            )
        })
    }

    fn require(
        &self,
        entity: &'static str,
        column: &'static str,
    ) -> Result<&SqlValue, StoreError> {
        let value = self
            .get(column)
            .ok_or_else(|| {
                StoreError::materialization(entity, column, "column missing from result row")
            })?;
        if value.is_null() {
            return Err(StoreError::materialization(entity, column, "unexpected NULL"));
        }
        Ok(value)
    }
}
