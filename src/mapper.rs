//! The generic CRUD engine shared by every typed repository.
//!
//! Each operation opens one physical connection, runs the driver work on
//! the blocking pool, and releases the connection on every exit path.
//! Connection- and statement-level failures are caught here, logged with
//! the operation and table name, and masked behind an empty result;
//! materialization failures propagate (see [`StoreError::is_fatal`]).

use std::sync::Arc;

use tracing::warn;

use crate::connection::{ConnectionProvider, close_quietly};
use crate::error::StoreError;
use crate::params::Params;
use crate::results::ResultSet;
use crate::schema::{Entity, EntityKind, identity_column, values_match};
use crate::sql;
use crate::value::SqlValue;

/// Entity-generic data mapper over a [`ConnectionProvider`].
///
/// Cloning is cheap; clones share the provider.
pub struct DataMapper<P: ConnectionProvider> {
    provider: Arc<P>,
}

impl<P: ConnectionProvider> Clone for DataMapper<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: ConnectionProvider> DataMapper<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Insert an entity, back-filling the store-generated identity when
    /// the entity's policy asks for it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking worker dies; statement
    /// and connection failures are logged and masked.
    pub async fn insert<E: Entity>(&self, entity: &mut E) -> Result<(), StoreError> {
        if let Some(id) = self.insert_row::<E>(entity.bind()).await? {
            entity.assign_identity(id);
        }
        Ok(())
    }

    /// Insert an entity whose identity is externally assigned; nothing is
    /// written back.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`DataMapper::insert`].
    pub async fn insert_assigned<E: Entity>(&self, entity: &E) -> Result<(), StoreError> {
        self.insert_row::<E>(entity.bind()).await.map(|_| ())
    }

    /// Update the row with the given identity, writing every persisted
    /// field from `entity`. Callers updating a subset of fields must
    /// pre-merge the unchanged ones onto the entity first.
    ///
    /// Returns the number of rows affected (0 on a masked failure).
    ///
    /// # Errors
    ///
    /// Same failure contract as [`DataMapper::insert`].
    pub async fn update<E: Entity>(&self, entity: &E, id: i64) -> Result<usize, StoreError> {
        debug_assert!(
            matches!(E::KIND, EntityKind::Generic),
            "projection entities are written once, never updated in place"
        );
        let mut values = entity.bind();
        debug_assert!(values_match(E::FIELDS, &values));
        values.push(SqlValue::Int(id));
        let query = sql::update(&E::TABLE, E::FIELDS);
        let res = self
            .run("update", move |conn| {
                let params = Params::convert(&values);
                let refs = params.as_refs();
                let mut stmt = conn.prepare(&query)?;
                Ok(stmt.execute(&refs[..])?)
            })
            .await;
        Self::masked(res, "update", E::TABLE.name, 0)
    }

    /// Delete the row with the given identity.
    ///
    /// Returns the number of rows affected (0 on a masked failure).
    ///
    /// # Errors
    ///
    /// Same failure contract as [`DataMapper::insert`].
    pub async fn delete<E: Entity>(&self, id: i64) -> Result<usize, StoreError> {
        debug_assert!(
            matches!(E::KIND, EntityKind::Generic),
            "projection entities are written once, never deleted through the mapper"
        );
        let query = sql::delete(&E::TABLE, E::FIELDS);
        let res = self
            .run("delete", move |conn| {
                let params = Params::convert(&[SqlValue::Int(id)]);
                let refs = params.as_refs();
                let mut stmt = conn.prepare(&query)?;
                Ok(stmt.execute(&refs[..])?)
            })
            .await;
        Self::masked(res, "delete", E::TABLE.name, 0)
    }

    /// Find one entity by its identity field.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Materialization` if a row exists but cannot
    /// be decoded; other failures are masked to `None`.
    pub async fn find_by_id<E: Entity>(&self, id: i64) -> Result<Option<E>, StoreError> {
        self.find_first("find_by_id", identity_column(E::FIELDS), SqlValue::Int(id))
            .await
    }

    /// Find one entity by an arbitrary persisted field. When more than
    /// one row matches, the first row in store delivery order wins.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`DataMapper::find_by_id`].
    pub async fn find_by_field<E: Entity>(
        &self,
        field: &'static str,
        key: SqlValue,
    ) -> Result<Option<E>, StoreError> {
        self.find_first("find_by_field", field, key).await
    }

    /// Fetch every row of the entity's table, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Materialization` on a decode failure; other
    /// failures are masked to an empty vec.
    pub async fn find_all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        let query = sql::select_all(&E::TABLE);
        let res = self
            .run("find_all", move |conn| {
                let mut stmt = conn.prepare(&query)?;
                let set = ResultSet::from_statement(&mut stmt, &Params::convert(&[]))?;
                set.rows().iter().map(E::from_row).collect()
            })
            .await;
        Self::masked(res, "find_all", E::TABLE.name, Vec::new())
    }

    /// Count the rows of the entity's table (0 on a masked failure).
    ///
    /// # Errors
    ///
    /// Same failure contract as [`DataMapper::find_all`].
    pub async fn count<E: Entity>(&self) -> Result<i64, StoreError> {
        let query = sql::count(&E::TABLE);
        let res = self
            .run("count", move |conn| {
                let mut stmt = conn.prepare(&query)?;
                let set = ResultSet::from_statement(&mut stmt, &Params::convert(&[]))?;
                set.rows()
                    .first()
                    .map_or(Ok(0), |row| row.require_i64(E::TABLE.name, "total"))
            })
            .await;
        Self::masked(res, "count", E::TABLE.name, 0)
    }

    /// Run a batch of semicolon-separated statements, e.g. schema setup
    /// from a test harness or embedder. Unlike the mapping operations,
    /// failures here propagate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Statement` if any statement fails.
    pub async fn execute_batch(&self, sql_text: &str) -> Result<(), StoreError> {
        let sql_text = sql_text.to_owned();
        self.run("execute_batch", move |conn| {
            conn.execute_batch(&sql_text).map_err(StoreError::Statement)
        })
        .await
    }

    async fn insert_row<E: Entity>(&self, values: Vec<SqlValue>) -> Result<Option<i64>, StoreError> {
        debug_assert!(values_match(E::FIELDS, &values));
        let query = sql::insert(&E::TABLE, E::FIELDS, E::IDENTITY);
        // Same column-selection rule the synthesizer applied.
        let bound: Vec<SqlValue> = E::FIELDS
            .iter()
            .zip(values)
            .filter(|(field, _)| !field.identity || E::IDENTITY.in_insert())
            .map(|(_, value)| value)
            .collect();
        let backfill = E::IDENTITY.backfills();
        let res = self
            .run("insert", move |conn| {
                let params = Params::convert(&bound);
                let refs = params.as_refs();
                let mut stmt = conn.prepare(&query)?;
                stmt.execute(&refs[..])?;
                Ok(backfill.then(|| conn.last_insert_rowid()))
            })
            .await;
        Self::masked(res, "insert", E::TABLE.name, None)
    }

    async fn find_first<E: Entity>(
        &self,
        operation: &'static str,
        field: &'static str,
        key: SqlValue,
    ) -> Result<Option<E>, StoreError> {
        let query = sql::select_by_field(&E::TABLE, field);
        let res = self
            .run(operation, move |conn| {
                let mut stmt = conn.prepare(&query)?;
                let set = ResultSet::from_statement(&mut stmt, &Params::convert(&[key]))?;
                set.rows().first().map(E::from_row).transpose()
            })
            .await;
        Self::masked(res, operation, E::TABLE.name, None)
    }

    /// Open a connection, run `op` on the blocking pool, release the
    /// connection on every exit path.
    async fn run<R, F>(&self, operation: &'static str, op: F) -> Result<R, StoreError>
    where
        F: FnOnce(&rusqlite::Connection) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        tokio::task::spawn_blocking(move || {
            let conn = provider.open()?;
            let out = op(&conn);
            close_quietly(conn, operation);
            out
        })
        .await
        .map_err(|e| StoreError::Task(format!("blocking join error in {operation}: {e}")))?
    }

    fn masked<T>(
        result: Result<T, StoreError>,
        operation: &'static str,
        table: &'static str,
        empty: T,
    ) -> Result<T, StoreError> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!(table, operation, error = %e, "store operation failed, returning empty result");
                Ok(empty)
            }
        }
    }
}
