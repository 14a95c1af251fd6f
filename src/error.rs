use thiserror::Error;

/// Errors surfaced by the mapping layer.
///
/// Connection and statement failures are normally caught at the operation
/// boundary in [`DataMapper`](crate::mapper::DataMapper), logged, and masked
/// behind an empty result. Materialization failures indicate a type/schema
/// mismatch the layer has no recovery policy for and always propagate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or opened.
    #[error("connection failure: {0}")]
    Connection(String),

    /// The driver rejected a statement: malformed SQL, a constraint
    /// violation, or a bind-time type mismatch.
    #[error(transparent)]
    Statement(#[from] rusqlite::Error),

    /// A result row could not be converted into the target entity.
    #[error("cannot materialize {entity}.{column}: {detail}")]
    Materialization {
        entity: &'static str,
        column: &'static str,
        detail: String,
    },

    /// The blocking worker running the operation failed to join.
    #[error("task failure: {0}")]
    Task(String),
}

impl StoreError {
    /// Whether this error must propagate past the operation boundary
    /// instead of being masked to an empty result.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Materialization { .. } | Self::Task(_))
    }

    pub(crate) fn materialization(
        entity: &'static str,
        column: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::Materialization {
            entity,
            column,
            detail: detail.into(),
        }
    }
}
