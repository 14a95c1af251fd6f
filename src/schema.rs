//! Compile-time schema metadata.
//!
//! One `FIELDS` const per entity drives both the column lists the query
//! synthesizer emits and the order the parameter binder walks, so the two
//! can never disagree.

use std::borrow::Cow;

use crate::error::StoreError;
use crate::results::StoreRow;
use crate::value::SqlValue;

/// A store table, with the reserved-word quoting rule applied on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    reserved: bool,
}

impl Table {
    #[must_use]
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            reserved: false,
        }
    }

    /// A table whose name collides with a SQL keyword and must be quoted
    /// in every statement that targets it.
    #[must_use]
    pub const fn reserved(name: &'static str) -> Self {
        Self {
            name,
            reserved: true,
        }
    }

    /// The name as it appears in SQL text.
    #[must_use]
    pub fn qualified(&self) -> Cow<'static, str> {
        if self.reserved {
            Cow::Owned(format!("\"{}\"", self.name))
        } else {
            Cow::Borrowed(self.name)
        }
    }
}

/// Declared type of a persisted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

/// One persisted field: column name, declared type, identity marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub identity: bool,
}

impl FieldDef {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            identity: false,
        }
    }

    /// The field holding the entity's primary key.
    #[must_use]
    pub const fn identity(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            identity: true,
        }
    }
}

/// How an entity is materialized, resolved once per type.
///
/// `Generic` entities decode field-by-field from their declared metadata;
/// a `Projection` is assembled from a fixed, hand-written column list that
/// does not correspond 1:1 to any single table's reflected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Generic,
    Projection,
}

/// Per-entity identity policy: whether the store generates the key (and
/// whether the generated value is written back after INSERT), or the
/// caller assigns it.
///
/// `Generated` excludes the identity column from INSERT column lists;
/// `Assigned` includes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Generated { backfill: bool },
    Assigned,
}

impl Identity {
    #[must_use]
    pub const fn in_insert(self) -> bool {
        matches!(self, Self::Assigned)
    }

    #[must_use]
    pub const fn backfills(self) -> bool {
        matches!(self, Self::Generated { backfill: true })
    }
}

/// A record type the mapping layer can persist and materialize.
///
/// `bind` must return exactly one value per `FIELDS` entry, in the same
/// order; the mapper debug-asserts the agreement on every write.
pub trait Entity: Sized + Send + 'static {
    const KIND: EntityKind;
    const TABLE: Table;
    const FIELDS: &'static [FieldDef];
    const IDENTITY: Identity;

    /// Field values in declared order, identity included positionally.
    fn bind(&self) -> Vec<SqlValue>;

    /// Materialize one result row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Materialization` when a column is missing,
    /// NULL, or of an incompatible type.
    fn from_row(row: &StoreRow) -> Result<Self, StoreError>;

    /// Receive the store-generated identity after an INSERT. Entities
    /// whose policy does not back-fill leave the default no-op.
    fn assign_identity(&mut self, _id: i64) {}
}

/// Column name of the identity field.
#[must_use]
pub fn identity_column(fields: &[FieldDef]) -> &'static str {
    fields
        .iter()
        .find(|f| f.identity)
        .map_or("id", |f| f.name)
}

/// Bind/synthesizer agreement check used in debug builds.
#[must_use]
pub fn values_match(fields: &[FieldDef], values: &[SqlValue]) -> bool {
    fields.len() == values.len()
        && fields
            .iter()
            .zip(values)
            .all(|(field, value)| value.matches(field.kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_table_is_quoted() {
        assert_eq!(Table::reserved("Order").qualified(), "\"Order\"");
        assert_eq!(Table::plain("Client").qualified(), "Client");
    }

    #[test]
    fn values_match_requires_same_arity_and_kinds() {
        let fields = [
            FieldDef::identity("id", FieldKind::Integer),
            FieldDef::new("name", FieldKind::Text),
        ];
        assert!(values_match(
            &fields,
            &[SqlValue::Int(1), SqlValue::Text("a".into())]
        ));
        assert!(!values_match(&fields, &[SqlValue::Int(1)]));
        assert!(!values_match(
            &fields,
            &[SqlValue::Text("a".into()), SqlValue::Text("b".into())]
        ));
    }
}
