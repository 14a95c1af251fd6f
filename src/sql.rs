//! SQL text synthesis from entity metadata.
//!
//! Field and table names come from trusted compile-time metadata, never
//! from external input; values always bind as parameters.

use crate::schema::{FieldDef, Identity, Table, identity_column};

/// `SELECT * FROM <table> WHERE <field> = ?` — used for by-id and
/// by-name lookups.
#[must_use]
pub fn select_by_field(table: &Table, field: &str) -> String {
    format!("SELECT * FROM {} WHERE {} = ?", table.qualified(), field)
}

/// `SELECT * FROM <table>` — full scan in storage order.
#[must_use]
pub fn select_all(table: &Table) -> String {
    format!("SELECT * FROM {}", table.qualified())
}

/// `SELECT COUNT(*) AS total FROM <table>`.
#[must_use]
pub fn count(table: &Table) -> String {
    format!("SELECT COUNT(*) AS total FROM {}", table.qualified())
}

/// `INSERT INTO <table> (<cols>) VALUES (<placeholders>)`.
///
/// The identity column is omitted for store-generated identities and
/// included for externally assigned ones.
#[must_use]
pub fn insert(table: &Table, fields: &[FieldDef], identity: Identity) -> String {
    let columns: Vec<&str> = fields
        .iter()
        .filter(|f| !f.identity || identity.in_insert())
        .map(|f| f.name)
        .collect();
    let placeholders = vec!["?"; columns.len()];
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.qualified(),
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE <table> SET <col> = ?, ... WHERE <id> = ?` — every persisted
/// field is written, identity included; partial-field updates are not
/// supported.
#[must_use]
pub fn update(table: &Table, fields: &[FieldDef]) -> String {
    let assignments: Vec<String> = fields.iter().map(|f| format!("{} = ?", f.name)).collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        table.qualified(),
        assignments.join(", "),
        identity_column(fields)
    )
}

/// `DELETE FROM <table> WHERE <id> = ?`.
#[must_use]
pub fn delete(table: &Table, fields: &[FieldDef]) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?",
        table.qualified(),
        identity_column(fields)
    )
}
