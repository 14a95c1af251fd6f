use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::results::StoreRow;
use crate::schema::{Entity, EntityKind, FieldDef, FieldKind, Identity, Table};
use crate::value::SqlValue;

/// A registered client. `name` is the unique business key used for
/// lookups; everything but `id` is mutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Client {
    /// A client not yet persisted; the store assigns `id` on insert.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Generic;
    const TABLE: Table = Table::plain("Client");
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::identity("id", FieldKind::Integer),
        FieldDef::new("name", FieldKind::Text),
        FieldDef::new("phone", FieldKind::Text),
        FieldDef::new("email", FieldKind::Text),
    ];
    const IDENTITY: Identity = Identity::Generated { backfill: true };

    fn bind(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.id),
            SqlValue::Text(self.name.clone()),
            SqlValue::Text(self.phone.clone()),
            SqlValue::Text(self.email.clone()),
        ]
    }

    fn from_row(row: &StoreRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: row.require_i64("Client", "id")?,
            name: row.require_text("Client", "name")?,
            phone: row.require_text("Client", "phone")?,
            email: row.require_text("Client", "email")?,
        })
    }

    fn assign_identity(&mut self, id: i64) {
        self.id = id;
    }
}
