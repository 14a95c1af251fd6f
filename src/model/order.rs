use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::results::StoreRow;
use crate::schema::{Entity, EntityKind, FieldDef, FieldKind, Identity, Table};
use crate::value::SqlValue;

/// A placed order: client and product references by id (not validated at
/// this layer) and a positive quantity. The table name collides with a
/// SQL keyword and is quoted in every statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl Order {
    /// An order not yet persisted; the store assigns `id` on insert.
    #[must_use]
    pub fn new(client_id: i64, product_id: i64, quantity: i64) -> Self {
        Self {
            id: 0,
            client_id,
            product_id,
            quantity,
        }
    }
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Generic;
    const TABLE: Table = Table::reserved("Order");
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::identity("id", FieldKind::Integer),
        FieldDef::new("client_id", FieldKind::Integer),
        FieldDef::new("product_id", FieldKind::Integer),
        FieldDef::new("quantity", FieldKind::Integer),
    ];
    const IDENTITY: Identity = Identity::Generated { backfill: true };

    fn bind(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.id),
            SqlValue::Int(self.client_id),
            SqlValue::Int(self.product_id),
            SqlValue::Int(self.quantity),
        ]
    }

    fn from_row(row: &StoreRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: row.require_i64("Order", "id")?,
            client_id: row.require_i64("Order", "client_id")?,
            product_id: row.require_i64("Order", "product_id")?,
            quantity: row.require_i64("Order", "quantity")?,
        })
    }

    fn assign_identity(&mut self, id: i64) {
        self.id = id;
    }
}
