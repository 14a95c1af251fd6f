use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::results::StoreRow;
use crate::schema::{Entity, EntityKind, FieldDef, FieldKind, Identity, Table};
use crate::value::SqlValue;

/// A stocked product. `name` is the unique lookup key; `price` and
/// `stock` are expected non-negative (enforced by the orchestration
/// layer, not here).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// A product not yet persisted; the store assigns `id` on insert.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
        }
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Generic;
    const TABLE: Table = Table::plain("Product");
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::identity("id", FieldKind::Integer),
        FieldDef::new("name", FieldKind::Text),
        FieldDef::new("price", FieldKind::Float),
        FieldDef::new("stock", FieldKind::Integer),
    ];
    const IDENTITY: Identity = Identity::Generated { backfill: true };

    fn bind(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.id),
            SqlValue::Text(self.name.clone()),
            SqlValue::Float(self.price),
            SqlValue::Int(self.stock),
        ]
    }

    fn from_row(row: &StoreRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: row.require_i64("Product", "id")?,
            name: row.require_text("Product", "name")?,
            price: row.require_f64("Product", "price")?,
            stock: row.require_i64("Product", "stock")?,
        })
    }

    fn assign_identity(&mut self, id: i64) {
        self.id = id;
    }
}
