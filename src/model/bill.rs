use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::results::StoreRow;
use crate::schema::{Entity, EntityKind, FieldDef, FieldKind, Identity, Table};
use crate::value::SqlValue;

/// A ledger line for a completed order: a denormalized snapshot of the
/// order id, the client and product names, the quantity, and the total
/// price. Immutable by construction; it carries no identity of its own —
/// `order_id` is assigned by the caller, never generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub order_id: i64,
    pub client_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
}

impl Bill {
    #[must_use]
    pub fn new(
        order_id: i64,
        client_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        total_price: f64,
    ) -> Self {
        Self {
            order_id,
            client_name: client_name.into(),
            product_name: product_name.into(),
            quantity,
            total_price,
        }
    }
}

impl Entity for Bill {
    const KIND: EntityKind = EntityKind::Projection;
    const TABLE: Table = Table::plain("Bill");
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::identity("orderId", FieldKind::Integer),
        FieldDef::new("clientName", FieldKind::Text),
        FieldDef::new("productName", FieldKind::Text),
        FieldDef::new("quantity", FieldKind::Integer),
        FieldDef::new("totalPrice", FieldKind::Float),
    ];
    const IDENTITY: Identity = Identity::Assigned;

    fn bind(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.order_id),
            SqlValue::Text(self.client_name.clone()),
            SqlValue::Text(self.product_name.clone()),
            SqlValue::Int(self.quantity),
            SqlValue::Float(self.total_price),
        ]
    }

    // Fixed five-column extraction; the persisted shape does not match
    // the generic field walk.
    fn from_row(row: &StoreRow) -> Result<Self, StoreError> {
        Ok(Self::new(
            row.require_i64("Bill", "orderId")?,
            row.require_text("Bill", "clientName")?,
            row.require_text("Bill", "productName")?,
            row.require_i64("Bill", "quantity")?,
            row.require_f64("Bill", "totalPrice")?,
        ))
    }
}
