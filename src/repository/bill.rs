use crate::connection::ConnectionProvider;
use crate::error::StoreError;
use crate::mapper::DataMapper;
use crate::model::Bill;

/// Access to the [`Bill`] ledger.
///
/// Bills are written once and read back; no update or delete surface.
/// The key (`orderId`) is assigned by the caller, so inserts never
/// back-fill anything.
pub struct BillRepository<P: ConnectionProvider> {
    mapper: DataMapper<P>,
}

impl<P: ConnectionProvider> BillRepository<P> {
    #[must_use]
    pub fn new(mapper: DataMapper<P>) -> Self {
        Self { mapper }
    }

    /// # Errors
    ///
    /// See [`DataMapper::insert_assigned`].
    pub async fn insert(&self, bill: &Bill) -> Result<(), StoreError> {
        self.mapper.insert_assigned(bill).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_all`].
    pub async fn find_all(&self) -> Result<Vec<Bill>, StoreError> {
        self.mapper.find_all().await
    }

    /// Look up the ledger line for an order.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::find_by_id`].
    pub async fn find_by_order_id(&self, order_id: i64) -> Result<Option<Bill>, StoreError> {
        self.mapper.find_by_id(order_id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::count`].
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.mapper.count::<Bill>().await
    }
}
