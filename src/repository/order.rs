use crate::connection::ConnectionProvider;
use crate::error::StoreError;
use crate::mapper::DataMapper;
use crate::model::Order;

/// CRUD access to [`Order`] records.
///
/// Orders have no name field, so no by-name lookup is exposed.
pub struct OrderRepository<P: ConnectionProvider> {
    mapper: DataMapper<P>,
}

impl<P: ConnectionProvider> OrderRepository<P> {
    #[must_use]
    pub fn new(mapper: DataMapper<P>) -> Self {
        Self { mapper }
    }

    /// Insert `order`, back-filling its generated id.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::insert`].
    pub async fn insert(&self, order: &mut Order) -> Result<(), StoreError> {
        self.mapper.insert(order).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::update`].
    pub async fn update(&self, order: &Order, id: i64) -> Result<usize, StoreError> {
        self.mapper.update(order, id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::delete`].
    pub async fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.mapper.delete::<Order>(id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_all`].
    pub async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        self.mapper.find_all().await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_by_id`].
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError> {
        self.mapper.find_by_id(id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::count`].
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.mapper.count::<Order>().await
    }
}
