use crate::connection::ConnectionProvider;
use crate::error::StoreError;
use crate::mapper::DataMapper;
use crate::model::Product;
use crate::value::SqlValue;

/// CRUD access to [`Product`] records.
pub struct ProductRepository<P: ConnectionProvider> {
    mapper: DataMapper<P>,
}

impl<P: ConnectionProvider> ProductRepository<P> {
    #[must_use]
    pub fn new(mapper: DataMapper<P>) -> Self {
        Self { mapper }
    }

    /// Insert `product`, back-filling its generated id.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::insert`].
    pub async fn insert(&self, product: &mut Product) -> Result<(), StoreError> {
        self.mapper.insert(product).await
    }

    /// Write every persisted field of `product` over the row with the
    /// given id. Updating a single field (e.g. stock) requires reading
    /// the product, mutating it, and writing the whole object back.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::update`].
    pub async fn update(&self, product: &Product, id: i64) -> Result<usize, StoreError> {
        self.mapper.update(product, id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::delete`].
    pub async fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.mapper.delete::<Product>(id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_all`].
    pub async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        self.mapper.find_all().await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_by_id`].
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        self.mapper.find_by_id(id).await
    }

    /// Look up a product by its (effectively unique) name.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::find_by_field`].
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        self.mapper
            .find_by_field("name", SqlValue::Text(name.to_owned()))
            .await
    }

    /// # Errors
    ///
    /// See [`DataMapper::count`].
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.mapper.count::<Product>().await
    }
}
