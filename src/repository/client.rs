use crate::connection::ConnectionProvider;
use crate::error::StoreError;
use crate::mapper::DataMapper;
use crate::model::Client;
use crate::value::SqlValue;

/// CRUD access to [`Client`] records.
pub struct ClientRepository<P: ConnectionProvider> {
    mapper: DataMapper<P>,
}

impl<P: ConnectionProvider> ClientRepository<P> {
    #[must_use]
    pub fn new(mapper: DataMapper<P>) -> Self {
        Self { mapper }
    }

    /// Insert `client`, back-filling its generated id.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::insert`].
    pub async fn insert(&self, client: &mut Client) -> Result<(), StoreError> {
        self.mapper.insert(client).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::update`].
    pub async fn update(&self, client: &Client, id: i64) -> Result<usize, StoreError> {
        self.mapper.update(client, id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::delete`].
    pub async fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.mapper.delete::<Client>(id).await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_all`].
    pub async fn find_all(&self) -> Result<Vec<Client>, StoreError> {
        self.mapper.find_all().await
    }

    /// # Errors
    ///
    /// See [`DataMapper::find_by_id`].
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>, StoreError> {
        self.mapper.find_by_id(id).await
    }

    /// Look up a client by its (effectively unique) name.
    ///
    /// # Errors
    ///
    /// See [`DataMapper::find_by_field`].
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Client>, StoreError> {
        self.mapper
            .find_by_field("name", SqlValue::Text(name.to_owned()))
            .await
    }

    /// # Errors
    ///
    /// See [`DataMapper::count`].
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.mapper.count::<Client>().await
    }
}
