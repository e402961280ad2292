use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// Product store kept in process memory. Ids start at 1 and are never reused,
/// matching a `SERIAL` column.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    table: RwLock<Table>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(RepositoryError::database_error)?;

        let stored =
            Product::from_repository(id, product.name, product.price, product.availability);
        table.rows.insert(id, stored.clone());
        table.last_id = id;

        Ok(stored)
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;
        *row = product.clone();

        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
