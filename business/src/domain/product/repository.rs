use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Persistence port for products. Any store that assigns increasing integer
/// ids satisfies it; field constraints are enforced before reaching the store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by id ascending.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    /// Persists every mutable field of an existing product.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
