use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateAvailabilityParams {
    pub id: i32,
}

/// Flips the availability flag of a product.
#[async_trait]
pub trait UpdateAvailabilityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateAvailabilityParams) -> Result<Product, ProductError>;
}
