use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_availability::{
    UpdateAvailabilityParams, UpdateAvailabilityUseCase,
};

pub struct UpdateAvailabilityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateAvailabilityUseCase for UpdateAvailabilityUseCaseImpl {
    async fn execute(&self, params: UpdateAvailabilityParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Toggling availability of product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        product.toggle_availability();

        let saved = self
            .repository
            .save(&product)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.debug(&format!(
            "Product {} availability is now {}",
            saved.id, saved.availability
        ));
        Ok(saved)
    }
}
