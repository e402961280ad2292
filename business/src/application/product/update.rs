use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        product.replace(params.name, params.price, params.availability)?;

        let saved = self
            .repository
            .save(&product)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.info(&format!("Product updated: {}", saved.id));
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
            async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(id: i32) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Mouse - testing".to_string(),
            price: 150.0,
            availability: false,
        }
    }

    #[tokio::test]
    async fn should_replace_every_field_of_existing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Product::from_repository(id, "Old".to_string(), 10.0, true)));
        mock_repo
            .expect_save()
            .withf(|p| {
                p.id == 1 && p.name == "Mouse - testing" && p.price == 150.0 && !p.availability
            })
            .returning(|p| Ok(p.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params(1)).await.unwrap();

        assert_eq!(
            product,
            Product::from_repository(1, "Mouse - testing".to_string(), 150.0, false)
        );
    }

    #[tokio::test]
    async fn should_return_not_found_without_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1000)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_vanishes_before_save() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Product::from_repository(id, "Old".to_string(), 10.0, true)));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
