use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::update_availability::UpdateAvailabilityUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::product::routes::ProductApi;

/// Application context built once at startup and handed to the server.
pub struct DependencyContainer {
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires the Postgres store when a pool is available, the in-memory store otherwise.
    pub fn new(pool: Option<sqlx::PgPool>) -> Self {
        let repository: Arc<dyn ProductRepository> = match pool {
            Some(pool) => Arc::new(ProductRepositoryPostgres::new(pool)),
            None => Arc::new(ProductRepositoryInMemory::new()),
        };
        Self::from_repository(repository)
    }

    pub fn from_repository(repository: Arc<dyn ProductRepository>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_availability_use_case = Arc::new(UpdateAvailabilityUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl { repository, logger });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            update_availability_use_case,
            delete_use_case,
        );

        Self { product_api }
    }
}
