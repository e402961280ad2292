use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, price_to_decimal};

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "Product query failed");
    RepositoryError::DatabaseError
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, availability FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, availability FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, availability)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, availability"#,
        )
        .bind(&product.name)
        .bind(price_to_decimal(product.price)?)
        .bind(product.availability)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products
            SET name = $2, price = $3, availability = $4
            WHERE id = $1
            RETURNING id, name, price, availability"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(price_to_decimal(product.price)?)
        .bind(product.availability)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
