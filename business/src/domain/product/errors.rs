use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository failure, turning a missing row into `ProductError::NotFound`.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
