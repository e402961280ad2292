use bigdecimal::BigDecimal;
use std::str::FromStr;

use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub availability: bool,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price.to_f64().unwrap_or_default(),
            self.availability,
        )
    }
}

/// Converts a domain price into a NUMERIC value with the precision it was
/// validated at, so any price above 0 is stored above 0.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::database_error());
    }
    BigDecimal::from_str(&price.to_string()).map_err(|_| RepositoryError::database_error())
}
