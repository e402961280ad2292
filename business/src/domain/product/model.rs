use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// A product that passed the domain checks but has no id yet.
/// The store assigns the id when it persists it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
}

fn check_invariants(name: &str, price: f64) -> Result<(), ProductError> {
    if name.is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if !(price.is_finite() && price > 0.0) {
        return Err(ProductError::PriceNotPositive);
    }
    Ok(())
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        check_invariants(&props.name, props.price)?;

        Ok(Self {
            name: props.name,
            price: props.price,
            availability: true,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, name: String, price: f64, availability: bool) -> Self {
        Self {
            id,
            name,
            price,
            availability,
        }
    }

    /// Full replacement of every mutable field. The id is kept.
    pub fn replace(
        &mut self,
        name: String,
        price: f64,
        availability: bool,
    ) -> Result<(), ProductError> {
        check_invariants(&name, price)?;
        self.name = name;
        self.price = price;
        self.availability = availability;
        Ok(())
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}
