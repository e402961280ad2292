use poem_openapi::Object;

use business::domain::product::model::Product;

/// A product as exposed by the API.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// The product ID
    pub id: i32,
    /// The product name
    pub name: String,
    /// The product price
    pub price: f64,
    /// The product availability
    pub availability: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            availability: product.availability,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub data: ProductResponse,
}

impl From<Product> for ProductEnvelope {
    fn from(product: Product) -> Self {
        Self {
            data: product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub data: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductListEnvelope {
    fn from(products: Vec<Product>) -> Self {
        Self {
            data: products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageEnvelope {
    pub data: String,
}

/// Request body of product creation, as documented in the API.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// The product name
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// The product price, greater than 0
    pub price: f64,
}

/// Request body of a full product update, as documented in the API.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// The product name
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// The product price, greater than 0
    pub price: f64,
    /// The product availability
    pub availability: bool,
}
