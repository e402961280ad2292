pub mod body;
pub mod error;
pub mod tags;
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
