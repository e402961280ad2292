use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Product catalogue management
    Products,
}
