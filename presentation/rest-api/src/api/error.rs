use poem_openapi::{Object, payload::Json};

use business::domain::validation::FieldError;

/// Body of 404 and 500 responses: `errors` is a single message.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub errors: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            errors: message.into(),
        })
    }
}

/// One failed validation check.
#[derive(Object, Debug)]
pub struct FieldErrorResponse {
    #[oai(rename = "type")]
    pub kind: String,
    /// The submitted value, when there was one
    #[oai(skip_serializing_if_is_none)]
    pub value: Option<serde_json::Value>,
    pub msg: String,
    pub path: String,
    pub location: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        Self {
            kind: "field".to_string(),
            value: error.value,
            msg: error.msg.to_string(),
            path: error.path.to_string(),
            location: error.location.to_string(),
        }
    }
}

/// Body of 400 responses: `errors` is a list of failed checks.
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorResponse>,
}

impl ValidationErrorResponse {
    pub fn from_field_errors(errors: Vec<FieldError>) -> Json<Self> {
        Json(Self {
            errors: errors.into_iter().map(FieldErrorResponse::from).collect(),
        })
    }

    /// A request the framework could not even parse (e.g. malformed JSON).
    pub fn unparsable(err: &poem::Error) -> Json<Self> {
        Json(Self {
            errors: vec![FieldErrorResponse {
                kind: "body".to_string(),
                value: None,
                msg: err.to_string(),
                path: String::new(),
                location: "body".to_string(),
            }],
        })
    }
}

/// Error outcome of a route, before it is fitted into the route's response enum.
pub enum ApiError {
    Validation(Json<ValidationErrorResponse>),
    NotFound(Json<ErrorResponse>),
    Internal(Json<ErrorResponse>),
}

pub trait IntoApiError {
    fn into_api_error(self) -> ApiError;
}
