use std::marker::PhantomData;

use poem::{FromRequest, Request, RequestBody};
use poem_openapi::{
    ApiExtractor, ApiExtractorType, ExtractParamOptions,
    error::ParseRequestPayloadError,
    registry::{MetaMediaType, MetaRequest, Registry},
    types::Type,
};
use serde_json::{Map, Value};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A JSON request body handed to the validation rules untouched.
///
/// `T` only describes the expected shape in the OpenAPI document. A missing
/// body, an empty body or a non-JSON content type all read as `{}` so the
/// rules report every missing field. Only malformed JSON is rejected here.
pub struct JsonBody<T> {
    pub value: Value,
    schema: PhantomData<T>,
}

impl<T> JsonBody<T> {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            schema: PhantomData,
        }
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<'a, T: Type> ApiExtractor<'a> for JsonBody<T> {
    const TYPES: &'static [ApiExtractorType] = &[ApiExtractorType::RequestObject];

    type ParamType = ();
    type ParamRawType = ();

    fn register(registry: &mut Registry) {
        T::register(registry);
    }

    fn request_meta() -> Option<MetaRequest> {
        Some(MetaRequest {
            description: None,
            content: vec![MetaMediaType {
                content_type: JSON_CONTENT_TYPE,
                schema: T::schema_ref(),
            }],
            required: true,
        })
    }

    async fn from_request(
        request: &'a Request,
        body: &mut RequestBody,
        _param_opts: ExtractParamOptions<Self::ParamType>,
    ) -> poem::Result<Self> {
        let json = request.content_type().is_some_and(is_json);
        let data = <Vec<u8> as FromRequest>::from_request(request, body).await?;
        if !json || data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new(Value::Object(Map::new())));
        }

        let value = serde_json::from_slice(&data).map_err(|err| ParseRequestPayloadError {
            reason: err.to_string(),
        })?;
        Ok(Self::new(value))
    }
}
