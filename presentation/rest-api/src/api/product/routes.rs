use std::sync::Arc;

use poem::Error;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::product::rules;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::use_cases::update_availability::{
    UpdateAvailabilityParams, UpdateAvailabilityUseCase,
};
use business::domain::validation::RequestInput;

use crate::api::body::JsonBody;
use crate::api::error::{ApiError, ErrorResponse, IntoApiError, ValidationErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, MessageEnvelope, ProductEnvelope, ProductListEnvelope,
    UpdateProductRequest,
};
use crate::api::product::error_mapper::INTERNAL_ERROR;
use crate::api::tags::ApiTags;

pub const PRODUCT_DELETED: &str = "Product deleted successfully";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    update_availability_use_case: Arc<dyn UpdateAvailabilityUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        update_availability_use_case: Arc<dyn UpdateAvailabilityUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            update_availability_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Every handler runs its validation rules first and answers 400 with the
/// collected errors before touching the store.
#[OpenApi]
impl ProductApi {
    /// Get a list of products
    ///
    /// Returns every product ordered by ID.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self) -> GetProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetProductsResponse::Ok(Json(products.into())),
            Err(err) => err.into_api_error().into(),
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> ProductResult {
        let input = RequestInput::new(Some(&id.0), None);
        let id = match rules::validate_id(&input) {
            Ok(id) => id,
            Err(errors) => {
                return ProductResult::BadRequest(ValidationErrorResponse::from_field_errors(
                    errors,
                ));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => ProductResult::Ok(Json(product.into())),
            Err(err) => err.into_api_error().into(),
        }
    }

    /// Create a new product
    ///
    /// Expects `{ "name": string, "price": number }`. Availability starts as `true`.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        body: JsonBody<CreateProductRequest>,
    ) -> CreateProductResponse {
        let input = RequestInput::new(None, Some(&body.value));
        let params = match rules::validate_create(&input) {
            Ok(params) => params,
            Err(errors) => {
                return CreateProductResponse::BadRequest(
                    ValidationErrorResponse::from_field_errors(errors),
                );
            }
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => err.into_api_error().into(),
        }
    }

    /// Update a product by ID
    ///
    /// Expects `{ "name": string, "price": number, "availability": boolean }`
    /// and replaces all three fields.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: JsonBody<UpdateProductRequest>,
    ) -> ProductResult {
        let input = RequestInput::new(Some(&id.0), Some(&body.value));
        let params = match rules::validate_update(&input) {
            Ok(params) => params,
            Err(errors) => {
                return ProductResult::BadRequest(ValidationErrorResponse::from_field_errors(
                    errors,
                ));
            }
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => ProductResult::Ok(Json(product.into())),
            Err(err) => err.into_api_error().into(),
        }
    }

    /// Update availability of a product by ID
    ///
    /// Flips the current availability. No request body.
    #[oai(path = "/api/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_availability(&self, id: Path<String>) -> ProductResult {
        let input = RequestInput::new(Some(&id.0), None);
        let id = match rules::validate_id(&input) {
            Ok(id) => id,
            Err(errors) => {
                return ProductResult::BadRequest(ValidationErrorResponse::from_field_errors(
                    errors,
                ));
            }
        };

        match self
            .update_availability_use_case
            .execute(UpdateAvailabilityParams { id })
            .await
        {
            Ok(product) => ProductResult::Ok(Json(product.into())),
            Err(err) => err.into_api_error().into(),
        }
    }

    /// Delete a product by ID
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let input = RequestInput::new(Some(&id.0), None);
        let id = match rules::validate_id(&input) {
            Ok(id) => id,
            Err(errors) => {
                return DeleteProductResponse::BadRequest(
                    ValidationErrorResponse::from_field_errors(errors),
                );
            }
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageEnvelope {
                data: PRODUCT_DELETED.to_string(),
            })),
            Err(err) => err.into_api_error().into(),
        }
    }
}

#[derive(ApiResponse)]
pub enum GetProductsResponse {
    /// Successful response
    #[oai(status = 200)]
    Ok(Json<ProductListEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiError> for GetProductsResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Internal(json) | ApiError::NotFound(json) => Self::InternalError(json),
            ApiError::Validation(_) => {
                Self::InternalError(ErrorResponse::new(INTERNAL_ERROR))
            }
        }
    }
}

/// Response of get, update and patch: a single product.
#[derive(ApiResponse)]
#[oai(bad_request_handler = "product_bad_request")]
pub enum ProductResult {
    /// Successful response
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    /// Bad request - invalid ID or input
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn product_bad_request(err: Error) -> ProductResult {
    ProductResult::BadRequest(ValidationErrorResponse::unparsable(&err))
}

impl From<ApiError> for ProductResult {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(json) => Self::BadRequest(json),
            ApiError::NotFound(json) => Self::NotFound(json),
            ApiError::Internal(json) => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    /// Product created successfully
    #[oai(status = 201)]
    Created(Json<ProductEnvelope>),
    /// Bad request - invalid input
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(ValidationErrorResponse::unparsable(&err))
}

impl From<ApiError> for CreateProductResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(json) => Self::BadRequest(json),
            ApiError::NotFound(json) | ApiError::Internal(json) => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    /// Product deleted successfully
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),
    /// Bad request - invalid ID
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiError> for DeleteProductResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(json) => Self::BadRequest(json),
            ApiError::NotFound(json) => Self::NotFound(json),
            ApiError::Internal(json) => Self::InternalError(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};
    use serde_json::{Value, json};

    use persistence::product::in_memory::ProductRepositoryInMemory;

    use crate::config::cors_config::build_cors;
    use crate::setup::dependency_injection::DependencyContainer;
    use crate::setup::server::build_app;

    const FRONTEND: &str = "http://localhost:5173";

    fn client() -> TestClient<poem::endpoint::BoxEndpoint<'static>> {
        let container =
            DependencyContainer::from_repository(Arc::new(ProductRepositoryInMemory::new()));
        TestClient::new(build_app(
            build_cors(FRONTEND),
            container,
            "http://localhost:4000",
        ))
    }

    async fn body(resp: TestResponse) -> Value {
        resp.0.into_body().into_json::<Value>().await.unwrap()
    }

    async fn create(cli: &TestClient<poem::endpoint::BoxEndpoint<'static>>, name: &str) -> Value {
        let resp = cli
            .post("/api/products")
            .body_json(&json!({ "name": name, "price": 150 }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        body(resp).await
    }

    #[tokio::test]
    async fn should_display_validation_errors_for_empty_body() {
        let cli = client();

        let resp = cli.post("/api/products").body_json(&json!({})).send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        assert_eq!(json["errors"].as_array().unwrap().len(), 4);
        assert_eq!(json["errors"][0]["msg"], "Name is required");
        assert_eq!(json["errors"][0]["location"], "body");
        assert_eq!(json["errors"][0]["type"], "field");
    }

    #[tokio::test]
    async fn should_validate_that_price_is_greater_than_zero() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .body_json(&json!({ "name": "Mouse - testing", "price": 0 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["msg"], "Price must be greater than 0");
        assert_eq!(errors[0]["value"], 0);
    }

    #[tokio::test]
    async fn should_validate_that_price_is_a_number() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .body_json(&json!({ "name": "Mouse - testing", "price": "abc" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_malformed_json_with_error_list() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .content_type("application/json")
            .body("{not json")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"][0]["location"], "body");
    }

    #[tokio::test]
    async fn should_validate_create_request_without_body() {
        let cli = client();

        let resp = cli.post("/api/products").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        let msgs: Vec<&str> = json["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["msg"].as_str().unwrap())
            .collect();
        assert_eq!(
            msgs,
            vec![
                "Name is required",
                "Price must be a number",
                "Price is required",
                "Price must be greater than 0"
            ]
        );
    }

    #[tokio::test]
    async fn should_treat_non_json_body_as_empty() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .content_type("text/plain")
            .body("name=Mouse")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["errors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn should_validate_update_request_without_body() {
        let cli = client();
        create(&cli, "Mouse").await;

        let resp = cli.put("/api/products/1").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["errors"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn should_check_id_first_when_updating_without_body() {
        let cli = client();

        let resp = cli.put("/api/products/not-valid-url").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        assert_eq!(json["errors"][0]["msg"], "Id not valid");
        assert_eq!(json["errors"][0]["location"], "params");
    }

    #[tokio::test]
    async fn should_create_product_and_fetch_it_back() {
        let cli = client();

        let created = create(&cli, "Mouse").await;
        let id = created["data"]["id"].as_i64().unwrap();
        assert!(created.get("errors").is_none());

        let resp = cli.get(format!("/api/products/{id}")).send().await;
        resp.assert_status_is_ok();
        let fetched = body(resp).await;
        assert_eq!(fetched["data"]["name"], "Mouse");
        assert_eq!(fetched["data"]["price"].as_f64(), Some(150.0));
        assert_eq!(fetched["data"]["availability"], true);
    }

    #[tokio::test]
    async fn should_list_products_in_id_order() {
        let cli = client();
        create(&cli, "First").await;
        create(&cli, "Second").await;

        let resp = cli.get("/api/products").send().await;

        resp.assert_status_is_ok();
        let content_type = resp.0.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("application/json"));
        let json = body(resp).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "First");
        assert_eq!(data[1]["name"], "Second");
    }

    #[tokio::test]
    async fn should_return_404_for_non_existing_product() {
        let cli = client();

        let resp = cli.get("/api/products/1000").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(body(resp).await["errors"], "Product not found");
    }

    #[tokio::test]
    async fn should_check_a_valid_id_in_the_url() {
        let cli = client();

        let resp = cli.get("/api/products/not-valid-url").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"][0]["msg"], "Id not valid");
        assert_eq!(json["errors"][0]["location"], "params");
    }

    #[tokio::test]
    async fn should_display_five_errors_when_updating_with_empty_body() {
        let cli = client();
        create(&cli, "Mouse").await;

        let resp = cli.put("/api/products/1").body_json(&json!({})).send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["errors"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn should_check_id_before_updating() {
        let cli = client();

        let resp = cli
            .put("/api/products/not-valid-url")
            .body_json(&json!({ "name": "Mouse - testing", "availability": true, "price": 150 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"][0]["msg"], "Id not valid");
    }

    #[tokio::test]
    async fn should_404_when_updating_non_existing_product() {
        let cli = client();

        let resp = cli
            .put("/api/products/1000")
            .body_json(&json!({ "name": "Mouse - testing", "availability": true, "price": 150 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(body(resp).await["errors"], "Product not found");
    }

    #[tokio::test]
    async fn should_update_existing_product_with_valid_data() {
        let cli = client();
        create(&cli, "Mouse").await;

        let resp = cli
            .put("/api/products/1")
            .body_json(&json!({ "name": "Mouse - testing", "availability": false, "price": 99.5 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = body(resp).await;
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["data"]["name"], "Mouse - testing");
        assert_eq!(json["data"]["price"].as_f64(), Some(99.5));
        assert_eq!(json["data"]["availability"], false);
    }

    #[tokio::test]
    async fn should_toggle_availability_back_after_two_patches() {
        let cli = client();
        create(&cli, "Mouse").await;

        let first = cli.patch("/api/products/1").send().await;
        first.assert_status_is_ok();
        assert_eq!(body(first).await["data"]["availability"], false);

        let second = cli.patch("/api/products/1").send().await;
        second.assert_status_is_ok();
        assert_eq!(body(second).await["data"]["availability"], true);
    }

    #[tokio::test]
    async fn should_404_when_patching_non_existing_product() {
        let cli = client();

        let resp = cli.patch("/api/products/1000").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = body(resp).await;
        assert_eq!(json["errors"], "Product not found");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn should_delete_product_and_then_404() {
        let cli = client();
        create(&cli, "Mouse").await;

        let resp = cli.delete("/api/products/1").send().await;
        resp.assert_status_is_ok();
        assert_eq!(body(resp).await["data"], "Product deleted successfully");

        let resp = cli.get("/api/products/1").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_check_id_before_deleting() {
        let cli = client();

        let resp = cli.delete("/api/products/not-valid-url").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["errors"][0]["msg"], "Id not valid");
    }

    #[tokio::test]
    async fn should_404_when_deleting_non_existing_product() {
        let cli = client();

        let resp = cli.delete("/api/products/1000").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(body(resp).await["errors"], "Product not found");
    }

    #[tokio::test]
    async fn should_allow_configured_frontend_origin() {
        let cli = client();

        let resp = cli
            .get("/api/products")
            .header("Origin", FRONTEND)
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header("access-control-allow-origin", FRONTEND);
    }

    #[tokio::test]
    async fn should_reject_other_origins() {
        let cli = client();

        let resp = cli
            .get("/api/products")
            .header("Origin", "http://evil.example")
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_serve_openapi_document() {
        let cli = client();

        let resp = cli.get("/openapi.json").send().await;

        resp.assert_status_is_ok();
        let json = body(resp).await;
        assert!(json["paths"].get("/api/products/{id}").is_some());
        let schemas = &json["components"]["schemas"];
        assert!(schemas["CreateProductRequest"]["properties"].get("price").is_some());
        assert!(
            schemas["UpdateProductRequest"]["properties"]
                .get("availability")
                .is_some()
        );
    }
}
