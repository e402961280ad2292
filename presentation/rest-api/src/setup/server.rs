use poem::{
    EndpointExt, Route, Server as PoemServer,
    endpoint::BoxEndpoint,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

/// Builds the full endpoint tree: the products API, Swagger UI under `/docs`
/// and the raw document under `/openapi.json`, behind CORS and request tracing.
pub fn build_app(
    cors: Cors,
    container: DependencyContainer,
    server_url: &str,
) -> BoxEndpoint<'static> {
    let api_service = OpenApiService::new(container.product_api, "Products REST API", "1.0.0")
        .server(server_url.to_string());
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(cors)
        .with(Tracing)
        .map_to_response()
        .boxed()
}

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(config.cors, container, &format!("http://{}", addr));

        tracing::info!("REST API listening on http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
