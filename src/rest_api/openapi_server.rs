use poem::{listener::TcpListener, EndpointExt, Route, Server};
use poem_openapi::{ContactObject, OpenApiService};

use crate::rest_api::api::{ApiV1, SharedPresenter};

pub const API_PREFIX: &str = "/api";

pub fn api_service(server_url: &str, api_prefix: &str) -> eyre::Result<OpenApiService<ApiV1, ()>> {
    let openapi_service = OpenApiService::new(ApiV1::default(), "sdf2smiles", "1.0")
        .server(format!("{}{}", server_url.trim_end_matches('/'), api_prefix))
        .description("sdf2smiles: SDF to SMILES conversion")
        .contact(ContactObject::new().name("sdf2smiles"));
    Ok(openapi_service)
}

pub async fn run_api_service(
    bind: &str,
    server_url: &str,
    presenter: SharedPresenter,
) -> eyre::Result<()> {
    let api_service = api_service(server_url, API_PREFIX)?;
    let ui = api_service.swagger_ui();
    let spec = api_service.spec();

    log::info!("serving on {} ({}{})", bind, server_url, API_PREFIX);

    Server::new(TcpListener::bind(bind))
        .run(
            Route::new()
                .at(
                    "/api/v1/openapi.json",
                    poem::endpoint::make_sync(move |_| spec.clone()),
                )
                .nest(API_PREFIX, api_service)
                .nest("/", ui)
                .data(presenter),
        )
        .await?;

    Ok(())
}

pub fn output_spec(server_url: &str, output: &str) -> eyre::Result<()> {
    let api_service = api_service(server_url, API_PREFIX)?;
    std::fs::write(output, api_service.spec())?;
    Ok(())
}
