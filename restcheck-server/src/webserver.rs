use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::{event, Level};

pub async fn start_webserver(addr: String, app: Router) -> anyhow::Result<()> {
    let cors = CorsLayer::new().allow_origin(Any);
    let app = app.layer(cors);

    let addr = addr.parse()?;
    event!(Level::INFO, %addr, "REST fixture listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
