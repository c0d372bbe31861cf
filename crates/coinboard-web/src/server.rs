use crate::api::{self, ApiDoc};
use crate::dashboard::Dashboard;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

/// Default local port of the dashboard.
pub const PORT: u16 = 8049;

/// Register the page, the API endpoints and their documentation.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // dashboard page
        .service(api::index)
        // api endpoints
        .service(api::cryptos)
        .service(api::chart_kinds)
        .service(api::quiz)
        .service(api::figure)
        .service(api::investor_level)
        .service(api::prices)
        // api documentation
        .service(Redoc::with_url("/redoc", ApiDoc::openapi()));
}

/// Serve the dashboard until the process is stopped.
pub async fn serve(dashboard: Dashboard, host: &str, port: u16) -> anyhow::Result<()> {
    let dashboard = web::Data::new(dashboard);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(dashboard.clone())
            .configure(configure)
    })
    .bind((host, port))
    .with_context(|| format!("failed to bind {host}:{port}"))?;

    info!("Dashboard listening on http://{host}:{port}");
    server.run().await?;
    Ok(())
}
