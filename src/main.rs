use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use anyhow::Context;

mod api;
mod config;
mod db;
mod docs;
mod engine;
mod error;
mod model;
mod routes;
mod store;
mod utils;

use config::Config;
use db::{AppState, init_store};
use engine::SystemClock;
use store::KvStore;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Attendance tracker is running"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(data_dir = %config.data_dir.display(), "Server starting...");

    let kv = init_store(&config.data_dir)
        .with_context(|| format!("failed to open data dir {}", config.data_dir.display()))?;
    let collections = kv.keys().context("failed to list stored collections")?;
    info!(?collections, "Record store ready");
    let state = Data::new(AppState::new(kv, Arc::new(SystemClock)));

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
