//! Database bootstrap, router assembly and the HTTP listener

use crate::config::{AppConfig, DatabaseConfig};
use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use listing_service::ListingServiceModule;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use trivia_service::TriviaServiceModule;

/// Open the connection pool described by `cfg`
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .connect_timeout(cfg.connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// Run every module's pending migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    ListingServiceModule::default()
        .migrate(db)
        .await
        .context("listing migrations failed")?;
    TriviaServiceModule::default()
        .migrate(db)
        .await
        .context("trivia migrations failed")?;
    Ok(())
}

/// Merged OpenAPI document of every module
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ListingServiceModule::openapi();
    doc.merge(TriviaServiceModule::openapi());
    doc.info.title = "Catalog API".to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

/// Initialize both modules over `db` and mount their routes
pub fn build_router(cfg: &AppConfig, db: Arc<DatabaseConnection>) -> Result<Router> {
    let listing = ListingServiceModule::default();
    listing
        .init(db.clone(), cfg.listing.clone())
        .context("listing service init failed")?;
    let trivia = TriviaServiceModule::default();
    trivia
        .init(db, cfg.trivia.clone())
        .context("trivia service init failed")?;

    let router = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));
    let router = listing.register_rest(router)?;
    let router = trivia.register_rest(router)?;

    let router = router
        .layer(RequestBodyLimitLayer::new(cfg.server.body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    if cfg.server.cors_allow_any {
        Ok(router.layer(CorsLayer::permissive()))
    } else {
        Ok(router)
    }
}

/// Connect, migrate, then serve until Ctrl-C
pub async fn run(cfg: AppConfig) -> Result<()> {
    let db = Arc::new(connect(&cfg.database).await?);
    migrate(&db).await?;
    let app = build_router(&cfg, db)?;

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    info!(addr = %cfg.server.bind_addr, "catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app(cfg: AppConfig) -> Router {
        let db = connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap();
        migrate(&db).await.unwrap();
        build_router(&cfg, Arc::new(db)).unwrap()
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value, Option<String>) {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap(), request_id)
    }

    #[tokio::test]
    async fn health_reports_ok_with_request_id() {
        let app = app(AppConfig::default()).await;

        let (status, body, request_id) = get_json(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        assert!(request_id.is_some());
    }

    #[tokio::test]
    async fn both_modules_are_mounted() {
        let app = app(AppConfig::default()).await;

        let (status, body, _) = get_json(&app, "/venues").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _, _) = get_json(&app, "/categories").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn openapi_lists_schemas_of_both_modules() {
        let app = app(AppConfig::default()).await;

        let (status, body, _) = get_json(&app, "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Catalog API");
        let schemas = body["components"]["schemas"].as_object().unwrap();
        assert!(schemas.contains_key("VenueDto"));
        assert!(schemas.contains_key("QuestionDto"));
    }

    #[tokio::test]
    async fn migrate_twice_then_serve() {
        let db = connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap();
        migrate(&db).await.unwrap();
        migrate(&db).await.unwrap();
        let app = build_router(&AppConfig::default(), Arc::new(db)).unwrap();

        let (status, _, _) = get_json(&app, "/shows").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_module_config_fails_startup() {
        let db = connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap();
        let mut cfg = AppConfig::default();
        cfg.trivia.questions_per_page = 0;

        assert!(build_router(&cfg, Arc::new(db)).is_err());
    }
}
