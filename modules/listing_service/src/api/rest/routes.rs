//! Route registration and OpenAPI schema collection

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Schemas exposed by the listing REST API
#[derive(OpenApi)]
#[openapi(components(schemas(
    VenueForm,
    ArtistForm,
    ShowForm,
    SearchRequest,
    VenueDto,
    ArtistDto,
    ShowDto,
    ListingSummaryDto,
    VenueAreaDto,
    ArtistSummaryDto,
    SearchResponse,
    ShowListingDto,
    VenueShowDto,
    ArtistShowDto,
    VenuePageDto,
    ArtistPageDto,
    VenueWriteResponse,
    ArtistWriteResponse,
    ShowWriteResponse,
    DeleteResponse,
)))]
pub struct ListingApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Venue endpoints
        .route("/venues", get(list_venues_handler).post(create_venue_handler))
        .route("/venues/search", post(search_venues_handler))
        .route(
            "/venues/{id}",
            get(show_venue_handler)
                .put(update_venue_handler)
                .delete(delete_venue_handler),
        )
        .route("/venues/{id}/edit", get(edit_venue_handler))
        // Artist endpoints
        .route("/artists", get(list_artists_handler).post(create_artist_handler))
        .route("/artists/search", post(search_artists_handler))
        .route(
            "/artists/{id}",
            get(show_artist_handler)
                .put(update_artist_handler)
                .delete(delete_artist_handler),
        )
        .route("/artists/{id}/edit", get(edit_artist_handler))
        // Show endpoints
        .route("/shows", get(list_shows_handler).post(create_show_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_venues_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<VenueAreaDto>>, Problem> {
    handlers::list_venues(service).await
}

async fn search_venues_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Problem> {
    handlers::search_venues(service, json).await
}

async fn show_venue_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<VenuePageDto>, Problem> {
    handlers::show_venue(service, path).await
}

async fn edit_venue_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<VenueDto>, Problem> {
    handlers::edit_venue(service, path).await
}

async fn create_venue_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<VenueForm>,
) -> Result<(StatusCode, Json<VenueWriteResponse>), Problem> {
    handlers::create_venue(service, json).await
}

async fn update_venue_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    json: Json<VenueForm>,
) -> Result<Json<VenueWriteResponse>, Problem> {
    handlers::update_venue(service, path, json).await
}

async fn delete_venue_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<DeleteResponse>, Problem> {
    handlers::delete_venue(service, path).await
}

async fn list_artists_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ArtistSummaryDto>>, Problem> {
    handlers::list_artists(service).await
}

async fn search_artists_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Problem> {
    handlers::search_artists(service, json).await
}

async fn show_artist_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<ArtistPageDto>, Problem> {
    handlers::show_artist(service, path).await
}

async fn edit_artist_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<ArtistDto>, Problem> {
    handlers::edit_artist(service, path).await
}

async fn create_artist_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<ArtistForm>,
) -> Result<(StatusCode, Json<ArtistWriteResponse>), Problem> {
    handlers::create_artist(service, json).await
}

async fn update_artist_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    json: Json<ArtistForm>,
) -> Result<Json<ArtistWriteResponse>, Problem> {
    handlers::update_artist(service, path, json).await
}

async fn delete_artist_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<DeleteResponse>, Problem> {
    handlers::delete_artist(service, path).await
}

async fn list_shows_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ShowListingDto>>, Problem> {
    handlers::list_shows(service).await
}

async fn create_show_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<ShowForm>,
) -> Result<(StatusCode, Json<ShowWriteResponse>), Problem> {
    handlers::create_show(service, json).await
}
