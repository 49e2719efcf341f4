//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{extract::Path, http::StatusCode, Json};
use std::sync::Arc;

// ===== Venue Handlers =====

/// Venues grouped by city and state
pub async fn list_venues(service: Arc<Service>) -> Result<Json<Vec<VenueAreaDto>>, Problem> {
    let areas = service.list_venue_areas().await.map_err(map_domain_error)?;

    Ok(Json(areas.into_iter().map(Into::into).collect()))
}

/// Case-insensitive venue name search
pub async fn search_venues(
    service: Arc<Service>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Problem> {
    let matches = service
        .search_venues(req.search_term.as_deref())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(matches.into()))
}

/// Venue detail page
pub async fn show_venue(
    service: Arc<Service>,
    Path(venue_id): Path<i32>,
) -> Result<Json<VenuePageDto>, Problem> {
    let page = service.get_venue_page(venue_id).await.map_err(map_domain_error)?;

    Ok(Json(page.into()))
}

/// Raw venue record for the edit form
pub async fn edit_venue(
    service: Arc<Service>,
    Path(venue_id): Path<i32>,
) -> Result<Json<VenueDto>, Problem> {
    let venue = service.get_venue(venue_id).await.map_err(map_domain_error)?;

    Ok(Json(venue.into()))
}

/// Create a venue
pub async fn create_venue(
    service: Arc<Service>,
    Json(form): Json<VenueForm>,
) -> Result<(StatusCode, Json<VenueWriteResponse>), Problem> {
    let venue = service
        .create_venue(form.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(VenueWriteResponse {
            success: true,
            message: format!("Venue {} was successfully listed!", venue.name),
            venue: venue.into(),
        }),
    ))
}

/// Replace a venue's fields
pub async fn update_venue(
    service: Arc<Service>,
    Path(venue_id): Path<i32>,
    Json(form): Json<VenueForm>,
) -> Result<Json<VenueWriteResponse>, Problem> {
    let venue = service
        .update_venue(venue_id, form.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(VenueWriteResponse {
        success: true,
        message: format!("Venue {} was successfully updated!", venue.name),
        venue: venue.into(),
    }))
}

/// Delete a venue and its shows
pub async fn delete_venue(
    service: Arc<Service>,
    Path(venue_id): Path<i32>,
) -> Result<Json<DeleteResponse>, Problem> {
    service.delete_venue(venue_id).await.map_err(map_domain_error)?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Venue deleted successfully!".to_string(),
        deleted: venue_id,
    }))
}

// ===== Artist Handlers =====

/// All artists by id
pub async fn list_artists(service: Arc<Service>) -> Result<Json<Vec<ArtistSummaryDto>>, Problem> {
    let artists = service.list_artists().await.map_err(map_domain_error)?;

    Ok(Json(artists.into_iter().map(Into::into).collect()))
}

/// Case-insensitive artist name search
pub async fn search_artists(
    service: Arc<Service>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Problem> {
    let matches = service
        .search_artists(req.search_term.as_deref())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(matches.into()))
}

/// Artist detail page
pub async fn show_artist(
    service: Arc<Service>,
    Path(artist_id): Path<i32>,
) -> Result<Json<ArtistPageDto>, Problem> {
    let page = service.get_artist_page(artist_id).await.map_err(map_domain_error)?;

    Ok(Json(page.into()))
}

/// Raw artist record for the edit form
pub async fn edit_artist(
    service: Arc<Service>,
    Path(artist_id): Path<i32>,
) -> Result<Json<ArtistDto>, Problem> {
    let artist = service.get_artist(artist_id).await.map_err(map_domain_error)?;

    Ok(Json(artist.into()))
}

/// Create an artist
pub async fn create_artist(
    service: Arc<Service>,
    Json(form): Json<ArtistForm>,
) -> Result<(StatusCode, Json<ArtistWriteResponse>), Problem> {
    let artist = service
        .create_artist(form.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ArtistWriteResponse {
            success: true,
            message: format!("Artist {} was successfully listed!", artist.name),
            artist: artist.into(),
        }),
    ))
}

/// Replace an artist's fields
pub async fn update_artist(
    service: Arc<Service>,
    Path(artist_id): Path<i32>,
    Json(form): Json<ArtistForm>,
) -> Result<Json<ArtistWriteResponse>, Problem> {
    let artist = service
        .update_artist(artist_id, form.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ArtistWriteResponse {
        success: true,
        message: format!("Artist {} was successfully updated!", artist.name),
        artist: artist.into(),
    }))
}

/// Delete an artist and its shows
pub async fn delete_artist(
    service: Arc<Service>,
    Path(artist_id): Path<i32>,
) -> Result<Json<DeleteResponse>, Problem> {
    service.delete_artist(artist_id).await.map_err(map_domain_error)?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Artist deleted successfully!".to_string(),
        deleted: artist_id,
    }))
}

// ===== Show Handlers =====

/// Every show with venue and artist names
pub async fn list_shows(service: Arc<Service>) -> Result<Json<Vec<ShowListingDto>>, Problem> {
    let shows = service.list_shows().await.map_err(map_domain_error)?;

    Ok(Json(shows.into_iter().map(Into::into).collect()))
}

/// Book an artist at a venue
pub async fn create_show(
    service: Arc<Service>,
    Json(form): Json<ShowForm>,
) -> Result<(StatusCode, Json<ShowWriteResponse>), Problem> {
    let show = service
        .create_show(form.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ShowWriteResponse {
            success: true,
            message: "Show was successfully listed!".to_string(),
            show: show.into(),
        }),
    ))
}
