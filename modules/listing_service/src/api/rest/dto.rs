//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Request DTOs =====

/// Venue create/edit form
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct VenueForm {
    #[schema(example = "The Musical Hop")]
    pub name: Option<String>,
    #[schema(example = "San Francisco")]
    pub city: Option<String>,
    #[schema(example = "CA")]
    pub state: Option<String>,
    #[schema(example = "1015 Folsom Street")]
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Artist create/edit form
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ArtistForm {
    #[schema(example = "Guns N Petals")]
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

/// Show booking form
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ShowForm {
    pub artist_id: Option<i32>,
    pub venue_id: Option<i32>,
    /// RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC)
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: Option<String>,
}

/// Name search request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Case-insensitive substring; absent or empty matches everything
    #[schema(example = "hop")]
    pub search_term: Option<String>,
}

// ===== Record DTOs =====

/// Venue record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Artist record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

/// Show record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowDto {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

// ===== List / Search DTOs =====

/// Venue or artist with its upcoming show count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingSummaryDto {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues in one (city, state)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueAreaDto {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingSummaryDto>,
}

/// Artist list entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistSummaryDto {
    pub id: i32,
    pub name: String,
}

/// Name search result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub count: usize,
    pub data: Vec<ListingSummaryDto>,
}

/// Global show list row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowListingDto {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

// ===== Detail Page DTOs =====

/// Show on a venue page; the counterpart is the artist
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueShowDto {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Show on an artist page; the counterpart is the venue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistShowDto {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

/// Venue detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenuePageDto {
    #[serde(flatten)]
    pub venue: VenueDto,
    pub past_shows: Vec<VenueShowDto>,
    pub upcoming_shows: Vec<VenueShowDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistPageDto {
    #[serde(flatten)]
    pub artist: ArtistDto,
    pub past_shows: Vec<ArtistShowDto>,
    pub upcoming_shows: Vec<ArtistShowDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

// ===== Write Result DTOs =====

/// Venue after a create or update, with the flash message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueWriteResponse {
    pub success: bool,
    #[schema(example = "Venue The Musical Hop was successfully listed!")]
    pub message: String,
    pub venue: VenueDto,
}

/// Artist after a create or update, with the flash message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistWriteResponse {
    pub success: bool,
    pub message: String,
    pub artist: ArtistDto,
}

/// Newly booked show, with the flash message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowWriteResponse {
    pub success: bool,
    #[schema(example = "Show was successfully listed!")]
    pub message: String,
    pub show: ShowDto,
}

/// Result of a delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted: i32,
}
