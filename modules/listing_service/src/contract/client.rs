//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and edit
//! listings without going through HTTP.

use super::{
    error::ListingError,
    model::{
        Artist, ArtistInput, ArtistPage, ListingSummary, Show, ShowInput, ShowListing, Venue,
        VenueArea, VenueInput, VenuePage,
    },
};
use async_trait::async_trait;

/// Listing service API for inter-module communication
#[async_trait]
pub trait ListingApi: Send + Sync {
    // ===== Venue Operations =====

    /// Venues grouped by (city, state) with upcoming show counts
    async fn list_venue_areas(&self) -> Result<Vec<VenueArea>, ListingError>;

    /// Venues whose name contains the term, ignoring case
    async fn search_venues(&self, term: Option<&str>) -> Result<Vec<ListingSummary>, ListingError>;

    /// Venue detail with past and upcoming shows
    async fn get_venue_page(&self, venue_id: i32) -> Result<VenuePage, ListingError>;

    /// Create a venue
    async fn create_venue(&self, input: VenueInput) -> Result<Venue, ListingError>;

    /// Replace a venue's fields
    async fn update_venue(&self, venue_id: i32, input: VenueInput) -> Result<Venue, ListingError>;

    /// Delete a venue and its shows
    async fn delete_venue(&self, venue_id: i32) -> Result<(), ListingError>;

    // ===== Artist Operations =====

    /// All artists ordered by id
    async fn list_artists(&self) -> Result<Vec<Artist>, ListingError>;

    /// Artists whose name contains the term, ignoring case
    async fn search_artists(&self, term: Option<&str>)
        -> Result<Vec<ListingSummary>, ListingError>;

    /// Artist detail with past and upcoming shows
    async fn get_artist_page(&self, artist_id: i32) -> Result<ArtistPage, ListingError>;

    /// Create an artist
    async fn create_artist(&self, input: ArtistInput) -> Result<Artist, ListingError>;

    /// Replace an artist's fields
    async fn update_artist(&self, artist_id: i32, input: ArtistInput)
        -> Result<Artist, ListingError>;

    /// Delete an artist and its shows
    async fn delete_artist(&self, artist_id: i32) -> Result<(), ListingError>;

    // ===== Show Operations =====

    /// Every show with both sides' display fields
    async fn list_shows(&self) -> Result<Vec<ShowListing>, ListingError>;

    /// Book an artist at a venue
    async fn create_show(&self, input: ShowInput) -> Result<Show, ListingError>;
}
