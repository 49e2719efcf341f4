//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs. Every write runs in
//! its own transaction: it either commits fully or leaves nothing behind.

use crate::contract::{Artist, NewArtist, NewShow, NewVenue, Show, ShowDetail, Venue};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for venues
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// All venues ordered by id
    async fn list_all(&self) -> Result<Vec<Venue>>;

    /// Find a venue by id
    async fn find_by_id(&self, venue_id: i32) -> Result<Option<Venue>>;

    /// Insert a venue and return it with its new id
    async fn create(&self, venue: &NewVenue) -> Result<Venue>;

    /// Overwrite a venue's fields, `None` if it does not exist
    async fn update(&self, venue_id: i32, venue: &NewVenue) -> Result<Option<Venue>>;

    /// Delete a venue together with its shows, `false` if it did not exist
    async fn delete(&self, venue_id: i32) -> Result<bool>;
}

/// Repository for artists
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// All artists ordered by id
    async fn list_all(&self) -> Result<Vec<Artist>>;

    /// Find an artist by id
    async fn find_by_id(&self, artist_id: i32) -> Result<Option<Artist>>;

    /// Insert an artist and return it with its new id
    async fn create(&self, artist: &NewArtist) -> Result<Artist>;

    /// Overwrite an artist's fields, `None` if it does not exist
    async fn update(&self, artist_id: i32, artist: &NewArtist) -> Result<Option<Artist>>;

    /// Delete an artist together with its shows, `false` if it did not exist
    async fn delete(&self, artist_id: i32) -> Result<bool>;
}

/// Repository for shows
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Every show joined with its venue and artist, ordered by venue id then show id
    async fn list_all(&self) -> Result<Vec<ShowDetail>>;

    /// Shows at one venue, ordered by start time then id
    async fn find_by_venue(&self, venue_id: i32) -> Result<Vec<ShowDetail>>;

    /// Shows by one artist, ordered by start time then id
    async fn find_by_artist(&self, artist_id: i32) -> Result<Vec<ShowDetail>>;

    /// Insert a show. Fails when the artist or venue does not exist.
    async fn create(&self, show: &NewShow) -> Result<Show>;
}
