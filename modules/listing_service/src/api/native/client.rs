//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Artist, ArtistInput, ArtistPage, ListingApi, ListingError, ListingSummary, Show, ShowInput,
    ShowListing, Venue, VenueArea, VenueInput, VenuePage,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ListingApi for NativeClient {
    async fn list_venue_areas(&self) -> Result<Vec<VenueArea>, ListingError> {
        self.service.list_venue_areas().await
    }

    async fn search_venues(&self, term: Option<&str>) -> Result<Vec<ListingSummary>, ListingError> {
        self.service.search_venues(term).await
    }

    async fn get_venue_page(&self, venue_id: i32) -> Result<VenuePage, ListingError> {
        self.service.get_venue_page(venue_id).await
    }

    async fn create_venue(&self, input: VenueInput) -> Result<Venue, ListingError> {
        self.service.create_venue(input).await
    }

    async fn update_venue(&self, venue_id: i32, input: VenueInput) -> Result<Venue, ListingError> {
        self.service.update_venue(venue_id, input).await
    }

    async fn delete_venue(&self, venue_id: i32) -> Result<(), ListingError> {
        self.service.delete_venue(venue_id).await
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, ListingError> {
        self.service.list_artists().await
    }

    async fn search_artists(
        &self,
        term: Option<&str>,
    ) -> Result<Vec<ListingSummary>, ListingError> {
        self.service.search_artists(term).await
    }

    async fn get_artist_page(&self, artist_id: i32) -> Result<ArtistPage, ListingError> {
        self.service.get_artist_page(artist_id).await
    }

    async fn create_artist(&self, input: ArtistInput) -> Result<Artist, ListingError> {
        self.service.create_artist(input).await
    }

    async fn update_artist(
        &self,
        artist_id: i32,
        input: ArtistInput,
    ) -> Result<Artist, ListingError> {
        self.service.update_artist(artist_id, input).await
    }

    async fn delete_artist(&self, artist_id: i32) -> Result<(), ListingError> {
        self.service.delete_artist(artist_id).await
    }

    async fn list_shows(&self) -> Result<Vec<ShowListing>, ListingError> {
        self.service.list_shows().await
    }

    async fn create_show(&self, input: ShowInput) -> Result<Show, ListingError> {
        self.service.create_show(input).await
    }
}
