//! Domain service - business logic orchestration

use super::grouping::{group_by_area, summarize};
use super::repository::{ArtistRepository, ShowRepository, VenueRepository};
use super::shows::{aggregate, listing, Perspective};
use super::validation::{validate_artist, validate_show, validate_venue};
use crate::config::Config;
use crate::contract::{
    Artist, ArtistInput, ArtistPage, ListingError, ListingSummary, Show, ShowInput, ShowListing,
    Venue, VenueArea, VenueInput, VenuePage,
};
use catalog_common::filter_by_term;
use chrono::Utc;
use std::sync::Arc;

const LOAD_FAILED: &str = "An error occurred while loading listings.";

/// Domain service for venues, artists and shows
pub struct Service {
    venues: Arc<dyn VenueRepository>,
    artists: Arc<dyn ArtistRepository>,
    shows: Arc<dyn ShowRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        venues: Arc<dyn VenueRepository>,
        artists: Arc<dyn ArtistRepository>,
        shows: Arc<dyn ShowRepository>,
        config: Config,
    ) -> Self {
        Self {
            venues,
            artists,
            shows,
            config,
        }
    }

    // ===== Venue Operations =====

    /// Venues grouped by (city, state)
    pub async fn list_venue_areas(&self) -> Result<Vec<VenueArea>, ListingError> {
        let now = Utc::now();
        let venues = self.venues.list_all().await.map_err(read_failed("list venues"))?;
        let shows = self.shows.list_all().await.map_err(read_failed("list shows"))?;
        Ok(group_by_area(&venues, &shows, now))
    }

    /// Venues whose name contains `term`, ignoring case
    pub async fn search_venues(
        &self,
        term: Option<&str>,
    ) -> Result<Vec<ListingSummary>, ListingError> {
        let now = Utc::now();
        let venues = self.venues.list_all().await.map_err(read_failed("list venues"))?;
        let matches = filter_by_term(venues, term, |venue: &Venue| venue.name.as_str());
        let shows = self.shows.list_all().await.map_err(read_failed("list shows"))?;
        tracing::debug!(term = term.unwrap_or_default(), hits = matches.len(), "venue search");
        Ok(summarize(
            &matches,
            &shows,
            now,
            |venue: &Venue| (venue.id, venue.name.as_str()),
            |show| show.venue.id,
        ))
    }

    /// Get a venue record
    pub async fn get_venue(&self, venue_id: i32) -> Result<Venue, ListingError> {
        self.venues
            .find_by_id(venue_id)
            .await
            .map_err(read_failed("find venue"))?
            .ok_or_else(|| ListingError::not_found("venue", venue_id))
    }

    /// Venue detail: its shows split into past and upcoming, counterpart = artist
    pub async fn get_venue_page(&self, venue_id: i32) -> Result<VenuePage, ListingError> {
        let now = Utc::now();
        let venue = self.get_venue(venue_id).await?;
        let shows = self
            .shows
            .find_by_venue(venue_id)
            .await
            .map_err(read_failed("list venue shows"))?;
        let split = aggregate(&shows, Perspective::Venue, now, &self.config.show_time_format);
        Ok(VenuePage {
            venue,
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    /// Create a venue
    pub async fn create_venue(&self, input: VenueInput) -> Result<Venue, ListingError> {
        let new_venue = validate_venue(input, self.config.validate_links)?;
        let venue = self.venues.create(&new_venue).await.map_err(write_failed(format!(
            "An error occurred. Venue {} could not be listed.",
            new_venue.name
        )))?;
        tracing::info!(venue_id = venue.id, name = %venue.name, "venue listed");
        Ok(venue)
    }

    /// Replace a venue's fields
    pub async fn update_venue(
        &self,
        venue_id: i32,
        input: VenueInput,
    ) -> Result<Venue, ListingError> {
        let new_venue = validate_venue(input, self.config.validate_links)?;
        let updated = self
            .venues
            .update(venue_id, &new_venue)
            .await
            .map_err(write_failed(format!(
                "Venue {} was not updated. Something went wrong.",
                new_venue.name
            )))?;
        let venue = updated.ok_or_else(|| ListingError::not_found("venue", venue_id))?;
        tracing::info!(venue_id, "venue updated");
        Ok(venue)
    }

    /// Delete a venue; its shows go with it
    pub async fn delete_venue(&self, venue_id: i32) -> Result<(), ListingError> {
        let deleted = self.venues.delete(venue_id).await.map_err(write_failed(
            "Venue was not deleted. Something went wrong!".to_string(),
        ))?;
        if !deleted {
            return Err(ListingError::not_found("venue", venue_id));
        }
        tracing::info!(venue_id, "venue deleted");
        Ok(())
    }

    // ===== Artist Operations =====

    /// All artists ordered by id
    pub async fn list_artists(&self) -> Result<Vec<Artist>, ListingError> {
        self.artists.list_all().await.map_err(read_failed("list artists"))
    }

    /// Artists whose name contains `term`, ignoring case
    pub async fn search_artists(
        &self,
        term: Option<&str>,
    ) -> Result<Vec<ListingSummary>, ListingError> {
        let now = Utc::now();
        let artists = self.artists.list_all().await.map_err(read_failed("list artists"))?;
        let matches = filter_by_term(artists, term, |artist: &Artist| artist.name.as_str());
        let shows = self.shows.list_all().await.map_err(read_failed("list shows"))?;
        tracing::debug!(term = term.unwrap_or_default(), hits = matches.len(), "artist search");
        Ok(summarize(
            &matches,
            &shows,
            now,
            |artist: &Artist| (artist.id, artist.name.as_str()),
            |show| show.artist.id,
        ))
    }

    /// Get an artist record
    pub async fn get_artist(&self, artist_id: i32) -> Result<Artist, ListingError> {
        self.artists
            .find_by_id(artist_id)
            .await
            .map_err(read_failed("find artist"))?
            .ok_or_else(|| ListingError::not_found("artist", artist_id))
    }

    /// Artist detail: its shows split into past and upcoming, counterpart = venue
    pub async fn get_artist_page(&self, artist_id: i32) -> Result<ArtistPage, ListingError> {
        let now = Utc::now();
        let artist = self.get_artist(artist_id).await?;
        let shows = self
            .shows
            .find_by_artist(artist_id)
            .await
            .map_err(read_failed("list artist shows"))?;
        let split = aggregate(&shows, Perspective::Artist, now, &self.config.show_time_format);
        Ok(ArtistPage {
            artist,
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    /// Create an artist
    pub async fn create_artist(&self, input: ArtistInput) -> Result<Artist, ListingError> {
        let new_artist = validate_artist(input, self.config.validate_links)?;
        let artist = self.artists.create(&new_artist).await.map_err(write_failed(format!(
            "An error occurred. Artist {} could not be listed.",
            new_artist.name
        )))?;
        tracing::info!(artist_id = artist.id, name = %artist.name, "artist listed");
        Ok(artist)
    }

    /// Replace an artist's fields
    pub async fn update_artist(
        &self,
        artist_id: i32,
        input: ArtistInput,
    ) -> Result<Artist, ListingError> {
        let new_artist = validate_artist(input, self.config.validate_links)?;
        let updated = self
            .artists
            .update(artist_id, &new_artist)
            .await
            .map_err(write_failed(format!(
                "Artist {} was not updated. Something went wrong.",
                new_artist.name
            )))?;
        let artist = updated.ok_or_else(|| ListingError::not_found("artist", artist_id))?;
        tracing::info!(artist_id, "artist updated");
        Ok(artist)
    }

    /// Delete an artist; its shows go with it
    pub async fn delete_artist(&self, artist_id: i32) -> Result<(), ListingError> {
        let deleted = self.artists.delete(artist_id).await.map_err(write_failed(
            "Artist was not deleted. Something went wrong!".to_string(),
        ))?;
        if !deleted {
            return Err(ListingError::not_found("artist", artist_id));
        }
        tracing::info!(artist_id, "artist deleted");
        Ok(())
    }

    // ===== Show Operations =====

    /// Every show, ordered by venue
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, ListingError> {
        let shows = self.shows.list_all().await.map_err(read_failed("list shows"))?;
        Ok(shows
            .iter()
            .map(|show| listing(show, &self.config.show_time_format))
            .collect())
    }

    /// Book an artist at a venue
    pub async fn create_show(&self, input: ShowInput) -> Result<Show, ListingError> {
        let new_show = validate_show(input)?;
        let show = self.shows.create(&new_show).await.map_err(write_failed(
            "An error occurred. Show could not be listed.".to_string(),
        ))?;
        tracing::info!(
            show_id = show.id,
            artist_id = show.artist_id,
            venue_id = show.venue_id,
            "show listed"
        );
        Ok(show)
    }
}

// ===== Helper Methods =====

/// Log a failed read and hide the cause from the caller
fn read_failed(operation: &'static str) -> impl FnOnce(anyhow::Error) -> ListingError {
    move |error| {
        tracing::error!(error = ?error, operation, "listing read failed");
        ListingError::store_failure(LOAD_FAILED)
    }
}

/// Log a failed (and rolled back) write and surface `message` instead
fn write_failed(message: String) -> impl FnOnce(anyhow::Error) -> ListingError {
    move |error| {
        tracing::error!(error = ?error, "listing write failed");
        ListingError::store_failure(message)
    }
}
