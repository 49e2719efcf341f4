//! Contract models for listing service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// A place that hosts shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
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
    /// Whether the venue is looking for performers
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A performer that plays shows at venues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    /// Whether the artist is looking for places to play
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

/// Association of an artist playing a venue at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// Display fields of one side of a show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowParticipant {
    pub id: i32,
    pub name: String,
    pub image_link: Option<String>,
}

/// A show joined with both the venue and the artist it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDetail {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub venue: ShowParticipant,
    pub artist: ShowParticipant,
}

/// One show as seen from a venue or artist page: the other side plus the time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    /// The counterpart (the artist on a venue page, the venue on an artist page)
    pub counterpart: ShowParticipant,
    /// Start time rendered for display
    pub start_time: String,
}

/// A venue with its shows split around the request time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenuePage {
    pub venue: Venue,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
}

/// An artist with its shows split around the request time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistPage {
    pub artist: Artist,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
}

/// Short form of a venue or artist used in lists and search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingSummary>,
}

/// Show row for the global show list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

// ===== Submissions =====

/// Venue submission as received, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Artist submission as received, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

/// Show submission as received, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: Option<i32>,
    pub venue_id: Option<i32>,
    /// RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC)
    pub start_time: Option<String>,
}

/// Validated venue fields ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
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

/// Validated artist fields ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
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

/// Validated show fields ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}
