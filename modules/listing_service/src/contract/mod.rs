//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::ListingApi;
pub use error::ListingError;
pub use model::{
    Artist, ArtistInput, ArtistPage, ListingSummary, NewArtist, NewShow, NewVenue, Show,
    ShowCard, ShowDetail, ShowInput, ShowListing, ShowParticipant, Venue, VenueArea, VenueInput,
    VenuePage,
};
