//! Listing Service Module
//!
//! Venues, artists and the shows that connect them. Read paths group venues
//! by location and split each venue's or artist's shows into past and
//! upcoming relative to the moment of the request.

// Public exports
pub mod contract;
pub use contract::{
    client::ListingApi, error::ListingError, Artist, ArtistPage, ListingSummary, Show,
    ShowCard, ShowDetail, Venue, VenueArea, VenuePage,
};

pub mod module;
pub use module::ListingServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
