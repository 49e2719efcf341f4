//! Domain layer - business logic and services

pub mod grouping;
pub mod repository;
pub mod service;
pub mod shows;
pub mod validation;

pub use repository::{ArtistRepository, ShowRepository, VenueRepository};
pub use service::Service;
