//! Shared fixtures: in-memory repositories, sample listings and a SQLite store
#![allow(dead_code)]

use anyhow::bail;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use listing_service::config::Config;
use listing_service::contract::*;
use listing_service::domain::repository::{ArtistRepository, ShowRepository, VenueRepository};
use listing_service::domain::Service;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;

// ===== Sample submissions =====

pub fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: Some(name.to_string()),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        address: Some("1015 Folsom Street".to_string()),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        website: Some("https://www.themusicalhop.com".to_string()),
        seeking_talent: true,
        ..Default::default()
    }
}

pub fn artist_input(name: &str) -> ArtistInput {
    ArtistInput {
        name: Some(name.to_string()),
        city: Some("San Francisco".to_string()),
        state: Some("CA".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://images.example.com/artist.png".to_string()),
        ..Default::default()
    }
}

pub fn show_input(artist_id: i32, venue_id: i32, start_time: DateTime<Utc>) -> ShowInput {
    ShowInput {
        artist_id: Some(artist_id),
        venue_id: Some(venue_id),
        start_time: Some(start_time.to_rfc3339()),
    }
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

// ===== In-memory repositories =====

#[derive(Default)]
pub struct MockState {
    venues: BTreeMap<i32, Venue>,
    artists: BTreeMap<i32, Artist>,
    shows: BTreeMap<i32, Show>,
    next_id: i32,
}

impl MockState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn detail(&self, show: &Show) -> Option<ShowDetail> {
        let venue = self.venues.get(&show.venue_id)?;
        let artist = self.artists.get(&show.artist_id)?;
        Some(ShowDetail {
            id: show.id,
            start_time: show.start_time,
            venue: ShowParticipant {
                id: venue.id,
                name: venue.name.clone(),
                image_link: venue.image_link.clone(),
            },
            artist: ShowParticipant {
                id: artist.id,
                name: artist.name.clone(),
                image_link: artist.image_link.clone(),
            },
        })
    }

    fn details(&self, keep: impl Fn(&Show) -> bool) -> Vec<ShowDetail> {
        let mut shows: Vec<&Show> = self.shows.values().filter(|s| keep(s)).collect();
        shows.sort_by_key(|s| (s.start_time, s.id));
        shows.into_iter().filter_map(|s| self.detail(s)).collect()
    }
}

/// One store backing all three repository traits
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<RwLock<MockState>>,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        *self.fail_reads.write() = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.write() = fail;
    }

    pub fn show_count(&self) -> usize {
        self.state.read().shows.len()
    }

    pub fn venue_count(&self) -> usize {
        self.state.read().venues.len()
    }

    fn check_read(&self) -> anyhow::Result<()> {
        if *self.fail_reads.read() {
            bail!("connection reset by peer");
        }
        Ok(())
    }

    fn check_write(&self) -> anyhow::Result<()> {
        if *self.fail_writes.read() {
            bail!("disk I/O error");
        }
        Ok(())
    }
}

fn venue_from(id: i32, new: &NewVenue) -> Venue {
    Venue {
        id,
        name: new.name.clone(),
        city: new.city.clone(),
        state: new.state.clone(),
        address: new.address.clone(),
        phone: new.phone.clone(),
        image_link: new.image_link.clone(),
        genres: new.genres.clone(),
        facebook_link: new.facebook_link.clone(),
        website: new.website.clone(),
        seeking_talent: new.seeking_talent,
        seeking_description: new.seeking_description.clone(),
    }
}

fn artist_from(id: i32, new: &NewArtist) -> Artist {
    Artist {
        id,
        name: new.name.clone(),
        city: new.city.clone(),
        state: new.state.clone(),
        phone: new.phone.clone(),
        genres: new.genres.clone(),
        image_link: new.image_link.clone(),
        facebook_link: new.facebook_link.clone(),
        website: new.website.clone(),
        seeking_venues: new.seeking_venues,
        seeking_description: new.seeking_description.clone(),
    }
}

#[async_trait]
impl VenueRepository for MockStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Venue>> {
        self.check_read()?;
        Ok(self.state.read().venues.values().cloned().collect())
    }

    async fn find_by_id(&self, venue_id: i32) -> anyhow::Result<Option<Venue>> {
        self.check_read()?;
        Ok(self.state.read().venues.get(&venue_id).cloned())
    }

    async fn create(&self, venue: &NewVenue) -> anyhow::Result<Venue> {
        self.check_write()?;
        let mut state = self.state.write();
        let id = state.next_id();
        let venue = venue_from(id, venue);
        state.venues.insert(id, venue.clone());
        Ok(venue)
    }

    async fn update(&self, venue_id: i32, venue: &NewVenue) -> anyhow::Result<Option<Venue>> {
        self.check_write()?;
        let mut state = self.state.write();
        if !state.venues.contains_key(&venue_id) {
            return Ok(None);
        }
        let venue = venue_from(venue_id, venue);
        state.venues.insert(venue_id, venue.clone());
        Ok(Some(venue))
    }

    async fn delete(&self, venue_id: i32) -> anyhow::Result<bool> {
        self.check_write()?;
        let mut state = self.state.write();
        if state.venues.remove(&venue_id).is_none() {
            return Ok(false);
        }
        state.shows.retain(|_, show| show.venue_id != venue_id);
        Ok(true)
    }
}

#[async_trait]
impl ArtistRepository for MockStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Artist>> {
        self.check_read()?;
        Ok(self.state.read().artists.values().cloned().collect())
    }

    async fn find_by_id(&self, artist_id: i32) -> anyhow::Result<Option<Artist>> {
        self.check_read()?;
        Ok(self.state.read().artists.get(&artist_id).cloned())
    }

    async fn create(&self, artist: &NewArtist) -> anyhow::Result<Artist> {
        self.check_write()?;
        let mut state = self.state.write();
        let id = state.next_id();
        let artist = artist_from(id, artist);
        state.artists.insert(id, artist.clone());
        Ok(artist)
    }

    async fn update(&self, artist_id: i32, artist: &NewArtist) -> anyhow::Result<Option<Artist>> {
        self.check_write()?;
        let mut state = self.state.write();
        if !state.artists.contains_key(&artist_id) {
            return Ok(None);
        }
        let artist = artist_from(artist_id, artist);
        state.artists.insert(artist_id, artist.clone());
        Ok(Some(artist))
    }

    async fn delete(&self, artist_id: i32) -> anyhow::Result<bool> {
        self.check_write()?;
        let mut state = self.state.write();
        if state.artists.remove(&artist_id).is_none() {
            return Ok(false);
        }
        state.shows.retain(|_, show| show.artist_id != artist_id);
        Ok(true)
    }
}

#[async_trait]
impl ShowRepository for MockStore {
    async fn list_all(&self) -> anyhow::Result<Vec<ShowDetail>> {
        self.check_read()?;
        let state = self.state.read();
        let mut shows: Vec<&Show> = state.shows.values().collect();
        shows.sort_by_key(|s| (s.venue_id, s.id));
        Ok(shows.into_iter().filter_map(|s| state.detail(s)).collect())
    }

    async fn find_by_venue(&self, venue_id: i32) -> anyhow::Result<Vec<ShowDetail>> {
        self.check_read()?;
        Ok(self.state.read().details(|s| s.venue_id == venue_id))
    }

    async fn find_by_artist(&self, artist_id: i32) -> anyhow::Result<Vec<ShowDetail>> {
        self.check_read()?;
        Ok(self.state.read().details(|s| s.artist_id == artist_id))
    }

    async fn create(&self, show: &NewShow) -> anyhow::Result<Show> {
        self.check_write()?;
        let mut state = self.state.write();
        if !state.artists.contains_key(&show.artist_id) {
            bail!("artist {} does not exist", show.artist_id);
        }
        if !state.venues.contains_key(&show.venue_id) {
            bail!("venue {} does not exist", show.venue_id);
        }
        let id = state.next_id();
        let show = Show {
            id,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        };
        state.shows.insert(id, show.clone());
        Ok(show)
    }
}

/// Service over a fresh in-memory store
pub fn mock_service() -> (Arc<Service>, MockStore) {
    let store = MockStore::new();
    let service = Arc::new(Service::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Config::default(),
    ));
    (service, store)
}

// ===== SQLite =====

/// Fresh in-memory SQLite database with the listing schema applied
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    listing_service::ListingServiceModule::default()
        .migrate(&db)
        .await
        .unwrap();
    Arc::new(db)
}
