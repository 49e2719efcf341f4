//! SeaORM repository implementations

use crate::contract::{Artist, NewArtist, NewShow, NewVenue, Show, ShowDetail, Venue};
use crate::domain::repository::{ArtistRepository, ShowRepository, VenueRepository};
use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::entity::{artist, show, venue};

// ===== Venue Repository =====

pub struct SeaOrmVenueRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVenueRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueRepository for SeaOrmVenueRepository {
    async fn list_all(&self) -> Result<Vec<Venue>> {
        let results = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&*self.db)
            .await?;

        results.into_iter().map(Venue::try_from).collect()
    }

    async fn find_by_id(&self, venue_id: i32) -> Result<Option<Venue>> {
        let result = venue::Entity::find_by_id(venue_id).one(&*self.db).await?;

        result.map(Venue::try_from).transpose()
    }

    async fn create(&self, new_venue: &NewVenue) -> Result<Venue> {
        let txn = self.db.begin().await?;
        let active: venue::ActiveModel = new_venue.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        model.try_into()
    }

    async fn update(&self, venue_id: i32, new_venue: &NewVenue) -> Result<Option<Venue>> {
        let txn = self.db.begin().await?;
        if venue::Entity::find_by_id(venue_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(None);
        }

        let mut active: venue::ActiveModel = new_venue.into();
        active.id = Set(venue_id);
        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(model.try_into()?))
    }

    async fn delete(&self, venue_id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;
        if venue::Entity::find_by_id(venue_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }

        let shows = show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(venue_id))
            .exec(&txn)
            .await?;
        venue::Entity::delete_by_id(venue_id).exec(&txn).await?;
        txn.commit().await?;

        tracing::debug!(venue_id, shows_removed = shows.rows_affected, "venue row deleted");
        Ok(true)
    }
}

// ===== Artist Repository =====

pub struct SeaOrmArtistRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmArtistRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistRepository for SeaOrmArtistRepository {
    async fn list_all(&self) -> Result<Vec<Artist>> {
        let results = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&*self.db)
            .await?;

        results.into_iter().map(Artist::try_from).collect()
    }

    async fn find_by_id(&self, artist_id: i32) -> Result<Option<Artist>> {
        let result = artist::Entity::find_by_id(artist_id).one(&*self.db).await?;

        result.map(Artist::try_from).transpose()
    }

    async fn create(&self, new_artist: &NewArtist) -> Result<Artist> {
        let txn = self.db.begin().await?;
        let active: artist::ActiveModel = new_artist.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        model.try_into()
    }

    async fn update(&self, artist_id: i32, new_artist: &NewArtist) -> Result<Option<Artist>> {
        let txn = self.db.begin().await?;
        if artist::Entity::find_by_id(artist_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(None);
        }

        let mut active: artist::ActiveModel = new_artist.into();
        active.id = Set(artist_id);
        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(model.try_into()?))
    }

    async fn delete(&self, artist_id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;
        if artist::Entity::find_by_id(artist_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }

        let shows = show::Entity::delete_many()
            .filter(show::Column::ArtistId.eq(artist_id))
            .exec(&txn)
            .await?;
        artist::Entity::delete_by_id(artist_id).exec(&txn).await?;
        txn.commit().await?;

        tracing::debug!(artist_id, shows_removed = shows.rows_affected, "artist row deleted");
        Ok(true)
    }
}

// ===== Show Repository =====

pub struct SeaOrmShowRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmShowRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Run a show query and join both sides onto every row
    async fn load_details(&self, query: Select<show::Entity>) -> Result<Vec<ShowDetail>> {
        let shows = query.all(&*self.db).await?;
        if shows.is_empty() {
            return Ok(Vec::new());
        }

        let venue_ids: BTreeSet<i32> = shows.iter().map(|s| s.venue_id).collect();
        let artist_ids: BTreeSet<i32> = shows.iter().map(|s| s.artist_id).collect();

        let venues: HashMap<i32, venue::Model> = venue::Entity::find()
            .filter(venue::Column::Id.is_in(venue_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();
        let artists: HashMap<i32, artist::Model> = artist::Entity::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        shows
            .into_iter()
            .map(|s| {
                let venue = venues
                    .get(&s.venue_id)
                    .ok_or_else(|| anyhow!("show {} references missing venue {}", s.id, s.venue_id))?;
                let artist = artists.get(&s.artist_id).ok_or_else(|| {
                    anyhow!("show {} references missing artist {}", s.id, s.artist_id)
                })?;
                Ok(ShowDetail {
                    id: s.id,
                    start_time: s.start_time,
                    venue: venue.into(),
                    artist: artist.into(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl ShowRepository for SeaOrmShowRepository {
    async fn list_all(&self) -> Result<Vec<ShowDetail>> {
        self.load_details(
            show::Entity::find()
                .order_by_asc(show::Column::VenueId)
                .order_by_asc(show::Column::Id),
        )
        .await
    }

    async fn find_by_venue(&self, venue_id: i32) -> Result<Vec<ShowDetail>> {
        self.load_details(
            show::Entity::find()
                .filter(show::Column::VenueId.eq(venue_id))
                .order_by_asc(show::Column::StartTime)
                .order_by_asc(show::Column::Id),
        )
        .await
    }

    async fn find_by_artist(&self, artist_id: i32) -> Result<Vec<ShowDetail>> {
        self.load_details(
            show::Entity::find()
                .filter(show::Column::ArtistId.eq(artist_id))
                .order_by_asc(show::Column::StartTime)
                .order_by_asc(show::Column::Id),
        )
        .await
    }

    async fn create(&self, new_show: &NewShow) -> Result<Show> {
        let txn = self.db.begin().await?;
        if let Err(err) = ensure_participants_exist(&txn, new_show).await {
            txn.rollback().await?;
            return Err(err);
        }

        let active: show::ActiveModel = new_show.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }
}

/// Both ends of a show must exist before it is written
async fn ensure_participants_exist<C: ConnectionTrait>(conn: &C, new_show: &NewShow) -> Result<()> {
    if artist::Entity::find_by_id(new_show.artist_id)
        .one(conn)
        .await?
        .is_none()
    {
        bail!("artist {} does not exist", new_show.artist_id);
    }
    if venue::Entity::find_by_id(new_show.venue_id)
        .one(conn)
        .await?
        .is_none()
    {
        bail!("venue {} does not exist", new_show.venue_id);
    }
    Ok(())
}
