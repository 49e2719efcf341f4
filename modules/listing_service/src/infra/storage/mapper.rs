//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{artist, show, venue};
use crate::contract::{Artist, NewArtist, NewShow, NewVenue, Show, ShowParticipant, Venue};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::Json;

// ===== Venue Conversions =====

impl TryFrom<venue::Model> for Venue {
    type Error = anyhow::Error;

    fn try_from(entity: venue::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            address: entity.address,
            phone: entity.phone,
            image_link: entity.image_link,
            genres: genres_from_json(entity.genres)?,
            facebook_link: entity.facebook_link,
            website: entity.website,
            seeking_talent: entity.seeking_talent,
            seeking_description: entity.seeking_description,
        })
    }
}

impl From<&NewVenue> for venue::ActiveModel {
    fn from(model: &NewVenue) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            city: Set(model.city.clone()),
            state: Set(model.state.clone()),
            address: Set(model.address.clone()),
            phone: Set(model.phone.clone()),
            image_link: Set(model.image_link.clone()),
            genres: Set(genres_to_json(&model.genres)),
            facebook_link: Set(model.facebook_link.clone()),
            website: Set(model.website.clone()),
            seeking_talent: Set(model.seeking_talent),
            seeking_description: Set(model.seeking_description.clone()),
        }
    }
}

impl From<&venue::Model> for ShowParticipant {
    fn from(entity: &venue::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            image_link: entity.image_link.clone(),
        }
    }
}

// ===== Artist Conversions =====

impl TryFrom<artist::Model> for Artist {
    type Error = anyhow::Error;

    fn try_from(entity: artist::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            phone: entity.phone,
            genres: genres_from_json(entity.genres)?,
            image_link: entity.image_link,
            facebook_link: entity.facebook_link,
            website: entity.website,
            seeking_venues: entity.seeking_venues,
            seeking_description: entity.seeking_description,
        })
    }
}

impl From<&NewArtist> for artist::ActiveModel {
    fn from(model: &NewArtist) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            city: Set(model.city.clone()),
            state: Set(model.state.clone()),
            phone: Set(model.phone.clone()),
            genres: Set(genres_to_json(&model.genres)),
            image_link: Set(model.image_link.clone()),
            facebook_link: Set(model.facebook_link.clone()),
            website: Set(model.website.clone()),
            seeking_venues: Set(model.seeking_venues),
            seeking_description: Set(model.seeking_description.clone()),
        }
    }
}

impl From<&artist::Model> for ShowParticipant {
    fn from(entity: &artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            image_link: entity.image_link.clone(),
        }
    }
}

// ===== Show Conversions =====

impl From<show::Model> for Show {
    fn from(entity: show::Model) -> Self {
        Self {
            id: entity.id,
            artist_id: entity.artist_id,
            venue_id: entity.venue_id,
            start_time: entity.start_time,
        }
    }
}

impl From<&NewShow> for show::ActiveModel {
    fn from(model: &NewShow) -> Self {
        Self {
            id: NotSet,
            artist_id: Set(model.artist_id),
            venue_id: Set(model.venue_id),
            start_time: Set(model.start_time),
        }
    }
}

// ===== JSON Helpers =====

fn genres_from_json(value: Json) -> anyhow::Result<Vec<String>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

fn genres_to_json(genres: &[String]) -> Json {
    Json::from(genres.to_vec())
}
