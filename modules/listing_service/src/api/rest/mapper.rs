//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Form conversions =====

impl From<VenueForm> for contract::VenueInput {
    fn from(form: VenueForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone,
            image_link: form.image_link,
            genres: form.genres,
            facebook_link: form.facebook_link,
            website: form.website,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}

impl From<ArtistForm> for contract::ArtistInput {
    fn from(form: ArtistForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone,
            genres: form.genres,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website: form.website,
            seeking_venues: form.seeking_venues,
            seeking_description: form.seeking_description,
        }
    }
}

impl From<ShowForm> for contract::ShowInput {
    fn from(form: ShowForm) -> Self {
        Self {
            artist_id: form.artist_id,
            venue_id: form.venue_id,
            start_time: form.start_time,
        }
    }
}

// ===== Record conversions =====

impl From<contract::Venue> for VenueDto {
    fn from(venue: contract::Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            genres: venue.genres,
            facebook_link: venue.facebook_link,
            website: venue.website,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

impl From<contract::Artist> for ArtistDto {
    fn from(artist: contract::Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website,
            seeking_venues: artist.seeking_venues,
            seeking_description: artist.seeking_description,
        }
    }
}

impl From<contract::Artist> for ArtistSummaryDto {
    fn from(artist: contract::Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

impl From<contract::Show> for ShowDto {
    fn from(show: contract::Show) -> Self {
        Self {
            id: show.id,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        }
    }
}

// ===== List conversions =====

impl From<contract::ListingSummary> for ListingSummaryDto {
    fn from(summary: contract::ListingSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            num_upcoming_shows: summary.num_upcoming_shows,
        }
    }
}

impl From<contract::VenueArea> for VenueAreaDto {
    fn from(area: contract::VenueArea) -> Self {
        Self {
            city: area.city,
            state: area.state,
            venues: area.venues.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<contract::ListingSummary>> for SearchResponse {
    fn from(matches: Vec<contract::ListingSummary>) -> Self {
        Self {
            count: matches.len(),
            data: matches.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<contract::ShowListing> for ShowListingDto {
    fn from(show: contract::ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}

// ===== Page conversions =====

impl From<contract::ShowCard> for VenueShowDto {
    fn from(card: contract::ShowCard) -> Self {
        Self {
            artist_id: card.counterpart.id,
            artist_name: card.counterpart.name,
            artist_image_link: card.counterpart.image_link,
            start_time: card.start_time,
        }
    }
}

impl From<contract::ShowCard> for ArtistShowDto {
    fn from(card: contract::ShowCard) -> Self {
        Self {
            venue_id: card.counterpart.id,
            venue_name: card.counterpart.name,
            venue_image_link: card.counterpart.image_link,
            start_time: card.start_time,
        }
    }
}

impl From<contract::VenuePage> for VenuePageDto {
    fn from(page: contract::VenuePage) -> Self {
        Self {
            venue: page.venue.into(),
            past_shows_count: page.past_shows.len(),
            upcoming_shows_count: page.upcoming_shows.len(),
            past_shows: page.past_shows.into_iter().map(Into::into).collect(),
            upcoming_shows: page.upcoming_shows.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<contract::ArtistPage> for ArtistPageDto {
    fn from(page: contract::ArtistPage) -> Self {
        Self {
            artist: page.artist.into(),
            past_shows_count: page.past_shows.len(),
            upcoming_shows_count: page.upcoming_shows.len(),
            past_shows: page.past_shows.into_iter().map(Into::into).collect(),
            upcoming_shows: page.upcoming_shows.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{ShowCard, ShowParticipant, Venue, VenuePage};

    fn card(id: i32, name: &str, start_time: &str) -> ShowCard {
        ShowCard {
            counterpart: ShowParticipant {
                id,
                name: name.to_string(),
                image_link: None,
            },
            start_time: start_time.to_string(),
        }
    }

    #[test]
    fn venue_page_counts_match_lists() {
        let page = VenuePage {
            venue: Venue {
                id: 1,
                name: "The Musical Hop".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1015 Folsom Street".to_string(),
                phone: None,
                image_link: None,
                genres: vec!["Jazz".to_string()],
                facebook_link: None,
                website: None,
                seeking_talent: true,
                seeking_description: None,
            },
            past_shows: vec![card(4, "Guns N Petals", "2019-05-21 21:30:00")],
            upcoming_shows: vec![],
        };

        let dto: VenuePageDto = page.into();
        assert_eq!(dto.past_shows_count, 1);
        assert_eq!(dto.upcoming_shows_count, 0);
        assert_eq!(dto.past_shows[0].artist_name, "Guns N Petals");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "The Musical Hop");
        assert_eq!(json["past_shows"][0]["artist_id"], 4);
    }

    #[test]
    fn artist_page_shows_name_the_venue() {
        let dto: ArtistShowDto = card(1, "The Musical Hop", "2035-04-01 20:00:00").into();
        assert_eq!(dto.venue_id, 1);
        assert_eq!(dto.venue_name, "The Musical Hop");
    }

    #[test]
    fn search_response_counts_hits() {
        let response: SearchResponse = vec![contract::ListingSummary {
            id: 2,
            name: "The Dueling Pianos Bar".to_string(),
            num_upcoming_shows: 0,
        }]
        .into();
        assert_eq!(response.count, 1);
        assert_eq!(response.data[0].id, 2);
    }
}
