//! Validation of venue, artist and show submissions
//!
//! Runs before any store access. Each validator turns a raw `*Input` into the
//! `New*` value the repositories accept, or reports every missing required
//! field at once.

use crate::contract::{
    ArtistInput, ListingError, NewArtist, NewShow, NewVenue, ShowInput, VenueInput,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use url::Url;

const PLAIN_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Validate a venue submission
pub fn validate_venue(input: VenueInput, check_links: bool) -> Result<NewVenue, ListingError> {
    let mut missing = Vec::new();
    let name = required("name", input.name, &mut missing);
    let city = required("city", input.city, &mut missing);
    let state = required("state", input.state, &mut missing);
    let address = required("address", input.address, &mut missing);
    report_missing(&missing)?;

    Ok(NewVenue {
        name,
        city,
        state,
        address,
        phone: optional(input.phone),
        image_link: link("image_link", input.image_link, check_links)?,
        genres: genres(input.genres),
        facebook_link: link("facebook_link", input.facebook_link, check_links)?,
        website: link("website", input.website, check_links)?,
        seeking_talent: input.seeking_talent,
        seeking_description: optional(input.seeking_description),
    })
}

/// Validate an artist submission
pub fn validate_artist(input: ArtistInput, check_links: bool) -> Result<NewArtist, ListingError> {
    let mut missing = Vec::new();
    let name = required("name", input.name, &mut missing);
    let city = required("city", input.city, &mut missing);
    let state = required("state", input.state, &mut missing);
    report_missing(&missing)?;

    Ok(NewArtist {
        name,
        city,
        state,
        phone: optional(input.phone),
        genres: genres(input.genres),
        image_link: link("image_link", input.image_link, check_links)?,
        facebook_link: link("facebook_link", input.facebook_link, check_links)?,
        website: link("website", input.website, check_links)?,
        seeking_venues: input.seeking_venues,
        seeking_description: optional(input.seeking_description),
    })
}

/// Validate a show submission
pub fn validate_show(input: ShowInput) -> Result<NewShow, ListingError> {
    let mut missing = Vec::new();
    if input.artist_id.is_none() {
        missing.push("artist_id");
    }
    if input.venue_id.is_none() {
        missing.push("venue_id");
    }
    let start_time = required("start_time", input.start_time, &mut missing);
    report_missing(&missing)?;

    match (input.artist_id, input.venue_id) {
        (Some(artist_id), Some(venue_id)) => Ok(NewShow {
            artist_id,
            venue_id,
            start_time: parse_start_time(&start_time)?,
        }),
        _ => Err(ListingError::validation("artist_id and venue_id are required")),
    }
}

/// Parse RFC 3339, or `YYYY-MM-DD HH:MM:SS` taken as UTC
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ListingError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, PLAIN_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            ListingError::validation(format!(
                "start_time '{raw}' must be RFC 3339 or YYYY-MM-DD HH:MM:SS"
            ))
        })
}

fn required(field: &'static str, value: Option<String>, missing: &mut Vec<&'static str>) -> String {
    match optional(value) {
        Some(value) => value,
        None => {
            missing.push(field);
            String::new()
        }
    }
}

fn report_missing(missing: &[&str]) -> Result<(), ListingError> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(ListingError::validation(format!(
        "missing required fields: {}",
        missing.join(", ")
    )))
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn genres(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|genre| genre.trim().to_string())
        .filter(|genre| !genre.is_empty())
        .collect()
}

fn link(field: &str, value: Option<String>, check: bool) -> Result<Option<String>, ListingError> {
    let Some(value) = optional(value) else {
        return Ok(None);
    };
    if !check {
        return Ok(Some(value));
    }
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(value)),
        _ => Err(ListingError::validation(format!(
            "{field} must be an absolute http(s) URL"
        ))),
    }
}
