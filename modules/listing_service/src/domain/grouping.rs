//! Venue grouping by location and search summaries

use super::shows::upcoming_counts;
use crate::contract::{ListingSummary, ShowDetail, Venue, VenueArea};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Group venues by their (city, state) pair.
///
/// Areas come out ordered by city then state, each venue appears in exactly
/// one area, and members are ordered by id. `num_upcoming_shows` only counts
/// shows at that venue.
pub fn group_by_area(venues: &[Venue], shows: &[ShowDetail], now: DateTime<Utc>) -> Vec<VenueArea> {
    let counts = upcoming_counts(shows, now, |show| show.venue.id);

    let mut areas: BTreeMap<(String, String), Vec<ListingSummary>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.city.clone(), venue.state.clone()))
            .or_default()
            .push(ListingSummary {
                id: venue.id,
                name: venue.name.clone(),
                num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            });
    }

    areas
        .into_iter()
        .map(|((city, state), mut venues)| {
            venues.sort_by_key(|venue| venue.id);
            VenueArea {
                city,
                state,
                venues,
            }
        })
        .collect()
}

/// Summaries for search results, in the order of `entities`
pub fn summarize<T, F, S>(
    entities: &[T],
    shows: &[ShowDetail],
    now: DateTime<Utc>,
    key: F,
    side: S,
) -> Vec<ListingSummary>
where
    F: Fn(&T) -> (i32, &str),
    S: Fn(&ShowDetail) -> i32,
{
    let counts = upcoming_counts(shows, now, side);
    entities
        .iter()
        .map(|entity| {
            let (id, name) = key(entity);
            ListingSummary {
                id,
                name: name.to_string(),
                num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
            }
        })
        .collect()
}
