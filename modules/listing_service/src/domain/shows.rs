//! Past/upcoming split of shows
//!
//! There is no stored show status. A show is upcoming when its start time is
//! strictly after the `now` captured once by the caller, otherwise it is past.

use crate::contract::{ShowCard, ShowDetail, ShowListing, ShowParticipant};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Which entity's page the shows are displayed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Venue page: the counterpart is the artist
    Venue,
    /// Artist page: the counterpart is the venue
    Artist,
}

impl Perspective {
    fn counterpart<'a>(&self, show: &'a ShowDetail) -> &'a ShowParticipant {
        match self {
            Perspective::Venue => &show.artist,
            Perspective::Artist => &show.venue,
        }
    }
}

/// Shows split around a point in time, each side in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSplit<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for ShowSplit<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

/// Split `shows` into past and upcoming, keeping relative order on each side
pub fn partition<T, F>(shows: impl IntoIterator<Item = T>, now: DateTime<Utc>, start_time: F) -> ShowSplit<T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut split = ShowSplit::default();
    for show in shows {
        if is_upcoming(start_time(&show), now) {
            split.upcoming.push(show);
        } else {
            split.past.push(show);
        }
    }
    split
}

/// Build the display cards for a venue or artist page
pub fn aggregate(
    shows: &[ShowDetail],
    perspective: Perspective,
    now: DateTime<Utc>,
    time_format: &str,
) -> ShowSplit<ShowCard> {
    let split = partition(shows.iter(), now, |show| show.start_time);
    let card = |show: &ShowDetail| ShowCard {
        counterpart: perspective.counterpart(show).clone(),
        start_time: format_start_time(show.start_time, time_format),
    };
    ShowSplit {
        past: split.past.into_iter().map(card).collect(),
        upcoming: split.upcoming.into_iter().map(card).collect(),
    }
}

/// Upcoming show count per venue or artist id, keyed by `side`
pub fn upcoming_counts<F>(shows: &[ShowDetail], now: DateTime<Utc>, side: F) -> HashMap<i32, usize>
where
    F: Fn(&ShowDetail) -> i32,
{
    let mut grouped: HashMap<i32, Vec<&ShowDetail>> = HashMap::new();
    for show in shows {
        grouped.entry(side(show)).or_default().push(show);
    }
    grouped
        .into_iter()
        .map(|(id, shows)| (id, partition(shows, now, |show| show.start_time).upcoming.len()))
        .collect()
}

/// Flatten a show into a row of the global show list
pub fn listing(show: &ShowDetail, time_format: &str) -> ShowListing {
    ShowListing {
        venue_id: show.venue.id,
        venue_name: show.venue.name.clone(),
        artist_id: show.artist.id,
        artist_name: show.artist.name.clone(),
        artist_image_link: show.artist.image_link.clone(),
        start_time: format_start_time(show.start_time, time_format),
    }
}

pub fn format_start_time(start_time: DateTime<Utc>, time_format: &str) -> String {
    start_time.format(time_format).to_string()
}
