//! Flattening of movie schedules into output rows

use chrono::{DateTime, TimeZone};

use crate::types::{CinemaId, Movie, OutputRow};

/// Format used for the `crawl_time` column
pub const CRAWL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a crawl timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn format_crawl_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(CRAWL_TIME_FORMAT).to_string()
}

/// Flatten movies into one row per showing.
///
/// Walks movie → day group → showing. The date column comes from the
/// showing itself; the day group's date is never used. Every row shares
/// the same `cinema_id` and `crawl_time`.
pub fn flatten_rows<'a>(
    cinema_id: &'a CinemaId,
    movies: &'a [Movie],
    crawl_time: &'a str,
) -> impl Iterator<Item = OutputRow> + 'a {
    movies.iter().flat_map(move |movie| {
        let movie_id = movie.id.render();
        let movie_name = movie.nm.render();

        movie
            .shows
            .iter()
            .flat_map(|day| day.plist.iter())
            .map(move |showing| OutputRow {
                cinema_id: cinema_id.to_string(),
                movie_id: movie_id.clone(),
                movie_name: movie_name.clone(),
                date: showing.dt.render(),
                start_time: showing.tm.render(),
                hall: showing.th.render(),
                language: showing.lang.render(),
                version: showing.tp.render(),
                price: showing.discount_sell_price.render(),
                seq_no: showing.seq_no.render(),
                crawl_time: crawl_time.to_string(),
            })
    })
}
