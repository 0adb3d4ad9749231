use chrono::{Datelike, Utc};

use crate::error::GamesboardError;
use crate::period::{Division, DivisionSelector};

/// First year the Games leaderboard API carries data for.
pub const FIRST_GAMES_YEAR: i32 = 2007;

/// Validate a numeric division code: 1 = male, 2 = female.
pub fn validate_division(code: i64) -> Result<Division, GamesboardError> {
    Division::try_from(code)
}

/// Validate a division selector: case-insensitive name, shorthand, or code
/// (0 = both, 1 = male, 2 = female).
pub fn validate_selector(input: &str) -> Result<DivisionSelector, GamesboardError> {
    match input.trim().to_lowercase().as_str() {
        "male" | "m" | "men" => Ok(DivisionSelector::Male),
        "female" | "f" | "women" => Ok(DivisionSelector::Female),
        "both" | "all" | "0" => Ok(DivisionSelector::Both),
        other => match other.parse::<i64>() {
            Ok(code) => validate_division(code).map(DivisionSelector::from),
            Err(_) => Err(GamesboardError::InvalidArgument(format!(
                "unknown division '{}'. Valid values: male (m, 1), female (f, 2), both (0)",
                input
            ))),
        },
    }
}

/// Validate an inclusive year range.
///
/// Only ordering is enforced. Years outside the documented domain
/// (2007 to the current year) are logged but still requested.
pub fn validate_year_range(year_from: i32, year_to: i32) -> Result<(), GamesboardError> {
    if year_from > year_to {
        return Err(GamesboardError::InvalidArgument(format!(
            "year_from ({}) must not be after year_to ({})",
            year_from, year_to
        )));
    }
    let current = Utc::now().year();
    if year_from < FIRST_GAMES_YEAR || year_to > current {
        tracing::warn!(
            "years {}..={} fall outside the known Games range {}..={}",
            year_from,
            year_to,
            FIRST_GAMES_YEAR,
            current
        );
    }
    Ok(())
}

/// Validate a page number (1-indexed).
pub fn validate_page(page: i64) -> Result<u32, GamesboardError> {
    if page < 1 {
        return Err(GamesboardError::InvalidArgument(format!(
            "page must be >= 1, got {}",
            page
        )));
    }
    u32::try_from(page).map_err(|_| {
        GamesboardError::InvalidArgument(format!("page {} is out of range", page))
    })
}
