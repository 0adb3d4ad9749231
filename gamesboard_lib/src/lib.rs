//! Leaderboard aggregation for the CrossFit Games API.
//!
//! Walks the paginated leaderboard of each year/division, flattens entrant
//! profiles and event scores into tables, normalizes unit strings and rank
//! sentinels, and concatenates multi-period runs.

pub mod aggregate;
pub mod coerce;
pub mod collect;
pub mod config;
pub mod error;
pub mod period;
pub mod source;
pub mod summary;
pub mod table;
pub mod units;
pub mod validation;

pub use gamesboard_api;
pub use gamesboard_api::types;
pub use gamesboard_api::Client;

pub use aggregate::{
    aggregate, competitors, competitors_multiple, scores, scores_multiple, summaries,
    PeriodCollector, ProfileCollector, ScoreCollector, SummaryCollector,
};
pub use coerce::{coerce, normalize_ranks};
pub use collect::{
    collect, records_on_page, ProfileExtractor, RowExtractor, ScoreExtractor, PAGE_SIZE,
};
pub use config::Config;
pub use error::GamesboardError;
pub use period::{Division, DivisionSelector, Period, PeriodRange};
pub use source::LeaderboardSource;
pub use summary::{fetch_summary, CompetitionSummary};
pub use table::{Cell, Column, ColumnData, Record, Table};
pub use units::{length_to_cm, mass_to_kg};
