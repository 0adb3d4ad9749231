//! The fetch seam between the pipeline and the HTTP client.

use std::future::Future;

use gamesboard_api::types::LeaderboardResponse;
use gamesboard_api::{Client, LeaderboardQuery, Query};

use crate::error::GamesboardError;
use crate::period::Period;
use crate::validation::validate_page;

/// Anything that can return one leaderboard page for a period.
pub trait LeaderboardSource {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<LeaderboardResponse, GamesboardError>>;
}

impl LeaderboardSource for Client {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<LeaderboardResponse, GamesboardError>> {
        async move {
            let page = validate_page(i64::from(page))?;
            let query = LeaderboardQuery::default()
                .with_year(period.year)
                .with_division(period.division.code())
                .with_page(i64::from(page));
            Ok(self.get_leaderboard(&query).await?)
        }
    }
}
