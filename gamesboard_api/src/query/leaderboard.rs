use url::Url;

use super::{common::QueryCommon, Query};

/// Query for one page of a Games leaderboard.
///
/// The year is part of the request path, the division and page travel as
/// query parameters.
#[derive(Clone, Debug)]
pub struct LeaderboardQuery {
    pub common: QueryCommon,
    pub year: i32,
    /// Division code: 1 = men, 2 = women.
    pub division: i64,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::default(),
            year: 2022,
            division: 1,
        }
    }
}

impl Query for LeaderboardQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("division", &self.division.to_string());
        self.common.add_to_url(&url)
    }
}

impl LeaderboardQuery {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_division(mut self, division: i64) -> Self {
        self.division = division;
        self
    }

    /// Request path for this query's competition year.
    pub fn path(&self) -> String {
        format!(
            "/api/leaderboards/v2/competitions/games/{}/leaderboards",
            self.year
        )
    }
}
