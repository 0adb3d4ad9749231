//! Envelope of a leaderboard page: pagination, competition and event metadata.

use serde::{Deserialize, Deserializer, Serialize};

use super::{lenient, LeaderboardRow};

/// Paging totals for one year/division leaderboard.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: i64,
    pub total_competitors: i64,
    #[serde(default)]
    pub current_page: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(deserialize_with = "lenient::required_text")]
    pub competition_id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub competition_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub year: Option<String>,
}

/// One scored event of the competition.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ordinal {
    #[serde(default, deserialize_with = "lenient::text")]
    pub ordinal: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
}

/// A single leaderboard page as returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub pagination: Pagination,
    pub competition: Competition,
    pub ordinals: Vec<Ordinal>,
    /// Rows in leaderboard order. A `None` slot is a null or incomplete
    /// record; callers decide whether that slot matters.
    #[serde(deserialize_with = "rows")]
    pub leaderboard_rows: Vec<Option<LeaderboardRow>>,
}

fn rows<'de, D>(deserializer: D) -> Result<Vec<Option<LeaderboardRow>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            if value.is_null() {
                return None;
            }
            match serde_json::from_value(value) {
                Ok(row) => Some(row),
                Err(e) => {
                    tracing::debug!("leaderboard row {} is incomplete: {}", idx, e);
                    None
                }
            }
        })
        .collect())
}
