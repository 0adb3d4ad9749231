//! Competitor profile and the leaderboard row that carries it.

use serde::{Deserialize, Serialize};

use super::{lenient, ScoreEntry};

/// Identifier of a competitor, stable across years.
pub type CompetitorID = String;

/// Competitor profile embedded in every leaderboard row.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Entrant {
    #[serde(deserialize_with = "lenient::required_text")]
    pub competitor_id: CompetitorID,

    #[serde(default, deserialize_with = "lenient::text")]
    pub competitor_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub gender: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub country_of_origin_code: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub country_of_origin_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub affiliate_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub affiliate_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub age: Option<String>,

    /// Free-text height, e.g. `"70 in"` or `"178 cm"`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub height: Option<String>,

    /// Free-text weight, e.g. `"195 lb"` or `"88 kg"`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub weight: Option<String>,
}

/// One competitor's line on the leaderboard.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub entrant: Entrant,

    #[serde(default)]
    pub scores: Vec<ScoreEntry>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub overall_rank: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub overall_score: Option<String>,
}
