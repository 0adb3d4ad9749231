use serde::{Deserialize, Serialize};

use super::lenient;

/// A competitor's result in one event.
///
/// `rank` is usually numeric text but may be a sentinel such as `CUT`,
/// `WD` or `DNF`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub ordinal: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub rank: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub score: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub score_display: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub mobile_score_display: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub points: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub time: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub judge: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub heat: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub lane: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub breakdown: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub scaled: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub video: Option<String>,
}
