//! Run configuration with documented defaults.
//!
//! | key         | default                      |
//! |-------------|------------------------------|
//! | `base_url`  | `https://c3po.crossfit.com`  |
//! | `year`      | `2022`                       |
//! | `division`  | `"male"`                     |
//! | `year_from` | `2018`                       |
//! | `year_to`   | `2022`                       |
//! | `selector`  | `"male"`                     |

use std::path::Path;

use serde::Deserialize;

use crate::error::GamesboardError;
use crate::period::{Division, DivisionSelector, Period, PeriodRange};

pub const DEFAULT_BASE_URL: &str = "https://c3po.crossfit.com";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// API host, without a trailing path.
    pub base_url: String,
    /// Year for single-period commands.
    pub year: i32,
    /// Division for single-period commands.
    pub division: Division,
    /// First year of multi-period runs (inclusive).
    pub year_from: i32,
    /// Last year of multi-period runs (inclusive).
    pub year_to: i32,
    /// Divisions covered by multi-period runs.
    pub selector: DivisionSelector,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            year: 2022,
            division: Division::Male,
            year_from: 2018,
            year_to: 2022,
            selector: DivisionSelector::Male,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, GamesboardError> {
        toml::from_str(content).map_err(|e| GamesboardError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, GamesboardError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GamesboardError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn period(&self) -> Period {
        Period::new(self.year, self.division)
    }

    pub fn range(&self) -> PeriodRange {
        PeriodRange::new(self.year_from, self.year_to, self.selector)
    }
}
