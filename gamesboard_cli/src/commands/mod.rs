//! CLI subcommand implementations.

use anyhow::Result;
use clap::Args;
use gamesboard_lib::{
    competitors_multiple, scores_multiple, summaries, validation, Config, DivisionSelector,
    LeaderboardSource, Period, PeriodRange, Table,
};

/// Year and division selection shared by every subcommand.
///
/// Unset flags fall back to the config file (or its defaults).
#[derive(Args)]
pub struct PeriodArgs {
    /// Single Games year
    #[arg(long, conflicts_with_all = ["year_from", "year_to"])]
    pub year: Option<i32>,

    /// First year of a range (inclusive)
    #[arg(long)]
    pub year_from: Option<i32>,

    /// Last year of a range (inclusive)
    #[arg(long)]
    pub year_to: Option<i32>,

    /// Division: male (m, 1), female (f, 2) or both (0)
    #[arg(long)]
    pub division: Option<String>,
}

/// What the flags ask for: one leaderboard, or a range of them.
#[derive(Debug, PartialEq)]
pub enum Selection {
    Single(Period),
    Range(PeriodRange),
}

impl PeriodArgs {
    pub fn selection(&self, config: &Config) -> Result<Selection> {
        let is_range = self.year_from.is_some() || self.year_to.is_some();
        let selector = match &self.division {
            Some(d) => validation::validate_selector(d)?,
            None if is_range => config.selector,
            None => config.division.into(),
        };

        if is_range {
            return Ok(Selection::Range(PeriodRange::new(
                self.year_from.unwrap_or(config.year_from),
                self.year_to.unwrap_or(config.year_to),
                selector,
            )));
        }

        let year = self.year.unwrap_or(config.year);
        Ok(match selector.divisions() {
            [division] => Selection::Single(Period::new(year, *division)),
            _ => Selection::Range(PeriodRange::new(year, year, selector)),
        })
    }
}

pub async fn info<S: LeaderboardSource>(
    args: &PeriodArgs,
    config: &Config,
    source: &S,
) -> Result<Table> {
    let range = match args.selection(config)? {
        Selection::Single(period) => PeriodRange::single(period),
        Selection::Range(range) => range,
    };
    Ok(summaries(source, &range).await?)
}

pub async fn competitors<S: LeaderboardSource>(
    args: &PeriodArgs,
    config: &Config,
    source: &S,
) -> Result<Table> {
    Ok(match args.selection(config)? {
        Selection::Single(period) => gamesboard_lib::competitors(source, period).await?,
        Selection::Range(range) => competitors_multiple(source, &range).await?,
    })
}

pub async fn scores<S: LeaderboardSource>(
    args: &PeriodArgs,
    config: &Config,
    source: &S,
) -> Result<Table> {
    Ok(match args.selection(config)? {
        Selection::Single(period) => gamesboard_lib::scores(source, period).await?,
        Selection::Range(range) => scores_multiple(source, &range).await?,
    })
}
