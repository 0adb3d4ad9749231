//! Competition-level metadata for one period.

use crate::error::GamesboardError;
use crate::period::{Division, Period};
use crate::source::LeaderboardSource;
use crate::table::Record;

/// Totals that bound the page walk for one year/division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionSummary {
    pub competition_id: String,
    pub total_pages: u32,
    pub total_competitors: u32,
    pub total_events: u32,
    pub year: i32,
    pub division: Division,
}

impl CompetitionSummary {
    pub fn period(&self) -> Period {
        Period::new(self.year, self.division)
    }

    /// Summary table row; `year` and `division` are stamped by the aggregator.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with_text("competitionId", Some(self.competition_id.as_str()))
            .with_number("totalPages", Some(f64::from(self.total_pages)))
            .with_number("totalCompetitors", Some(f64::from(self.total_competitors)))
            .with_number("totalEvents", Some(f64::from(self.total_events)))
    }
}

fn non_negative(value: i64, field: &str, period: Period) -> Result<u32, GamesboardError> {
    u32::try_from(value).map_err(|_| {
        GamesboardError::UpstreamData(format!(
            "{} for {} is out of range: {}",
            field, period, value
        ))
    })
}

/// Reads the summary for `period` from the first leaderboard page.
pub async fn fetch_summary<S>(
    source: &S,
    period: Period,
) -> Result<CompetitionSummary, GamesboardError>
where
    S: LeaderboardSource,
{
    let resp = source.fetch_page(period, 1).await?;

    let total_pages = non_negative(resp.pagination.total_pages, "totalPages", period)?;
    if total_pages == 0 {
        return Err(GamesboardError::UpstreamData(format!(
            "leaderboard for {} reports zero pages",
            period
        )));
    }
    let total_competitors =
        non_negative(resp.pagination.total_competitors, "totalCompetitors", period)?;
    let total_events = u32::try_from(resp.ordinals.len()).map_err(|_| {
        GamesboardError::UpstreamData(format!("too many events for {}", period))
    })?;

    let summary = CompetitionSummary {
        competition_id: resp.competition.competition_id,
        total_pages,
        total_competitors,
        total_events,
        year: period.year,
        division: period.division,
    };
    tracing::debug!(
        "{}: competition {} has {} competitors over {} pages, {} events",
        period,
        summary.competition_id,
        summary.total_competitors,
        summary.total_pages,
        summary.total_events
    );
    Ok(summary)
}
