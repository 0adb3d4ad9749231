//! Multi-year, multi-division aggregation into single tables.

use std::future::Future;

use crate::coerce::{coerce, normalize_ranks};
use crate::collect::{collect, ProfileExtractor, ScoreExtractor};
use crate::error::GamesboardError;
use crate::period::{Period, PeriodRange};
use crate::source::LeaderboardSource;
use crate::summary::fetch_summary;
use crate::table::{ColumnData, Record, Table};
use crate::units::mass_to_kg;

/// Produces the records of one period and finishes the combined table.
pub trait PeriodCollector {
    fn collect(
        &self,
        period: Period,
    ) -> impl Future<Output = Result<Vec<Record>, GamesboardError>>;

    /// Post-processing applied once to the concatenated table.
    fn finish(&self, table: Table) -> Table {
        coerce(table)
    }
}

/// One row of competition metadata per period.
pub struct SummaryCollector<'a, S> {
    source: &'a S,
}

impl<'a, S> SummaryCollector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<S: LeaderboardSource> PeriodCollector for SummaryCollector<'_, S> {
    async fn collect(&self, period: Period) -> Result<Vec<Record>, GamesboardError> {
        Ok(vec![fetch_summary(self.source, period).await?.to_record()])
    }
}

/// One row per competitor.
pub struct ProfileCollector<'a, S> {
    source: &'a S,
}

impl<'a, S> ProfileCollector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<S: LeaderboardSource> PeriodCollector for ProfileCollector<'_, S> {
    async fn collect(&self, period: Period) -> Result<Vec<Record>, GamesboardError> {
        collect(self.source, period, &ProfileExtractor).await
    }
}

/// One row per competitor and event.
pub struct ScoreCollector<'a, S> {
    source: &'a S,
}

impl<'a, S> ScoreCollector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<S: LeaderboardSource> PeriodCollector for ScoreCollector<'_, S> {
    async fn collect(&self, period: Period) -> Result<Vec<Record>, GamesboardError> {
        collect(self.source, period, &ScoreExtractor).await
    }

    /// Sentinel ranks become `rankReason`, then numeric typing, then the
    /// kilogram reading of weightlifting results.
    fn finish(&self, table: Table) -> Table {
        let mut table = coerce(normalize_ranks(table));
        let weights = match table.column("scoreDisplay") {
            Some(column) => column
                .data
                .display_values()
                .iter()
                .map(|v| v.as_deref().and_then(mass_to_kg))
                .collect(),
            None => vec![None; table.len()],
        };
        table.put_column("scoreIsWeightInKg", ColumnData::Numeric(weights));
        table
    }
}

/// Collects every period of `range` and concatenates the results.
///
/// Periods run sequentially, year ascending then division ascending. Every
/// record is stamped with its `year` and `division` before concatenation.
/// The range is validated before the first request.
pub async fn aggregate<C>(range: &PeriodRange, collector: &C) -> Result<Table, GamesboardError>
where
    C: PeriodCollector,
{
    let periods = range.periods()?;
    let mut batches = Vec::with_capacity(periods.len());
    for period in periods {
        let mut records = collector.collect(period).await?;
        for record in &mut records {
            period.tag(record);
        }
        tracing::info!("{}: collected {} rows", period, records.len());
        batches.push(records);
    }
    let table = Table::from_records(batches.into_iter().flatten().collect());
    Ok(collector.finish(table))
}

/// Competition metadata for each period of `range`.
pub async fn summaries<S: LeaderboardSource>(
    source: &S,
    range: &PeriodRange,
) -> Result<Table, GamesboardError> {
    aggregate(range, &SummaryCollector::new(source)).await
}

/// Competitor profiles for one period, without provenance columns.
pub async fn competitors<S: LeaderboardSource>(
    source: &S,
    period: Period,
) -> Result<Table, GamesboardError> {
    let collector = ProfileCollector::new(source);
    let records = collector.collect(period).await?;
    Ok(collector.finish(Table::from_records(records)))
}

/// Competitor profiles for each period of `range`, tagged with year and division.
pub async fn competitors_multiple<S: LeaderboardSource>(
    source: &S,
    range: &PeriodRange,
) -> Result<Table, GamesboardError> {
    aggregate(range, &ProfileCollector::new(source)).await
}

/// Event scores for one period.
pub async fn scores<S: LeaderboardSource>(
    source: &S,
    period: Period,
) -> Result<Table, GamesboardError> {
    aggregate(&PeriodRange::single(period), &ScoreCollector::new(source)).await
}

/// Event scores for each period of `range`.
pub async fn scores_multiple<S: LeaderboardSource>(
    source: &S,
    range: &PeriodRange,
) -> Result<Table, GamesboardError> {
    aggregate(range, &ScoreCollector::new(source)).await
}
