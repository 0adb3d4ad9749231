//! Walks every leaderboard page of a period and flattens its rows.

use gamesboard_api::types::{LeaderboardResponse, LeaderboardRow};

use crate::error::GamesboardError;
use crate::period::Period;
use crate::source::LeaderboardSource;
use crate::summary::fetch_summary;
use crate::table::Record;
use crate::units::{length_to_cm, mass_to_kg};

/// Rows the API serves per leaderboard page.
pub const PAGE_SIZE: u32 = 50;

/// Number of rows that page `page` (1-indexed) must contribute.
///
/// Every page but the last holds `PAGE_SIZE` rows; the last holds the
/// remainder, between 0 and `PAGE_SIZE`. An empty last page still gets
/// fetched by the walk.
pub fn records_on_page(
    page: u32,
    total_pages: u32,
    total_competitors: u32,
) -> Result<usize, GamesboardError> {
    if page == 0 || page > total_pages {
        return Err(GamesboardError::InvalidArgument(format!(
            "page {} is outside 1..={}",
            page, total_pages
        )));
    }
    let before_last = u64::from(total_pages - 1) * u64::from(PAGE_SIZE);
    let competitors = u64::from(total_competitors);
    if competitors < before_last || competitors > before_last + u64::from(PAGE_SIZE) {
        return Err(GamesboardError::UpstreamData(format!(
            "{} competitors cannot fill {} pages of {}",
            total_competitors, total_pages, PAGE_SIZE
        )));
    }
    let count = if page < total_pages {
        u64::from(PAGE_SIZE)
    } else {
        competitors - before_last
    };
    Ok(count as usize)
}

/// Turns one leaderboard row into zero or more flat records.
pub trait RowExtractor {
    fn extract(&self, row: &LeaderboardRow, period: Period) -> Vec<Record>;
}

/// One record per competitor: profile fields plus metric height and weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileExtractor;

impl RowExtractor for ProfileExtractor {
    fn extract(&self, row: &LeaderboardRow, _period: Period) -> Vec<Record> {
        let e = &row.entrant;
        let height_cm = e.height.as_deref().and_then(length_to_cm);
        let weight_kg = e.weight.as_deref().and_then(mass_to_kg);
        vec![Record::new()
            .with_text("competitorId", Some(e.competitor_id.as_str()))
            .with_text("competitorName", e.competitor_name.as_deref())
            .with_text("firstName", e.first_name.as_deref())
            .with_text("lastName", e.last_name.as_deref())
            .with_text("gender", e.gender.as_deref())
            .with_text("status", e.status.as_deref())
            .with_text("countryOfOriginCode", e.country_of_origin_code.as_deref())
            .with_text("countryOfOriginName", e.country_of_origin_name.as_deref())
            .with_text("affiliateId", e.affiliate_id.as_deref())
            .with_text("affiliateName", e.affiliate_name.as_deref())
            .with_text("age", e.age.as_deref())
            .with_text("height", e.height.as_deref())
            .with_text("weight", e.weight.as_deref())
            .with_text("overallRank", row.overall_rank.as_deref())
            .with_text("overallScore", row.overall_score.as_deref())
            .with_number("heightInCm", height_cm)
            .with_number("weightInKg", weight_kg)]
    }
}

/// One record per event score, keyed back to the competitor and period.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreExtractor;

impl RowExtractor for ScoreExtractor {
    fn extract(&self, row: &LeaderboardRow, period: Period) -> Vec<Record> {
        row.scores
            .iter()
            .map(|s| {
                let mut record = Record::new()
                    .with_text("ordinal", s.ordinal.as_deref())
                    .with_text("rank", s.rank.as_deref())
                    .with_text("score", s.score.as_deref())
                    .with_text("scoreDisplay", s.score_display.as_deref())
                    .with_text("mobileScoreDisplay", s.mobile_score_display.as_deref())
                    .with_text("points", s.points.as_deref())
                    .with_text("time", s.time.as_deref())
                    .with_text("judge", s.judge.as_deref())
                    .with_text("heat", s.heat.as_deref())
                    .with_text("lane", s.lane.as_deref())
                    .with_text("breakdown", s.breakdown.as_deref())
                    .with_text("scaled", s.scaled.as_deref())
                    .with_text("video", s.video.as_deref())
                    .with_text("competitorId", Some(row.entrant.competitor_id.as_str()));
                period.tag(&mut record);
                record
            })
            .collect()
    }
}

/// The first `wanted` rows of a page, failing if any of them is absent.
fn take_rows(
    resp: &LeaderboardResponse,
    period: Period,
    page: u32,
    wanted: usize,
) -> Result<Vec<&LeaderboardRow>, GamesboardError> {
    let available = resp.leaderboard_rows.len();
    if available < wanted {
        return Err(GamesboardError::UpstreamData(format!(
            "{} page {} has {} rows, expected {}",
            period, page, available, wanted
        )));
    }
    if available > wanted {
        tracing::warn!(
            "{} page {}: ignoring {} rows past the expected {}",
            period,
            page,
            available - wanted,
            wanted
        );
    }
    resp.leaderboard_rows[..wanted]
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            slot.as_ref().ok_or_else(|| {
                GamesboardError::UpstreamData(format!(
                    "{} page {} row {} is null or incomplete",
                    period, page, idx
                ))
            })
        })
        .collect()
}

/// Collects every competitor of `period` in leaderboard order.
///
/// Pages are fetched one at a time after the summary request. Each page must
/// contribute exactly [`records_on_page`] rows and report the same totals as
/// the summary.
pub async fn collect<S, E>(
    source: &S,
    period: Period,
    extractor: &E,
) -> Result<Vec<Record>, GamesboardError>
where
    S: LeaderboardSource,
    E: RowExtractor,
{
    let summary = fetch_summary(source, period).await?;
    let mut records = Vec::with_capacity(summary.total_competitors as usize);

    for page in 1..=summary.total_pages {
        let wanted = records_on_page(page, summary.total_pages, summary.total_competitors)?;
        let resp = source.fetch_page(period, page).await?;
        if resp.pagination.total_pages != i64::from(summary.total_pages)
            || resp.pagination.total_competitors != i64::from(summary.total_competitors)
        {
            return Err(GamesboardError::UpstreamData(format!(
                "{} page {} reports {} competitors over {} pages, summary had {} over {}",
                period,
                page,
                resp.pagination.total_competitors,
                resp.pagination.total_pages,
                summary.total_competitors,
                summary.total_pages
            )));
        }
        for row in take_rows(&resp, period, page, wanted)? {
            records.extend(extractor.extract(row, period));
        }
        tracing::debug!(
            "{} page {}/{}: {} rows",
            period,
            page,
            summary.total_pages,
            wanted
        );
    }

    Ok(records)
}
