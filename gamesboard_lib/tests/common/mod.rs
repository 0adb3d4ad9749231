#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use gamesboard_lib::types::LeaderboardResponse;
use gamesboard_lib::{Division, GamesboardError, LeaderboardSource, Period, PAGE_SIZE};
use serde_json::{json, Value};

/// Shape of one fake year/division leaderboard.
#[derive(Clone, Copy)]
pub struct Board {
    pub total_competitors: u32,
    pub total_pages: u32,
    /// Extra rows appended to the last page (junk past the real field).
    pub trailing: usize,
    /// Page that is served with one row missing.
    pub short_page: Option<u32>,
    /// Page whose first row is null.
    pub null_page: Option<u32>,
}

impl Board {
    pub fn new(total_competitors: u32) -> Self {
        Self {
            total_competitors,
            total_pages: total_competitors.div_ceil(PAGE_SIZE).max(1),
            trailing: 0,
            short_page: None,
            null_page: None,
        }
    }
}

pub fn competitor_id(period: Period, idx: u32) -> String {
    format!("{}{}{:03}", period.year, period.division.code(), idx)
}

pub fn entrant_row(period: Period, idx: u32) -> Value {
    let rank = idx + 1;
    let event_two_rank = if rank % 10 == 0 {
        "CUT".to_string()
    } else {
        rank.to_string()
    };
    json!({
        "overallRank": rank.to_string(),
        "overallScore": (1000 - rank).to_string(),
        "entrant": {
            "competitorId": competitor_id(period, idx),
            "competitorName": format!("Athlete {}", rank),
            "gender": if period.division == Division::Male { "M" } else { "F" },
            "age": (20 + rank % 15).to_string(),
            "height": if rank % 2 == 0 { "70 in" } else { "180 cm" },
            "weight": if rank % 3 == 0 { "" } else { "200 lb" }
        },
        "scores": [
            { "ordinal": 1, "rank": rank.to_string(), "scoreDisplay": "31:50.00", "points": "100" },
            { "ordinal": 2, "rank": event_two_rank, "scoreDisplay": "200 lb", "points": "50" }
        ]
    })
}

pub fn page_json(period: Period, board: &Board, page: u32) -> Value {
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(board.total_competitors);
    let mut rows: Vec<Value> = (start..end).map(|idx| entrant_row(period, idx)).collect();
    if page == board.total_pages {
        rows.extend((0..board.trailing).map(|_| Value::Null));
    }
    if board.short_page == Some(page) {
        rows.pop();
    }
    if board.null_page == Some(page) && !rows.is_empty() {
        rows[0] = Value::Null;
    }
    json!({
        "pagination": {
            "totalPages": board.total_pages,
            "totalCompetitors": board.total_competitors,
            "currentPage": page
        },
        "competition": { "competitionId": 100 + period.year - 2000 },
        "ordinals": [ { "ordinal": 1 }, { "ordinal": 2 } ],
        "leaderboardRows": rows
    })
}

/// In-memory leaderboard that records every page request.
pub struct FakeSource {
    boards: HashMap<Period, Board>,
    pub calls: Mutex<Vec<(Period, u32)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            boards: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_board(mut self, period: Period, board: Board) -> Self {
        self.boards.insert(period, board);
        self
    }

    pub fn calls(&self) -> Vec<(Period, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl LeaderboardSource for FakeSource {
    async fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> Result<LeaderboardResponse, GamesboardError> {
        self.calls.lock().unwrap().push((period, page));
        let board = self
            .boards
            .get(&period)
            .ok_or_else(|| GamesboardError::UpstreamData(format!("no board for {}", period)))?;
        Ok(serde_json::from_value(page_json(period, board, page)).unwrap())
    }
}
