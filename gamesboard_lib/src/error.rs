//! Error types for the library layer.

use std::fmt;

/// Errors produced by the aggregation pipeline.
#[derive(Debug)]
pub enum GamesboardError {
    /// A transport-level failure from the API client.
    Api(gamesboard_api::Error),
    /// Caller input was rejected before any request was made.
    InvalidArgument(String),
    /// The API answered, but the data violates the leaderboard contract
    /// (missing fields, short pages, inconsistent totals).
    UpstreamData(String),
    /// A configuration file could not be read or parsed.
    Config(String),
}

impl fmt::Display for GamesboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::UpstreamData(msg) => write!(f, "Upstream data error: {}", msg),
            Self::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GamesboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<gamesboard_api::Error> for GamesboardError {
    fn from(e: gamesboard_api::Error) -> Self {
        match e {
            gamesboard_api::Error::Decode(msg) => Self::UpstreamData(msg),
            gamesboard_api::Error::InvalidQuery(msg) => Self::InvalidArgument(msg),
            other => Self::Api(other),
        }
    }
}
