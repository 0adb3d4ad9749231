mod common;
pub use self::common::{Query, QueryCommon};

mod leaderboard;
pub use self::leaderboard::LeaderboardQuery;
