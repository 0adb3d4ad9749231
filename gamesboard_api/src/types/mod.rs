mod lenient;

mod meta;
pub use self::meta::{Competition, LeaderboardResponse, Ordinal, Pagination};

mod entrant;
pub use self::entrant::{CompetitorID, Entrant, LeaderboardRow};

mod score;
pub use self::score::ScoreEntry;
