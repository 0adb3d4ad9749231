use gamesboard_api::{LeaderboardQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn leaderboard_query_defaults() {
    let query = LeaderboardQuery::default();
    let url = query.add_to_url(&base_url());
    assert_eq!(url.query(), Some("division=1&sort=0&page=1"));
    assert_eq!(
        query.path(),
        "/api/leaderboards/v2/competitions/games/2022/leaderboards"
    );
}

#[test]
fn leaderboard_query_with_everything() {
    let query = LeaderboardQuery::default()
        .with_year(2019)
        .with_division(2)
        .with_page(3)
        .with_sort(4);
    let url = query.add_to_url(&base_url());
    assert_eq!(url.query(), Some("division=2&sort=4&page=3"));
    assert!(query.path().contains("/games/2019/"));
}
