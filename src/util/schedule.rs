use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

use crate::util::hyphenate;
use crate::util::statsapi::StatsApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledGame {
    pub away: String,
    pub home: String,
    pub pk: i64,
    pub link: String,
}

/// One day of the league schedule, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub date: String,
    pub games: Vec<ScheduledGame>,
}

impl Schedule {
    pub fn new(response: &Value) -> Result<Self> {
        let Some(day) = response["dates"].as_array().and_then(|dates| dates.first()) else {
            // off days come back with an empty `dates`
            return Ok(Self { date: String::new(), games: Vec::new() });
        };
        let date = day["date"].as_str().context("Schedule date didn't exist")?.to_owned();
        let games = day["games"]
            .as_array()
            .context("Schedule games didn't exist")?
            .iter()
            .map(|game| {
                Ok(ScheduledGame {
                    away: game["teams"]["away"]["team"]["name"].as_str().context("Away Team name didn't exist")?.to_owned(),
                    home: game["teams"]["home"]["team"]["name"].as_str().context("Home Team name didn't exist")?.to_owned(),
                    pk: game["gamePk"].as_i64().context("Game ID didn't exist")?,
                    link: game["link"].as_str().context("Game link didn't exist")?.to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { date, games })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLink {
    pub matchup: String,
    pub filename: String,
    pub link: String,
    pub pk: i64,
}

/// `2025-05-23-Baltimore-Orioles-at-Boston-Red-Sox-777815.pdf`. The primary key keeps doubleheaders apart.
pub fn report_filename(date: &str, away: &str, home: &str, pk: i64) -> String {
    format!("{date}-{}-at-{}-{pk}.pdf", hyphenate(away), hyphenate(home))
}

/// Picks the watched games that still need a report. `is_reported` answers whether the artifacts for a
/// filename already exist.
pub fn resolve_links(
    schedule: &Schedule,
    watch_teams: &[String],
    base_url: &str,
    is_reported: impl Fn(&str) -> bool,
) -> Vec<GameLink> {
    schedule
        .games
        .iter()
        .filter(|game| watch_teams.iter().any(|team| *team == game.away || *team == game.home))
        .map(|game| GameLink {
            matchup: format!("{} @ {}", game.away, game.home),
            filename: report_filename(&schedule.date, &game.away, &game.home, game.pk),
            link: format!("{base_url}{}", game.link),
            pk: game.pk,
        })
        .filter(|link| !is_reported(&link.filename))
        .collect()
}

/// Fetches the schedule for `date` and resolves it. A schedule that can't be fetched or read means
/// nothing new this cycle.
pub fn find_game_links(api: &StatsApi, watch_teams: &[String], date: NaiveDate, is_reported: impl Fn(&str) -> bool) -> Vec<GameLink> {
    let url = api.schedule_url(date);
    match api.get(&url).and_then(|response| Schedule::new(&response)) {
        Ok(schedule) => resolve_links(&schedule, watch_teams, api.base_url(), is_reported),
        Err(e) => {
            warn!("Unable to get the schedule for {date}: {e:#}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::util::statsapi::testing::*;

    fn schedule() -> Value {
        json!({
            "totalGames": 3,
            "dates": [{
                "date": "2025-05-23",
                "games": [
                    {
                        "gamePk": 777815,
                        "link": "/api/v1.1/game/777815/feed/live",
                        "teams": {
                            "away": { "team": { "id": 110, "name": "Baltimore Orioles" } },
                            "home": { "team": { "id": 111, "name": "Boston Red Sox" } }
                        }
                    },
                    {
                        "gamePk": 777809,
                        "link": "/api/v1.1/game/777809/feed/live",
                        "teams": {
                            "away": { "team": { "id": 110, "name": "Baltimore Orioles" } },
                            "home": { "team": { "id": 111, "name": "Boston Red Sox" } }
                        }
                    },
                    {
                        "gamePk": 778000,
                        "link": "/api/v1.1/game/778000/feed/live",
                        "teams": {
                            "away": { "team": { "id": 142, "name": "Minnesota Twins" } },
                            "home": { "team": { "id": 118, "name": "Kansas City Royals" } }
                        }
                    }
                ]
            }]
        })
    }

    #[test]
    fn doubleheader_games_get_distinct_filenames() {
        let schedule = Schedule::new(&schedule()).unwrap();
        let links = resolve_links(&schedule, &["Baltimore Orioles".to_owned()], "http://statsapi.test", |_| false);
        assert_eq!(
            links,
            vec![
                GameLink {
                    matchup: "Baltimore Orioles @ Boston Red Sox".to_owned(),
                    filename: "2025-05-23-Baltimore-Orioles-at-Boston-Red-Sox-777815.pdf".to_owned(),
                    link: "http://statsapi.test/api/v1.1/game/777815/feed/live".to_owned(),
                    pk: 777815,
                },
                GameLink {
                    matchup: "Baltimore Orioles @ Boston Red Sox".to_owned(),
                    filename: "2025-05-23-Baltimore-Orioles-at-Boston-Red-Sox-777809.pdf".to_owned(),
                    link: "http://statsapi.test/api/v1.1/game/777809/feed/live".to_owned(),
                    pk: 777809,
                },
            ]
        );
        let (first, second) = (&links[0].filename, &links[1].filename);
        assert_ne!(first, second);
        assert_eq!(first.trim_end_matches("777815.pdf"), second.trim_end_matches("777809.pdf"));
    }

    #[test]
    fn home_team_membership_counts() {
        let schedule = Schedule::new(&schedule()).unwrap();
        let links = resolve_links(&schedule, &["Kansas City Royals".to_owned()], "", |_| false);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].filename, "2025-05-23-Minnesota-Twins-at-Kansas-City-Royals-778000.pdf");
    }

    #[test]
    fn reported_games_are_skipped() {
        let schedule = Schedule::new(&schedule()).unwrap();
        let watch = ["Baltimore Orioles".to_owned(), "Minnesota Twins".to_owned()];
        let links = resolve_links(&schedule, &watch, "", |filename| filename.ends_with("777815.pdf"));
        let pks = links.iter().map(|link| link.pk).collect::<Vec<_>>();
        assert_eq!(pks, vec![777809, 778000]);
    }

    #[test]
    fn schedule_failures_mean_no_links() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 23).unwrap();
        let watch = ["Baltimore Orioles".to_owned()];
        let unreachable = StatsApi::new(Box::new(CannedFetcher::default()), TEST_BASE_URL, TEST_STANDINGS_URL);
        assert!(find_game_links(&unreachable, &watch, date, |_| false).is_empty());

        let garbled = StatsApi::new(
            Box::new(CannedFetcher::default().with(unreachable.schedule_url(date), "<html>")),
            TEST_BASE_URL,
            TEST_STANDINGS_URL,
        );
        assert!(find_game_links(&garbled, &watch, date, |_| false).is_empty());

        let fine = StatsApi::new(
            Box::new(CannedFetcher::default().with(unreachable.schedule_url(date), schedule().to_string())),
            TEST_BASE_URL,
            TEST_STANDINGS_URL,
        );
        assert_eq!(find_game_links(&fine, &watch, date, |_| false).len(), 2);
    }

    #[test]
    fn empty_day_has_no_games() {
        let schedule = Schedule::new(&json!({ "dates": [] })).unwrap();
        assert!(schedule.games.is_empty());
    }

    #[test]
    fn missing_team_name_is_an_error() {
        let mut response = schedule();
        response["dates"][0]["games"][0]["teams"]["away"]["team"] = json!({ "id": 110 });
        assert!(Schedule::new(&response).is_err());
    }
}
