use anyhow::{Context, Result};
use serde_json::Value;

/// Value of `gameData.status.abstractGameState` once the first pitch has been thrown.
pub const LIVE_STATE: &str = "Live";

/// The parts of `gameData` that go into a report header or a pending-game status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInfo {
    pub state: String,
    pub away_record: (i64, i64),
    pub home_record: (i64, i64),
    pub venue: String,
    pub city: String,
    pub state_abbrev: String,
    pub official_date: String,
    pub time: String,
    pub ampm: String,
    pub temp: String,
    pub condition: String,
}

impl GameInfo {
    pub fn new(response: &Value) -> Result<Self> {
        let game_data = &response["gameData"];
        let record = |side: &str| -> Result<(i64, i64)> {
            let record = &game_data["teams"][side]["record"];
            Ok((
                record["wins"].as_i64().with_context(|| format!("Could not get {side} wins"))?,
                record["losses"].as_i64().with_context(|| format!("Could not get {side} losses"))?,
            ))
        };
        let text = |value: &Value| value.as_str().unwrap_or_default().to_owned();
        Ok(Self {
            state: game_data["status"]["abstractGameState"].as_str().context("Could not get game state")?.to_owned(),
            away_record: record("away")?,
            home_record: record("home")?,
            venue: text(&game_data["venue"]["name"]),
            city: text(&game_data["venue"]["location"]["city"]),
            state_abbrev: text(&game_data["venue"]["location"]["stateAbbrev"]),
            official_date: game_data["datetime"]["officialDate"].as_str().context("Could not get official date")?.to_owned(),
            time: text(&game_data["datetime"]["time"]),
            ampm: text(&game_data["datetime"]["ampm"]),
            // weather is only posted shortly before first pitch
            temp: text(&game_data["weather"]["temp"]),
            condition: text(&game_data["weather"]["condition"]),
        })
    }

    pub fn is_live(&self) -> bool {
        self.state == LIVE_STATE
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state_abbrev)
    }

    pub fn weather(&self) -> String {
        format!("{}f, {}", self.temp, self.condition)
    }
}

pub fn record((wins, losses): (i64, i64)) -> String {
    format!("{wins}-{losses}")
}
