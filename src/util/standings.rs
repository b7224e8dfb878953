use anyhow::{Context, Result};
use fxhash::FxHashMap;
use serde_json::Value;

use crate::util::statsapi::StatsApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    AlWest,
    AlCentral,
    AlEast,
    NlWest,
    NlCentral,
    NlEast,
}

impl Division {
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Some(match abbreviation {
            "ALW" => Self::AlWest,
            "ALC" => Self::AlCentral,
            "ALE" => Self::AlEast,
            "NLW" => Self::NlWest,
            "NLC" => Self::NlCentral,
            "NLE" => Self::NlEast,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStanding {
    pub abbreviation: String,
    pub games_back: String,
}

/// Exactly five clubs in upstream rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionStandings(pub [TeamStanding; 5]);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsData {
    pub al_west: DivisionStandings,
    pub al_central: DivisionStandings,
    pub al_east: DivisionStandings,
    pub nl_west: DivisionStandings,
    pub nl_central: DivisionStandings,
    pub nl_east: DivisionStandings,
}

impl StandingsData {
    pub fn fetch(api: &StatsApi, season: i32) -> Result<Self> {
        let response = api.get(&api.standings_url(season)).context("Failed to get standings")?;
        Self::new(&response)
    }

    pub fn new(response: &Value) -> Result<Self> {
        let mut division_ids = FxHashMap::default();
        let leagues = response["structure"]["sports"][0]["leagues"]
            .as_array()
            .context("Standings structure didn't list leagues")?;
        for league in leagues {
            for division in league["divisions"].as_array().map(Vec::as_slice).unwrap_or_default() {
                let id = division["id"].as_i64().context("Division didn't have an id")?;
                if let Some(division) = division["abbreviation"].as_str().and_then(Division::from_abbreviation) {
                    division_ids.insert(id, division);
                }
            }
        }

        let mut out = Self::default();
        for record in response["records"].as_array().context("Standings didn't have records")? {
            let Some(&division) = record["division"].as_i64().and_then(|id| division_ids.get(&id)) else {
                continue;
            };
            let slots = &mut out.division_mut(division).0;
            let teams = record["teamRecords"].as_array().context("Division record didn't list teams")?;
            for (slot, team) in slots.iter_mut().zip(teams) {
                *slot = TeamStanding {
                    abbreviation: team["abbreviation"].as_str().context("Team didn't have an abbreviated name")?.to_owned(),
                    games_back: team["divisionGamesBack"].as_str().context("Team didn't have games back")?.to_owned(),
                };
            }
        }
        Ok(out)
    }

    pub fn division(&self, division: Division) -> &DivisionStandings {
        match division {
            Division::AlWest => &self.al_west,
            Division::AlCentral => &self.al_central,
            Division::AlEast => &self.al_east,
            Division::NlWest => &self.nl_west,
            Division::NlCentral => &self.nl_central,
            Division::NlEast => &self.nl_east,
        }
    }

    fn division_mut(&mut self, division: Division) -> &mut DivisionStandings {
        match division {
            Division::AlWest => &mut self.al_west,
            Division::AlCentral => &mut self.al_central,
            Division::AlEast => &mut self.al_east,
            Division::NlWest => &mut self.nl_west,
            Division::NlCentral => &mut self.nl_central,
            Division::NlEast => &mut self.nl_east,
        }
    }
}
