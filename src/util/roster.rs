use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::util::statsapi::StatsApi;

/// One lineup slot. Slots stay in upstream order, catcher first through the designated hitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatOrderInfo {
    pub position: String,
    pub jersey_number: String,
    pub name: String,
}

/// A pitcher resolved through the people endpoint. `ok` is false when that lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BullpenInfo {
    pub name: String,
    pub jersey_number: String,
    pub handedness: String,
    pub ok: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BullpenList {
    pub team_name: String,
    pub bullpen: Vec<BullpenInfo>,
    pub ok: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchInfo {
    pub name: String,
    pub jersey_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchList {
    pub team_name: String,
    pub bench: Vec<BenchInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartingList {
    pub team_name: String,
    pub batting_order: [BatOrderInfo; 9],
    pub bullpen: BullpenList,
    pub bench: BenchList,
    pub pitcher: BullpenInfo,
    pub ok: bool,
}

impl BullpenInfo {
    pub fn failed() -> Self {
        Self::default()
    }

    /// Reads one pitcher from a people response (`people[0]`).
    pub fn from_people(response: &Value) -> Result<Self> {
        let person = &response["people"][0];
        Ok(Self {
            name: person["fullName"].as_str().context("Could not get pitcher's name")?.to_owned(),
            // rookies called up mid-game sometimes have no number yet
            jersey_number: person["primaryNumber"].as_str().unwrap_or_default().to_owned(),
            handedness: person["pitchHand"]["code"].as_str().context("Could not get pitcher's hand")?.to_owned(),
            ok: true,
        })
    }

    /// One round trip per pitcher. Failures are logged and come back as a not-ok entry.
    pub fn lookup(api: &StatsApi, person_link: &str) -> Self {
        let url = api.url(person_link);
        match api.get(&url).and_then(|response| Self::from_people(&response)) {
            Ok(pitcher) => pitcher,
            Err(e) => {
                warn!("Unable to get pitcher info from {url}, will try again later: {e:#}");
                Self::failed()
            }
        }
    }
}

impl BullpenList {
    pub fn new(team: &Value, api: &StatsApi) -> Result<Self> {
        let bullpen = player_ids(team, "bullpen")?
            .into_iter()
            .map(|id| Ok(BullpenInfo::lookup(api, person_link(player(team, id)?)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            team_name: team_name(team)?,
            ok: bullpen.iter().all(|pitcher| pitcher.ok),
            bullpen,
        })
    }
}

impl BenchList {
    pub fn new(team: &Value) -> Result<Self> {
        let bench = player_ids(team, "bench")?
            .into_iter()
            .map(|id| {
                let player = player(team, id)?;
                Ok(BenchInfo {
                    name: full_name(player)?,
                    jersey_number: jersey_number(player),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { team_name: team_name(team)?, bench })
    }
}

impl StartingList {
    /// Builds one team's side of the report from its `liveData.boxscore.teams` subtree. Anything that
    /// cannot be resolved leaves the list not ok rather than partially filled.
    pub fn new(team: &Value, api: &StatsApi) -> Self {
        let name = team["team"]["name"].as_str().unwrap_or_default().to_owned();
        match Self::resolve(team, api) {
            Ok(list) => {
                if !list.ok {
                    warn!("Pitcher lookups failed for {name}, skipping this cycle");
                }
                list
            }
            Err(e) => {
                warn!("Could not resolve the roster for {name}: {e:#}");
                Self { team_name: name, ..Self::default() }
            }
        }
    }

    fn resolve(team: &Value, api: &StatsApi) -> Result<Self> {
        let team_name = team_name(team)?;
        let batting_order = batting_order(team)?;
        let starter = *player_ids(team, "pitchers")?.first().context("Team has no starting pitcher yet")?;
        let pitcher = BullpenInfo::lookup(api, person_link(player(team, starter)?)?);
        let bullpen = BullpenList::new(team, api)?;
        let bench = BenchList::new(team)?;
        Ok(Self {
            ok: pitcher.ok && bullpen.ok,
            team_name,
            batting_order,
            bullpen,
            bench,
            pitcher,
        })
    }
}

pub fn batting_order(team: &Value) -> Result<[BatOrderInfo; 9]> {
    let order = player_ids(team, "battingOrder")?
        .into_iter()
        .map(|id| {
            let player = player(team, id)?;
            Ok(BatOrderInfo {
                position: player["position"]["abbreviation"].as_str().context("Hitter's position didn't exist")?.to_owned(),
                jersey_number: jersey_number(player),
                name: full_name(player)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    <[BatOrderInfo; 9]>::try_from(order).map_err(|order| anyhow!("Batting order was {} batters, not 9", order.len()))
}

fn team_name(team: &Value) -> Result<String> {
    Ok(team["team"]["name"].as_str().context("Team name didn't exist")?.to_owned())
}

fn player_ids(team: &Value, key: &str) -> Result<Vec<i64>> {
    team[key]
        .as_array()
        .with_context(|| format!("Team's {key} didn't exist"))?
        .iter()
        .map(|id| id.as_i64().with_context(|| format!("Non-numeric player id in {key}")))
        .collect()
}

fn player(team: &Value, id: i64) -> Result<&Value> {
    let player = &team["players"][&format!("ID{id}")];
    if player.is_null() {
        return Err(anyhow!("Player {id} is missing from the box score"));
    }
    Ok(player)
}

fn person_link(player: &Value) -> Result<&str> {
    player["person"]["link"].as_str().context("Player's link didn't exist")
}

fn full_name(player: &Value) -> Result<String> {
    Ok(player["person"]["fullName"].as_str().context("Player's name didn't exist")?.to_owned())
}

fn jersey_number(player: &Value) -> String {
    player["jerseyNumber"].as_str().unwrap_or_default().to_owned()
}
