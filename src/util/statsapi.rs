use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

pub const BASE_URL: &str = "https://statsapi.mlb.com";

pub const STANDINGS_URL: &str = "https://bdfed.stitch.mlbinfra.com/bdfed/transform-mlb-standings";

/// Upper bound on a single response body; live feeds late in extra innings run a few megabytes.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Raw transport. Implementations return the response body or a fetch failure, nothing else.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(10))
                .build(),
        }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.agent.get(url).call().with_context(|| format!("Can't retrieve {url}"))?;
        let mut body = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut body)
            .with_context(|| format!("There was a problem reading the body from {url}"))?;
        Ok(body)
    }
}

/// The statsapi endpoints this crate reads, bound to a transport.
pub struct StatsApi {
    fetcher: Box<dyn Fetch>,
    base_url: String,
    standings_url: String,
}

impl StatsApi {
    pub fn new(fetcher: Box<dyn Fetch>, base_url: impl Into<String>, standings_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            standings_url: standings_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an API-relative link such as `/api/v1/people/669203`.
    pub fn url(&self, link: &str) -> String {
        format!("{}{link}", self.base_url)
    }

    pub fn schedule_url(&self, date: NaiveDate) -> String {
        format!("{}/api/v1/schedule?sportId=1&date={}", self.base_url, date.format("%Y-%m-%d"))
    }

    pub fn standings_url(&self, season: i32) -> String {
        format!(
            "{}?splitPcts=false&numberPcts=false&standingsView=division&sortTemplate=3&season={season}&leagueIds=103&leagueIds=104&standingsTypes=regularSeason&hydrateAlias=noSchedule&sortSports=1",
            self.standings_url,
        )
    }

    pub fn get(&self, url: &str) -> Result<Value> {
        debug!(url, "fetching");
        let body = self.fetcher.fetch(url)?;
        serde_json::from_slice(&body).with_context(|| format!("Response from {url} was not a valid json"))
    }
}
