use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::util::statsapi::{BASE_URL, STANDINGS_URL};

pub const ALL_TEAMS: [&str; 30] = [
    "Arizona Diamondbacks",
    "Athletics",
    "Atlanta Braves",
    "Baltimore Orioles",
    "Boston Red Sox",
    "Chicago Cubs",
    "Chicago White Sox",
    "Cincinnati Reds",
    "Cleveland Guardians",
    "Colorado Rockies",
    "Detroit Tigers",
    "Houston Astros",
    "Kansas City Royals",
    "Los Angeles Angels",
    "Los Angeles Dodgers",
    "Miami Marlins",
    "Milwaukee Brewers",
    "Minnesota Twins",
    "New York Mets",
    "New York Yankees",
    "Philadelphia Phillies",
    "Pittsburgh Pirates",
    "San Diego Padres",
    "San Francisco Giants",
    "Seattle Mariners",
    "St. Louis Cardinals",
    "Tampa Bay Rays",
    "Texas Rangers",
    "Toronto Blue Jays",
    "Washington Nationals",
];

/// Watched when the configured list is empty.
pub const FALLBACK_TEAM: &str = "Minnesota Twins";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Team names exactly as the schedule spells them
    pub watch_teams: Vec<String>,

    /// Root of the artifact store
    pub report_path: PathBuf,

    pub receipt_folder: String,

    pub page_folder: String,

    pub stats_base_url: String,

    pub standings_url: String,

    /// Seconds between the start of one poll cycle and the next
    pub poll_seconds: u64,

    /// Regenerate `page.html` and `receipt.html` after writing artifacts
    pub write_index: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_teams: ALL_TEAMS.iter().map(|team| (*team).to_owned()).collect(),
            report_path: PathBuf::new(),
            receipt_folder: "receipt".to_owned(),
            page_folder: "page".to_owned(),
            stats_base_url: BASE_URL.to_owned(),
            standings_url: STANDINGS_URL.to_owned(),
            poll_seconds: 60,
            write_index: true,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find a config directory for this user")?
            .join("mlb-report-gen")
            .join("config.json"))
    }

    /// Reads the config at `path`, writing the defaults there first if nothing exists yet, then makes
    /// sure the report folders exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
            info!("Read config file from: {}", path.display());
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            let config = Self::default();
            config.save(path)?;
            info!("Created new config file at: {}", path.display());
            config
        };
        config.create_report_dirs()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("Failed to make the config directory {}", parent.display()))?;
        }
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, serde_json::ser::PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn receipt_path(&self) -> PathBuf {
        self.report_path.join(&self.receipt_folder)
    }

    pub fn page_path(&self) -> PathBuf {
        self.report_path.join(&self.page_folder)
    }

    pub fn create_report_dirs(&self) -> Result<()> {
        for dir in [self.receipt_path(), self.page_path()] {
            fs::create_dir_all(&dir).with_context(|| format!("failed to create dir {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn receipt_key(&self, filename: &str) -> String {
        format!("{}/{filename}", self.receipt_folder)
    }

    pub fn page_key(&self, filename: &str) -> String {
        format!("{}/{filename}", self.page_folder)
    }

    pub fn effective_watch_teams(&self) -> Vec<String> {
        if self.watch_teams.is_empty() {
            vec![FALLBACK_TEAM.to_owned()]
        } else {
            self.watch_teams.clone()
        }
    }
}
