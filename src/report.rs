use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use fxhash::FxHashSet;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::posts::page::PageReport;
use crate::posts::receipt::ReceiptReport;
use crate::render::{DocumentRenderer, PageSize};
use crate::storage::{index_page, ArtifactStore};
use crate::util::game_info::GameInfo;
use crate::util::officials::Officials;
use crate::util::roster::StartingList;
use crate::util::schedule::{find_game_links, GameLink};
use crate::util::standings::StandingsData;
use crate::util::statsapi::StatsApi;

/// One game's output for a cycle. Pending games only carry `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportData {
    pub receipt: String,
    pub page: String,
    pub message: String,
    pub filename: String,
    pub live: bool,
}

/// Fetches the live feed behind `link` and turns it into a report. `None` means the game is left out
/// of this cycle: the feed couldn't be read, or either team's roster didn't fully resolve.
pub fn generate_pre_game_report(api: &StatsApi, link: &GameLink, debug: bool) -> Option<ReportData> {
    let response = match api.get(&link.link) {
        Ok(response) => response,
        Err(e) => {
            warn!("Unable to get game info for {}: {e:#}", link.matchup);
            return None;
        }
    };
    let info = match GameInfo::new(&response) {
        Ok(info) => info,
        Err(e) => {
            warn!("Live feed for {} was missing game data: {e:#}", link.matchup);
            return None;
        }
    };

    if !info.is_live() {
        let mut message = format!("{} - Starts: {} - {}{}\n", link.matchup, info.official_date, info.time, info.ampm);
        if debug {
            message.push_str(&link.link);
            message.push('\n');
        }
        return Some(ReportData {
            message,
            filename: link.filename.clone(),
            ..ReportData::default()
        });
    }

    let teams = &response["liveData"]["boxscore"]["teams"];
    let away = StartingList::new(&teams["away"], api);
    if !away.ok {
        return None;
    }
    let home = StartingList::new(&teams["home"], api);
    if !home.ok {
        return None;
    }

    let officials = Officials::new(&response["liveData"]["boxscore"]["officials"]).to_string();
    let mut receipt = ReceiptReport::new(&away, &home, &info).to_string();
    let mut page = PageReport::new(&away, &home, &info).to_string();
    for text in [&mut receipt, &mut page] {
        text.push_str(&officials);
        if debug {
            text.push_str(&link.link);
            text.push('\n');
        }
    }
    Some(ReportData {
        receipt,
        page,
        message: String::new(),
        filename: link.filename.clone(),
        live: true,
    })
}

/// Every watched game's report for `links`. When anything went live the standings are appended to each
/// live report, and if they can't be fetched the whole cycle comes back empty.
pub fn generate_full_report(api: &StatsApi, links: &[GameLink], season: i32, debug: bool) -> Vec<ReportData> {
    let mut reports = links
        .iter()
        .filter_map(|link| generate_pre_game_report(api, link, debug))
        .collect::<Vec<_>>();
    if !reports.iter().any(|report| report.live) {
        return reports;
    }
    let standings = match StandingsData::fetch(api, season) {
        Ok(standings) => standings.to_string(),
        Err(e) => {
            error!("Dropping this cycle's reports, standings are unavailable: {e:#}");
            return Vec::new();
        }
    };
    for report in reports.iter_mut().filter(|report| report.live) {
        for text in [&mut report.receipt, &mut report.page] {
            text.push('\n');
            text.push_str(&standings);
        }
    }
    reports
}

/// Games already announced as pending, by report filename.
#[derive(Debug, Default)]
pub struct Watchlist {
    announced: FxHashSet<String>,
}

impl Watchlist {
    /// `true` the first time a pending game is seen.
    pub fn announce(&mut self, filename: &str) -> bool {
        self.announced.insert(filename.to_owned())
    }

    pub fn went_live(&mut self, filename: &str) {
        self.announced.remove(filename);
    }

    /// Forgets games that are no longer on the schedule.
    pub fn retain(&mut self, current: &FxHashSet<&str>) {
        self.announced.retain(|filename| current.contains(filename.as_str()));
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.announced.contains(filename)
    }

    pub fn len(&self) -> usize {
        self.announced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.announced.is_empty()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// Artifact keys written this cycle.
    pub written: Vec<String>,
    pub pending: usize,
    pub announced: usize,
}

/// Runs poll cycles. Owns the watch-list so consecutive cycles share it without any locking.
pub struct Reporter {
    api: StatsApi,
    store: Box<dyn ArtifactStore>,
    renderer: Box<dyn DocumentRenderer>,
    config: Config,
    debug: bool,
    watchlist: Watchlist,
}

impl Reporter {
    pub fn new(api: StatsApi, store: Box<dyn ArtifactStore>, renderer: Box<dyn DocumentRenderer>, config: Config, debug: bool) -> Self {
        Self {
            api,
            store,
            renderer,
            config,
            debug,
            watchlist: Watchlist::default(),
        }
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn is_reported(&self, filename: &str) -> bool {
        self.store.exists(&self.config.receipt_key(filename)) && self.store.exists(&self.config.page_key(filename))
    }

    pub fn run_cycle(&mut self, date: NaiveDate) -> CycleSummary {
        let teams = self.config.effective_watch_teams();
        let links = find_game_links(&self.api, &teams, date, |filename| self.is_reported(filename));
        let reports = generate_full_report(&self.api, &links, date.year(), self.debug);

        let mut summary = CycleSummary::default();
        for report in &reports {
            if report.live {
                let artifacts = [
                    (self.config.receipt_key(&report.filename), &report.receipt, PageSize::Receipt),
                    (self.config.page_key(&report.filename), &report.page, PageSize::Letter),
                ];
                for (key, text, size) in artifacts {
                    if self.store.exists(&key) {
                        continue;
                    }
                    info!("Writing {key}");
                    match self.write_artifact(&key, text, size) {
                        Ok(()) => summary.written.push(key),
                        Err(e) => error!("Failed to write {key}: {e:#}"),
                    }
                }
                self.watchlist.went_live(&report.filename);
            } else {
                summary.pending += 1;
                let headline = report.message.lines().next().unwrap_or_default();
                if self.watchlist.announce(&report.filename) {
                    summary.announced += 1;
                    info!("Found {headline} - monitoring...");
                } else {
                    debug!("Still waiting on {headline}");
                }
            }
        }

        // no links may just mean the schedule was unreachable, so keep what we've announced
        if !links.is_empty() {
            let current = links.iter().map(|link| link.filename.as_str()).collect::<FxHashSet<_>>();
            self.watchlist.retain(&current);
        }

        if self.config.write_index && !summary.written.is_empty() {
            if let Err(e) = self.write_indexes() {
                error!("Failed to update the index pages: {e:#}");
            }
        }
        summary
    }

    fn write_artifact(&self, key: &str, text: &str, size: PageSize) -> Result<()> {
        let bytes = self.renderer.render(text, size)?;
        self.store.put(key, &bytes)
    }

    fn write_indexes(&self) -> Result<()> {
        for (folder, title) in [(&self.config.page_folder, "PAGES"), (&self.config.receipt_folder, "RECEIPTS")] {
            let html = index_page(self.store.as_ref(), folder, title)?;
            self.store.put(&format!("{folder}.html"), html.as_bytes())?;
        }
        Ok(())
    }
}
