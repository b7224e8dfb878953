use core::fmt::{self, Display, Formatter, Write};

use crate::posts::{lineup_prefix, pitcher_prefix, reliever_prefix, team_label, BENCH_LABEL, BULLPEN_LABEL};
use crate::util::game_info::{record, GameInfo};
use crate::util::roster::StartingList;

/// Narrow layout: away team then home team, one field per line, nothing to align across teams.
pub struct ReceiptReport<'a> {
    away: &'a StartingList,
    home: &'a StartingList,
    info: &'a GameInfo,
}

impl<'a> ReceiptReport<'a> {
    pub fn new(away: &'a StartingList, home: &'a StartingList, info: &'a GameInfo) -> Self {
        Self { away, home, info }
    }

    pub fn write_game_header(&self, out: &mut impl Write) -> fmt::Result {
        let Self { away, home, info } = self;
        writeln!(out, "{} - {}", away.team_name, record(info.away_record))?;
        writeln!(out, "@")?;
        writeln!(out, "{} - {}", home.team_name, record(info.home_record))?;
        writeln!(out, "{}", info.venue)?;
        writeln!(out, "{}", info.location())?;
        writeln!(out, "{} - {}", info.official_date, info.time)?;
        writeln!(out, "{}", info.weather())?;
        writeln!(out)
    }
}

pub fn write_lineup(out: &mut impl Write, team: &StartingList) -> fmt::Result {
    for slot in &team.batting_order {
        writeln!(out, "{}{}", lineup_prefix(slot), slot.name)?;
    }
    writeln!(out, "{}{}", pitcher_prefix(&team.pitcher), team.pitcher.name)
}

pub fn write_bullpen(out: &mut impl Write, team: &StartingList) -> fmt::Result {
    writeln!(out, "{BULLPEN_LABEL}")?;
    for pitcher in &team.bullpen.bullpen {
        writeln!(out, "{}{}", reliever_prefix(pitcher), pitcher.name)?;
    }
    Ok(())
}

pub fn write_bench(out: &mut impl Write, team: &StartingList) -> fmt::Result {
    writeln!(out, "{BENCH_LABEL}")?;
    for player in &team.bench.bench {
        writeln!(out, "{} - {}", player.jersey_number, player.name)?;
    }
    Ok(())
}

fn write_team(out: &mut impl Write, team: &StartingList) -> fmt::Result {
    writeln!(out, "{}", team_label(&team.team_name))?;
    write_lineup(out, team)?;
    write_bullpen(out, team)?;
    write_bench(out, team)
}

impl Display for ReceiptReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_game_header(f)?;
        write_team(f, self.away)?;
        writeln!(f)?;
        write_team(f, self.home)
    }
}
