use core::fmt::{self, Display, Formatter, Write};

use crate::posts::columns::{negotiated_width, write_paired, Cell};
use crate::posts::{bench_prefix, lineup_prefix, pitcher_prefix, reliever_prefix, team_label, BENCH_LABEL, BULLPEN_LABEL};
use crate::util::game_info::{record, GameInfo};
use crate::util::roster::StartingList;

/// Wide layout: both teams side by side, each in a column sized by its own negotiated width.
pub struct PageReport<'a> {
    away: &'a StartingList,
    home: &'a StartingList,
    info: &'a GameInfo,
    away_width: usize,
    home_width: usize,
}

impl<'a> PageReport<'a> {
    pub fn new(away: &'a StartingList, home: &'a StartingList, info: &'a GameInfo) -> Self {
        Self {
            away,
            home,
            info,
            away_width: negotiated_width(away),
            home_width: negotiated_width(home),
        }
    }

    pub fn write_game_header(&self, out: &mut impl Write) -> fmt::Result {
        let Self { away, home, info, .. } = self;
        writeln!(out, "{} {} @ {} {}", away.team_name, record(info.away_record), home.team_name, record(info.home_record))?;
        writeln!(out, "{} - {}", info.venue, info.location())?;
        writeln!(out, "{} - {} - {}", info.official_date, info.time, info.weather())?;
        writeln!(out)
    }

    pub fn write_team_header(&self, out: &mut impl Write) -> fmt::Result {
        let (away_width, home_width) = (self.away_width, self.home_width);
        writeln!(out, "{: >away_width$} | {: >home_width$}", team_label(&self.away.team_name), team_label(&self.home.team_name))
    }

    /// Nine lineup slots paired by index, then the two starters.
    pub fn write_lineups(&self, out: &mut impl Write) -> fmt::Result {
        let lineup = |team: &'a StartingList| {
            team.batting_order.iter().map(|slot| Cell::new(lineup_prefix(slot), &slot.name)).collect::<Vec<_>>()
        };
        write_paired(out, &lineup(self.away), self.away_width, &lineup(self.home), self.home_width)?;
        let starter = |team: &'a StartingList| [Cell::new(pitcher_prefix(&team.pitcher), &team.pitcher.name)];
        write_paired(out, &starter(self.away), self.away_width, &starter(self.home), self.home_width)
    }

    pub fn write_bullpens(&self, out: &mut impl Write) -> fmt::Result {
        self.write_section_label(out, BULLPEN_LABEL)?;
        let bullpen = |team: &'a StartingList| {
            team.bullpen.bullpen.iter().map(|pitcher| Cell::new(reliever_prefix(pitcher), &pitcher.name)).collect::<Vec<_>>()
        };
        write_paired(out, &bullpen(self.away), self.away_width, &bullpen(self.home), self.home_width)
    }

    pub fn write_benches(&self, out: &mut impl Write) -> fmt::Result {
        self.write_section_label(out, BENCH_LABEL)?;
        let bench = |team: &'a StartingList| {
            team.bench.bench.iter().map(|player| Cell::new(bench_prefix(player), &player.name)).collect::<Vec<_>>()
        };
        write_paired(out, &bench(self.away), self.away_width, &bench(self.home), self.home_width)
    }

    /// Section labels sit flush against the bar on both sides.
    fn write_section_label(&self, out: &mut impl Write, label: &str) -> fmt::Result {
        let (away_width, home_width) = (self.away_width + 1, self.home_width + 1);
        writeln!(out, "{label: <away_width$}|{label: <home_width$}")
    }
}

impl Display for PageReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_game_header(f)?;
        self.write_team_header(f)?;
        self.write_lineups(f)?;
        self.write_bullpens(f)?;
        self.write_benches(f)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::util::game_info;
    use crate::util::roster::fixtures;

    fn render(report: &PageReport<'_>, section: fn(&PageReport<'_>, &mut String) -> fmt::Result) -> String {
        let mut out = String::new();
        section(report, &mut out).unwrap();
        out
    }

    fn bullpen() -> Vec<crate::util::roster::BullpenInfo> {
        vec![
            fixtures::pitcher("Pitcher 1", "12", "R"),
            fixtures::pitcher("Pitcher 2", "22", "L"),
            fixtures::pitcher("Pitcher 3", "2", "R"),
            fixtures::pitcher("Pitcher 4", "17", "L"),
            fixtures::pitcher("Pitcher 5", "6", "R"),
        ]
    }

    #[test]
    fn lineups_line_up_slot_by_slot() {
        let team = fixtures::team("Team", vec![], vec![]);
        let info = game_info::fixtures::live();
        let report = PageReport::new(&team, &team, &info);
        let expected = concat!(
            " C -  1 - Catcher           |  C -  1 - Catcher          \n",
            "1B -  2 - First Base        | 1B -  2 - First Base       \n",
            "2B -  3 - Second Base       | 2B -  3 - Second Base      \n",
            "SS -  4 - Shortstop         | SS -  4 - Shortstop        \n",
            "3B -  5 - Third Base        | 3B -  5 - Third Base       \n",
            "LF -  6 - Left Field        | LF -  6 - Left Field       \n",
            "CF -  7 - Center Field      | CF -  7 - Center Field     \n",
            "RF -  8 - Right Field       | RF -  8 - Right Field      \n",
            "DH -  9 - Designated Hitter | DH -  9 - Designated Hitter\n",
            " P -  R - 12 - Pitcher      |  P -  R - 12 - Pitcher     \n",
        );
        assert_eq!(render(&report, |r, out| r.write_lineups(out)), expected);
    }

    #[test]
    fn bullpens_pair_by_index() {
        let team = fixtures::team("Team", bullpen(), vec![]);
        let info = game_info::fixtures::live();
        let report = PageReport::new(&team, &team, &info);
        let expected = concat!(
            "---BULLPEN                  |---BULLPEN                  \n",
            " R - 12 - Pitcher 1         |  R - 12 - Pitcher 1        \n",
            " L - 22 - Pitcher 2         |  L - 22 - Pitcher 2        \n",
            " R -  2 - Pitcher 3         |  R -  2 - Pitcher 3        \n",
            " L - 17 - Pitcher 4         |  L - 17 - Pitcher 4        \n",
            " R -  6 - Pitcher 5         |  R -  6 - Pitcher 5        \n",
        );
        assert_eq!(render(&report, |r, out| r.write_bullpens(out)), expected);
    }

    #[test]
    fn shorter_bullpen_is_padded_not_dropped() {
        let away = fixtures::team("Away", bullpen(), vec![]);
        let home = fixtures::team("Home", bullpen()[..2].to_vec(), vec![]);
        let info = game_info::fixtures::live();
        let report = PageReport::new(&away, &home, &info);
        let expected = concat!(
            "---BULLPEN                  |---BULLPEN                  \n",
            " R - 12 - Pitcher 1         |  R - 12 - Pitcher 1        \n",
            " L - 22 - Pitcher 2         |  L - 22 - Pitcher 2        \n",
            " R -  2 - Pitcher 3         |                            \n",
            " L - 17 - Pitcher 4         |                            \n",
            " R -  6 - Pitcher 5         |                            \n",
        );
        let out = render(&report, |r, out| r.write_bullpens(out));
        assert_eq!(out, expected);
        assert_eq!(out.lines().count(), 1 + 5);
        let bars = out.lines().map(|line| line.find('|')).collect::<Vec<_>>();
        assert!(bars.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn ragged_benches_keep_both_columns() {
        let away = fixtures::team("Away", vec![], vec![fixtures::bench("Bench One", "10"), fixtures::bench("Bench Two", "3")]);
        let home = fixtures::team("Home", vec![], vec![fixtures::bench("Bench Three", "44")]);
        let info = game_info::fixtures::live();
        let report = PageReport::new(&away, &home, &info);
        let expected = concat!(
            "---BENCH                    |---BENCH                    \n",
            "10 - Bench One              | 44 - Bench Three           \n",
            " 3 - Bench Two              |                            \n",
        );
        assert_eq!(render(&report, |r, out| r.write_benches(out)), expected);
    }

    #[test]
    fn full_page_starts_with_game_and_team_headers() {
        let away = fixtures::team("Baltimore Orioles", vec![], vec![]);
        let home = fixtures::team("Boston Red Sox", vec![], vec![]);
        let info = game_info::fixtures::live();
        let page = PageReport::new(&away, &home, &info).to_string();
        let expected = concat!(
            "Baltimore Orioles 20-31 @ Boston Red Sox 28-26\n",
            "Fenway Park - Boston, MA\n",
            "2025-05-23 - 7:10 - 61f, Cloudy\n",
            "\n",
            "----- Baltimore Orioles ----- |  ----- Boston Red Sox -----\n",
        );
        assert!(page.starts_with(expected), "{page}");
        assert!(page.ends_with("|---BENCH                    \n\n"));
    }
}
