use core::fmt::{self, Write};

use crate::posts::{lineup_prefix, pitcher_prefix, team_label};
use crate::util::roster::StartingList;
use crate::util::width;

pub const SEPARATOR: &str = " | ";

/// The widest thing one team's column ever has to hold: its header label, any lineup row, the starter,
/// any bullpen arm written in starter form, or a bench name. Computed once per team per report.
pub fn negotiated_width(team: &StartingList) -> usize {
    let lineup = team.batting_order.iter().map(|slot| width(&lineup_prefix(slot)) + width(&slot.name));
    let pitchers = core::iter::once(&team.pitcher)
        .chain(&team.bullpen.bullpen)
        .map(|pitcher| width(&pitcher_prefix(pitcher)) + width(&pitcher.name));
    let bench = team.bench.bench.iter().map(|player| width(&player.name));
    core::iter::once(width(&team_label(&team.team_name)))
        .chain(lineup)
        .chain(pitchers)
        .chain(bench)
        .max()
        .unwrap_or(0)
}

/// A prefix plus a name, left-aligned into a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'a> {
    pub prefix: String,
    pub name: &'a str,
}

impl<'a> Cell<'a> {
    pub fn new(prefix: String, name: &'a str) -> Self {
        Self { prefix, name }
    }

    /// Pads the name by however much of `column` the prefix leaves over. Bench names are negotiated
    /// without their prefix, so a bench name that sets the width runs past the column by the prefix.
    pub fn write(&self, out: &mut impl Write, column: usize) -> fmt::Result {
        let pad = column.saturating_sub(width(&self.prefix));
        write!(out, "{}{: <pad$}", self.prefix, self.name)
    }
}

/// Writes two columns side by side, one line per index up to the longer side. A side that has run
/// out is filled with spaces to its full width.
pub fn write_paired(out: &mut impl Write, away: &[Cell<'_>], away_width: usize, home: &[Cell<'_>], home_width: usize) -> fmt::Result {
    for idx in 0..away.len().max(home.len()) {
        match away.get(idx) {
            Some(cell) => cell.write(out, away_width)?,
            None => write!(out, "{: <away_width$}", "")?,
        }
        out.write_str(SEPARATOR)?;
        match home.get(idx) {
            Some(cell) => cell.write(out, home_width)?,
            None => write!(out, "{: <home_width$}", "")?,
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::roster::fixtures;
    use crate::util::roster::{BatOrderInfo, StartingList};

    fn names(names: &[&str]) -> StartingList {
        let mut team = fixtures::team("T", vec![], vec![]);
        for (slot, name) in team.batting_order.iter_mut().zip(names) {
            *slot = BatOrderInfo { position: slot.position.clone(), jersey_number: String::new(), name: (*name).to_owned() };
        }
        team
    }

    #[test]
    fn lineup_rows_drive_the_width() {
        let team = names(&[
            "Player Longname",
            "Player Longnamer",
            "Player",
            "Player Shortname",
            "Longname",
            "Player Middlename Longname",
            "Player Long",
            "Play Name",
            "Hitting Longname",
        ]);
        // "LF -    - Player Middlename Longname"
        assert_eq!(negotiated_width(&team), 36);
    }

    #[test]
    fn bullpen_arms_are_measured_in_starter_form() {
        let team = fixtures::team(
            "T",
            vec![
                fixtures::pitcher("This Pitcher", "12", "R"),
                fixtures::pitcher("Another Pitcher Entirely", "12", "R"),
            ],
            vec![],
        );
        // " P -  R - 12 - Another Pitcher Entirely"
        assert_eq!(negotiated_width(&team), 39);
    }

    #[test]
    fn bench_names_count_raw() {
        let team = fixtures::team("T", vec![], vec![fixtures::bench("An Extraordinarily Long Bench Name", "1")]);
        assert_eq!(negotiated_width(&team), 34);
    }

    #[test]
    fn widest_bench_name_runs_past_its_column_by_the_prefix() {
        let team = fixtures::team("T", vec![], vec![fixtures::bench("An Extraordinarily Long Bench Name", "1")]);
        let column = negotiated_width(&team);
        let player = &team.bench.bench[0];
        let away = [Cell::new(crate::posts::bench_prefix(player), &player.name)];
        let mut out = String::new();
        write_paired(&mut out, &away, column, &[], 1).unwrap();
        assert_eq!(out, " 1 - An Extraordinarily Long Bench Name |  \n");
        assert_eq!(out.find(SEPARATOR), Some(column + width(" 1 - ")));
    }

    #[test]
    fn team_label_is_a_floor() {
        let mut team = fixtures::team("Los Angeles Angels of Anaheim", vec![], vec![]);
        team.batting_order.iter_mut().for_each(|slot| slot.name = "X".to_owned());
        team.pitcher.name = "X".to_owned();
        assert_eq!(negotiated_width(&team), width("----- Los Angeles Angels of Anaheim -----"));
    }

    #[test]
    fn negotiation_is_idempotent_and_bounds_every_row() {
        let team = fixtures::team("Minnesota Twins", vec![fixtures::pitcher("Jhoan Duran", "59", "R")], vec![fixtures::bench("Christian Vázquez", "8")]);
        let width_once = negotiated_width(&team);
        assert_eq!(width_once, negotiated_width(&team));
        for slot in &team.batting_order {
            assert!(width_once >= width(&lineup_prefix(slot)) + width(&slot.name));
        }
        assert!(width_once >= width(&pitcher_prefix(&team.pitcher)) + width(&team.pitcher.name));
    }

    #[test]
    fn missing_side_is_blank_padding() {
        let away = [Cell::new("A - ".to_owned(), "one"), Cell::new("A - ".to_owned(), "two")];
        let home = [Cell::new("H - ".to_owned(), "x")];
        let mut out = String::new();
        write_paired(&mut out, &away, 8, &home, 6).unwrap();
        assert_eq!(out, "A - one  | H - x \nA - two  |       \n");
    }
}
