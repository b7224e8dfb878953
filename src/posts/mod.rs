//! Plain-text report layouts. Every row is a fixed decorative prefix followed by a name; the prefix
//! templates live here so both layouts and the width negotiation agree on them.

use crate::util::roster::{BatOrderInfo, BenchInfo, BullpenInfo};

pub mod columns;
pub mod page;
pub mod receipt;
pub mod standings;

pub const BULLPEN_LABEL: &str = "---BULLPEN";
pub const BENCH_LABEL: &str = "---BENCH";

pub fn team_label(team_name: &str) -> String {
    format!("----- {team_name} -----")
}

/// ` C - 12 - `
pub fn lineup_prefix(slot: &BatOrderInfo) -> String {
    format!("{:>2} - {:>2} - ", slot.position, slot.jersey_number)
}

/// ` P -  R - 12 - `
pub fn pitcher_prefix(pitcher: &BullpenInfo) -> String {
    format!("{:>2} - {:>2} - {:>2} - ", "P", pitcher.handedness, pitcher.jersey_number)
}

/// ` R - 12 - `
pub fn reliever_prefix(pitcher: &BullpenInfo) -> String {
    format!("{:>2} - {:>2} - ", pitcher.handedness, pitcher.jersey_number)
}

/// `12 - `
pub fn bench_prefix(player: &BenchInfo) -> String {
    format!("{:>2} - ", player.jersey_number)
}
