use core::fmt::{Display, Formatter};

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Officials {
    pub home: String,
    pub first: String,
    pub second: String,
    pub third: String,
}

impl Officials {
    /// Reads `liveData.boxscore.officials`. Crews with extra umpires (left/right field in the
    /// postseason) only keep the four infield positions.
    pub fn new(officials: &Value) -> Self {
        let mut out = Self::default();
        for official in officials.as_array().map(Vec::as_slice).unwrap_or_default() {
            let name = official["official"]["fullName"].as_str().unwrap_or_default().to_owned();
            match official["officialType"].as_str() {
                Some("Home Plate") => out.home = name,
                Some("First Base") => out.first = name,
                Some("Second Base") => out.second = name,
                Some("Third Base") => out.third = name,
                _ => {}
            }
        }
        out
    }
}

impl Display for Officials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { home, first, second, third } = self;
        writeln!(f, "---OFFICIALS")?;
        for (label, name) in [("HOME", home), ("FIRST", first), ("SECOND", second), ("THIRD", third)] {
            writeln!(f, "{label: <6} - {name}")?;
        }
        Ok(())
    }
}
