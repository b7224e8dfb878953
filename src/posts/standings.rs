use core::fmt::{self, Display, Formatter};

use crate::util::standings::{DivisionStandings, StandingsData};

const AL_HEADER: &str = "- AL West - | - AL Central - | - AL East -";
const NL_HEADER: &str = "- NL West - | - NL Central - | - NL East -";
const COLUMNS: &str = " Team | GB  |  Team  |  GB   | Team  | GB";

/// One league, West/Central/East left to right, five rows.
fn write_league(f: &mut Formatter<'_>, header: &str, west: &DivisionStandings, central: &DivisionStandings, east: &DivisionStandings) -> fmt::Result {
    writeln!(f, "{header}")?;
    writeln!(f, "{COLUMNS}")?;
    for ((west, central), east) in west.0.iter().zip(&central.0).zip(&east.0) {
        writeln!(
            f,
            "{: >4}  |{: >4} |{: >5}   |{: >5}  |{: >4}   |{: >4}",
            west.abbreviation, west.games_back, central.abbreviation, central.games_back, east.abbreviation, east.games_back,
        )?;
    }
    Ok(())
}

impl Display for StandingsData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_league(f, AL_HEADER, &self.al_west, &self.al_central, &self.al_east)?;
        write_league(f, NL_HEADER, &self.nl_west, &self.nl_central, &self.nl_east)
    }
}
