use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Row counts of one run, written to `summary.json`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RunSummary {
    pub stat_rows: usize,
    pub league_seasons: usize,
    pub roster_players: usize,
    pub draft_picks_in_window: usize,
    pub profiles: usize,
    pub drafted: usize,
    pub drafted_never_played: usize,
    pub undrafted: usize,
    pub name_collisions: usize,
    pub profiles_path: PathBuf,
    pub seasons_path: PathBuf,
    pub elapsed_secs: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} profiles ({} drafted, {} drafted never played, {} undrafted)",
            self.profiles, self.drafted, self.drafted_never_played, self.undrafted
        )?;
        if self.name_collisions > 0 {
            writeln!(f, "{} rows dropped on duplicate names", self.name_collisions)?;
        }
        writeln!(f, "{} -> {:?}", self.profiles, self.profiles_path)?;
        write!(
            f,
            "{} -> {:?} in {:.1}s",
            self.league_seasons, self.seasons_path, self.elapsed_secs
        )
    }
}
