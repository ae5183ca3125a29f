use super::binning::{fixed_cut, Category};
use crate::parser::{DraftRecord, PlayerStatRecord};

/// Per-game rates. Any rate is NaN when games played is zero or unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub goals: f64,
    pub assists: f64,
    pub penalty_minutes: f64,
    pub points: f64,
}

/// Fixed-interval category of each rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCategories {
    pub goals: Option<Category>,
    pub assists: Option<Category>,
    pub penalty_minutes: Option<Category>,
    pub points: Option<Category>,
}

impl Rates {
    pub fn categories(&self) -> RateCategories {
        RateCategories {
            goals: fixed_cut(self.goals),
            assists: fixed_cut(self.assists),
            penalty_minutes: fixed_cut(self.penalty_minutes),
            points: fixed_cut(self.points),
        }
    }
}

/// `count / games`; NaN when either side is missing or games is zero
pub fn per_game(count: Option<f64>, games: Option<f64>) -> f64 {
    match (count, games) {
        (Some(count), Some(games)) if games != 0.0 => count / games,
        _ => f64::NAN,
    }
}

/// Records that carry counting stats over some number of games
pub trait CountingStats {
    fn games_played(&self) -> Option<f64>;
    fn goals(&self) -> Option<f64>;
    fn assists(&self) -> Option<f64>;
    fn penalty_minutes(&self) -> Option<f64>;
    fn points(&self) -> Option<f64>;

    fn rates(&self) -> Rates {
        let games = self.games_played();
        Rates {
            goals: per_game(self.goals(), games),
            assists: per_game(self.assists(), games),
            penalty_minutes: per_game(self.penalty_minutes(), games),
            points: per_game(self.points(), games),
        }
    }
}

impl CountingStats for PlayerStatRecord {
    fn games_played(&self) -> Option<f64> {
        self.games_played
    }
    fn goals(&self) -> Option<f64> {
        self.goals
    }
    fn assists(&self) -> Option<f64> {
        self.assists
    }
    fn penalty_minutes(&self) -> Option<f64> {
        self.penalty_minutes
    }
    fn points(&self) -> Option<f64> {
        self.points
    }
}

// Career totals in the league the player was drafted into
impl CountingStats for DraftRecord {
    fn games_played(&self) -> Option<f64> {
        self.games_played
    }
    fn goals(&self) -> Option<f64> {
        self.goals
    }
    fn assists(&self) -> Option<f64> {
        self.assists
    }
    fn penalty_minutes(&self) -> Option<f64> {
        self.penalty_minutes
    }
    fn points(&self) -> Option<f64> {
        self.points
    }
}
