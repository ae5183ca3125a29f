//! Record builders for unit tests

use crate::parser::{DraftRecord, PlayerDimension, PlayerStatRecord};

pub fn season(player_id: u64, name: &str, league: &str, year: i32) -> PlayerStatRecord {
    PlayerStatRecord {
        player_id,
        player_name: name.to_string(),
        team: None,
        league: league.to_string(),
        season: format!("{}-{}", year, year + 1),
        year,
        games_played: Some(10.0),
        goals: Some(2.0),
        assists: Some(3.0),
        points: Some(5.0),
        penalty_minutes: Some(4.0),
        plus_minus: Some(0.0),
        position: None,
    }
}

/// A season with the given points-per-game over ten games
pub fn season_with_ppg(player_id: u64, league: &str, year: i32, ppg: f64) -> PlayerStatRecord {
    PlayerStatRecord {
        points: Some(ppg * 10.0),
        ..season(player_id, "Test Player", league, year)
    }
}

pub fn draft(player: &str, year: i32, overall_pick: u32) -> DraftRecord {
    DraftRecord {
        player: player.to_string(),
        year,
        round: None,
        overall_pick,
        team: Some("Boston Bruins".to_string()),
        nationality: None,
        position: None,
        age: None,
        amateur_team: None,
        games_played: None,
        goals: None,
        assists: None,
        points: None,
        plus_minus: None,
        penalty_minutes: None,
        point_shares: None,
    }
}

pub fn dimension(player_id: u64, full_name: &str) -> PlayerDimension {
    PlayerDimension {
        player_id,
        full_name: full_name.to_string(),
        height: Some(185.0),
        weight: Some(90.0),
        shoots: Some("L".to_string()),
        nationality: None,
        age: None,
        position: None,
    }
}
