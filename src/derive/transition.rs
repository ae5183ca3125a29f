use rayon::prelude::*;
use std::collections::HashMap;

use super::rates::CountingStats;
use super::season::SeasonIndex;
use crate::parser::PlayerStatRecord;

/// Scoring before a player's first target-league season
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuniorTransition {
    /// Points per game in the last season before the first target-league season
    pub last_junior_ppg: f64,
    /// Mean points per game over every season before it
    pub average_junior_ppg: f64,
}

impl JuniorTransition {
    /// No junior seasons on record
    pub const NONE: JuniorTransition = JuniorTransition {
        last_junior_ppg: 0.0,
        average_junior_ppg: 0.0,
    };
}

/// Scan one chronologically ordered career. Junior seasons are those whose
/// year is strictly before the first target-league season; undefined rates
/// are left out of the mean.
pub fn junior_transition<'a, I>(career: I, target_league: &str) -> JuniorTransition
where
    I: IntoIterator<Item = &'a PlayerStatRecord>,
    I::IntoIter: Clone,
{
    let career = career.into_iter();
    let Some(first_year) = career
        .clone()
        .find(|row| row.league == target_league)
        .map(|row| row.year)
    else {
        return JuniorTransition::NONE;
    };

    let juniors: Vec<f64> = career
        .take_while(|row| row.year < first_year)
        .map(|row| row.rates().points)
        .collect();
    let Some(&last) = juniors.last() else {
        return JuniorTransition::NONE;
    };

    let defined: Vec<f64> = juniors.iter().copied().filter(|v| !v.is_nan()).collect();
    let average = if defined.is_empty() {
        f64::NAN
    } else {
        defined.iter().sum::<f64>() / defined.len() as f64
    };

    JuniorTransition {
        last_junior_ppg: last,
        average_junior_ppg: average,
    }
}

/// Junior transitions for the given players, computed in parallel. Every
/// requested id gets an entry.
pub fn junior_transitions(
    index: &SeasonIndex<'_>,
    player_ids: &[u64],
    target_league: &str,
) -> HashMap<u64, JuniorTransition> {
    player_ids
        .par_iter()
        .map(|&id| (id, junior_transition(index.career(id), target_league)))
        .collect()
}
