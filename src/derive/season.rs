use std::collections::HashMap;
use std::fmt;

use crate::parser::PlayerStatRecord;

/// Row positions grouped by player, each group in chronological order.
/// Built once and shared by the season sequencer and the transition scan.
pub struct SeasonIndex<'a> {
    rows: &'a [PlayerStatRecord],
    by_player: HashMap<u64, Vec<usize>>,
}

impl<'a> SeasonIndex<'a> {
    pub fn build(rows: &'a [PlayerStatRecord]) -> Self {
        let mut by_player: HashMap<u64, Vec<usize>> = HashMap::new();
        for (idx, row) in rows.iter().enumerate() {
            by_player.entry(row.player_id).or_default().push(idx);
        }
        // Stable: seasons with the same year keep their input order
        for positions in by_player.values_mut() {
            positions.sort_by_key(|&idx| rows[idx].year);
        }
        Self { rows, by_player }
    }

    /// A player's seasons, earliest first. Empty for unknown ids.
    pub fn career(&self, player_id: u64) -> impl Iterator<Item = &'a PlayerStatRecord> + Clone + '_ {
        let rows = self.rows;
        self.by_player
            .get(&player_id)
            .into_iter()
            .flatten()
            .map(move |&idx| &rows[idx])
    }

    pub fn player_count(&self) -> usize {
        self.by_player.len()
    }

    /// 1-based position of every row within its player's career, aligned with
    /// the indexed rows
    pub fn season_numbers(&self) -> Vec<u32> {
        let mut numbers = vec![0; self.rows.len()];
        for positions in self.by_player.values() {
            for (n, &idx) in positions.iter().enumerate() {
                numbers[idx] = n as u32 + 1;
            }
        }
        numbers
    }
}

/// Decade cohort of a season, e.g. `1990s`
pub fn season_cohort(year: i32) -> String {
    format!("{}s", year - year.rem_euclid(10))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryCapEra {
    PreCap,
    Cap,
}

impl SalaryCapEra {
    pub fn of(year: i32, cap_start: i32) -> Self {
        if year < cap_start {
            SalaryCapEra::PreCap
        } else {
            SalaryCapEra::Cap
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryCapEra::PreCap => "pre-cap",
            SalaryCapEra::Cap => "cap",
        }
    }
}

impl fmt::Display for SalaryCapEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::season;

    #[test]
    fn test_season_numbers_ignore_year_gaps() {
        let rows = vec![
            season(1, "A", "NHL", 2004),
            season(1, "A", "NHL", 2001),
            season(1, "A", "NHL", 2002),
        ];
        let index = SeasonIndex::build(&rows);
        assert_eq!(index.season_numbers(), vec![3, 1, 2]);
    }

    #[test]
    fn test_season_numbers_are_per_player() {
        let rows = vec![
            season(1, "A", "NHL", 2001),
            season(2, "B", "NHL", 1990),
            season(1, "A", "NHL", 2002),
            season(2, "B", "NHL", 1991),
        ];
        let index = SeasonIndex::build(&rows);
        assert_eq!(index.season_numbers(), vec![1, 1, 2, 2]);
        assert_eq!(index.player_count(), 2);
    }

    #[test]
    fn test_same_year_keeps_input_order() {
        let mut traded = season(1, "A", "NHL", 2001);
        traded.team = Some("Second Team".to_string());
        let rows = vec![season(1, "A", "NHL", 2002), season(1, "A", "NHL", 2001), traded];
        let index = SeasonIndex::build(&rows);
        assert_eq!(index.season_numbers(), vec![3, 1, 2]);

        let teams: Vec<_> = index.career(1).map(|r| r.team.clone()).collect();
        assert_eq!(teams, vec![None, Some("Second Team".to_string()), None]);
    }

    #[test]
    fn test_career_of_unknown_player_is_empty() {
        let rows = vec![season(1, "A", "NHL", 2001)];
        let index = SeasonIndex::build(&rows);
        assert_eq!(index.career(99).count(), 0);
    }

    #[test]
    fn test_cohort_and_era() {
        assert_eq!(season_cohort(1999), "1990s");
        assert_eq!(season_cohort(2000), "2000s");
        assert_eq!(SalaryCapEra::of(2004, 2005), SalaryCapEra::PreCap);
        assert_eq!(SalaryCapEra::of(2005, 2005).label(), "cap");
    }
}
