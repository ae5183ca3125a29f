use std::ops::RangeInclusive;

/// League the season table is restricted to
pub const TARGET_LEAGUE: &str = "NHL";

/// First draft year considered (first post-expansion draft)
pub const DRAFT_YEAR_MIN: i32 = 1967;

/// Last draft year considered; later draftees have too short a career to compare
pub const DRAFT_YEAR_MAX: i32 = 2018;

/// Picks per round under the uniform league-size convention
pub const TEAMS_PER_ROUND: u32 = 32;

/// Start year of the first season played under the salary cap
pub const SALARY_CAP_START: i32 = 2005;

/// Fixed constants the pipeline runs with. Built once at start-up and
/// passed by reference to every stage.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub target_league: String,
    pub draft_years: RangeInclusive<i32>,
    pub teams_per_round: u32,
    pub salary_cap_start: i32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_league: TARGET_LEAGUE.to_string(),
            draft_years: DRAFT_YEAR_MIN..=DRAFT_YEAR_MAX,
            teams_per_round: TEAMS_PER_ROUND,
            salary_cap_start: SALARY_CAP_START,
        }
    }
}
