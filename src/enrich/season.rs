use std::collections::HashMap;

use super::category_value;
use crate::config::PipelineConfig;
use crate::derive::{
    quantile_cut_opt, season_cohort, Category, CountingStats, RateCategories, Rates, SalaryCapEra,
};
use crate::parser::{PlayerStatRecord, Value};

/// Draft fields copied onto every season of a drafted player
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLinkage {
    pub draft_year: i32,
    pub overall_pick: u32,
    pub draft_team: Option<String>,
    pub amateur_team: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EnrichedSeasonStat {
    pub record: PlayerStatRecord,
    pub rates: Rates,
    pub rate_categories: RateCategories,
    pub plus_minus_cat: Option<Category>,
    pub games_played_cat: Option<Category>,
    pub season_cat: String,
    pub salary_cap_era: SalaryCapEra,
    /// 1-based position in the player's target-league career
    pub season_number: u32,
    pub draft: Option<DraftLinkage>,
}

/// Derive season columns. `season_numbers` is aligned with `seasons`.
pub fn enrich_seasons(
    seasons: Vec<PlayerStatRecord>,
    season_numbers: Vec<u32>,
    linkage: &HashMap<u64, DraftLinkage>,
    config: &PipelineConfig,
) -> Vec<EnrichedSeasonStat> {
    let plus_minus: Vec<Option<f64>> = seasons.iter().map(|s| s.plus_minus).collect();
    let games: Vec<Option<f64>> = seasons.iter().map(|s| s.games_played).collect();
    let plus_minus_cats = quantile_cut_opt(&plus_minus);
    let games_cats = quantile_cut_opt(&games);

    seasons
        .into_iter()
        .zip(season_numbers)
        .zip(plus_minus_cats.into_iter().zip(games_cats))
        .map(|((record, season_number), (plus_minus_cat, games_played_cat))| {
            let rates = record.rates();
            EnrichedSeasonStat {
                rate_categories: rates.categories(),
                rates,
                plus_minus_cat,
                games_played_cat,
                season_cat: season_cohort(record.year),
                salary_cap_era: SalaryCapEra::of(record.year, config.salary_cap_start),
                season_number,
                draft: linkage.get(&record.player_id).cloned(),
                record,
            }
        })
        .collect()
}

impl EnrichedSeasonStat {
    /// Cells in `SEASON_OUTPUT` column order
    pub fn to_values(&self) -> Vec<Value> {
        let r = &self.record;
        let draft = self.draft.as_ref();

        vec![
            Value::Unsigned(r.player_id),
            Value::text(r.player_name.as_str()),
            Value::opt_text(r.team.as_deref()),
            Value::text(r.season.as_str()),
            Value::Integer(r.year as i64),
            Value::opt_text(r.position.as_deref()),
            Value::opt_real(r.games_played),
            Value::opt_real(r.goals),
            Value::opt_real(r.assists),
            Value::opt_real(r.points),
            Value::opt_real(r.penalty_minutes),
            Value::opt_real(r.plus_minus),
            Value::real(self.rates.goals),
            Value::real(self.rates.assists),
            Value::real(self.rates.penalty_minutes),
            Value::real(self.rates.points),
            category_value(self.rate_categories.goals),
            category_value(self.rate_categories.assists),
            category_value(self.rate_categories.penalty_minutes),
            category_value(self.rate_categories.points),
            category_value(self.plus_minus_cat),
            category_value(self.games_played_cat),
            Value::text(self.season_cat.as_str()),
            Value::text(self.salary_cap_era.label()),
            Value::Integer(self.season_number as i64),
            Value::opt_int(draft.map(|d| d.draft_year as i64)),
            Value::opt_int(draft.map(|d| d.overall_pick as i64)),
            Value::opt_text(draft.and_then(|d| d.draft_team.as_deref())),
            Value::opt_text(draft.and_then(|d| d.amateur_team.as_deref())),
        ]
    }
}
