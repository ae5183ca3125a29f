use std::collections::HashMap;

use super::category_value;
use super::season::DraftLinkage;
use crate::config::PipelineConfig;
use crate::derive::{
    classify_amateur_league, classify_nationality, extract_amateur_league, fixed_cut, height_bin,
    normalized_round, quantile_cut_opt, weight_bin, AmateurLeague, Category, CountingStats,
    JuniorTransition, RateCategories, Rates,
};
use crate::parser::text::primary_value;
use crate::parser::Value;
use crate::resolve::JoinedPlayerProfile;

/// A resolved profile with every derived column
#[derive(Debug, Clone)]
pub struct ProfileRow {
    pub profile: JoinedPlayerProfile,
    /// Round under the uniform league-size convention
    pub draft_round: Option<u32>,
    /// Career rates from the draft record's totals
    pub rates: Rates,
    pub rate_categories: RateCategories,
    pub plus_minus_cat: Option<Category>,
    pub point_shares_cat: Option<Category>,
    pub height_cat: Option<&'static str>,
    pub weight_cat: Option<&'static str>,
    pub nationality_cat: &'static str,
    pub amateur_league: Option<String>,
    pub amateur_league_cat: AmateurLeague,
    /// Present for every profile with a player id
    pub transition: Option<JuniorTransition>,
}

/// Derive profile columns. Quantile categories are computed over the profiles
/// passed in, so they are relative to this population.
pub fn build_profiles(
    profiles: Vec<JoinedPlayerProfile>,
    transitions: &HashMap<u64, JuniorTransition>,
    config: &PipelineConfig,
) -> Vec<ProfileRow> {
    let plus_minus: Vec<Option<f64>> = profiles
        .iter()
        .map(|p| p.source.draft().and_then(|d| d.plus_minus))
        .collect();
    let point_shares: Vec<Option<f64>> = profiles
        .iter()
        .map(|p| p.source.draft().and_then(|d| d.point_shares))
        .collect();
    let plus_minus_cats = quantile_cut_opt(&plus_minus);
    let point_shares_cats = quantile_cut_opt(&point_shares);

    profiles
        .into_iter()
        .zip(plus_minus_cats.into_iter().zip(point_shares_cats))
        .map(|(profile, (plus_minus_cat, point_shares_cat))| {
            let draft = profile.source.draft();
            let dimension = profile.source.dimension();

            let rates = draft.map(|d| d.rates()).unwrap_or(Rates {
                goals: f64::NAN,
                assists: f64::NAN,
                penalty_minutes: f64::NAN,
                points: f64::NAN,
            });

            let amateur_league = draft
                .and_then(|d| d.amateur_team.as_deref())
                .and_then(extract_amateur_league)
                .map(str::to_string);

            let nationality_cat = classify_nationality(
                dimension.and_then(|d| d.nationality.as_deref()),
                draft.and_then(|d| d.nationality.as_deref()),
            );

            ProfileRow {
                draft_round: draft.map(|d| normalized_round(d.overall_pick, config.teams_per_round)),
                rate_categories: rates.categories(),
                rates,
                plus_minus_cat,
                point_shares_cat,
                height_cat: height_bin(dimension.and_then(|d| d.height)),
                weight_cat: weight_bin(dimension.and_then(|d| d.weight)),
                nationality_cat,
                amateur_league_cat: classify_amateur_league(amateur_league.as_deref()),
                amateur_league,
                transition: profile
                    .source
                    .player_id()
                    .map(|id| transitions.get(&id).copied().unwrap_or(JuniorTransition::NONE)),
                profile,
            }
        })
        .collect()
}

/// Draft fields to copy onto season rows, keyed by player id
pub fn draft_linkage(rows: &[ProfileRow]) -> HashMap<u64, DraftLinkage> {
    rows.iter()
        .filter_map(|row| {
            let draft = row.profile.source.draft()?;
            let player_id = row.profile.source.player_id()?;
            Some((
                player_id,
                DraftLinkage {
                    draft_year: draft.year,
                    overall_pick: draft.overall_pick,
                    draft_team: draft.team.clone(),
                    amateur_team: draft.amateur_team.clone(),
                },
            ))
        })
        .collect()
}

impl ProfileRow {
    /// Primary position, preferring the draft record
    pub fn position(&self) -> Option<&str> {
        let source = &self.profile.source;
        source
            .draft()
            .and_then(|d| d.position.as_deref())
            .or_else(|| source.dimension().and_then(|d| d.position.as_deref()))
            .map(primary_value)
    }

    /// Cells in `PROFILE_OUTPUT` column order
    pub fn to_values(&self) -> Vec<Value> {
        let draft = self.profile.source.draft();
        let dim = self.profile.source.dimension();
        let transition = self.transition;

        vec![
            Value::text(self.profile.name.as_str()),
            Value::opt_unsigned(self.profile.source.player_id()),
            // draft half
            Value::opt_int(draft.map(|d| d.year as i64)),
            Value::opt_int(draft.map(|d| d.overall_pick as i64)),
            Value::opt_int(draft.and_then(|d| d.round).map(|r| r as i64)),
            Value::opt_int(self.draft_round.map(|r| r as i64)),
            Value::opt_text(draft.and_then(|d| d.team.as_deref())),
            Value::opt_text(draft.and_then(|d| d.nationality.as_deref())),
            Value::opt_real(draft.and_then(|d| d.age)),
            Value::opt_text(draft.and_then(|d| d.amateur_team.as_deref())),
            Value::opt_real(draft.and_then(|d| d.games_played)),
            Value::opt_real(draft.and_then(|d| d.goals)),
            Value::opt_real(draft.and_then(|d| d.assists)),
            Value::opt_real(draft.and_then(|d| d.points)),
            Value::opt_real(draft.and_then(|d| d.plus_minus)),
            Value::opt_real(draft.and_then(|d| d.penalty_minutes)),
            Value::opt_real(draft.and_then(|d| d.point_shares)),
            // roster half
            Value::opt_real(dim.and_then(|d| d.height)),
            Value::opt_real(dim.and_then(|d| d.weight)),
            Value::opt_text(dim.and_then(|d| d.shoots.as_deref())),
            Value::opt_text(dim.and_then(|d| d.nationality.as_deref())),
            Value::opt_real(dim.and_then(|d| d.age)),
            // derived
            Value::opt_text(self.position()),
            Value::real(self.rates.goals),
            Value::real(self.rates.assists),
            Value::real(self.rates.penalty_minutes),
            Value::real(self.rates.points),
            category_value(self.rate_categories.goals),
            category_value(self.rate_categories.assists),
            category_value(self.rate_categories.penalty_minutes),
            category_value(self.rate_categories.points),
            category_value(self.plus_minus_cat),
            category_value(self.point_shares_cat),
            Value::opt_text(self.height_cat),
            Value::opt_text(self.weight_cat),
            Value::text(self.nationality_cat),
            Value::opt_text(self.amateur_league.as_deref()),
            Value::text(self.amateur_league_cat.label()),
            Value::opt_real(transition.map(|t| t.last_junior_ppg)),
            Value::opt_real(transition.map(|t| t.average_junior_ppg)),
            category_value(transition.and_then(|t| fixed_cut(t.last_junior_ppg))),
            category_value(transition.and_then(|t| fixed_cut(t.average_junior_ppg))),
        ]
    }
}
