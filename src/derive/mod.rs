//! Derived columns: rates, categories, season sequencing, draft rounds,
//! classifiers and the junior-to-NHL transition

pub mod binning;
pub mod classify;
pub mod draft_round;
pub mod rates;
pub mod season;
pub mod transition;

pub use binning::{fixed_cut, height_bin, quantile_cut, quantile_cut_opt, weight_bin, Category};
pub use classify::{classify_amateur_league, classify_nationality, extract_amateur_league, AmateurLeague};
pub use draft_round::normalized_round;
pub use rates::{per_game, CountingStats, RateCategories, Rates};
pub use season::{season_cohort, SalaryCapEra, SeasonIndex};
pub use transition::{junior_transition, junior_transitions, JuniorTransition};
