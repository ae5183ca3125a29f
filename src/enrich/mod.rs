//! Assembly of the two exported row types from resolved profiles and
//! season rows

pub mod profile;
pub mod season;

pub use profile::{build_profiles, draft_linkage, ProfileRow};
pub use season::{enrich_seasons, DraftLinkage, EnrichedSeasonStat};

use crate::derive::Category;
use crate::parser::Value;

pub(crate) fn category_value(c: Option<Category>) -> Value {
    Value::opt_text(c.map(Category::label))
}
