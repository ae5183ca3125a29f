use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::parser::record::RawDimRow;
use crate::parser::text::non_empty;
use crate::parser::{DraftRecord, PlayerDimension, PlayerStatRecord};

/// Stat rows whose league is exactly the target league
pub fn restrict_to_league(rows: &[PlayerStatRecord], league: &str) -> Vec<PlayerStatRecord> {
    rows.iter().filter(|r| r.league == league).cloned().collect()
}

/// Keep roster rows for players who appear in the target-league stats and
/// give each the name of that player's first target-league stat row
pub(crate) fn restrict_to_roster(
    dims: Vec<RawDimRow>,
    league_seasons: &[PlayerStatRecord],
) -> Vec<PlayerDimension> {
    let mut names: HashMap<u64, &str> = HashMap::new();
    for row in league_seasons {
        names.entry(row.player_id).or_insert(row.player_name.as_str());
    }

    dims.into_iter()
        .filter_map(|dim| {
            let full_name = names.get(&dim.player_id)?;
            Some(PlayerDimension {
                player_id: dim.player_id,
                full_name: full_name.to_string(),
                height: dim.height,
                weight: dim.weight,
                shoots: non_empty(dim.shoots),
                nationality: non_empty(dim.nationality),
                age: dim.age,
                position: non_empty(dim.position),
            })
        })
        .collect()
}

/// Draft picks made within the year window
pub fn restrict_draft_years(drafts: Vec<DraftRecord>, years: &RangeInclusive<i32>) -> Vec<DraftRecord> {
    drafts.into_iter().filter(|d| years.contains(&d.year)).collect()
}
