//! Entity resolution: full outer join of draft picks and roster rows on the
//! player's name, the only attribute the two sources share.
//!
//! Two different players with the same name are not told apart. When a name
//! occurs more than once on one side, the first occurrence stands for the name
//! and the rest are counted as collisions.

use std::collections::{HashMap, HashSet};

use crate::parser::text::name_key;
use crate::parser::{DraftRecord, PlayerDimension};

/// Which sources contributed to a profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    /// Drafted and appears in the target-league stats
    Both {
        draft: DraftRecord,
        dimension: PlayerDimension,
    },
    /// Drafted, never played in the target league
    DraftOnly(DraftRecord),
    /// Played in the target league with no draft entry on record
    DimensionOnly(PlayerDimension),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Drafted,
    DraftedNeverPlayed,
    Undrafted,
}

impl Membership {
    pub fn label(self) -> &'static str {
        match self {
            Membership::Drafted => "drafted",
            Membership::DraftedNeverPlayed => "drafted_never_played",
            Membership::Undrafted => "undrafted",
        }
    }
}

impl ProfileSource {
    pub fn draft(&self) -> Option<&DraftRecord> {
        match self {
            ProfileSource::Both { draft, .. } | ProfileSource::DraftOnly(draft) => Some(draft),
            ProfileSource::DimensionOnly(_) => None,
        }
    }

    pub fn dimension(&self) -> Option<&PlayerDimension> {
        match self {
            ProfileSource::Both { dimension, .. } | ProfileSource::DimensionOnly(dimension) => {
                Some(dimension)
            }
            ProfileSource::DraftOnly(_) => None,
        }
    }

    pub fn player_id(&self) -> Option<u64> {
        self.dimension().map(|d| d.player_id)
    }

    pub fn membership(&self) -> Membership {
        match self {
            ProfileSource::Both { .. } => Membership::Drafted,
            ProfileSource::DraftOnly(_) => Membership::DraftedNeverPlayed,
            ProfileSource::DimensionOnly(_) => Membership::Undrafted,
        }
    }
}

/// A player after the name join
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedPlayerProfile {
    pub name: String,
    pub source: ProfileSource,
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub profiles: Vec<JoinedPlayerProfile>,
    /// Rows dropped because their name was already taken on the same side
    pub collisions: usize,
}

impl Resolution {
    pub fn count(&self, membership: Membership) -> usize {
        self.profiles
            .iter()
            .filter(|p| p.source.membership() == membership)
            .count()
    }
}

/// Outer-join draft picks and roster rows by normalized name. Profiles come
/// out with draft-sourced names first (in draft order), then roster-only
/// names; callers should not depend on that order.
pub fn resolve_profiles(drafts: Vec<DraftRecord>, dimensions: Vec<PlayerDimension>) -> Resolution {
    let mut collisions = 0;

    let mut roster: HashMap<String, PlayerDimension> = HashMap::new();
    let mut roster_order: Vec<String> = Vec::new();
    for dim in dimensions {
        let key = name_key(&dim.full_name);
        if roster.contains_key(&key) {
            collisions += 1;
            continue;
        }
        roster_order.push(key.clone());
        roster.insert(key, dim);
    }

    let mut profiles = Vec::with_capacity(drafts.len() + roster_order.len());
    let mut seen_drafts: HashSet<String> = HashSet::new();
    for draft in drafts {
        let key = name_key(&draft.player);
        if !seen_drafts.insert(key.clone()) {
            collisions += 1;
            continue;
        }
        let name = draft.player.clone();
        let source = match roster.remove(&key) {
            Some(dimension) => ProfileSource::Both { draft, dimension },
            None => ProfileSource::DraftOnly(draft),
        };
        profiles.push(JoinedPlayerProfile { name, source });
    }

    for key in roster_order {
        if let Some(dimension) = roster.remove(&key) {
            profiles.push(JoinedPlayerProfile {
                name: dimension.full_name.clone(),
                source: ProfileSource::DimensionOnly(dimension),
            });
        }
    }

    Resolution { profiles, collisions }
}
