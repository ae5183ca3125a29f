use serde::Deserialize;
use std::fmt;

// =============================================================================
// Raw CSV rows (header names upper-cased before deserializing)
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) struct RawStatRow {
    pub player_id: u64,
    pub player_name: String,
    pub team: Option<String>,
    pub league: String,
    pub season: String,
    pub games_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub points: Option<f64>,
    pub pim: Option<f64>,
    pub plus_minus: Option<f64>,
    pub position: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) struct RawDimRow {
    pub player_id: u64,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub shoots: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<f64>,
    pub position: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) struct RawDraftRow {
    pub year: i32,
    pub round: Option<u32>,
    pub overall_pick: u32,
    pub team: Option<String>,
    pub player: String,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub age: Option<f64>,
    pub amateur_team: Option<String>,
    pub games_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub points: Option<f64>,
    pub plus_minus: Option<f64>,
    pub penalties_minutes: Option<f64>,
    pub point_shares: Option<f64>,
}

// =============================================================================
// Cleaned records
// =============================================================================

/// One player's season in one league
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatRecord {
    pub player_id: u64,
    pub player_name: String,
    pub team: Option<String>,
    pub league: String,
    /// Season as written in the source, e.g. `2018-2019`
    pub season: String,
    /// Start year of the season
    pub year: i32,
    pub games_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub points: Option<f64>,
    pub penalty_minutes: Option<f64>,
    pub plus_minus: Option<f64>,
    pub position: Option<String>,
}

/// Biographical attributes of a player who appears in the target league
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDimension {
    pub player_id: u64,
    /// Resolved from the player's first target-league stat row
    pub full_name: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub shoots: Option<String>,
    pub nationality: Option<String>,
    /// Age when the roster source was compiled
    pub age: Option<f64>,
    pub position: Option<String>,
}

/// One draft pick with the drafted player's career totals
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecord {
    pub player: String,
    pub year: i32,
    /// Round as recorded in the draft's own era, if the source has it
    pub round: Option<u32>,
    pub overall_pick: u32,
    pub team: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub age: Option<f64>,
    pub amateur_team: Option<String>,
    pub games_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub points: Option<f64>,
    pub plus_minus: Option<f64>,
    pub penalty_minutes: Option<f64>,
    pub point_shares: Option<f64>,
}

// =============================================================================
// Output cells
// =============================================================================

/// A single cell of an exported table
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    /// Source ids are unsigned and written as-is
    Unsigned(u64),
    Real(f64),
    Text(String),
}

impl Value {
    /// NaN is stored as an empty cell
    pub fn real(v: f64) -> Self {
        if v.is_nan() {
            Value::Null
        } else {
            Value::Real(v)
        }
    }

    pub fn opt_real(v: Option<f64>) -> Self {
        v.map(Value::real).unwrap_or(Value::Null)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn opt_text(s: Option<&str>) -> Self {
        s.map(Value::text).unwrap_or(Value::Null)
    }

    pub fn opt_int(v: Option<i64>) -> Self {
        v.map(Value::Integer).unwrap_or(Value::Null)
    }

    pub fn opt_unsigned(v: Option<u64>) -> Self {
        v.map(Value::Unsigned).unwrap_or(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    /// Floats use the shortest representation that parses back to the same bits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Unsigned(u) => write!(f, "{}", u),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => f.write_str(s),
        }
    }
}
