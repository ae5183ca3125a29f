//! Table schema definitions for the three raw sources and the two exported tables

use super::types::*;

// =============================================================================
// Source Tables
// =============================================================================

/// Per-season statistics, every league a player appeared in
pub static PLAYER_STATS: TableSchema = TableSchema {
    name: "player_stats",
    file_name: "player_stats.csv",
    columns: &[
        Column::required("PLAYER_ID", ColumnType::Integer),
        Column::required("PLAYER_NAME", ColumnType::Text),
        Column::new("TEAM", ColumnType::Text),
        Column::required("LEAGUE", ColumnType::Text),
        Column::required("SEASON", ColumnType::Text),
        Column::required("GAMES_PLAYED", ColumnType::Integer),
        Column::required("GOALS", ColumnType::Integer),
        Column::required("ASSISTS", ColumnType::Integer),
        Column::required("POINTS", ColumnType::Integer),
        Column::required("PIM", ColumnType::Integer),
        Column::required("PLUS_MINUS", ColumnType::Integer),
        Column::new("POSITION", ColumnType::Text),
    ],
};

/// Biographical attributes keyed by player id
pub static PLAYER_DIM: TableSchema = TableSchema {
    name: "player_dim",
    file_name: "player_dim.csv",
    columns: &[
        Column::required("PLAYER_ID", ColumnType::Integer),
        Column::required("HEIGHT", ColumnType::Real),
        Column::required("WEIGHT", ColumnType::Real),
        Column::required("SHOOTS", ColumnType::Text),
        Column::required("NATIONALITY", ColumnType::Text),
        Column::new("POSITION", ColumnType::Text),
    ],
};

/// Historical draft picks with career totals, keyed by name only
pub static NHL_DRAFT: TableSchema = TableSchema {
    name: "nhl_draft",
    file_name: "nhldraft.csv",
    columns: &[
        Column::required("YEAR", ColumnType::Integer),
        Column::new("ROUND", ColumnType::Integer),
        Column::required("OVERALL_PICK", ColumnType::Integer),
        Column::required("TEAM", ColumnType::Text),
        Column::required("PLAYER", ColumnType::Text),
        Column::required("NATIONALITY", ColumnType::Text),
        Column::required("POSITION", ColumnType::Text),
        Column::required("AGE", ColumnType::Real),
        Column::required("AMATEUR_TEAM", ColumnType::Text),
        Column::required("GAMES_PLAYED", ColumnType::Integer),
        Column::required("GOALS", ColumnType::Integer),
        Column::required("ASSISTS", ColumnType::Integer),
        Column::required("POINTS", ColumnType::Integer),
        Column::required("PLUS_MINUS", ColumnType::Integer),
        Column::required("PENALTIES_MINUTES", ColumnType::Integer),
        Column::required("POINT_SHARES", ColumnType::Real),
    ],
};

// =============================================================================
// Exported Tables
// =============================================================================

/// One row per resolved player profile (draft half, roster half, or both)
pub static PROFILE_OUTPUT: TableSchema = TableSchema {
    name: "profiles",
    file_name: "nhl_draft.csv",
    columns: &[
        Column::required("player_name", ColumnType::Text),
        Column::new("player_id", ColumnType::Integer),
        // draft half
        Column::new("draft_year", ColumnType::Integer),
        Column::new("overall_pick", ColumnType::Integer),
        Column::new("raw_round", ColumnType::Integer),
        Column::new("draft_round", ColumnType::Integer),
        Column::new("draft_team", ColumnType::Text),
        Column::new("nationality_code", ColumnType::Text),
        Column::new("age", ColumnType::Real),
        Column::new("amateur_team", ColumnType::Text),
        Column::new("games_played", ColumnType::Integer),
        Column::new("goals", ColumnType::Integer),
        Column::new("assists", ColumnType::Integer),
        Column::new("points", ColumnType::Integer),
        Column::new("plus_minus", ColumnType::Integer),
        Column::new("penalties_minutes", ColumnType::Integer),
        Column::new("point_shares", ColumnType::Real),
        // roster half
        Column::new("height", ColumnType::Real),
        Column::new("weight", ColumnType::Real),
        Column::new("shoots", ColumnType::Text),
        Column::new("nationality", ColumnType::Text),
        Column::new("current_age", ColumnType::Real),
        // derived
        Column::new("position", ColumnType::Text),
        Column::new("gpg", ColumnType::Real),
        Column::new("apg", ColumnType::Real),
        Column::new("pimpg", ColumnType::Real),
        Column::new("ppg", ColumnType::Real),
        Column::new("gpg_cat", ColumnType::Category),
        Column::new("apg_cat", ColumnType::Category),
        Column::new("pimpg_cat", ColumnType::Category),
        Column::new("ppg_cat", ColumnType::Category),
        Column::new("plus_minus_cat", ColumnType::Category),
        Column::new("point_shares_cat", ColumnType::Category),
        Column::new("height_cat", ColumnType::Category),
        Column::new("weight_cat", ColumnType::Category),
        Column::required("nationality_cat", ColumnType::Category),
        Column::new("amateur_league", ColumnType::Text),
        Column::required("amateur_league_cat", ColumnType::Category),
        Column::new("last_junior_year_ppg", ColumnType::Real),
        Column::new("average_junior_ppg", ColumnType::Real),
        Column::new("last_junior_year_ppg_cat", ColumnType::Category),
        Column::new("average_junior_ppg_cat", ColumnType::Category),
    ],
};

/// One row per target-league season, with draft linkage by player id
pub static SEASON_OUTPUT: TableSchema = TableSchema {
    name: "seasons",
    file_name: "nhl_player_stats.csv",
    columns: &[
        Column::required("player_id", ColumnType::Integer),
        Column::required("player_name", ColumnType::Text),
        Column::new("team", ColumnType::Text),
        Column::required("season", ColumnType::Text),
        Column::required("season_year", ColumnType::Integer),
        Column::new("position", ColumnType::Text),
        Column::new("games_played", ColumnType::Integer),
        Column::new("goals", ColumnType::Integer),
        Column::new("assists", ColumnType::Integer),
        Column::new("points", ColumnType::Integer),
        Column::new("pim", ColumnType::Integer),
        Column::new("plus_minus", ColumnType::Integer),
        Column::new("gpg", ColumnType::Real),
        Column::new("apg", ColumnType::Real),
        Column::new("pimpg", ColumnType::Real),
        Column::new("ppg", ColumnType::Real),
        Column::new("gpg_cat", ColumnType::Category),
        Column::new("apg_cat", ColumnType::Category),
        Column::new("pimpg_cat", ColumnType::Category),
        Column::new("ppg_cat", ColumnType::Category),
        Column::new("plus_minus_cat", ColumnType::Category),
        Column::new("games_played_cat", ColumnType::Category),
        Column::required("season_cat", ColumnType::Category),
        Column::required("salary_cap_era", ColumnType::Category),
        Column::required("player_season_number", ColumnType::Integer),
        Column::new("draft_year", ColumnType::Integer),
        Column::new("overall_pick", ColumnType::Integer),
        Column::new("draft_team", ColumnType::Text),
        Column::new("amateur_team", ColumnType::Text),
    ],
};

pub static SOURCE_TABLES: &[&TableSchema] = &[&PLAYER_STATS, &PLAYER_DIM, &NHL_DRAFT];

pub static OUTPUT_TABLES: &[&TableSchema] = &[&PROFILE_OUTPUT, &SEASON_OUTPUT];

/// Look up an exported table by name
pub fn get_output_table(name: &str) -> Option<&'static TableSchema> {
    OUTPUT_TABLES.iter().copied().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_output_columns_unique() {
        for table in OUTPUT_TABLES {
            let names: HashSet<_> = table.columns.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), table.columns.len(), "duplicate column in {}", table.name);
        }
    }

    #[test]
    fn test_get_output_table() {
        assert_eq!(get_output_table("profiles").unwrap().file_name, "nhl_draft.csv");
        assert!(get_output_table("matches").is_none());
    }

    #[test]
    fn test_source_file_names_distinct() {
        let names: HashSet<_> = SOURCE_TABLES.iter().map(|t| t.file_name).collect();
        assert_eq!(names.len(), 3);
    }
}
