use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::record::{DraftRecord, PlayerDimension, PlayerStatRecord, RawDimRow, RawDraftRow, RawStatRow};
use super::text::{collapse_whitespace, decode_source, non_empty, strip_position_suffix};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::filter::{restrict_to_league, restrict_to_roster};
use crate::schema::{TableSchema, NHL_DRAFT, PLAYER_DIM, PLAYER_STATS, SOURCE_TABLES};
use crate::ui::{Phase, Ui};

/// Locations of the three raw source files
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub stats: PathBuf,
    pub dimension: PathBuf,
    pub draft: PathBuf,
}

/// Cleaned source tables
#[derive(Debug, Clone)]
pub struct Sources {
    /// Every stat row, all leagues. Junior seasons come from here.
    pub all_seasons: Vec<PlayerStatRecord>,
    /// Stat rows restricted to the target league
    pub league_seasons: Vec<PlayerStatRecord>,
    /// Roster rows for players with at least one target-league season
    pub dimensions: Vec<PlayerDimension>,
    pub drafts: Vec<DraftRecord>,
}

/// Load and normalize all three sources
pub fn load_sources(
    paths: &SourcePaths,
    config: &PipelineConfig,
    ui: &mut impl Ui,
) -> Result<Sources> {
    ui.set_phase(Phase::Loading);
    let total = SOURCE_TABLES.len() as u64;

    ui.set_progress(0, total, PLAYER_STATS.name);
    let all_seasons = load_stats(&paths.stats)?;
    let league_seasons = restrict_to_league(&all_seasons, &config.target_league);
    ui.log(format!(
        "{}: {} rows, {} in {}",
        PLAYER_STATS.name,
        all_seasons.len(),
        league_seasons.len(),
        config.target_league
    ));

    ui.set_progress(1, total, PLAYER_DIM.name);
    let raw_dims: Vec<RawDimRow> = read_rows(&paths.dimension, &PLAYER_DIM)?;
    let raw_dim_count = raw_dims.len();
    let dimensions = restrict_to_roster(raw_dims, &league_seasons);
    ui.log(format!(
        "{}: {} rows, {} with {} seasons",
        PLAYER_DIM.name,
        raw_dim_count,
        dimensions.len(),
        config.target_league
    ));

    ui.set_progress(2, total, NHL_DRAFT.name);
    let drafts = load_drafts(&paths.draft)?;
    ui.log(format!("{}: {} rows", NHL_DRAFT.name, drafts.len()));

    ui.set_progress(total, total, "sources loaded");
    ui.clear_progress();

    Ok(Sources {
        all_seasons,
        league_seasons,
        dimensions,
        drafts,
    })
}

/// Load the stats table with position annotations removed from names
pub fn load_stats(path: &Path) -> Result<Vec<PlayerStatRecord>> {
    let raw: Vec<RawStatRow> = read_rows(path, &PLAYER_STATS)?;

    raw.into_iter()
        .enumerate()
        .map(|(idx, row)| -> Result<PlayerStatRecord> {
            let year = parse_season_year(&row.season).ok_or_else(|| PipelineError::MalformedField {
                file: PLAYER_STATS.file_name.to_string(),
                column: "SEASON",
                value: row.season.clone(),
                record: idx as u64 + 1,
            })?;

            Ok(PlayerStatRecord {
                player_id: row.player_id,
                player_name: strip_position_suffix(&row.player_name),
                team: non_empty(row.team),
                league: collapse_whitespace(&row.league),
                season: row.season,
                year,
                games_played: row.games_played,
                goals: row.goals,
                assists: row.assists,
                points: row.points,
                penalty_minutes: row.pim,
                plus_minus: row.plus_minus,
                position: non_empty(row.position),
            })
        })
        .collect()
}

pub fn load_drafts(path: &Path) -> Result<Vec<DraftRecord>> {
    let raw: Vec<RawDraftRow> = read_rows(path, &NHL_DRAFT)?;

    Ok(raw
        .into_iter()
        .map(|row| DraftRecord {
            player: collapse_whitespace(&row.player),
            year: row.year,
            round: row.round,
            overall_pick: row.overall_pick,
            team: non_empty(row.team),
            nationality: non_empty(row.nationality),
            position: non_empty(row.position),
            age: row.age,
            amateur_team: non_empty(row.amateur_team),
            games_played: row.games_played,
            goals: row.goals,
            assists: row.assists,
            points: row.points,
            plus_minus: row.plus_minus,
            penalty_minutes: row.penalties_minutes,
            point_shares: row.point_shares,
        })
        .collect())
}

/// Read a CSV source into typed rows. Headers are matched case-insensitively;
/// columns the row type does not name are ignored.
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path, schema: &TableSchema) -> Result<Vec<T>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to open: {:?}", path))?;
    let text = decode_source(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: csv::StringRecord = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {:?}", path))?
        .iter()
        .map(|h| h.trim().to_ascii_uppercase())
        .collect();
    schema.check_headers(&headers.iter().collect::<Vec<_>>())?;
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        let row = result.with_context(|| format!("Failed to parse record in {}", schema.file_name))?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(PipelineError::EmptyTable {
            file: schema.file_name.to_string(),
        }
        .into());
    }

    Ok(rows)
}

/// Start year of a season written as `2018-2019`, `2018-19` or `2018`
pub fn parse_season_year(season: &str) -> Option<i32> {
    let digits: String = season
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.len() != 4 {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_parse_season_year() {
        assert_eq!(parse_season_year("2018-2019"), Some(2018));
        assert_eq!(parse_season_year("1999-00"), Some(1999));
        assert_eq!(parse_season_year("2004"), Some(2004));
        assert_eq!(parse_season_year("18-19"), None);
        assert_eq!(parse_season_year(""), None);
    }

    #[test]
    fn test_load_stats_strips_position_and_ignores_extra_columns() {
        let file = write_temp(
            b"ROW_ID,PLAYER_ID,PLAYER_NAME,TEAM,LEAGUE,SEASON,GAMES_PLAYED,GOALS,ASSISTS,POINTS,PIM,PLUS_MINUS,POSITION,PLAYER_URL\n\
              1,7,Bobby Orr (D),Boston Bruins,NHL,1970-1971,78,37,102,139,91,124,D,https://example.org/7\n",
        );
        let rows = load_stats(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player_name, "Bobby Orr");
        assert_eq!(rows[0].year, 1970);
        assert_eq!(rows[0].penalty_minutes, Some(91.0));
    }

    #[test]
    fn test_lowercase_headers_and_empty_cells() {
        let file = write_temp(
            b"id,year,overall_pick,team,player,nationality,position,age,amateur_team,games_played,goals,assists,points,plus_minus,penalties_minutes,point_shares\n\
              1,2015,1,Edmonton Oilers,Connor McDavid,CA,C,18,Erie Otters (OHL),,,,,,,\n",
        );
        let drafts = load_drafts(file.path()).unwrap();
        assert_eq!(drafts[0].year, 2015);
        assert_eq!(drafts[0].round, None);
        assert_eq!(drafts[0].games_played, None);
        assert_eq!(drafts[0].amateur_team.as_deref(), Some("Erie Otters (OHL)"));
    }

    #[test]
    fn test_malformed_number_aborts() {
        let file = write_temp(
            b"PLAYER_ID,PLAYER_NAME,LEAGUE,SEASON,GAMES_PLAYED,GOALS,ASSISTS,POINTS,PIM,PLUS_MINUS\n\
              7,Bobby Orr,NHL,1970-1971,lots,37,102,139,91,124\n",
        );
        assert!(load_stats(file.path()).is_err());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let file = write_temp(b"PLAYER_ID,PLAYER_NAME\n7,Bobby Orr\n");
        let err = load_stats(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingColumn { column: "LEAGUE", .. })
        ));
    }

    #[test]
    fn test_empty_table_is_fatal() {
        let file = write_temp(b"PLAYER_ID,HEIGHT,WEIGHT,SHOOTS,NATIONALITY\n");
        let err = read_rows::<RawDimRow>(file.path(), &PLAYER_DIM).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptyTable { .. })
        ));
    }
}
