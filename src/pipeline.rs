//! Stage orchestration: load, resolve, derive, export.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::config::PipelineConfig;
use crate::derive::{junior_transitions, SeasonIndex};
use crate::enrich::{build_profiles, draft_linkage, enrich_seasons, EnrichedSeasonStat, ProfileRow};
use crate::filter::restrict_draft_years;
use crate::parser::{load_sources, SourcePaths, Sources};
use crate::resolve::{resolve_profiles, Membership};
use crate::schema::{PROFILE_OUTPUT, SEASON_OUTPUT};
use crate::ui::{Phase, Ui};
use crate::writer::{CsvExporter, RunSummary};

/// Both output tables, before export
#[derive(Debug)]
pub struct PipelineOutput {
    pub profiles: Vec<ProfileRow>,
    pub seasons: Vec<EnrichedSeasonStat>,
    pub summary: RunSummary,
}

/// Run every stage after loading. Counts in the returned summary cover the
/// tables; paths and timing are filled in by [`run_pipeline`].
pub fn build_tables(sources: Sources, config: &PipelineConfig, ui: &mut impl Ui) -> PipelineOutput {
    let Sources {
        all_seasons,
        league_seasons,
        dimensions,
        drafts,
    } = sources;

    ui.set_phase(Phase::Resolving);
    let drafts = restrict_draft_years(drafts, &config.draft_years);
    let mut summary = RunSummary {
        stat_rows: all_seasons.len(),
        league_seasons: league_seasons.len(),
        roster_players: dimensions.len(),
        draft_picks_in_window: drafts.len(),
        ..Default::default()
    };
    ui.set_info(format!(
        "{} draft picks {}-{}, {} roster players",
        drafts.len(),
        config.draft_years.start(),
        config.draft_years.end(),
        dimensions.len()
    ));

    let resolution = resolve_profiles(drafts, dimensions);
    summary.profiles = resolution.profiles.len();
    summary.drafted = resolution.count(Membership::Drafted);
    summary.drafted_never_played = resolution.count(Membership::DraftedNeverPlayed);
    summary.undrafted = resolution.count(Membership::Undrafted);
    summary.name_collisions = resolution.collisions;
    ui.set_counts(&summary);
    ui.log(format!(
        "Resolved {} profiles: {} {}, {} {}, {} {}",
        summary.profiles,
        summary.drafted,
        Membership::Drafted.label(),
        summary.drafted_never_played,
        Membership::DraftedNeverPlayed.label(),
        summary.undrafted,
        Membership::Undrafted.label()
    ));
    if resolution.collisions > 0 {
        ui.log(format!(
            "{} rows share a name with an earlier row and were dropped",
            resolution.collisions
        ));
    }

    ui.set_phase(Phase::Deriving);
    let ids: Vec<u64> = resolution
        .profiles
        .iter()
        .filter_map(|p| p.source.player_id())
        .collect();
    let careers = SeasonIndex::build(&all_seasons);
    let transitions = junior_transitions(&careers, &ids, &config.target_league);
    ui.log(format!(
        "Junior transitions for {} of {} players",
        transitions.len(),
        careers.player_count()
    ));

    let profiles = build_profiles(resolution.profiles, &transitions, config);
    let linkage = draft_linkage(&profiles);

    let season_numbers = SeasonIndex::build(&league_seasons).season_numbers();
    let seasons = enrich_seasons(league_seasons, season_numbers, &linkage, config);
    ui.log(format!(
        "Enriched {} {} seasons, {} linked to a draft pick",
        seasons.len(),
        config.target_league,
        seasons.iter().filter(|s| s.draft.is_some()).count()
    ));

    PipelineOutput {
        profiles,
        seasons,
        summary,
    }
}

/// Load the three sources, build both tables and write them with a
/// `summary.json` into `output_dir`
pub fn run_pipeline(
    paths: &SourcePaths,
    output_dir: &Path,
    config: &PipelineConfig,
    ui: &mut impl Ui,
) -> Result<RunSummary> {
    let start = Instant::now();

    let sources = load_sources(paths, config, ui)?;
    let PipelineOutput {
        profiles,
        seasons,
        mut summary,
    } = build_tables(sources, config, ui);

    ui.set_phase(Phase::Exporting);
    let exporter = CsvExporter::new(output_dir)?;
    let (profiles_path, _) =
        exporter.export_table(&PROFILE_OUTPUT, profiles.iter().map(ProfileRow::to_values), ui)?;
    let (seasons_path, _) = exporter.export_table(
        &SEASON_OUTPUT,
        seasons.iter().map(EnrichedSeasonStat::to_values),
        ui,
    )?;
    ui.clear_progress();

    summary.profiles_path = profiles_path;
    summary.seasons_path = seasons_path;
    summary.elapsed_secs = start.elapsed().as_secs_f64();
    let summary_path = exporter.finalize(&summary)?;
    ui.log(format!("Summary -> {:?}", summary_path));

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dimension, draft, season, season_with_ppg};
    use crate::ui::SilentUi;

    fn sources() -> Sources {
        let all_seasons = vec![
            season_with_ppg(1, "OHL", 1998, 1.2),
            season_with_ppg(1, "OHL", 1999, 1.6),
            season(1, "Skater One", "NHL", 2000),
            season(1, "Skater One", "NHL", 2001),
            season(2, "Skater Two", "NHL", 2003),
        ];
        let league_seasons = all_seasons.iter().filter(|s| s.league == "NHL").cloned().collect();
        Sources {
            all_seasons,
            league_seasons,
            dimensions: vec![dimension(1, "Skater One"), dimension(2, "Skater Two")],
            drafts: vec![
                draft("Skater One", 1999, 40),
                draft("Never Played", 2001, 100),
                draft("Too Early", 1960, 3),
            ],
        }
    }

    #[test]
    fn test_build_tables() {
        let out = build_tables(sources(), &PipelineConfig::default(), &mut SilentUi::new());

        assert_eq!(out.summary.draft_picks_in_window, 2);
        assert_eq!(out.summary.profiles, 3);
        assert_eq!(out.summary.drafted, 1);
        assert_eq!(out.summary.drafted_never_played, 1);
        assert_eq!(out.summary.undrafted, 1);
        assert_eq!(out.seasons.len(), 3);

        let one = out
            .profiles
            .iter()
            .find(|p| p.profile.source.player_id() == Some(1))
            .unwrap();
        let transition = one.transition.unwrap();
        assert!((transition.last_junior_ppg - 1.6).abs() < 1e-12);
        assert!((transition.average_junior_ppg - 1.4).abs() < 1e-12);
        assert_eq!(one.draft_round, Some(2));

        let linked: Vec<_> = out.seasons.iter().filter(|s| s.draft.is_some()).collect();
        assert_eq!(linked.len(), 2);
        assert!(linked.iter().all(|s| s.record.player_id == 1));
        assert_eq!(
            out.seasons.iter().map(|s| s.season_number).collect::<Vec<_>>(),
            vec![1, 2, 1]
        );
    }
}
