use tracing::{debug, info};

use super::{Phase, Progress, Ui};
use crate::writer::RunSummary;

/// Ui that reports through `tracing` events, for non-interactive runs.
/// Progress is only logged when its whole percentage moves.
#[derive(Default)]
pub struct LogUi {
    phase: Option<Phase>,
    last_percent: Option<u64>,
}

impl LogUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for LogUi {
    fn set_phase(&mut self, phase: Phase) {
        info!(step = phase.step(), "{}", phase);
        self.phase = Some(phase);
        self.last_percent = None;
    }

    fn set_info(&mut self, info: impl Into<String>) {
        info!("{}", info.into());
    }

    fn set_counts(&mut self, summary: &RunSummary) {
        info!(
            league_seasons = summary.league_seasons,
            roster_players = summary.roster_players,
            draft_picks = summary.draft_picks_in_window,
            drafted = summary.drafted,
            drafted_never_played = summary.drafted_never_played,
            undrafted = summary.undrafted,
            name_collisions = summary.name_collisions,
            "Membership counts"
        );
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        let percent = (Progress::new(current, total, "").ratio() * 100.0) as u64;
        if self.last_percent == Some(percent) {
            return;
        }
        self.last_percent = Some(percent);
        debug!(current, total, "{}: {}%", label.into(), percent);
    }

    fn clear_progress(&mut self) {
        self.last_percent = None;
    }

    fn log(&mut self, message: impl Into<String>) {
        match self.phase {
            Some(phase) => info!(phase = %phase, "{}", message.into()),
            None => info!("{}", message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_deduplicates_percent() {
        let mut ui = LogUi::new();
        ui.set_phase(Phase::Exporting);
        ui.set_progress(1, 1000, "profiles");
        assert_eq!(ui.last_percent, Some(0));
        ui.set_progress(500, 1000, "profiles");
        assert_eq!(ui.last_percent, Some(50));
        ui.clear_progress();
        assert_eq!(ui.last_percent, None);
        assert_eq!(ui.phase, Some(Phase::Exporting));
    }
}
