//! Panels of the terminal view: run status, export gauge, activity log

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;
use std::collections::VecDeque;

use super::{Phase, Progress};
use crate::writer::RunSummary;

const BORDER: Color = Color::Blue;
const DIM: Color = Color::DarkGray;

/// Input sizes and join membership, as far as the run has got
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub league_seasons: usize,
    pub roster_players: usize,
    pub draft_picks: usize,
    pub drafted: usize,
    pub never_played: usize,
    pub undrafted: usize,
    pub collisions: usize,
}

impl From<&RunSummary> for Tally {
    fn from(s: &RunSummary) -> Self {
        Self {
            league_seasons: s.league_seasons,
            roster_players: s.roster_players,
            draft_picks: s.draft_picks_in_window,
            drafted: s.drafted,
            never_played: s.drafted_never_played,
            undrafted: s.undrafted,
            collisions: s.name_collisions,
        }
    }
}

fn count(label: &str, n: usize, color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(format!("{} ", n), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{}   ", label), Style::default().fg(Color::Gray)),
    ]
}

/// Phase, stage counter, the latest info line and the tallies
pub struct StatusPanel {
    phase: Phase,
    info: String,
    tally: Option<Tally>,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            info: String::new(),
            tally: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn set_tally(&mut self, tally: Tally) {
        self.tally = Some(tally);
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let color = if self.phase == Phase::Complete {
            Color::Green
        } else {
            Color::Cyan
        };
        let phase_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} {}", self.phase.symbol(), self.phase), phase_style),
                Span::styled(
                    format!("  [{}/{}]", self.phase.step(), Phase::STAGES),
                    Style::default().fg(DIM),
                ),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(self.info.as_str(), Style::default().fg(Color::Gray)),
            ]),
        ];

        if let Some(t) = self.tally {
            let mut sizes = vec![Span::raw("   ")];
            sizes.extend(count("seasons", t.league_seasons, Color::White));
            sizes.extend(count("roster", t.roster_players, Color::White));
            sizes.extend(count("picks", t.draft_picks, Color::White));
            lines.push(Line::from(sizes));

            let mut joined = vec![Span::raw("   ")];
            joined.extend(count("drafted", t.drafted, Color::Green));
            joined.extend(count("never played", t.never_played, Color::Yellow));
            joined.extend(count("undrafted", t.undrafted, Color::Magenta));
            if t.collisions > 0 {
                joined.extend(count("name collisions", t.collisions, Color::Red));
            }
            lines.push(Line::from(joined));
        }

        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" NHL Draft Pipeline ")
            .border_style(Style::default().fg(BORDER));

        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}

/// Gauge text, e.g. `nhl_draft  1000/4000 rows  25%`
fn gauge_label(progress: &Progress) -> String {
    if progress.total == 0 {
        return progress.label.clone();
    }
    format!(
        "{}  {}/{} rows  {:.0}%",
        progress.label,
        progress.current,
        progress.total,
        progress.ratio() * 100.0
    )
}

/// Row gauge of the table being read or written
pub struct ProgressPanel {
    progress: Option<Progress>,
}

impl ProgressPanel {
    pub fn new() -> Self {
        Self { progress: None }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = Some(progress);
    }

    pub fn clear(&mut self) {
        self.progress = None;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(BORDER));

        let Some(progress) = &self.progress else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Cyan).bg(DIM))
            .ratio(progress.ratio().min(1.0))
            .label(gauge_label(progress));
        frame.render_widget(gauge, area);
    }
}

const MAX_LOG_ENTRIES: usize = 200;

/// Recent messages, each tagged with the phase that emitted it
pub struct LogPanel {
    entries: VecDeque<(Phase, String)>,
}

impl LogPanel {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    pub fn add(&mut self, phase: Phase, message: impl Into<String>) {
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back((phase, message.into()));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Activity ")
            .border_style(Style::default().fg(BORDER));

        let visible = area.height.saturating_sub(2) as usize;
        let start = self.entries.len().saturating_sub(visible);
        let newest = self.entries.len().saturating_sub(1);

        let items: Vec<ListItem> = self
            .entries
            .range(start..)
            .zip(start..)
            .map(|((phase, message), i)| {
                let color = if i == newest { Color::White } else { DIM };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", phase.symbol()), Style::default().fg(DIM)),
                    Span::styled(message.as_str(), Style::default().fg(color)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_lines_show_membership() {
        let mut panel = StatusPanel::new();
        panel.set_phase(Phase::Resolving);
        panel.set_info("3 draft picks 1967-2018");
        assert_eq!(panel.lines().len(), 2);

        panel.set_tally(Tally::from(&RunSummary {
            league_seasons: 40,
            roster_players: 7,
            draft_picks_in_window: 3,
            drafted: 2,
            drafted_never_played: 1,
            undrafted: 5,
            ..Default::default()
        }));
        let lines = panel.lines();
        assert_eq!(lines.len(), 4);
        assert!(text(&lines[0]).contains("Resolving players  [2/4]"));
        assert_eq!(text(&lines[1]).trim(), "3 draft picks 1967-2018");
        assert!(text(&lines[2]).contains("40 seasons"));
        let joined = text(&lines[3]);
        assert!(joined.contains("2 drafted"));
        assert!(joined.contains("1 never played"));
        assert!(joined.contains("5 undrafted"));
        assert!(!joined.contains("collisions"));
    }

    #[test]
    fn test_collisions_only_shown_when_present() {
        let mut panel = StatusPanel::new();
        panel.set_tally(Tally {
            collisions: 2,
            ..Default::default()
        });
        assert!(text(&panel.lines()[3]).contains("2 name collisions"));
    }

    #[test]
    fn test_gauge_label() {
        assert_eq!(
            gauge_label(&Progress::new(1000, 4000, "nhl_draft")),
            "nhl_draft  1000/4000 rows  25%"
        );
        assert_eq!(gauge_label(&Progress::new(0, 0, "player_stats")), "player_stats");
    }

    #[test]
    fn test_log_panel_is_capped() {
        let mut panel = LogPanel::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            panel.add(Phase::Loading, format!("line {}", i));
        }
        assert_eq!(panel.entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(panel.entries.front().map(|(_, m)| m.as_str()), Some("line 5"));
    }
}
