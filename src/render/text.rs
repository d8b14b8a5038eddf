//! Plain-text presenter for terminals and logs.

use rustc_hash::FxHashMap;
use std::time::Duration;

use crate::core::{Disk, TowerId};
use crate::session::{Presenter, TransitionTicket};

/// Keeps its own view of the board and draws it as ASCII art.
///
/// The view only changes through `Presenter` calls, so what it draws is
/// exactly what the session asked to render.
///
/// ## Example
///
/// ```
/// use rust_hanoi::core::SessionConfig;
/// use rust_hanoi::render::TextPresenter;
/// use rust_hanoi::session::{GameSession, Presenter};
///
/// let (_session, effects) = GameSession::start(SessionConfig::default());
/// let mut presenter = TextPresenter::new();
/// presenter.present(&effects);
///
/// assert_eq!(presenter.message(), Some("Level 1: Game started!"));
/// assert!(presenter.draw().contains("[=====]"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextPresenter {
    towers: FxHashMap<TowerId, Vec<u32>>,
    message: Option<String>,
    scheduled: Option<(TransitionTicket, Duration)>,
}

impl TextPresenter {
    /// Create a presenter with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last message shown.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Disk sizes last rendered for a tower, bottom to top.
    #[must_use]
    pub fn tower(&self, id: TowerId) -> &[u32] {
        self.towers.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Take the pending advance request, if one was scheduled.
    pub fn take_scheduled(&mut self) -> Option<(TransitionTicket, Duration)> {
        self.scheduled.take()
    }

    /// Draw the board, tallest tower first, with tower numbers underneath.
    #[must_use]
    pub fn draw(&self) -> String {
        let largest = self
            .towers
            .values()
            .flat_map(|sizes| sizes.iter().copied())
            .max()
            .unwrap_or(1)
            .max(1);
        let width = (2 * largest + 1) as usize;
        let height = self.towers.values().map(Vec::len).max().unwrap_or(0);

        let mut out = String::new();
        for row in (0..height).rev() {
            let cells: Vec<String> = TowerId::ALL
                .iter()
                .map(|&id| {
                    let cell = match self.tower(id).get(row) {
                        Some(&size) => {
                            let bar = size.saturating_mul(2).saturating_sub(1) as usize;
                            format!("[{}]", "=".repeat(bar))
                        }
                        None => "|".to_string(),
                    };
                    format!("{:^width$}", cell, width = width)
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        let labels: Vec<String> = TowerId::ALL
            .iter()
            .map(|id| format!("{:^width$}", id.number(), width = width))
            .collect();
        out.push_str(labels.join(" ").trim_end());
        out.push('\n');
        out
    }
}

impl Presenter for TextPresenter {
    fn render_tower(&mut self, tower: TowerId, disks: &[Disk]) {
        self.towers
            .insert(tower, disks.iter().map(|d| d.size()).collect());
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn schedule_advance(&mut self, ticket: TransitionTicket, delay: Duration) {
        self.scheduled = Some((ticket, delay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionConfig;
    use crate::session::GameSession;

    fn started() -> TextPresenter {
        let (_, effects) = GameSession::start(SessionConfig::default());
        let mut presenter = TextPresenter::new();
        presenter.present(&effects);
        presenter
    }

    #[test]
    fn test_tracks_rendered_towers() {
        let presenter = started();
        assert_eq!(presenter.tower(TowerId::START), &[3, 2, 1]);
        assert!(presenter.tower(TowerId::SPARE).is_empty());
        assert!(presenter.tower(TowerId::GOAL).is_empty());
    }

    #[test]
    fn test_draw_layout() {
        let drawing = started().draw();
        let lines: Vec<&str> = drawing.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  [=]      |       |");
        assert_eq!(lines[2], "[=====]    |       |");
        assert_eq!(lines[3], "   1       2       3");
    }

    #[test]
    fn test_draw_empty_board() {
        let presenter = TextPresenter::new();
        assert_eq!(presenter.draw(), " 1   2   3\n");
    }

    #[test]
    fn test_schedule_is_taken_once() {
        let mut presenter = TextPresenter::new();
        presenter.schedule_advance(TransitionTicket::new(0), Duration::from_millis(1));

        assert!(presenter.take_scheduled().is_some());
        assert!(presenter.take_scheduled().is_none());
    }
}
