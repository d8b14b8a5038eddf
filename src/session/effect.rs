//! Outbound effects and the presenter seam.
//!
//! Session operations return the effects they produce instead of calling
//! into a UI. A presentation layer implements [`Presenter`] and feeds each
//! batch through [`Presenter::present`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::transition::TransitionTicket;
use crate::core::disk::Disk;
use crate::core::tower::{DiskStack, TowerId};

/// Something the presentation layer must do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Redraw a tower with these disks, bottom to top.
    RenderTower { tower: TowerId, disks: DiskStack },

    /// Replace the status line.
    ShowMessage(String),

    /// Call `GameSession::advance(ticket)` once `delay` has elapsed.
    ScheduleAdvance {
        ticket: TransitionTicket,
        delay: Duration,
    },
}

impl Effect {
    /// Build a message effect.
    pub fn message(text: impl Into<String>) -> Self {
        Effect::ShowMessage(text.into())
    }
}

/// A presentation adapter.
///
/// Implementors map disks to whatever they draw and own the timer behind
/// `schedule_advance`. The core never calls these directly.
pub trait Presenter {
    /// Redraw one tower. `disks` is ordered bottom to top.
    fn render_tower(&mut self, tower: TowerId, disks: &[Disk]);

    /// Show a status message.
    fn show_message(&mut self, text: &str);

    /// Arrange for `GameSession::advance(ticket)` to run after `delay`.
    fn schedule_advance(&mut self, ticket: TransitionTicket, delay: Duration);

    /// Dispatch a batch of effects in order.
    fn present(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::RenderTower { tower, disks } => self.render_tower(*tower, disks),
                Effect::ShowMessage(text) => self.show_message(text),
                Effect::ScheduleAdvance { ticket, delay } => self.schedule_advance(*ticket, *delay),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl Presenter for Log {
        fn render_tower(&mut self, tower: TowerId, disks: &[Disk]) {
            self.0.push(format!("render {} {:?}", tower.number(), disks.iter().map(|d| d.size()).collect::<Vec<_>>()));
        }

        fn show_message(&mut self, text: &str) {
            self.0.push(format!("message {}", text));
        }

        fn schedule_advance(&mut self, ticket: TransitionTicket, delay: Duration) {
            self.0.push(format!("schedule {} {}", ticket.raw(), delay.as_millis()));
        }
    }

    #[test]
    fn test_present_dispatches_in_order() {
        let effects = vec![
            Effect::RenderTower {
                tower: TowerId::START,
                disks: smallvec![Disk(2), Disk(1)],
            },
            Effect::message("hello"),
            Effect::ScheduleAdvance {
                ticket: TransitionTicket::new(4),
                delay: Duration::from_millis(250),
            },
        ];

        let mut log = Log::default();
        log.present(&effects);

        assert_eq!(
            log.0,
            vec![
                "render 1 [2, 1]".to_string(),
                "message hello".to_string(),
                "schedule 4 250".to_string(),
            ]
        );
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::RenderTower {
            tower: TowerId::GOAL,
            disks: smallvec![Disk(3)],
        };
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
