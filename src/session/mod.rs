//! Game session: the interaction state machine.
//!
//! ## Flow
//!
//! 1. The presentation layer reports a grab (`on_grab`). Only a tower's top
//!    disk can be selected.
//! 2. It reports a drop (`on_drop`). The move validator decides; legal moves
//!    mutate the towers and are recorded, illegal ones produce a message.
//! 3. After a legal move the win check runs. A win bumps the level and emits
//!    `Effect::ScheduleAdvance`; the presentation layer calls `advance` with
//!    the ticket once the delay has passed.
//!
//! Every operation returns a `Vec<Effect>` for a [`Presenter`] to apply.
//!
//! ## Example
//!
//! ```
//! use rust_hanoi::core::{SessionConfig, TowerId};
//! use rust_hanoi::session::{Effect, GameSession, MSG_INVALID_MOVE};
//!
//! let mut session = GameSession::new(SessionConfig::default());
//!
//! session.try_move(TowerId::START, TowerId::SPARE).unwrap();
//! assert!(session.try_move(TowerId::START, TowerId::SPARE).is_err());
//!
//! // The same move made by dragging is reported to the player instead
//! let top = session.tower(TowerId::START).peek().unwrap();
//! session.on_grab(TowerId::START, top);
//! let effects = session.on_drop(TowerId::SPARE);
//! assert_eq!(effects, vec![Effect::message(MSG_INVALID_MOVE)]);
//! ```

mod effect;
mod game;
mod selection;
mod transition;

pub use effect::{Effect, Presenter};
pub use game::{GameSession, MSG_INVALID_MOVE, MSG_NOTHING_TO_UNDO, MSG_UNDONE, MSG_WON};
pub use selection::Selection;
pub use transition::{TransitionGuard, TransitionTicket};
