//! The game session: level setup, drag handling, wins, undo.

use std::ops::RangeInclusive;

use tracing::{debug, info, instrument, warn};

use super::effect::Effect;
use super::selection::Selection;
use super::transition::{TransitionGuard, TransitionTicket};
use crate::core::{
    Difficulty, Disk, DiskStack, HanoiError, Level, Move, Result, SessionConfig, Tower, TowerId,
    TowerSet,
};
use crate::history::MoveHistory;
use crate::rules::{is_won, validate_move};

/// Shown when a drop is rejected.
pub const MSG_INVALID_MOVE: &str =
    "Invalid move. A larger disk cannot be placed on top of a smaller disk.";
/// Shown after a successful undo.
pub const MSG_UNDONE: &str = "Last move undone.";
/// Shown when undo is requested with an empty history.
pub const MSG_NOTHING_TO_UNDO: &str = "No moves to undo.";
/// Shown when tower 3 is complete.
pub const MSG_WON: &str = "You won!";

/// A single player's puzzle session.
///
/// Owns the towers, the move history and the level. Every operation runs
/// synchronously and returns the effects the presentation layer should apply.
///
/// ## Lifecycle
///
/// Each setup (start, restart, difficulty change, level advance) rebuilds the
/// towers for the current level and clears the history. The level survives
/// restarts and only ever grows, by one per win.
///
/// ## Example
///
/// ```
/// use rust_hanoi::core::{Disk, SessionConfig, TowerId};
/// use rust_hanoi::session::GameSession;
///
/// let mut session = GameSession::new(SessionConfig::default());
/// assert_eq!(session.tower(TowerId::START).count(), 3);
///
/// assert!(session.on_grab(TowerId::START, Disk::new(1)));
/// session.on_drop(TowerId::SPARE);
/// assert_eq!(session.tower(TowerId::SPARE).peek(), Some(Disk::new(1)));
///
/// session.on_undo();
/// assert_eq!(session.tower(TowerId::START).count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    level: Level,
    difficulty: Difficulty,
    /// Disks placed by the last setup. Differs from `level.disk_count()`
    /// while a level transition is pending.
    layout_disks: u32,
    towers: TowerSet,
    history: MoveHistory,
    selection: Selection,
    transition: TransitionGuard,
}

impl GameSession {
    /// Create a session and lay out its first level.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::start(config).0
    }

    /// Create a session, also returning the effects of the initial setup.
    pub fn start(config: SessionConfig) -> (Self, Vec<Effect>) {
        let mut session = Self {
            level: config.initial_level,
            difficulty: config.difficulty,
            layout_disks: 0,
            towers: TowerSet::new(),
            history: MoveHistory::new(),
            selection: Selection::Idle,
            transition: TransitionGuard::new(),
            config,
        };
        let effects = session.setup();
        (session, effects)
    }

    // === Accessors ===

    /// Get the configuration the session was started with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current level. Already incremented while a transition is pending.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Current layout style.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of disks on the board.
    #[must_use]
    pub fn disk_count(&self) -> u32 {
        self.layout_disks
    }

    /// All three towers.
    #[must_use]
    pub fn towers(&self) -> &TowerSet {
        &self.towers
    }

    /// One tower.
    #[must_use]
    pub fn tower(&self, id: TowerId) -> &Tower {
        &self.towers[id]
    }

    /// Moves applied since the last setup.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Current drag selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The level transition waiting to fire, if any.
    #[must_use]
    pub fn pending_transition(&self) -> Option<TransitionTicket> {
        self.transition.pending()
    }

    // === Setup ===

    fn setup(&mut self) -> Vec<Effect> {
        self.towers.clear();
        self.history.clear();
        self.selection = Selection::Idle;

        let n = self.level.disk_count();
        self.layout_disks = n;

        match self.difficulty {
            Difficulty::Hard => stack_descending(&mut self.towers[TowerId::START], 1..=n),
            Difficulty::Easy => {
                let half = n / 2;
                stack_descending(&mut self.towers[TowerId::START], half + 1..=n);
                stack_descending(&mut self.towers[TowerId::GOAL], 1..=half);
            }
        }

        info!(level = %self.level, difficulty = %self.difficulty, disks = n, "game set up");
        self.debug_check();

        let mut effects = self.render_all();
        effects.push(Effect::message(format!("Level {}: Game started!", self.level)));
        effects
    }

    fn render(&self, tower: TowerId) -> Effect {
        Effect::RenderTower {
            tower,
            disks: DiskStack::from_slice(self.towers[tower].disks()),
        }
    }

    fn render_all(&self) -> Vec<Effect> {
        TowerId::ALL.iter().map(|&id| self.render(id)).collect()
    }

    // === Drag and drop ===

    /// Report that the player started dragging `disk` on `tower`.
    ///
    /// Only the top disk of a tower can be picked up; anything else leaves the
    /// session idle. Returns whether the disk is now selected.
    #[instrument(skip(self))]
    pub fn on_grab(&mut self, tower: TowerId, disk: Disk) -> bool {
        if self.towers[tower].is_top(disk) {
            self.selection = Selection::DiskSelected { tower, disk };
            debug!("disk selected");
            true
        } else {
            self.selection = Selection::Idle;
            debug!("grab ignored, not a top disk");
            false
        }
    }

    /// Report that the dragged disk was dropped on `target`.
    ///
    /// Without a selection this does nothing. An illegal drop, including one
    /// back onto the source tower, leaves the towers untouched and produces
    /// the invalid-move message. The selection is cleared either way.
    #[instrument(skip(self))]
    pub fn on_drop(&mut self, target: TowerId) -> Vec<Effect> {
        let Some((source, disk)) = self.selection.take() else {
            debug!("drop ignored, nothing selected");
            return Vec::new();
        };

        debug!(%disk, %source, "dropping selected disk");
        match self.try_move(source, target) {
            Ok(effects) => effects,
            Err(err @ HanoiError::InvalidMove { .. }) => {
                warn!(%err, "move rejected");
                vec![Effect::message(MSG_INVALID_MOVE)]
            }
            Err(err) => {
                warn!(%err, "move failed");
                Vec::new()
            }
        }
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// On success the move is recorded, any drag selection is dropped, both
    /// towers are re-rendered and the win check runs.
    ///
    /// # Errors
    ///
    /// - `HanoiError::EmptyTower` if `from` has no disks
    /// - `HanoiError::InvalidMove` if the top of `to` is not larger
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, from: TowerId, to: TowerId) -> Result<Vec<Effect>> {
        let disk = self.towers[from].peek().ok_or(HanoiError::EmptyTower(from))?;
        validate_move(disk, self.towers[to].peek())?;

        let disk = self.towers[from].pop()?;
        self.towers[to].push(disk);
        self.selection = Selection::Idle;

        let mv = Move::new(from, to, disk);
        self.history.record(mv);
        debug!(%mv, "move applied");
        self.debug_check();

        let mut effects = vec![self.render(to), self.render(from)];
        effects.extend(self.check_for_win());
        Ok(effects)
    }

    fn check_for_win(&mut self) -> Vec<Effect> {
        if !is_won(&self.towers, self.layout_disks) {
            return Vec::new();
        }

        let Some(ticket) = self.transition.schedule() else {
            debug!("win ignored, level transition already pending");
            return Vec::new();
        };

        let finished = self.level;
        self.level = self.level.next();
        info!(level = %finished, next = %self.level, %ticket, "level complete");

        vec![
            Effect::message(MSG_WON),
            Effect::ScheduleAdvance {
                ticket,
                delay: self.config.advance_delay,
            },
        ]
    }

    /// Run the level setup scheduled by a win.
    ///
    /// Tickets that are no longer pending (already fired, or cancelled by a
    /// restart) are ignored.
    #[instrument(skip(self))]
    pub fn advance(&mut self, ticket: TransitionTicket) -> Vec<Effect> {
        if self.transition.fire(ticket) {
            info!(level = %self.level, "advancing to next level");
            self.setup()
        } else {
            debug!("stale transition ignored");
            Vec::new()
        }
    }

    // === Undo ===

    /// Undo the most recent move.
    ///
    /// The level is never decremented, even when undoing the winning move.
    ///
    /// # Errors
    ///
    /// Returns `HanoiError::EmptyHistory` if there is nothing to undo.
    ///
    /// # Panics
    ///
    /// Panics if the recorded disk is not on top of its destination tower,
    /// which means the history and the towers have diverged.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Vec<Effect>> {
        self.selection = Selection::Idle;
        let mv = self.history.undo_last()?;

        let disk = self.towers[mv.to]
            .pop()
            .unwrap_or_else(|err| panic!("move history out of sync with towers: {err}"));
        assert_eq!(
            disk, mv.disk,
            "move history out of sync with towers: expected {} on top of {}",
            mv.disk, mv.to
        );
        self.towers[mv.from].push(disk);

        debug!(%mv, "move undone");
        self.debug_check();

        Ok(vec![
            self.render(mv.from),
            self.render(mv.to),
            Effect::message(MSG_UNDONE),
        ])
    }

    /// Undo button handler: like [`GameSession::undo`], but reports an empty
    /// history as a message.
    pub fn on_undo(&mut self) -> Vec<Effect> {
        match self.undo() {
            Ok(effects) => effects,
            Err(err) => {
                debug!(%err, "nothing to undo");
                vec![Effect::message(MSG_NOTHING_TO_UNDO)]
            }
        }
    }

    // === Restart ===

    /// Restart button handler: lay out the current level again.
    ///
    /// Cancels any pending level transition.
    #[instrument(skip(self))]
    pub fn on_restart(&mut self) -> Vec<Effect> {
        if let Some(ticket) = self.transition.cancel() {
            debug!(%ticket, "pending transition cancelled");
        }
        self.setup()
    }

    /// Switch layout style and restart the current level.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Vec<Effect> {
        self.difficulty = difficulty;
        self.on_restart()
    }

    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        crate::invariants::validate_invariants(self);
    }
}

/// Push disks of the given sizes, largest first.
fn stack_descending(tower: &mut Tower, sizes: RangeInclusive<u32>) {
    for size in sizes.rev() {
        tower.push(Disk::new(size));
    }
}
