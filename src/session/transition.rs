//! Deferred level transitions.
//!
//! A win does not set up the next level right away: the win message stays up
//! for a short delay first. The session hands out a `TransitionTicket` for the
//! pending setup and only honours the ticket it is still waiting on, so a
//! late, duplicated or cancelled timer cannot set up a level twice.

use serde::{Deserialize, Serialize};

/// Identifies one scheduled level transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTicket(u64);

impl TransitionTicket {
    /// Create a ticket from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw ticket value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TransitionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transition({})", self.0)
    }
}

/// Issues tickets and tracks the one currently pending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionGuard {
    pending: Option<TransitionTicket>,
    next: u64,
}

impl TransitionGuard {
    /// Create a guard with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ticket currently awaited, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TransitionTicket> {
        self.pending
    }

    /// Check if a transition is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Issue a new ticket, or `None` if one is already pending.
    pub fn schedule(&mut self) -> Option<TransitionTicket> {
        if self.pending.is_some() {
            return None;
        }
        let ticket = TransitionTicket(self.next);
        self.next += 1;
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Consume `ticket` if it is the pending one.
    ///
    /// Returns false for stale or cancelled tickets.
    pub fn fire(&mut self, ticket: TransitionTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending ticket. Returns the cancelled ticket, if any.
    pub fn cancel(&mut self) -> Option<TransitionTicket> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_fire() {
        let mut guard = TransitionGuard::new();
        let ticket = guard.schedule().unwrap();

        assert!(guard.is_pending());
        assert!(guard.fire(ticket));
        assert!(!guard.is_pending());
    }

    #[test]
    fn test_only_one_pending() {
        let mut guard = TransitionGuard::new();
        let first = guard.schedule().unwrap();

        assert_eq!(guard.schedule(), None);
        assert_eq!(guard.pending(), Some(first));
    }

    #[test]
    fn test_fire_twice_is_ignored() {
        let mut guard = TransitionGuard::new();
        let ticket = guard.schedule().unwrap();

        assert!(guard.fire(ticket));
        assert!(!guard.fire(ticket));
    }

    #[test]
    fn test_cancelled_ticket_is_stale() {
        let mut guard = TransitionGuard::new();
        let old = guard.schedule().unwrap();
        assert_eq!(guard.cancel(), Some(old));

        let new = guard.schedule().unwrap();
        assert_ne!(old, new);
        assert!(!guard.fire(old));
        assert!(guard.fire(new));
    }

    #[test]
    fn test_cancel_with_nothing_pending() {
        let mut guard = TransitionGuard::new();
        assert_eq!(guard.cancel(), None);
    }
}
