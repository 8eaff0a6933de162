//! Per-flow asynchronous operation state.
//!
//! Each flow owns one [`Operation`], which pairs the visible [`OpState`] with
//! a generation counter. Starting an operation hands out a [`Ticket`]; a
//! result is only applied if its ticket is still current, so answers that
//! arrive after the view was torn down (or after a newer submission) are
//! dropped instead of overwriting fresher state.

use crate::error::FlowError;
use tracing::debug;

/// What a flow is doing right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpState<T> {
    /// Nothing submitted yet, or the last result was dismissed.
    #[default]
    Idle,
    /// A request is awaiting its response.
    InFlight,
    /// The last request succeeded.
    Succeeded(T),
    /// The last request failed, locally or remotely.
    Failed(FlowError),
}

impl<T> OpState<T> {
    /// Whether the trigger for this flow should be disabled.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OpState::InFlight)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, OpState::Idle)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            OpState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FlowError> {
        match self {
            OpState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Proof that a result belongs to a particular submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// A submission accepted by a flow, waiting to be sent.
#[derive(Debug, Clone)]
pub struct Pending<R> {
    pub ticket: Ticket,
    pub request: R,
}

/// State machine shared by every flow.
#[derive(Debug, Clone)]
pub struct Operation<T> {
    state: OpState<T>,
    generation: u64,
}

impl<T> Default for Operation<T> {
    fn default() -> Self {
        Self {
            state: OpState::Idle,
            generation: 0,
        }
    }
}

impl<T> Operation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OpState<T> {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Enter `InFlight` and issue a ticket. Any older ticket becomes stale.
    pub fn start(&mut self) -> Ticket {
        self.generation += 1;
        self.state = OpState::InFlight;
        Ticket {
            generation: self.generation,
        }
    }

    /// Fail without a request. Outstanding tickets become stale.
    pub fn reject(&mut self, error: FlowError) {
        self.generation += 1;
        self.state = OpState::Failed(error);
    }

    /// Whether `ticket` belongs to the latest submission.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a result. Returns `false` and leaves the state untouched if the
    /// ticket is stale.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, FlowError>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale result"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => OpState::Succeeded(value),
            Err(err) => OpState::Failed(err),
        };
        true
    }

    /// Return to `Idle`, dropping any message.
    pub fn reset(&mut self) {
        self.state = OpState::Idle;
    }

    /// Invalidate every outstanding ticket, e.g. when the owning view goes
    /// away. An operation caught in flight falls back to `Idle`.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if self.state.is_in_flight() {
            self.state = OpState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;

    #[test]
    fn test_starts_idle() {
        let op: Operation<String> = Operation::new();
        assert!(op.state().is_idle());
        assert!(!op.is_in_flight());
    }

    #[test]
    fn test_start_then_settle_success() {
        let mut op = Operation::new();
        let ticket = op.start();
        assert!(op.is_in_flight());

        assert!(op.settle(ticket, Ok("done".to_string())));
        assert_eq!(op.state().success().map(String::as_str), Some("done"));
        assert!(op.state().error().is_none());
    }

    #[test]
    fn test_settle_failure() {
        let mut op: Operation<String> = Operation::new();
        let ticket = op.start();
        assert!(op.settle(ticket, Err(RemoteError::new("boom").into())));
        assert_eq!(op.state().error().unwrap().to_string(), "boom");
        assert!(op.state().success().is_none());
    }

    #[test]
    fn test_invalidated_ticket_is_ignored() {
        let mut op = Operation::new();
        let ticket = op.start();
        op.invalidate();
        assert!(op.state().is_idle());

        assert!(!op.settle(ticket, Ok(1)));
        assert!(op.state().is_idle());
    }

    #[test]
    fn test_newer_submission_wins() {
        let mut op = Operation::new();
        let first = op.start();
        let second = op.start();

        assert!(!op.settle(first, Ok("old")));
        assert!(op.is_in_flight());
        assert!(op.settle(second, Ok("new")));
        assert_eq!(op.state().success(), Some(&"new"));
    }

    #[test]
    fn test_reject_stales_outstanding_ticket() {
        let mut op: Operation<u8> = Operation::new();
        let ticket = op.start();
        op.reject(FlowError::validation("nope"));

        assert!(!op.settle(ticket, Ok(1)));
        assert_eq!(op.state().error().unwrap().to_string(), "nope");
    }

    #[test]
    fn test_invalidate_keeps_settled_result() {
        let mut op = Operation::new();
        let ticket = op.start();
        op.settle(ticket, Ok(5));
        op.invalidate();
        assert_eq!(op.state().success(), Some(&5));
    }
}
