//! Question answering and the running history.

use crate::error::{FlowError, RemoteError};
use crate::gateway::Gateway;
use crate::history::{Exchange, HistoryLog};
use crate::state::{OpState, Operation, Pending};
use crate::types::Query;
use tracing::debug;

/// Shown when the question is blank.
pub const EMPTY_QUERY: &str = "Please enter a question.";

/// Query input, last answer or error, and the exchange history.
#[derive(Debug, Clone, Default)]
pub struct AskFlow {
    pub input: String,
    op: Operation<String>,
    history: HistoryLog,
}

impl AskFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OpState<String> {
        self.op.state()
    }

    pub fn is_asking(&self) -> bool {
        self.op.is_in_flight()
    }

    /// Answer to the last question, hidden while a new one is in flight.
    pub fn answer(&self) -> Option<&str> {
        self.op.state().success().map(String::as_str)
    }

    pub fn error(&self) -> Option<&FlowError> {
        self.op.state().error()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Clear the previous answer and error, then reject a blank question or
    /// enter `InFlight`. The query is sent exactly as typed.
    pub fn begin(&mut self) -> Option<Pending<Query>> {
        self.op.reset();
        if self.input.trim().is_empty() {
            self.op.reject(FlowError::validation(EMPTY_QUERY));
            return None;
        }
        let ticket = self.op.start();
        Some(Pending {
            ticket,
            request: Query::new(self.input.clone()),
        })
    }

    /// On success record the exchange and clear the input; on failure keep
    /// both history and input as they were.
    pub fn finish(&mut self, pending: Pending<Query>, result: Result<String, RemoteError>) -> bool {
        if !self.op.is_current(pending.ticket) {
            return self.op.settle(pending.ticket, result.map_err(FlowError::from));
        }
        match result {
            Ok(answer) => {
                self.history
                    .record(Exchange::new(pending.request.text, answer.clone()));
                self.input.clear();
                debug!(history = self.history.len(), "Answer recorded");
                self.op.settle(pending.ticket, Ok(answer))
            }
            Err(err) => self.op.settle(pending.ticket, Err(err.into())),
        }
    }

    pub async fn submit(&mut self, gateway: &dyn Gateway) -> &OpState<String> {
        if let Some(pending) = self.begin() {
            let result = gateway.ask(&pending.request).await;
            self.finish(pending, result);
        }
        self.op.state()
    }

    /// Convenience for callers without an input widget.
    pub async fn ask(&mut self, gateway: &dyn Gateway, question: impl Into<String>) -> &OpState<String> {
        self.input = question.into();
        self.submit(gateway).await
    }

    pub fn teardown(&mut self) {
        self.op.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Endpoint;
    use crate::testing::ScriptedGateway;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t ")]
    #[tokio::test]
    async fn test_blank_query_never_calls_gateway(#[case] input: &str) {
        let gateway = ScriptedGateway::new();
        let mut flow = AskFlow::new();

        flow.ask(&gateway, input).await;

        assert!(gateway.calls().is_empty());
        assert_eq!(flow.error().unwrap().to_string(), EMPTY_QUERY);
        assert!(flow.error().unwrap().is_local());
        assert!(flow.history().is_empty());
    }

    #[tokio::test]
    async fn test_successful_ask_records_exchange() {
        let gateway = ScriptedGateway::new().with_ask(Ok("X is Y."));
        let mut flow = AskFlow::new();

        flow.ask(&gateway, "What is X?").await;

        assert_eq!(flow.answer(), Some("X is Y."));
        assert!(flow.input.is_empty());
        let entries: Vec<_> = flow.history().iter().cloned().collect();
        assert_eq!(entries, vec![Exchange::new("What is X?", "X is Y.")]);
        assert_eq!(gateway.calls(), vec![(Endpoint::Ask, "What is X?".to_string())]);
    }

    #[tokio::test]
    async fn test_new_exchange_goes_first() {
        let gateway = ScriptedGateway::new().with_ask(Ok("same"));
        let mut flow = AskFlow::new();

        flow.ask(&gateway, "one").await;
        flow.ask(&gateway, "two").await;

        assert_eq!(flow.history().len(), 2);
        assert_eq!(flow.history().latest().unwrap().question(), "two");
    }

    #[tokio::test]
    async fn test_failed_ask_keeps_history_and_input() {
        let ok = ScriptedGateway::new().with_ask(Ok("first answer"));
        let failing = ScriptedGateway::new().with_ask(Err("Please upload a PDF first."));
        let mut flow = AskFlow::new();
        flow.ask(&ok, "first").await;
        let before = flow.history().clone();

        flow.ask(&failing, "second").await;

        assert_eq!(flow.history(), &before);
        assert_eq!(flow.input, "second");
        assert_eq!(
            flow.error().unwrap().to_string(),
            "Please upload a PDF first."
        );
        assert!(flow.answer().is_none());
    }

    #[test]
    fn test_begin_clears_previous_answer() {
        let mut flow = AskFlow::new();
        flow.input = "q".to_string();
        let pending = flow.begin().unwrap();
        flow.finish(pending, Ok("a".to_string()));
        assert_eq!(flow.answer(), Some("a"));

        flow.input = "next".to_string();
        flow.begin();
        assert!(flow.is_asking());
        assert!(flow.answer().is_none());
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_query_sent_untrimmed() {
        let mut flow = AskFlow::new();
        flow.input = "  spaced  ".to_string();
        let pending = flow.begin().unwrap();
        assert_eq!(pending.request.text, "  spaced  ");
    }

    #[test]
    fn test_stale_answer_is_not_recorded() {
        let mut flow = AskFlow::new();
        flow.input = "q".to_string();
        let pending = flow.begin().unwrap();
        flow.teardown();

        assert!(!flow.finish(pending, Ok("late".to_string())));
        assert!(flow.history().is_empty());
        assert_eq!(flow.input, "q");
    }
}
