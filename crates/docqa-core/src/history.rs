//! Question/answer history for the current session.

use serde::Serialize;
use std::collections::VecDeque;

/// One answered question. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    question: String,
    answer: String,
}

impl Exchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Newest-first log of exchanges. Unbounded and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<Exchange>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `exchange` in front of everything recorded so far.
    pub fn record(&mut self, exchange: Exchange) {
        self.entries.push_front(exchange);
    }

    /// Most recent exchange.
    pub fn latest(&self) -> Option<&Exchange> {
        self.entries.front()
    }

    /// Exchanges, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a Exchange;
    type IntoIter = std::collections::vec_deque::Iter<'a, Exchange>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = HistoryLog::new();
        log.record(Exchange::new("first?", "one"));
        log.record(Exchange::new("second?", "two"));

        let questions: Vec<_> = log.iter().map(Exchange::question).collect();
        assert_eq!(questions, vec!["second?", "first?"]);
        assert_eq!(log.latest().unwrap().answer(), "two");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.record(Exchange::new("q", "a"));
        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn test_exchange_serializes() {
        let value = serde_json::to_value(Exchange::new("q", "a")).unwrap();
        assert_eq!(value, serde_json::json!({ "question": "q", "answer": "a" }));
    }
}
