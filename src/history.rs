//! Bounded record of successful evaluations, most recent first.
//!
//! An entry renders as `"<expression> = <result>"`, and the left-hand side is recovered by
//! splitting on `=`. For that to be lossless an expression must never contain `=`, which
//! [`HistoryStore::record`] enforces.

use crate::config::DEFAULT_HISTORY_CAPACITY;
use log::debug;
use std::collections::VecDeque;
use std::fmt;

const SEPARATOR: char = '=';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("expression '{0}' contains the history separator '='")]
    SeparatorInExpression(String),

    #[error("malformed history line '{0}'")]
    MalformedLine(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    pub sequence: u64,
}

impl HistoryEntry {
    /// Splits a rendered `"<expression> = <result>"` line back into its parts.
    pub fn parse_line(line: &str) -> Result<(String, String), HistoryError> {
        let (expression, result) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| HistoryError::MalformedLine(line.to_string()))?;
        let (expression, result) = (expression.trim(), result.trim());
        if expression.is_empty() || result.is_empty() || result.contains(SEPARATOR) {
            return Err(HistoryError::MalformedLine(line.to_string()));
        }
        Ok((expression.to_string(), result.to_string()))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.expression, SEPARATOR, self.result)
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 1,
        }
    }

    /// Prepends an entry, evicting the oldest one when the store is full.
    pub fn record(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> Result<&HistoryEntry, HistoryError> {
        let expression = expression.into();
        if expression.contains(SEPARATOR) {
            return Err(HistoryError::SeparatorInExpression(expression));
        }

        while self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("History full, evicting #{}: {}", evicted.sequence, evicted);
            }
        }

        let entry = HistoryEntry {
            expression,
            result: result.into(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.entries.push_front(entry);
        Ok(&self.entries[0])
    }

    /// All entries, most recent first.
    pub fn all(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} history entries", self.entries.len());
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
