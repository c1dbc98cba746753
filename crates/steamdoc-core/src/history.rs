//! Bounded history of generation requests
//!
//! Holds the five most recent requests of a session, oldest first.
//! Nothing is persisted.

use std::collections::VecDeque;
use std::fmt;

/// Maximum number of entries kept
pub const HISTORY_CAPACITY: usize = 5;

/// One recorded generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Lesson topic
    pub topic: String,
    /// Learning outcomes in input order
    pub outcomes: Vec<String>,
    /// Age group as entered
    pub age_group: String,
    /// Output language label (e.g. "English")
    pub language: String,
}

impl HistoryEntry {
    /// Create an entry
    pub fn new(
        topic: impl Into<String>,
        outcomes: Vec<String>,
        age_group: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            outcomes,
            age_group: age_group.into(),
            language: language.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Topic: {}, Outcomes: {}, Age: {}, Lang: {}",
            self.topic,
            self.outcomes.join(", "),
            self.age_group,
            self.language
        )
    }
}

/// Fixed-capacity FIFO log
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append an entry, evicting the oldest when full
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.entries.len() == HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("history full, evicting: {}", evicted.topic);
            }
        }
        self.entries.push_back(entry);
    }

    /// Entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per entry, oldest first
    pub fn summary(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::new(
            format!("topic {}", i),
            vec!["o".to_string()],
            "10",
            "English",
        )
    }

    #[test]
    fn test_entry_display() {
        let e = HistoryEntry::new(
            "Water",
            vec!["cycle".to_string(), "states".to_string()],
            "8-10",
            "Nepali",
        );
        assert_eq!(
            e.to_string(),
            "Topic: Water, Outcomes: cycle, states, Age: 8-10, Lang: Nepali"
        );
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.summary().is_empty());
    }

    #[test]
    fn test_sixth_append_evicts_first() {
        let mut log = HistoryLog::new();
        for i in 1..=6 {
            log.record(entry(i));
        }
        assert_eq!(log.len(), HISTORY_CAPACITY);
        let topics: Vec<_> = log.entries().map(|e| e.topic.as_str()).collect();
        assert_eq!(
            topics,
            vec!["topic 2", "topic 3", "topic 4", "topic 5", "topic 6"]
        );
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut log = HistoryLog::new();
        for i in 0..50 {
            log.record(entry(i));
            assert!(log.len() <= HISTORY_CAPACITY);
        }
    }
}
