//! Event store: the `date key → events` mapping behind the calendar.
//!
//! The store is an explicit value passed through the UI rather than ambient
//! state. Mutation operations are copy-on-write: they clone at the top level
//! and at the affected key, return a new store, and never touch the receiver.

pub mod persistence;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Mapping from canonical `YYYY-MM-DD` key to that day's events.
///
/// Invariants:
/// - a key is never present with an empty event list (`without_event` drops
///   the key when the last event goes);
/// - event order within a day is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    events: BTreeMap<String, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new store with `event` appended under `key`, creating the
    /// day's list if absent.
    pub fn with_event(&self, key: &str, event: Event) -> Self {
        let mut events = self.events.clone();
        events.entry(key.to_string()).or_default().push(event);
        Self { events }
    }

    /// Returns a new store with the event at `index` under `key` removed,
    /// preserving the order of the remaining events. A missing key or an
    /// out-of-range index is a silent no-op. The key itself is dropped when
    /// its last event is removed.
    pub fn without_event(&self, key: &str, index: usize) -> Self {
        let mut events = self.events.clone();
        match events.get_mut(key) {
            Some(day) if index < day.len() => {
                day.remove(index);
                if day.is_empty() {
                    events.remove(key);
                }
            }
            _ => return self.clone(),
        }
        Self { events }
    }

    /// The events recorded under `key`, in display order.
    pub fn events_on(&self, key: &str) -> &[Event] {
        self.events.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of events recorded under `key`.
    pub fn count_on(&self, key: &str) -> usize {
        self.events.get(key).map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events across all days.
    pub fn total_events(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn standup() -> Event {
        Event::new("Standup", "09:00", "09:15", "")
    }

    #[test]
    fn test_with_event_creates_day() {
        let store = EventStore::new().with_event("2024-03-15", standup());
        assert_eq!(store.count_on("2024-03-15"), 1);
        assert_eq!(store.events_on("2024-03-15")[0].name, "Standup");
    }

    #[test]
    fn test_with_event_appends_in_order() {
        let store = EventStore::new()
            .with_event("2024-03-15", standup())
            .with_event("2024-03-15", Event::new("Lunch", "12:00", "13:00", ""));
        let names: Vec<&str> = store
            .events_on("2024-03-15")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Standup", "Lunch"]);
    }

    #[test]
    fn test_with_event_does_not_mutate_receiver() {
        let original = EventStore::new();
        let _updated = original.with_event("2024-03-15", standup());
        assert!(original.is_empty());
        assert_eq!(original.count_on("2024-03-15"), 0);
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let before = EventStore::new().with_event("2024-03-15", standup());
        let added = before.with_event("2024-03-15", Event::new("Review", "14:00", "15:00", ""));
        let after = added.without_event("2024-03-15", 1);
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_last_event_drops_key() {
        let store = EventStore::new().with_event("2024-03-15", standup());
        let emptied = store.without_event("2024-03-15", 0);
        assert!(emptied.is_empty());
        assert_eq!(emptied, EventStore::new());
    }

    #[test]
    fn test_delete_shifts_later_events_down() {
        let store = EventStore::new()
            .with_event("2024-03-15", Event::new("A", "", "", ""))
            .with_event("2024-03-15", Event::new("B", "", "", ""))
            .with_event("2024-03-15", Event::new("C", "", "", ""));
        let after = store.without_event("2024-03-15", 1);
        let names: Vec<&str> = after
            .events_on("2024-03-15")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let store = EventStore::new().with_event("2024-03-15", standup());
        assert_eq!(store.without_event("2024-03-15", 1), store);
        assert_eq!(store.without_event("2024-03-15", 99), store);
    }

    #[test]
    fn test_delete_missing_key_is_noop() {
        let store = EventStore::new().with_event("2024-03-15", standup());
        assert_eq!(store.without_event("2024-04-01", 0), store);
    }

    #[test]
    fn test_total_events() {
        let store = EventStore::new()
            .with_event("2024-03-15", standup())
            .with_event("2024-03-15", standup())
            .with_event("2024-03-16", standup());
        assert_eq!(store.total_events(), 3);
    }
}
