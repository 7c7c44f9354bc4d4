// Event module
// Per-day calendar event record

use serde::{Deserialize, Serialize};

/// A single calendar event attached to one day.
///
/// All fields are free-form text and may be empty; no validation is applied.
/// Events carry no identifier; identity is the event's position within its
/// day's list, so display order is insertion order.
///
/// Field names serialize in camelCase so snapshots use the established
/// storage format (`startTime`/`endTime`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: description.into(),
        }
    }

    /// Human-readable time range for list rows, e.g. "09:00 - 09:15".
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_event() {
        let event = Event::new("Standup", "09:00", "09:15", "Daily sync");
        assert_eq!(event.name, "Standup");
        assert_eq!(event.start_time, "09:00");
        assert_eq!(event.end_time, "09:15");
        assert_eq!(event.description, "Daily sync");
    }

    #[test]
    fn test_empty_fields_allowed() {
        let event = Event::default();
        assert_eq!(event.name, "");
        assert_eq!(event.start_time, "");
        assert_eq!(event.end_time, "");
        assert_eq!(event.description, "");
    }

    #[test]
    fn test_time_range() {
        let event = Event::new("Lunch", "12:00", "13:00", "");
        assert_eq!(event.time_range(), "12:00 - 13:00");
    }

    #[test]
    fn test_serializes_camel_case() {
        let event = Event::new("Standup", "09:00", "09:15", "");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"endTime\""));

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
