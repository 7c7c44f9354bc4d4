use chrono::{Local, NaiveDate};

use crate::models::event::Event;

/// Draft event being composed in the Add Event dialog.
///
/// Four free-form text fields, no validation. The draft is cleared only
/// after a successful save; closing the dialog keeps whatever was typed, so
/// reopening it (on any day) shows the previous draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

impl EventForm {
    /// Converts the draft into an event record, leaving the draft in place.
    pub fn to_event(&self) -> Event {
        Event::new(
            self.name.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.description.clone(),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UI state outside the event store: displayed month, selected day, dialog
/// visibility, and the in-progress draft.
pub struct ViewState {
    /// Anchor for the displayed month; only year and month matter downstream.
    pub current_date: NaiveDate,
    /// Day the dialog and the event list refer to. Survives dialog close so
    /// the list below the grid keeps showing the chosen day.
    pub selected_date: Option<NaiveDate>,
    pub dialog_open: bool,
    pub form: EventForm,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_date: Local::now().date_naive(),
            selected_date: None,
            dialog_open: false,
            form: EventForm::default(),
        }
    }
}

impl ViewState {
    /// Day-cell click: remember the day and open the dialog. The draft is
    /// intentionally left as-is.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.dialog_open = true;
    }

    /// Commits the draft: returns the event to append, clears the form, and
    /// closes the dialog. Returns `None` when no day has been selected, which
    /// is unreachable through the UI since the save control lives inside the
    /// dialog.
    pub fn take_saved_event(&mut self) -> Option<(NaiveDate, Event)> {
        let date = self.selected_date?;
        let event = self.form.to_event();
        self.form.clear();
        self.dialog_open = false;
        Some((date, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_select_day_opens_dialog() {
        let mut state = ViewState::default();
        state.select_day(march_15());

        assert!(state.dialog_open);
        assert_eq!(state.selected_date, Some(march_15()));
    }

    #[test]
    fn test_select_day_keeps_existing_draft() {
        let mut state = ViewState::default();
        state.form.name = "half-typed".to_string();
        state.select_day(march_15());

        assert_eq!(state.form.name, "half-typed");
    }

    #[test]
    fn test_save_resets_form_and_closes_dialog() {
        let mut state = ViewState::default();
        state.select_day(march_15());
        state.form = EventForm {
            name: "Standup".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
            description: String::new(),
        };

        let (date, event) = state.take_saved_event().unwrap();
        assert_eq!(date, march_15());
        assert_eq!(event, Event::new("Standup", "09:00", "09:15", ""));
        assert_eq!(state.form, EventForm::default());
        assert!(!state.dialog_open);
    }

    #[test]
    fn test_save_without_selection_is_none() {
        let mut state = ViewState::default();
        state.form.name = "orphan".to_string();

        assert!(state.take_saved_event().is_none());
        assert_eq!(state.form.name, "orphan");
    }

    #[test]
    fn test_selected_date_survives_dialog_close() {
        let mut state = ViewState::default();
        state.select_day(march_15());
        state.dialog_open = false;

        assert_eq!(state.selected_date, Some(march_15()));
    }
}
