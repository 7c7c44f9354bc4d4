//! Event list for the selected day, shown below the month grid.
//!
//! One row per event with name, time range, description, and delete/edit
//! controls. Editing is not implemented; the button is wired to an explicit
//! "not available" acknowledgment upstream.

use chrono::NaiveDate;
use egui::RichText;

use crate::models::event::Event;

/// Action emitted by the event list for the current frame.
pub enum EventListAction {
    None,
    /// Delete the event at this index within the day.
    Delete(usize),
    /// Edit was requested; unsupported, acknowledged with a toast.
    Edit(usize),
}

pub struct EventList;

impl EventList {
    pub fn show(ui: &mut egui::Ui, date: NaiveDate, events: &[Event]) -> EventListAction {
        let mut action = EventListAction::None;

        ui.add_space(12.0);
        ui.heading(format!("Events on {}", date.format("%-m/%-d/%Y")));
        ui.add_space(4.0);

        if events.is_empty() {
            ui.label(RichText::new("No events for this day.").weak());
            return action;
        }

        for (index, event) in events.iter().enumerate() {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(event.name.as_str()).strong());
                    ui.label(event.time_range());
                    if !event.description.is_empty() {
                        ui.label(event.description.as_str());
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Delete").clicked() {
                            action = EventListAction::Delete(index);
                        }
                        if ui.button("Edit").clicked() {
                            action = EventListAction::Edit(index);
                        }
                    });
                });
            ui.add_space(4.0);
        }

        action
    }
}
