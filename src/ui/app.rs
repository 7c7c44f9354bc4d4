use std::path::PathBuf;

use crate::services::store::persistence::{load_snapshot, save_snapshot, snapshot_path};
use crate::services::store::EventStore;
use crate::ui::event_dialog::render_event_dialog;
use crate::ui::state::ViewState;
use crate::ui::toast::Toasts;
use crate::ui::views::{EventList, EventListAction, MonthView, MonthViewAction};
use crate::utils::date::{change_month, date_key};

pub struct CalendarApp {
    /// Current event mapping; replaced wholesale on every mutation.
    store: EventStore,
    /// Location of the JSON snapshot slot.
    snapshot_path: PathBuf,
    /// Month anchor, selection, dialog visibility, and the draft form.
    state: ViewState,
    toasts: Toasts,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match MonthView::show(ui, self.state.current_date, &self.store) {
                    MonthViewAction::SelectDay(date) => self.state.select_day(date),
                    MonthViewAction::ChangeMonth(delta) => {
                        self.state.current_date = change_month(self.state.current_date, delta);
                    }
                    MonthViewAction::None => {}
                }

                if let Some(date) = self.state.selected_date {
                    let key = date_key(date);
                    let events = self.store.events_on(&key).to_vec();
                    match EventList::show(ui, date, &events) {
                        EventListAction::Delete(index) => self.delete_event(&key, index),
                        EventListAction::Edit(_) => self.edit_event(),
                        EventListAction::None => {}
                    }
                }
            });
        });

        if self.state.dialog_open {
            let result =
                render_event_dialog(ctx, &mut self.state.form, &mut self.state.dialog_open);
            if result.save_requested {
                self.save_event();
            }
        }

        self.toasts.show(ctx);
    }
}

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_snapshot_path(snapshot_path())
    }

    /// Builds the app against an explicit snapshot location. Loading fails
    /// open, so a missing or corrupt snapshot starts an empty calendar.
    pub fn with_snapshot_path(path: PathBuf) -> Self {
        let store = load_snapshot(&path);
        Self {
            store,
            snapshot_path: path,
            state: ViewState::default(),
            toasts: Toasts::default(),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Commits the draft under the selected day, then snapshots.
    pub fn save_event(&mut self) {
        if let Some((date, event)) = self.state.take_saved_event() {
            let key = date_key(date);
            let updated = self.store.with_event(&key, event);
            self.commit(updated);
            self.toasts.success("Event saved");
        }
    }

    /// Removes one event by day key and position, then snapshots. An invalid
    /// index or unknown key changes nothing and writes nothing.
    pub fn delete_event(&mut self, key: &str, index: usize) {
        let updated = self.store.without_event(key, index);
        if updated != self.store {
            self.commit(updated);
        }
    }

    /// Editing is not implemented; acknowledge explicitly instead of failing
    /// silently.
    pub fn edit_event(&mut self) {
        self.toasts.info("Edit functionality coming soon!");
    }

    /// Replaces the store and writes the snapshot. A failed write keeps the
    /// in-memory state and surfaces an error toast; the next successful
    /// mutation rewrites the whole mapping anyway.
    fn commit(&mut self, updated: EventStore) {
        self.store = updated;
        if let Err(err) = save_snapshot(&self.snapshot_path, &self.store) {
            log::warn!("Failed to save events: {:#}", err);
            self.toasts.error("Failed to save events");
        }
    }
}
