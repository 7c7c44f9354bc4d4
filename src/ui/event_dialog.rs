//! The Add Event dialog: four labeled text inputs bound to the draft form
//! and a save button.
//!
//! Closing the window without saving leaves the draft untouched; only a save
//! clears it (handled by the caller through `ViewState::take_saved_event`).

use egui::RichText;

use super::state::EventForm;

const FORM_LABEL_WIDTH: f32 = 90.0;

/// Outcome of rendering the dialog for one frame.
#[derive(Default)]
pub struct EventDialogResult {
    /// The user pressed Save this frame.
    pub save_requested: bool,
}

pub fn render_event_dialog(
    ctx: &egui::Context,
    form: &mut EventForm,
    show_dialog: &mut bool,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();
    let mut dialog_open = *show_dialog;

    egui::Window::new("Add Event")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            form_row(ui, "Event Name", &mut form.name, "Enter event name");
            form_row(ui, "Start Time", &mut form.start_time, "e.g., 10:00 AM");
            form_row(ui, "End Time", &mut form.end_time, "e.g., 11:00 AM");
            form_row(
                ui,
                "Description",
                &mut form.description,
                "Optional: Enter event details",
            );

            ui.add_space(8.0);
            let save = egui::Button::new(RichText::new("Save Event").strong());
            if ui
                .add_sized([ui.available_width(), 28.0], save)
                .clicked()
            {
                result.save_requested = true;
            }
        });

    if !dialog_open {
        *show_dialog = false;
    }

    result
}

fn form_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [FORM_LABEL_WIDTH, 20.0],
            egui::Label::new(RichText::new(label).strong()),
        );
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(ui.available_width()),
        );
    });
    ui.add_space(4.0);
}
