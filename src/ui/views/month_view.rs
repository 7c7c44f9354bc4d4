//! Month grid rendering.
//!
//! Navigation header, weekday strip, and a 7-column grid of day cells. Only
//! the month's own days are rendered; there are no leading or trailing
//! filler cells, so day 1 always starts the first row regardless of weekday.

use chrono::{Datelike, Local, NaiveDate};
use egui::{Color32, FontId, Sense, Stroke, Vec2};

use crate::services::store::EventStore;
use crate::utils::date::{date_key, days_in_month};

const CELL_SPACING: f32 = 4.0;
const CELL_HEIGHT: f32 = 72.0;
const HEADER_HEIGHT: f32 = 24.0;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Action emitted by the month view for the current frame.
pub enum MonthViewAction {
    None,
    /// A day cell was clicked.
    SelectDay(NaiveDate),
    /// Previous/next navigation; delta is in months.
    ChangeMonth(i32),
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        store: &EventStore,
    ) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        // Navigation header: previous | month heading | next
        ui.horizontal(|ui| {
            if ui.button("Previous").clicked() {
                action = MonthViewAction::ChangeMonth(-1);
            }
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("Next").clicked() {
                        action = MonthViewAction::ChangeMonth(1);
                    }
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.heading(current_date.format("%B %Y").to_string());
                        },
                    );
                },
            );
        });
        ui.add_space(8.0);

        let total_spacing = CELL_SPACING * 6.0; // 6 gaps between 7 columns
        let col_width = (ui.available_width() - total_spacing) / 7.0;

        egui::Grid::new("month_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for name in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(
                                egui::RichText::new(name)
                                    .strong()
                                    .color(ui.visuals().weak_text_color()),
                            );
                        },
                    );
                }
                ui.end_row();

                let today = Local::now().date_naive();
                let days = days_in_month(current_date.year(), current_date.month());
                for row in days.chunks(7) {
                    for &date in row {
                        if Self::render_day_cell(ui, date, date == today, store, col_width) {
                            action = MonthViewAction::SelectDay(date);
                        }
                    }
                    ui.end_row();
                }
            });

        action
    }

    /// Renders one day cell; returns true when it was clicked.
    fn render_day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        is_today: bool,
        store: &EventStore,
        col_width: f32,
    ) -> bool {
        let desired_size = Vec2::new(col_width, CELL_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        let visuals = ui.visuals();
        let bg_color = if is_today {
            Color32::from_rgb(59, 130, 246)
        } else if response.hovered() {
            visuals.widgets.hovered.bg_fill
        } else {
            visuals.extreme_bg_color
        };
        let text_color = if is_today {
            Color32::WHITE
        } else {
            visuals.text_color()
        };

        ui.painter().rect_filled(rect, 4.0, bg_color);
        ui.painter()
            .rect_stroke(rect, 4.0, Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color));

        ui.painter().text(
            rect.left_top() + Vec2::new(8.0, 6.0),
            egui::Align2::LEFT_TOP,
            date.day().to_string(),
            FontId::proportional(16.0),
            text_color,
        );

        let count = store.count_on(&date_key(date));
        if count > 0 {
            let badge = format!("{} Events", count);
            ui.painter().text(
                rect.center_bottom() - Vec2::new(0.0, 8.0),
                egui::Align2::CENTER_BOTTOM,
                &badge,
                FontId::proportional(12.0),
                if is_today {
                    Color32::WHITE
                } else {
                    Color32::from_rgb(59, 130, 246)
                },
            );
            response.clone().on_hover_text(badge);
        }

        response.clicked()
    }
}
