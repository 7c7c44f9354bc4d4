//! Toast notifications for brief feedback messages.
//!
//! Non-blocking notices that appear in the top-right corner and expire after
//! a few seconds. Used for action confirmations ("Event saved"), the
//! edit-unavailable acknowledgment, and snapshot write failures.

use egui::{Align2, Color32, Context, Id, RichText, Vec2};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Error => "✗",
        }
    }

    fn background_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(30, 70, 40),
            ToastLevel::Info => Color32::from_rgb(30, 50, 80),
            ToastLevel::Error => Color32::from_rgb(80, 30, 30),
        }
    }

    fn text_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(100, 220, 120),
            ToastLevel::Info => Color32::from_rgb(100, 180, 255),
            ToastLevel::Error => Color32::from_rgb(255, 120, 120),
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    fn expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Active toasts, newest at the bottom of the stack.
#[derive(Default)]
pub struct Toasts {
    toasts: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    /// Draws all live toasts and drops the expired ones. Requests a repaint
    /// while any toast is visible so expiry doesn't wait for input.
    pub fn show(&mut self, ctx: &Context) {
        self.toasts.retain(|toast| !toast.expired());
        if self.toasts.is_empty() {
            return;
        }

        let mut offset = 8.0;
        for (i, toast) in self.toasts.iter().enumerate() {
            egui::Area::new(Id::new("toast").with(i))
                .anchor(Align2::RIGHT_TOP, Vec2::new(-8.0, offset))
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(toast.level.background_color())
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(toast.level.icon())
                                        .color(toast.level.text_color())
                                        .strong(),
                                );
                                ui.label(
                                    RichText::new(toast.message.as_str())
                                        .color(toast.level.text_color()),
                                );
                            });
                        });
                });
            offset += 40.0;
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
