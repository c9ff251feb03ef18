use egui::{Color32, ComboBox, Context, DragValue, RichText, Slider, Ui, Window};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::toast::{Clock, Toast, ToastBuilder, ToastKind, Toasts};

const LONG_MESSAGE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation";

/// Demo window with buttons for every toast kind and a custom toast form
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoWindow {
    pub open: bool,
    pub title: String,
    pub content: String,
    /// Signed so the form can be typed below zero, clamped before use
    pub duration_ms: i32,
    pub kind: ToastKind,
    pub enable_title: bool,
    pub enable_content: bool,
}

impl Default for DemoWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoWindow {
    pub fn new() -> Self {
        Self {
            open: true,
            title: "A wonderful quote!".to_owned(),
            content: "Ours is a friendship forged once in this life, and again in the next. Goodbye, my brother. \n- Dembe Zuma".to_owned(),
            duration_ms: 5000, // 5 seconds
            kind: ToastKind::Success,
            enable_title: true,
            enable_content: true,
        }
    }

    /// Display the demo window
    pub fn show<C: Clock>(&mut self, ctx: &Context, toasts: &mut Toasts<C>) {
        let mut open = self.open;
        Window::new("Toast Demo")
            .open(&mut open)
            .default_pos([650.0, 20.0])
            .default_width(550.0)
            .show(ctx, |ui| {
                ui.label(format!("Toast overlay says hello. ({})", env!("CARGO_PKG_VERSION")));

                egui::CollapsingHeader::new("Examples without title")
                    .default_open(true)
                    .show(ui, |ui| Self::render_examples(ui, toasts));

                egui::CollapsingHeader::new("Do it yourself")
                    .default_open(true)
                    .show(ui, |ui| self.render_custom_form(ui, toasts));

                egui::CollapsingHeader::new("Overlay")
                    .default_open(true)
                    .show(ui, |ui| Self::render_overlay_controls(ui, toasts));
            });
        self.open = open;
    }

    fn render_examples<C: Clock>(ui: &mut Ui, toasts: &mut Toasts<C>) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Success").clicked() {
                toasts.add(
                    Toast::builder(ToastKind::Success)
                        .content(format!(
                            "Hello World! This is a success! {}",
                            "We can also format here:)"
                        ))
                        .dismiss_millis(3000),
                );
            }
            if ui.button("Warning").clicked() {
                toasts.add(
                    Toast::builder(ToastKind::Warning)
                        .content("Hello World! This is a warning!")
                        .dismiss_millis(3000),
                );
            }
            if ui.button("Error").clicked() {
                toasts.add(
                    Toast::builder(ToastKind::Error)
                        .content("Hello World! This is an error!")
                        .dismiss_millis(3000),
                );
            }
            if ui.button("Info").clicked() {
                toasts.add(
                    Toast::builder(ToastKind::Info)
                        .content("Hello World! This is an info!")
                        .dismiss_millis(3000),
                );
            }
            if ui.button("Info long").clicked() {
                toasts.add(
                    Toast::builder(ToastKind::Info)
                        .content(LONG_MESSAGE)
                        .dismiss_millis(3000),
                );
            }
            if ui.button("Random").clicked() {
                let mut rng = rand::rng();
                let kind = ToastKind::ALL[rng.random_range(0..ToastKind::ALL.len())];
                let duration = rng.random_range(500..=6000);
                toasts.add(
                    Toast::builder(kind)
                        .content(format!("Random {} toast for {duration} ms", kind.label()))
                        .dismiss_millis(duration),
                );
            }
        });
    }

    fn render_custom_form<C: Clock>(&mut self, ui: &mut Ui, toasts: &mut Toasts<C>) {
        ui.label("Title");
        ui.text_edit_multiline(&mut self.title);
        ui.label("Content");
        ui.text_edit_multiline(&mut self.content);

        ui.horizontal(|ui| {
            ui.label("Duration (ms)");
            ui.add(DragValue::new(&mut self.duration_ms).speed(100));
        });
        // Shouldn't be negative
        if self.duration_ms < 0 {
            self.duration_ms = 0;
        }

        ComboBox::from_label("Type")
            .selected_text(self.kind.label())
            .show_ui(ui, |ui| {
                for kind in ToastKind::ALL {
                    ui.selectable_value(&mut self.kind, kind, kind.label());
                }
            });

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.enable_title, "Enable title");
            ui.checkbox(&mut self.enable_content, "Enable content");
        });

        if ui.button("Show").clicked() {
            toasts.add(self.custom_toast());
        }
    }

    fn render_overlay_controls<C: Clock>(ui: &mut Ui, toasts: &mut Toasts<C>) {
        let config = toasts.config_mut();
        ui.add(Slider::new(&mut config.opacity, 0.0..=1.0).text("Opacity"));
        ui.checkbox(&mut config.colored_icons, "Colored icons");

        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Active toasts: {}", toasts.len())).color(Color32::GRAY));

            if ui.button("Dismiss oldest").clicked() {
                if let Err(e) = toasts.remove(0) {
                    log::warn!("Dismiss oldest failed: {e}");
                }
            }
            if ui.button("Clear all").clicked() {
                toasts.clear();
            }
        });
    }

    /// Toast described by the "do it yourself" form
    pub fn custom_toast(&self) -> ToastBuilder {
        let mut builder = Toast::builder(self.kind).dismiss_millis(self.duration_ms as i64);
        if self.enable_title {
            builder = builder.title(self.title.clone());
        }
        if self.enable_content {
            builder = builder.content(self.content.clone());
        }
        builder
    }
}
