use egui::{Align2, Area, Context, Frame, Id, Label, Order, Rect, RichText, Ui, vec2};

use super::toasts_core::Entry;
use super::{Clock, Toast, Toasts};

/// Toasts wider than this wrap their text
const TOAST_MAX_WIDTH: f32 = 360.0;

impl<C: Clock> Toasts<C> {
    /// Prune expired toasts, then draw the rest stacked up from the
    /// bottom-right corner. Returns the screen rect of every toast drawn,
    /// oldest first.
    pub fn show(&mut self, ctx: &Context) -> Vec<Rect> {
        // One clock read per frame, so nothing pruned as live is drawn expired
        let now = self.now();
        self.prune_at(now);
        if self.entries.is_empty() {
            return Vec::new();
        }

        let mut height = 0.0;
        let mut rects = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let opacity = self.config.opacity_for(entry.toast.fade_percent_at(now));
            let rect = self.render_toast(ctx, entry, opacity, height);

            // Save height for next toasts
            height += rect.height() + self.config.message_padding_y;
            rects.push(rect);
        }

        // Fades only animate if the host keeps painting
        ctx.request_repaint();
        rects
    }

    fn render_toast(&self, ctx: &Context, entry: &Entry, opacity: f32, height: f32) -> Rect {
        let offset = vec2(
            -self.config.padding_x,
            -self.config.padding_y - height,
        );

        Area::new(Id::new("toast_overlay").with(entry.id))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_BOTTOM, offset)
            .interactable(false)
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(TOAST_MAX_WIDTH);
                    self.render_toast_body(ui, &entry.toast);
                });
            })
            .response
            .rect
    }

    fn render_toast_body(&self, ui: &mut Ui, toast: &Toast) {
        let icon = toast.kind().icon().map(|icon| {
            let text = RichText::new(icon);
            match toast.kind().color() {
                Some(color) if self.config.colored_icons => text.color(color),
                _ => text,
            }
        });

        match toast.title() {
            Some(title) => {
                ui.horizontal_top(|ui| {
                    if let Some(icon) = icon {
                        ui.label(icon);
                    }
                    ui.add(Label::new(RichText::new(title).strong()).wrap());
                });
                if !toast.content().is_empty() {
                    ui.separator();
                    ui.add(Label::new(toast.content()).wrap());
                }
            }
            None => {
                ui.horizontal_top(|ui| {
                    if let Some(icon) = icon {
                        ui.label(icon);
                    }
                    ui.add(Label::new(toast.content()).wrap());
                });
            }
        }
    }
}
