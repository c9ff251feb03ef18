use serde::{Deserialize, Serialize};

use super::{OPACITY, PADDING_MESSAGE_Y, PADDING_X, PADDING_Y};

/// Layout and look of the toast overlay.
///
/// Derives serde so a host app can persist it alongside its own state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)] // new fields fall back to their defaults in old saves
pub struct ToastConfig {
    /// Gap between the screen's right edge and the toasts
    pub padding_x: f32,
    /// Gap between the screen's bottom edge and the first toast
    pub padding_y: f32,
    /// Vertical gap between stacked toasts
    pub message_padding_y: f32,
    /// Global opacity multiplier, 0-1
    pub opacity: f32,
    /// Tint icons with the kind's accent color
    pub colored_icons: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            padding_x: PADDING_X,
            padding_y: PADDING_Y,
            message_padding_y: PADDING_MESSAGE_Y,
            opacity: OPACITY,
            colored_icons: true,
        }
    }
}

impl ToastConfig {
    /// Opacity for a toast at the given fade percent
    pub fn opacity_for(&self, fade_percent: f32) -> f32 {
        (self.opacity * fade_percent).clamp(0.0, 1.0)
    }
}
