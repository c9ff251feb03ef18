//! Toast notifications for egui
//!
//! Short-lived messages that fade in, wait, fade out and disappear, stacked
//! in the bottom-right corner of the screen. Phase and opacity are derived
//! from elapsed time on an injectable [`Clock`], never stored.

use std::time::Duration;

mod clock;
mod config;
mod error;
pub mod fonts;
mod kind;
mod toast_message;
mod toasts_core;
mod toasts_rendering;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ToastConfig;
pub use error::ToastError;
pub use kind::ToastKind;
pub use toast_message::{Toast, ToastBuilder, ToastPhase};
pub use toasts_core::{ToastId, Toasts};

/// Max message content length in bytes
pub const MAX_MSG_LENGTH: usize = 255;
/// Bottom-right X padding
pub const PADDING_X: f32 = 20.0;
/// Bottom-right Y padding
pub const PADDING_Y: f32 = 20.0;
/// Padding Y between each message
pub const PADDING_MESSAGE_Y: f32 = 10.0;
/// Fade in and fade out duration
pub const FADE_IN_OUT_TIME: Duration = Duration::from_millis(150);
/// Auto dismiss delay when none is given
pub const DEFAULT_DISMISS: Duration = Duration::from_millis(3000);
/// Toast opacity, 0-1
pub const OPACITY: f32 = 1.0;
