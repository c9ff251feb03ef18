#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod toast;
mod ui;

pub use app::DemoApp;
pub use toast::{Toast, ToastKind, Toasts};
pub use ui::DemoWindow;
