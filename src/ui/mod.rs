// UI component modules
mod demo_window;

pub use demo_window::DemoWindow;
