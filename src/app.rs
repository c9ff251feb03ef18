use crate::toast::{ToastConfig, Toasts, fonts};
use crate::ui::DemoWindow;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
/// Live toasts are never persisted, only the demo form and overlay config.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DemoApp {
    demo: DemoWindow,
    toast_config: ToastConfig,
    #[serde(skip)]
    toasts: Toasts,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            demo: DemoWindow::new(),
            toast_config: ToastConfig::default(),
            toasts: Toasts::new(),
        }
    }
}

impl DemoApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Set theme to dark
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        // Icons must be in the font atlas before any toast draws
        fonts::install_icon_font(&cc.egui_ctx);

        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.toasts = Toasts::new().with_config(app.toast_config.clone());
        log::info!("Demo app started with {:?}", app.toast_config);
        app
    }
}

impl eframe::App for DemoApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.toast_config = self.toasts.config().clone();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button("Toast Demo").clicked() {
                    self.demo.open = true;
                }
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("egui toast overlay");
            ui.label("Notifications stack up in the bottom-right corner.");
        });

        self.demo.show(ctx, &mut self.toasts);

        // Toasts overlay everything else, so they go last
        self.toasts.show(ctx);
    }
}
