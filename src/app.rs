use std::time::Duration;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct QualityDashboardApp {
    pub state: AppState,
}

impl QualityDashboardApp {
    /// Create the app and kick off the startup dataset load.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::default();
        state.locale = config.locale;
        state.start_load(config.data.clone());
        Self { state }
    }
}

impl eframe::App for QualityDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.loading && !self.state.poll_load() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("selection_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: indicators ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::dashboard(ui, &self.state);
        });

        panels::notice_modal(ctx, &mut self.state);
    }
}
