use std::time::Duration;

use eframe::egui;

use crate::config::DataSources;
use crate::state::AppState;
use crate::ui::{panels, sections};

/// How often to look for edited source files while the window is idle.
const SOURCE_POLL_INTERVAL: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(sources: DataSources) -> Self {
        Self {
            state: AppState::new(sources),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Each frame is one render cycle: memoized load, then filter.
        self.state.refresh();
        ctx.request_repaint_after(SOURCE_POLL_INTERVAL);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart, table, profiles, insights ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    sections::dashboard(ui, &self.state);
                });
        });
    }
}
