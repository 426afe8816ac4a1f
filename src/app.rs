use eframe::egui;

use crate::data::model::SurveyTable;
use crate::state::{AppState, View};
use crate::ui::{filtered, individual, overview, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SurveyApp {
    pub state: AppState,
}

impl SurveyApp {
    pub fn new(table: SurveyTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for SurveyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Left side panel: navigation and filters ----
        egui::SidePanel::left("side_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the selected view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Overview => overview::overview(ui, &self.state),
            View::Individual => individual::individual(ui, &mut self.state),
            View::Filtered => filtered::filtered(ui, &mut self.state),
        });
    }
}
