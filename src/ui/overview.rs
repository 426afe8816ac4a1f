use eframe::egui::{ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, tables};

// ---------------------------------------------------------------------------
// Overview – every question over the whole survey
// ---------------------------------------------------------------------------

pub fn overview(ui: &mut Ui, state: &AppState) {
    ui.heading("Overview");

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Yes/No questions");
            for summary in &state.overview.yes_no {
                ui.strong(summary.question);
                if summary.breakdown.is_empty() {
                    ui.label("No answers.");
                } else {
                    let id = format!("overview_yes_no_{}", summary.question);
                    tables::breakdown_table(ui, &id, "Answer", &summary.breakdown);
                    charts::pie_chart(ui, &id, &summary.breakdown);
                }
                ui.separator();
            }

            ui.heading("Percentage questions");
            for summary in &state.overview.percentages {
                match summary.mean {
                    Some(mean) => ui.strong(format!("{}: mean = {mean:.2}", summary.question)),
                    None => ui.strong(format!("{}: no answers", summary.question)),
                };
                let id = format!("overview_percent_{}", summary.question);
                charts::bar_chart(ui, &id, &summary.breakdown, "Value");
                ui.separator();
            }
        });
}
