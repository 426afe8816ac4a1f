use eframe::egui::{self, Ui};

use crate::data::schema::Question;
use crate::data::stats::question_breakdown;
use crate::state::AppState;
use crate::ui::{charts, tables};

// ---------------------------------------------------------------------------
// Filtered analysis – the rows passing the side-panel filters
// ---------------------------------------------------------------------------

pub fn filtered(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtered Analysis");
    ui.label(format!(
        "{} of {} rows match the filters",
        state.visible_indices.len(),
        state.table().len()
    ));

    ui.push_id("filtered_rows", |ui: &mut Ui| {
        tables::respondent_table(ui, state.table(), &state.visible_indices);
    });
    ui.separator();

    ui.heading("Answer charts");
    egui::ComboBox::from_id_salt("chart_question")
        .width(ui.available_width().min(640.0))
        .selected_text(state.chart_question.column())
        .show_ui(ui, |ui: &mut Ui| {
            for question in Question::all() {
                ui.selectable_value(&mut state.chart_question, question, question.column());
            }
        });

    let question = state.chart_question;
    let breakdown = question_breakdown(state.visible_rows(), question);
    if breakdown.is_empty() {
        ui.label("No rows match the current filters.");
        return;
    }

    let x_label = match question {
        Question::YesNo(_) => "Answer",
        Question::Percent(_) => "Value",
    };
    ui.strong(question.column());
    tables::breakdown_table(ui, "filtered_breakdown", x_label, &breakdown);
    charts::bar_chart(ui, "filtered_chart", &breakdown, x_label);
}
