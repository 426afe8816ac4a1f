use eframe::egui::{self, Grid, RichText, ScrollArea, Ui};

use crate::state::AppState;

const NO_SELECTION: &str = "Select a member";

pub fn individual(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Individual Analysis");

    let names: Vec<String> = state
        .member_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let selected_text = state
        .selected_name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| NO_SELECTION.to_string());

    egui::ComboBox::from_id_salt("member_select")
        .width(320.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut state.selected_name, None, NO_SELECTION);
            for name in names {
                let label = name.clone();
                ui.selectable_value(&mut state.selected_name, Some(name), label);
            }
        });
    ui.add_space(8.0);

    let Some(profile) = state.selected_profile() else {
        ui.label("Select a member to see the individual analysis.");
        return;
    };

    ui.heading(format!("Member: {}", profile.name));
    if profile.ministry_rows > 1 {
        ui.label(
            RichText::new(format!(
                "Listed in {} ministries; the first one is shown.",
                profile.ministry_rows
            ))
            .weak(),
        );
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            Grid::new("member_profile")
                .striped(true)
                .num_columns(2)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Question");
                    ui.strong("Answer");
                    ui.end_row();
                    for (field, answer) in &profile.fields {
                        ui.label(field.as_str());
                        ui.label(answer.as_str());
                        ui.end_row();
                    }
                });
        });
}
