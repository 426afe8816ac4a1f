use std::collections::BTreeSet;
use std::path::PathBuf;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::{AnswerFilter, FilterState, Selection};
use crate::data::model::Bucket;
use crate::data::schema::{PercentQuestion, YesNoQuestion};
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – navigation and filter widgets
// ---------------------------------------------------------------------------

/// Render the navigation selector and, in the filtered view, the filters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    for view in View::ALL {
        ui.radio_value(&mut state.view, view, view.label());
    }
    ui.separator();

    if state.view != View::Filtered {
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Filters");
        if ui.small_button("Reset").clicked() {
            state.reset_filters();
        }
    });

    // Clone what we need so we can mutate state after the widgets ran.
    let table = state.table();
    let ministries = table.ministries.clone();
    let marital_statuses = table.marital_statuses.clone();
    let relationship_statuses = table.relationship_statuses.clone();
    let mut filters = state.filters.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            selection_filter(ui, "Ministry", &ministries, &mut filters.ministries);
            selection_filter(ui, "Marital status", &marital_statuses, &mut filters.marital_statuses);
            selection_filter(
                ui,
                "In a relationship?",
                &relationship_statuses,
                &mut filters.relationship_statuses,
            );

            ui.separator();
            ui.strong("Yes/No questions");
            for question in YesNoQuestion::ALL {
                answer_filter(ui, question, &mut filters);
            }

            ui.separator();
            ui.strong("Percentage questions");
            for question in PercentQuestion::ALL {
                bucket_filter(ui, question, &mut filters);
            }
        });

    if filters != state.filters {
        state.update_filters(|f| *f = filters);
    }
}

fn selection_filter(
    ui: &mut Ui,
    title: &str,
    values: &BTreeSet<String>,
    selection: &mut Selection<String>,
) {
    let header_text = match selection {
        Selection::Only(selected) if !selected.is_empty() => {
            format!("{title}  ({}/{})", selected.len(), values.len())
        }
        _ => format!("{title}  (All)"),
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let mut all = selection.is_all();
            if ui.checkbox(&mut all, "All").changed() && all {
                *selection = Selection::All;
            }

            for value in values {
                let mut checked = selection.is_selected(value.as_str());
                let label = if value.is_empty() { "(blank)" } else { value.as_str() };
                if ui.checkbox(&mut checked, label).changed() {
                    selection.toggle(value.clone());
                }
            }
        });
}

fn answer_filter(ui: &mut Ui, question: YesNoQuestion, filters: &mut FilterState) {
    ui.label(question.column());
    let mut choice = filters.answer(question);
    egui::ComboBox::from_id_salt(("answer_filter", question.index()))
        .selected_text(choice.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in AnswerFilter::ALL {
                ui.selectable_value(&mut choice, option, option.label());
            }
        });
    filters.set_answer(question, choice);
}

fn bucket_filter(ui: &mut Ui, question: PercentQuestion, filters: &mut FilterState) {
    ui.label(question.column());
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for bucket in Bucket::ALL {
            let mut checked = filters.allowed_buckets(question).contains(&bucket);
            if ui.checkbox(&mut checked, bucket.to_string()).changed() {
                filters.toggle_bucket(question, bucket);
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar and footer
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Ministry Survey Analysis");
        ui.separator();
        ui.label(format!(
            "{} respondents, {} rows",
            state.overview.respondents,
            state.table().len()
        ));

        if state.view == View::Filtered {
            ui.separator();
            if state.filters.is_unconstrained() {
                ui.label("no filters");
            } else {
                ui.label(format!("{} visible", state.visible_indices.len()));
            }
        }
    });
}

pub fn footer(ui: &mut Ui) {
    ui.label(
        RichText::new(
            "Built to help review the spiritual and financial well-being of members \
             and to find improvements the ministries need.",
        )
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for the survey export when none was given on the command line.
pub fn pick_survey_file() -> Option<PathBuf> {
    let file = rfd::FileDialog::new()
        .set_title("Open survey export")
        .add_filter("CSV", &["csv"])
        .pick_file();

    match &file {
        Some(path) => log::info!("Selected survey {}", path.display()),
        None => log::warn!("No survey file selected"),
    }
    file
}
