use eframe::egui::{self, Grid, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::SurveyTable;
use crate::data::stats::Breakdown;

/// Answer / count / percent grid for one question.
pub fn breakdown_table(ui: &mut Ui, id: &str, answer_header: &str, breakdown: &Breakdown) {
    Grid::new(id)
        .striped(true)
        .num_columns(3)
        .show(ui, |ui: &mut Ui| {
            ui.strong(answer_header);
            ui.strong("Count");
            ui.strong("Percent");
            ui.end_row();

            for group in &breakdown.groups {
                ui.label(group.answer.as_str());
                ui.label(group.count.to_string());
                ui.label(format!("{:.1}%", group.percent));
                ui.end_row();
            }
        });
}

/// Scrollable table of the rows at `indices`, in the table's column order.
pub fn respondent_table(ui: &mut Ui, table: &SurveyTable, indices: &[usize]) {
    egui::ScrollArea::horizontal()
        .id_salt("respondent_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(TableColumn::auto().at_least(36.0))
                .columns(
                    TableColumn::initial(140.0).at_least(60.0).clip(true),
                    table.columns.len(),
                )
                .max_scroll_height(360.0)
                .header(22.0, |mut header| {
                    header.col(|ui: &mut Ui| {
                        ui.strong("#");
                    });
                    for column in &table.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(column.header()).on_hover_text(column.header());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, indices.len(), |mut row| {
                        let respondent = &table.rows[indices[row.index()]];
                        row.col(|ui: &mut Ui| {
                            ui.label(respondent.row.to_string());
                        });
                        for column in &table.columns {
                            row.col(|ui: &mut Ui| {
                                ui.label(respondent.cell(column).as_ref());
                            });
                        }
                    });
                });
        });
}
