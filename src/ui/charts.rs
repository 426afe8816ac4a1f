use std::f64::consts::TAU;

use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot, PlotPoints, Polygon};

use crate::color::ColorMap;
use crate::data::stats::{AnswerGroup, Breakdown};

/// Arc resolution of a full pie.
const PIE_SEGMENTS: usize = 96;

/// Bar width when bars sit at their bucket value on a 0..=100 axis.
const VALUE_BAR_WIDTH: f64 = 15.0;

/// Bar width when bars take consecutive integer slots.
const SLOT_BAR_WIDTH: f64 = 0.6;

// ---------------------------------------------------------------------------
// Pie chart (Yes/No questions in the overview)
// ---------------------------------------------------------------------------

pub fn pie_chart(ui: &mut Ui, id: &str, breakdown: &Breakdown) {
    let colors = ColorMap::for_breakdown(breakdown);

    Plot::new(id)
        .height(240.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (group, (start, end)) in breakdown.groups.iter().zip(slice_angles(breakdown)) {
                let points: PlotPoints = wedge(start, end).collect();
                let polygon = Polygon::new(points)
                    .fill_color(colors.color_for(&group.answer))
                    .name(slice_label(group));
                plot_ui.polygon(polygon);
            }
        });

    members(ui, id, breakdown);
}

/// Legend and hover text of one slice: the answer, its share and who gave it.
fn slice_label(group: &AnswerGroup) -> String {
    let label = format!("{} ({}, {:.1}%)", group.answer, group.count, group.percent);
    let preview = group.members_preview();
    if preview.is_empty() {
        label
    } else {
        format!("{label}\n{preview}")
    }
}

/// Start and end angle of every slice, clockwise from twelve o'clock.
fn slice_angles(breakdown: &Breakdown) -> Vec<(f64, f64)> {
    let mut start = 0.0;
    breakdown
        .groups
        .iter()
        .map(|g| {
            let sweep = if breakdown.total == 0 {
                0.0
            } else {
                g.count as f64 / breakdown.total as f64 * TAU
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Outline of a unit-circle slice, starting at the centre.
fn wedge(start: f64, end: f64) -> impl Iterator<Item = [f64; 2]> {
    let steps = (((end - start) / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
    std::iter::once([0.0, 0.0]).chain((0..=steps).map(move |i| {
        let angle = start + (end - start) * i as f64 / steps as f64;
        [angle.sin(), angle.cos()]
    }))
}

// ---------------------------------------------------------------------------
// Bar chart (percentage questions, and the filtered view)
// ---------------------------------------------------------------------------

pub fn bar_chart(ui: &mut Ui, id: &str, breakdown: &Breakdown, x_label: &str) {
    let colors = ColorMap::for_breakdown(breakdown);
    let axis = BarAxis::for_breakdown(breakdown);
    let ticks = axis.ticks.clone();
    let labels = axis.ticks.clone();

    Plot::new(id)
        .height(260.0)
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_grid_spacer(move |_input| {
            ticks
                .iter()
                .map(|(x, _)| GridMark {
                    value: *x,
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(move |mark, _range| tick_label(&labels, mark.value))
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (group, (x, _)) in breakdown.groups.iter().zip(&axis.ticks) {
                let color = colors.color_for(&group.answer);
                let bar = Bar::new(*x, group.count as f64)
                    .width(axis.bar_width)
                    .fill(color)
                    .name(group.members_preview());
                let chart = BarChart::new(vec![bar])
                    .color(color)
                    .name(format!("{} ({})", group.answer, group.count));
                plot_ui.bar_chart(chart);
            }
        });

    members(ui, id, breakdown);
}

/// Where the bars of a chart sit on the x axis.
#[derive(Debug, Clone, PartialEq)]
struct BarAxis {
    /// Position and tick label of every group, in breakdown order.
    ticks: Vec<(f64, String)>,
    bar_width: f64,
}

impl BarAxis {
    /// Numeric answers (percentage buckets) sit at their own value; any
    /// other answers take the slots 0, 1, 2, ... labelled with the answer.
    fn for_breakdown(breakdown: &Breakdown) -> Self {
        let values: Option<Vec<f64>> = breakdown
            .groups
            .iter()
            .map(|g| g.answer.parse::<f64>().ok())
            .collect();

        match values {
            Some(values) => BarAxis {
                ticks: values
                    .into_iter()
                    .zip(&breakdown.groups)
                    .map(|(x, g)| (x, g.answer.clone()))
                    .collect(),
                bar_width: VALUE_BAR_WIDTH,
            },
            None => BarAxis {
                ticks: breakdown
                    .groups
                    .iter()
                    .enumerate()
                    .map(|(i, g)| (i as f64, g.answer.clone()))
                    .collect(),
                bar_width: SLOT_BAR_WIDTH,
            },
        }
    }
}

/// Label of the tick at `x`; blank between bars.
fn tick_label(ticks: &[(f64, String)], x: f64) -> String {
    ticks
        .iter()
        .find(|(pos, _)| (pos - x).abs() < 1e-6)
        .map(|(_, label)| label.clone())
        .unwrap_or_default()
}

/// Collapsible list of who gave each answer.
fn members(ui: &mut Ui, id: &str, breakdown: &Breakdown) {
    egui::CollapsingHeader::new("Members")
        .id_salt((id, "members"))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for group in &breakdown.groups {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.strong(format!("{}:", group.answer));
                    ui.label(group.members_preview());
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(answers: &[(&str, usize)]) -> Breakdown {
        let total: usize = answers.iter().map(|(_, count)| count).sum();
        Breakdown {
            total,
            groups: answers
                .iter()
                .map(|&(answer, count)| AnswerGroup {
                    answer: answer.to_string(),
                    count,
                    percent: count as f64 / total as f64 * 100.0,
                    members: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn slices_cover_the_full_circle() {
        let angles = slice_angles(&labelled(&[("a", 1), ("b", 2), ("c", 1)]));
        assert_eq!(angles.len(), 3);
        assert_eq!(angles[0].0, 0.0);
        assert!((angles[0].1 - TAU / 4.0).abs() < 1e-12);
        assert_eq!(angles[1].0, angles[0].1);
        assert!((angles[2].1 - TAU).abs() < 1e-12);
    }

    #[test]
    fn wedge_starts_at_centre_and_stays_on_the_unit_circle() {
        let points: Vec<[f64; 2]> = wedge(0.0, TAU / 2.0).collect();
        assert_eq!(points[0], [0.0, 0.0]);
        assert!(points.len() > 3);
        for [x, y] in &points[1..] {
            assert!(((x * x + y * y) - 1.0).abs() < 1e-9);
        }
        let last = points[points.len() - 1];
        assert!((last[1] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn bucket_bars_sit_at_their_value() {
        let axis = BarAxis::for_breakdown(&labelled(&[("0", 2), ("50", 1), ("100", 4)]));
        let positions: Vec<f64> = axis.ticks.iter().map(|(x, _)| *x).collect();
        assert_eq!(positions, [0.0, 50.0, 100.0]);
        assert_eq!(axis.bar_width, VALUE_BAR_WIDTH);
        assert_eq!(tick_label(&axis.ticks, 100.0), "100");
        assert_eq!(tick_label(&axis.ticks, 2.0), "");
    }

    #[test]
    fn text_answers_take_labelled_slots() {
        let axis = BarAxis::for_breakdown(&labelled(&[("Não", 3), ("Sim", 5)]));
        let positions: Vec<f64> = axis.ticks.iter().map(|(x, _)| *x).collect();
        assert_eq!(positions, [0.0, 1.0]);
        assert_eq!(axis.bar_width, SLOT_BAR_WIDTH);
        assert_eq!(tick_label(&axis.ticks, 0.0), "Não");
        assert_eq!(tick_label(&axis.ticks, 1.0), "Sim");
        assert_eq!(tick_label(&axis.ticks, 0.5), "");
    }

    #[test]
    fn slice_label_lists_members() {
        let mut group = labelled(&[("Sim", 2)]).groups.remove(0);
        assert_eq!(slice_label(&group), "Sim (2, 100.0%)");
        group.members = vec!["Ana".to_string(), "Bia".to_string()];
        assert_eq!(slice_label(&group), "Sim (2, 100.0%)\nAna, Bia");
    }
}
