use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{Respondent, SurveyTable};
use crate::data::profile::{profile, Profile};
use crate::data::schema::Question;
use crate::report::{summarize, Summary};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overview,
    Individual,
    Filtered,
}

impl View {
    pub const ALL: [View; 3] = [View::Overview, View::Individual, View::Filtered];

    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Individual => "Individual Analysis",
            View::Filtered => "Filtered Analysis",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Normalized survey; loaded once in `main` and only ever read.
    table: SurveyTable,

    /// Overview aggregates over the whole table (computed once).
    pub overview: Summary,

    pub view: View,

    /// Respondent shown in the individual view.
    pub selected_name: Option<String>,

    /// Filter selections of the filtered view.
    pub filters: FilterState,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Question charted in the filtered view.
    pub chart_question: Question,
}

impl AppState {
    pub fn new(table: SurveyTable) -> Self {
        let all_rows: Vec<&Respondent> = table.rows.iter().collect();
        let overview = summarize(&all_rows);
        let visible_indices = (0..table.len()).collect();

        Self {
            table,
            overview,
            view: View::default(),
            selected_name: None,
            filters: FilterState::default(),
            visible_indices,
            chart_question: Question::default(),
        }
    }

    pub fn table(&self) -> &SurveyTable {
        &self.table
    }

    /// Recompute `visible_indices` after filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.filters);
    }

    /// Change the filters and refresh the visible rows.
    pub fn update_filters(&mut self, change: impl FnOnce(&mut FilterState)) {
        change(&mut self.filters);
        self.refilter();
    }

    pub fn reset_filters(&mut self) {
        self.update_filters(|f| *f = FilterState::default());
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Respondent> + '_ {
        self.visible_indices.iter().map(|&i| &self.table.rows[i])
    }

    /// Names offered in the individual view; blank names are not selectable.
    pub fn member_names(&self) -> Vec<&str> {
        self.table
            .names()
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Profile of the selected respondent, if any. A blank name counts as
    /// no selection.
    pub fn selected_profile(&self) -> Option<Profile> {
        self.selected_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .and_then(|name| profile(&self.table, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Selection;
    use crate::data::model::tests::respondent;
    use crate::data::model::Column;

    fn state() -> AppState {
        let rows = vec![
            respondent("Ana", "Youth"),
            respondent("Ana", "Worship"),
            respondent("Bia", "Worship"),
        ];
        AppState::new(SurveyTable::from_rows(rows, vec![Column::Name, Column::Ministry]))
    }

    #[test]
    fn starts_on_overview_with_everything_visible() {
        let s = state();
        assert_eq!(s.view, View::Overview);
        assert_eq!(s.visible_indices, [0, 1, 2]);
        assert_eq!(s.overview.rows, 3);
        assert_eq!(s.overview.respondents, 2);
        assert!(s.selected_profile().is_none());
    }

    #[test]
    fn filtering_never_touches_the_base_table() {
        let mut s = state();
        s.update_filters(|f| f.ministries = Selection::only(["Worship".to_string()]));
        assert_eq!(s.visible_indices, [1, 2]);
        assert_eq!(s.visible_rows().count(), 2);
        assert_eq!(s.table().len(), 3);

        s.reset_filters();
        assert_eq!(s.visible_indices, [0, 1, 2]);
    }

    #[test]
    fn selecting_a_name_yields_its_profile() {
        let mut s = state();
        s.selected_name = Some("Ana".to_string());
        let p = s.selected_profile().unwrap();
        assert_eq!(p.ministry_rows, 2);
        assert_eq!(p.fields[0].1, "Youth");
    }

    #[test]
    fn blank_names_are_not_selectable() {
        let rows = vec![respondent("", "Youth"), respondent("Ana", "Worship")];
        let table = SurveyTable::from_rows(rows, vec![Column::Name, Column::Ministry]);
        let mut s = AppState::new(table);
        assert_eq!(s.member_names(), ["Ana"]);

        s.selected_name = Some(String::new());
        assert!(s.selected_profile().is_none());
    }
}
