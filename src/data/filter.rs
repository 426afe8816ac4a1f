use std::borrow::Borrow;
use std::collections::BTreeSet;

use super::model::{Bucket, Respondent, SurveyTable};
use super::schema::{self, PercentQuestion, YesNoQuestion};

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// Multi-select over a categorical column.
///
/// `Only` with an empty set behaves like `All`: a multi-select the user
/// cleared imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T: Ord> {
    #[default]
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Selection<T> {
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        Selection::Only(values.into_iter().collect())
    }

    pub fn is_all(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.is_empty(),
        }
    }

    pub fn admits<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.is_empty() || values.contains(value),
        }
    }

    /// Whether `value` is explicitly ticked (never true under `All`).
    pub fn is_selected<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self, Selection::Only(values) if values.contains(value))
    }

    /// Tick or untick one value. Ticking from `All` narrows to that value;
    /// unticking the last value returns to `All`.
    pub fn toggle(&mut self, value: T) {
        match self {
            Selection::All => *self = Selection::Only(BTreeSet::from([value])),
            Selection::Only(values) => {
                if !values.remove(&value) {
                    values.insert(value);
                }
                if values.is_empty() {
                    *self = Selection::All;
                }
            }
        }
    }
}

/// Three-way choice for a Yes/No question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerFilter {
    #[default]
    All,
    Yes,
    No,
}

impl AnswerFilter {
    pub const ALL: [AnswerFilter; 3] = [AnswerFilter::All, AnswerFilter::Yes, AnswerFilter::No];

    pub fn label(self) -> &'static str {
        match self {
            AnswerFilter::All => "All",
            AnswerFilter::Yes => schema::YES,
            AnswerFilter::No => schema::NO,
        }
    }

    pub fn admits(self, answer: &str) -> bool {
        match self {
            AnswerFilter::All => true,
            AnswerFilter::Yes => answer == schema::YES,
            AnswerFilter::No => answer == schema::NO,
        }
    }
}

/// The full bucket set; selecting all five (or none) means no constraint.
pub fn all_buckets() -> BTreeSet<Bucket> {
    Bucket::ALL.into_iter().collect()
}

fn bucket_filter_active(allowed: &BTreeSet<Bucket>) -> bool {
    !allowed.is_empty() && allowed.len() != Bucket::ALL.len()
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Every active filter of the filtered view. Filters combine conjunctively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub ministries: Selection<String>,
    pub marital_statuses: Selection<String>,
    pub relationship_statuses: Selection<String>,
    /// Indexed by [`YesNoQuestion::index`].
    pub answers: [AnswerFilter; 8],
    /// Allowed buckets, indexed by [`PercentQuestion::index`].
    pub buckets: [BTreeSet<Bucket>; 8],
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            ministries: Selection::All,
            marital_statuses: Selection::All,
            relationship_statuses: Selection::All,
            answers: [AnswerFilter::All; 8],
            buckets: std::array::from_fn(|_| all_buckets()),
        }
    }
}

impl FilterState {
    pub fn answer(&self, question: YesNoQuestion) -> AnswerFilter {
        self.answers[question.index()]
    }

    pub fn set_answer(&mut self, question: YesNoQuestion, filter: AnswerFilter) {
        self.answers[question.index()] = filter;
    }

    pub fn allowed_buckets(&self, question: PercentQuestion) -> &BTreeSet<Bucket> {
        &self.buckets[question.index()]
    }

    pub fn toggle_bucket(&mut self, question: PercentQuestion, bucket: Bucket) {
        let allowed = &mut self.buckets[question.index()];
        if !allowed.remove(&bucket) {
            allowed.insert(bucket);
        }
    }

    /// True when no filter narrows the table.
    pub fn is_unconstrained(&self) -> bool {
        self.ministries.is_all()
            && self.marital_statuses.is_all()
            && self.relationship_statuses.is_all()
            && self.answers.iter().all(|a| *a == AnswerFilter::All)
            && !self.buckets.iter().any(bucket_filter_active)
    }

    /// Whether one row passes every active filter.
    pub fn admits(&self, row: &Respondent) -> bool {
        if !self.ministries.admits(row.ministry.as_str())
            || !self.marital_statuses.admits(row.marital_status.as_str())
            || !self.relationship_statuses.admits(row.relationship_status.as_str())
        {
            return false;
        }

        let answers_pass = YesNoQuestion::ALL
            .into_iter()
            .all(|q| self.answer(q).admits(row.answer(q)));
        if !answers_pass {
            return false;
        }

        PercentQuestion::ALL.into_iter().all(|q| {
            let allowed = self.allowed_buckets(q);
            !bucket_filter_active(allowed) || allowed.contains(&row.bucket(q))
        })
    }
}

/// Return indices of rows that pass all active filters.
pub fn filtered_indices(table: &SurveyTable, filters: &FilterState) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| filters.admits(row))
        .map(|(i, _)| i)
        .collect()
}

/// The rows passing all active filters, borrowed from the base table.
pub fn apply<'a>(table: &'a SurveyTable, filters: &FilterState) -> Vec<&'a Respondent> {
    table.rows.iter().filter(|row| filters.admits(row)).collect()
}
