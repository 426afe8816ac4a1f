//! Grouped counts, shares and means over a set of rows.

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::Respondent;
use super::schema::{PercentQuestion, Question, YesNoQuestion};

/// How many member names a group shows before it is cut short.
pub const MEMBER_PREVIEW_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// The rows sharing one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerGroup {
    pub answer: String,
    pub count: usize,
    /// Share of the breakdown total, 0–100.
    pub percent: f64,
    /// Names of the rows in this group, in row order.
    pub members: Vec<String>,
}

impl AnswerGroup {
    /// The first ten names joined with `, `, marked when more exist.
    pub fn members_preview(&self) -> String {
        let shown: Vec<&str> = self
            .members
            .iter()
            .take(MEMBER_PREVIEW_LIMIT)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .collect();
        let mut preview = shown.join(", ");
        if self.members.len() > MEMBER_PREVIEW_LIMIT {
            preview.push_str(" and more…");
        }
        preview
    }
}

/// Answer groups sorted by answer value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Breakdown {
    pub total: usize,
    pub groups: Vec<AnswerGroup>,
}

impl Breakdown {
    /// Group rows by `key`; rows whose key is `None` are left out entirely.
    fn group_by<'a, K, I, F>(rows: I, key: F) -> Self
    where
        K: Ord + ToString,
        I: IntoIterator<Item = &'a Respondent>,
        F: Fn(&Respondent) -> Option<K>,
    {
        let mut grouped: BTreeMap<K, Vec<String>> = BTreeMap::new();
        for row in rows {
            if let Some(k) = key(row) {
                grouped.entry(k).or_default().push(row.name.clone());
            }
        }

        let total: usize = grouped.values().map(Vec::len).sum();
        let groups = grouped
            .into_iter()
            .map(|(k, members)| AnswerGroup {
                answer: k.to_string(),
                count: members.len(),
                percent: members.len() as f64 / total as f64 * 100.0,
                members,
            })
            .collect();

        Breakdown { total, groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Per-question aggregates
// ---------------------------------------------------------------------------

/// Answers to a Yes/No question; blank answers are not counted.
pub fn yes_no_breakdown<'a>(
    rows: impl IntoIterator<Item = &'a Respondent>,
    question: YesNoQuestion,
) -> Breakdown {
    Breakdown::group_by(rows, |r| {
        let answer = r.answer(question);
        (!answer.is_empty()).then(|| answer.to_string())
    })
}

/// Bucket distribution of a percentage question.
pub fn percent_breakdown<'a>(
    rows: impl IntoIterator<Item = &'a Respondent>,
    question: PercentQuestion,
) -> Breakdown {
    Breakdown::group_by(rows, |r| Some(r.bucket(question)))
}

/// Mean bucket value, or `None` when there are no rows.
pub fn percent_mean<'a>(
    rows: impl IntoIterator<Item = &'a Respondent>,
    question: PercentQuestion,
) -> Option<f64> {
    let (sum, n) = rows.into_iter().fold((0.0, 0usize), |(sum, n), r| {
        (sum + f64::from(r.bucket(question).value()), n + 1)
    });
    (n > 0).then(|| sum / n as f64)
}

pub fn question_breakdown<'a>(
    rows: impl IntoIterator<Item = &'a Respondent>,
    question: Question,
) -> Breakdown {
    match question {
        Question::YesNo(q) => yes_no_breakdown(rows, q),
        Question::Percent(q) => percent_breakdown(rows, q),
    }
}
