use serde::Serialize;

use crate::data::model::{distinct_names, Respondent};
use crate::data::schema::{PercentQuestion, YesNoQuestion};
use crate::data::stats::{percent_breakdown, percent_mean, yes_no_breakdown, Breakdown};

// ---------------------------------------------------------------------------
// Overview aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YesNoSummary {
    pub question: &'static str,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentSummary {
    pub question: &'static str,
    pub mean: Option<f64>,
    pub breakdown: Breakdown,
}

/// Everything the Overview shows, for one set of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub respondents: usize,
    pub yes_no: Vec<YesNoSummary>,
    pub percentages: Vec<PercentSummary>,
}

pub fn summarize(rows: &[&Respondent]) -> Summary {
    let yes_no = YesNoQuestion::ALL
        .into_iter()
        .map(|q| YesNoSummary {
            question: q.column(),
            breakdown: yes_no_breakdown(rows.iter().copied(), q),
        })
        .collect();

    let percentages = PercentQuestion::ALL
        .into_iter()
        .map(|q| PercentSummary {
            question: q.column(),
            mean: percent_mean(rows.iter().copied(), q),
            breakdown: percent_breakdown(rows.iter().copied(), q),
        })
        .collect();

    Summary {
        rows: rows.len(),
        respondents: distinct_names(rows.iter().copied()).len(),
        yes_no,
        percentages,
    }
}

/// Pretty-printed JSON for `--summary`.
pub fn to_json(summary: &Summary) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::respondent;
    use crate::data::model::Bucket;

    #[test]
    fn summarizes_every_question() {
        let mut a = respondent("Ana", "Louvor");
        a.percent[PercentQuestion::Tithes.index()] = Bucket::Hundred;
        let b = respondent("Ana", "Jovens");
        let c = respondent("Bia", "Jovens");
        let rows = vec![&a, &b, &c];

        let s = summarize(&rows);
        assert_eq!(s.rows, 3);
        assert_eq!(s.respondents, 2);
        assert_eq!(s.yes_no.len(), 8);
        assert_eq!(s.percentages.len(), 8);
        assert_eq!(s.yes_no[0].breakdown.groups[0].count, 3);

        let tithes = &s.percentages[PercentQuestion::Tithes.index()];
        assert_eq!(tithes.question, "Dízimos praticados em 2024:");
        assert!((tithes.mean.unwrap() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn json_uses_bucket_numbers_and_null_means() {
        let s = summarize(&[]);
        let json: serde_json::Value = serde_json::from_str(&to_json(&s).unwrap()).unwrap();
        assert_eq!(json["rows"], 0);
        assert!(json["percentages"][0]["mean"].is_null());

        let r = respondent("Ana", "Louvor");
        let s = summarize(&[&r]);
        let json: serde_json::Value = serde_json::from_str(&to_json(&s).unwrap()).unwrap();
        assert_eq!(json["percentages"][3]["question"], "Dificuldades Financeiras");
        assert_eq!(json["percentages"][3]["breakdown"]["groups"][0]["answer"], "0");
        assert_eq!(json["yes_no"][0]["breakdown"]["groups"][0]["members"][0], "Ana");
    }
}
