use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use super::schema::{self, PercentQuestion, YesNoQuestion};

// ---------------------------------------------------------------------------
// Bucket – a percentage answer snapped to a quarter
// ---------------------------------------------------------------------------

/// One of the five canonical values a percentage answer is snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Zero,
    TwentyFive,
    Fifty,
    SeventyFive,
    Hundred,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::Zero,
        Bucket::TwentyFive,
        Bucket::Fifty,
        Bucket::SeventyFive,
        Bucket::Hundred,
    ];

    /// Snap a raw percentage to the nearest quarter.
    ///
    /// Thresholds sit at the midpoints 12.5 / 37.5 / 62.5 / 87.5 and are
    /// inclusive on the lower bucket. Values outside 0..=100 use the same
    /// thresholds, so negatives land in `Zero` and anything above 87.5 in
    /// `Hundred`. NaN is treated as zero.
    pub fn from_percent(value: f64) -> Self {
        if value.is_nan() || value <= 12.5 {
            Bucket::Zero
        } else if value <= 37.5 {
            Bucket::TwentyFive
        } else if value <= 62.5 {
            Bucket::Fifty
        } else if value <= 87.5 {
            Bucket::SeventyFive
        } else {
            Bucket::Hundred
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Bucket::Zero => 0,
            Bucket::TwentyFive => 25,
            Bucket::Fifty => 50,
            Bucket::SeventyFive => 75,
            Bucket::Hundred => 100,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Column – one column of the normalized table
// ---------------------------------------------------------------------------

/// A column of the normalized table, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Name,
    Email,
    Ministry,
    MaritalStatus,
    Relationship,
    Engagement,
    ImprovementStrategy,
    YesNo(YesNoQuestion),
    Percent(PercentQuestion),
    /// A column the viewer has no special use for; `index` points into
    /// [`Respondent::other_answers`].
    Other { header: String, index: usize },
}

impl Column {
    pub fn header(&self) -> &str {
        match self {
            Column::Name => schema::NAME,
            Column::Email => schema::EMAIL,
            Column::Ministry => schema::MINISTRIES,
            Column::MaritalStatus => schema::MARITAL_STATUS,
            Column::Relationship => schema::RELATIONSHIP,
            Column::Engagement => schema::ENGAGEMENT,
            Column::ImprovementStrategy => schema::IMPROVEMENT_STRATEGY,
            Column::YesNo(q) => q.column(),
            Column::Percent(q) => q.column(),
            Column::Other { header, .. } => header,
        }
    }
}

// ---------------------------------------------------------------------------
// Respondent – one row of the exploded table
// ---------------------------------------------------------------------------

/// One (respondent, ministry) row of the normalized table.
#[derive(Debug, Clone, PartialEq)]
pub struct Respondent {
    /// Sequential position in the normalized table.
    pub row: usize,
    pub name: String,
    pub email: Option<String>,
    pub ministry: String,
    pub marital_status: String,
    pub relationship_status: String,
    pub engagement: Option<String>,
    pub improvement_strategy: Option<String>,
    /// Answers indexed by [`YesNoQuestion::index`].
    pub yes_no: [String; 8],
    /// Buckets indexed by [`PercentQuestion::index`].
    pub percent: [Bucket; 8],
    pub other_answers: Vec<String>,
}

impl Respondent {
    pub fn answer(&self, question: YesNoQuestion) -> &str {
        &self.yes_no[question.index()]
    }

    pub fn bucket(&self, question: PercentQuestion) -> Bucket {
        self.percent[question.index()]
    }

    /// Text shown for this row under `column`.
    pub fn cell(&self, column: &Column) -> Cow<'_, str> {
        fn optional(value: &Option<String>) -> Cow<'_, str> {
            Cow::Borrowed(value.as_deref().unwrap_or(""))
        }
        match column {
            Column::Name => Cow::Borrowed(&self.name),
            Column::Email => optional(&self.email),
            Column::Ministry => Cow::Borrowed(&self.ministry),
            Column::MaritalStatus => Cow::Borrowed(&self.marital_status),
            Column::Relationship => Cow::Borrowed(&self.relationship_status),
            Column::Engagement => optional(&self.engagement),
            Column::ImprovementStrategy => optional(&self.improvement_strategy),
            Column::YesNo(q) => Cow::Borrowed(self.answer(*q)),
            Column::Percent(q) => Cow::Owned(self.bucket(*q).to_string()),
            Column::Other { index, .. } => Cow::Borrowed(
                self.other_answers
                    .get(*index)
                    .map(String::as_str)
                    .unwrap_or(""),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// SurveyTable – the complete normalized dataset
// ---------------------------------------------------------------------------

/// The normalized survey, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    /// All exploded rows, in respondent order then ministry order.
    pub rows: Vec<Respondent>,
    /// Display order; `Column::Name` is always first.
    pub columns: Vec<Column>,
    pub ministries: BTreeSet<String>,
    pub marital_statuses: BTreeSet<String>,
    pub relationship_statuses: BTreeSet<String>,
}

impl SurveyTable {
    /// Build the filter option sets from the normalized rows.
    pub fn from_rows(rows: Vec<Respondent>, columns: Vec<Column>) -> Self {
        let mut ministries = BTreeSet::new();
        let mut marital_statuses = BTreeSet::new();
        let mut relationship_statuses = BTreeSet::new();

        for r in &rows {
            ministries.insert(r.ministry.clone());
            marital_statuses.insert(r.marital_status.clone());
            relationship_statuses.insert(r.relationship_status.clone());
        }

        SurveyTable {
            rows,
            columns,
            ministries,
            marital_statuses,
            relationship_statuses,
        }
    }

    /// Number of rows (after exploding ministries).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct respondent names in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        distinct_names(&self.rows)
    }

    /// Every row belonging to `name`.
    pub fn rows_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Respondent> + 'a {
        self.rows.iter().filter(move |r| r.name == name)
    }
}

/// Distinct names in order of first appearance.
pub fn distinct_names<'a>(rows: impl IntoIterator<Item = &'a Respondent>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    rows.into_iter()
        .map(|r| r.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    /// A row with every Yes/No answered "Sim" and every bucket at zero.
    pub(crate) fn respondent(name: &str, ministry: &str) -> Respondent {
        Respondent {
            row: 0,
            name: name.to_string(),
            email: None,
            ministry: ministry.to_string(),
            marital_status: "Solteiro(a)".to_string(),
            relationship_status: schema::NO.to_string(),
            engagement: None,
            improvement_strategy: None,
            yes_no: std::array::from_fn(|_| schema::YES.to_string()),
            percent: [Bucket::Zero; 8],
            other_answers: Vec::new(),
        }
    }

    #[rstest]
    #[case(0.0, Bucket::Zero)]
    #[case(12.5, Bucket::Zero)]
    #[case(12.6, Bucket::TwentyFive)]
    #[case(37.5, Bucket::TwentyFive)]
    #[case(37.51, Bucket::Fifty)]
    #[case(62.5, Bucket::Fifty)]
    #[case(63.0, Bucket::SeventyFive)]
    #[case(87.5, Bucket::SeventyFive)]
    #[case(88.0, Bucket::Hundred)]
    #[case(100.0, Bucket::Hundred)]
    #[case(150.0, Bucket::Hundred)]
    #[case(-20.0, Bucket::Zero)]
    #[case(f64::NAN, Bucket::Zero)]
    fn buckets_snap_at_midpoints(#[case] raw: f64, #[case] expected: Bucket) {
        assert_eq!(Bucket::from_percent(raw), expected);
    }

    #[test]
    fn bucketing_is_idempotent() {
        for bucket in Bucket::ALL {
            assert_eq!(Bucket::from_percent(f64::from(bucket.value())), bucket);
        }
    }

    #[test]
    fn buckets_order_by_value() {
        let values: Vec<u8> = Bucket::ALL.iter().map(|b| b.value()).collect();
        assert_eq!(values, [0, 25, 50, 75, 100]);
        assert!(Bucket::Fifty < Bucket::SeventyFive);
        assert_eq!(Bucket::SeventyFive.to_string(), "75");
    }

    #[test]
    fn names_keep_first_appearance_order() {
        let rows = vec![
            respondent("Bia", "Louvor"),
            respondent("Ana", "Louvor"),
            respondent("Bia", "Jovens"),
        ];
        let table = SurveyTable::from_rows(rows, vec![Column::Name, Column::Ministry]);
        assert_eq!(table.names(), ["Bia", "Ana"]);
        assert_eq!(table.rows_for("Bia").count(), 2);
        assert_eq!(
            table.ministries.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Jovens", "Louvor"]
        );
    }

    #[test]
    fn cells_render_typed_fields() {
        let mut r = respondent("Ana", "Louvor");
        r.percent[PercentQuestion::Offerings.index()] = Bucket::SeventyFive;
        r.other_answers = vec!["livre".to_string()];
        assert_eq!(r.cell(&Column::Percent(PercentQuestion::Offerings)), "75");
        assert_eq!(r.cell(&Column::Email), "");
        let other = Column::Other {
            header: "Observações".to_string(),
            index: 0,
        };
        assert_eq!(other.header(), "Observações");
        assert_eq!(r.cell(&other), "livre");
    }
}
