//! Survey normalization: raw string table → [`SurveyTable`].
//!
//! The steps run in a fixed order (drop, strip, coerce, rename, strip,
//! explode, reindex, reorder) because each one matches on the column names
//! left by the previous step.

use thiserror::Error;

use super::model::{Bucket, Column, Respondent, SurveyTable};
use super::schema::{self, PercentQuestion, YesNoQuestion};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("survey is missing the column '{0}'")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Lenient percentage parsing
// ---------------------------------------------------------------------------

/// Parse a percentage cell such as `"75%"`, `" 50 "` or `"12.5"`.
///
/// Text that does not parse as a number becomes `0.0`; the survey form lets
/// respondents type free text into these fields and such answers count as 0.
pub fn parse_percent(cell: &str) -> f64 {
    let text = cell.trim();
    let text = text.strip_suffix('%').unwrap_or(text).trim();
    match text.parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => {
            log::debug!("percentage {cell:?} is not a number, counting it as 0");
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the export as plain strings
// ---------------------------------------------------------------------------

/// The export as read from disk: a header row and string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { headers, rows }
    }

    fn position(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    fn require(&self, header: &str) -> Result<usize, NormalizeError> {
        self.position(header)
            .ok_or_else(|| NormalizeError::MissingColumn(header.to_string()))
    }

    /// Remove the named columns; names that are not present are ignored.
    pub fn drop_columns(&mut self, names: &[&str]) {
        let keep: Vec<bool> = self
            .headers
            .iter()
            .map(|h| !names.contains(&h.as_str()))
            .collect();

        let retain = |cells: &mut Vec<String>| {
            let mut i = 0;
            cells.retain(|_| {
                let kept = keep.get(i).copied().unwrap_or(true);
                i += 1;
                kept
            });
        };

        retain(&mut self.headers);
        for row in &mut self.rows {
            retain(row);
        }
    }

    pub fn strip_headers(&mut self) {
        for h in &mut self.headers {
            *h = h.trim().to_string();
        }
    }

    pub fn strip_cells(&mut self) {
        for cell in self.rows.iter_mut().flatten() {
            if cell.trim().len() != cell.len() {
                *cell = cell.trim().to_string();
            }
        }
    }

    /// Replace every percentage cell with its bucket value.
    pub fn coerce_percentages(&mut self) -> Result<(), NormalizeError> {
        for question in PercentQuestion::ALL {
            let idx = self.require(question.source_column())?;
            for row in &mut self.rows {
                if let Some(cell) = row.get_mut(idx) {
                    *cell = Bucket::from_percent(parse_percent(cell)).to_string();
                }
            }
        }
        Ok(())
    }

    /// Shorten the long-form question headers.
    pub fn rename_columns(&mut self) {
        for h in &mut self.headers {
            if let Some(short) = schema::renamed(h) {
                *h = short.to_string();
            }
        }
    }

    /// Explode ministries, assign sequential row numbers and put the name
    /// column first.
    pub fn into_table(self) -> Result<SurveyTable, NormalizeError> {
        let layout = Layout::resolve(&self)?;
        let columns = layout.columns(&self.headers);

        let mut rows = Vec::with_capacity(self.rows.len());
        for cells in &self.rows {
            let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
            let optional = |idx: Option<usize>| idx.map(|i| cell(i).to_string());

            let yes_no = layout.yes_no.map(|i| cell(i).to_string());
            let percent = layout
                .percent
                .map(|i| Bucket::from_percent(parse_percent(cell(i))));
            let other_answers: Vec<String> =
                layout.others.iter().map(|&i| cell(i).to_string()).collect();

            for ministry in cell(layout.ministry).split(',') {
                rows.push(Respondent {
                    row: rows.len(),
                    name: cell(layout.name).to_string(),
                    email: optional(layout.email),
                    ministry: ministry.trim().to_string(),
                    marital_status: cell(layout.marital_status).to_string(),
                    relationship_status: cell(layout.relationship).to_string(),
                    engagement: optional(layout.engagement),
                    improvement_strategy: optional(layout.improvement_strategy),
                    yes_no: yes_no.clone(),
                    percent,
                    other_answers: other_answers.clone(),
                });
            }
        }

        Ok(SurveyTable::from_rows(rows, columns))
    }
}

/// Run the full pipeline over a freshly read export.
pub fn normalize(mut raw: RawTable) -> Result<SurveyTable, NormalizeError> {
    raw.drop_columns(&schema::DROPPED_COLUMNS);
    raw.strip_headers();
    raw.strip_cells();
    raw.coerce_percentages()?;
    raw.rename_columns();
    raw.strip_cells();
    raw.into_table()
}

// ---------------------------------------------------------------------------
// Layout – where each typed field lives in the renamed header
// ---------------------------------------------------------------------------

struct Layout {
    name: usize,
    email: Option<usize>,
    ministry: usize,
    marital_status: usize,
    relationship: usize,
    engagement: Option<usize>,
    improvement_strategy: Option<usize>,
    yes_no: [usize; 8],
    percent: [usize; 8],
    others: Vec<usize>,
}

impl Layout {
    fn resolve(raw: &RawTable) -> Result<Self, NormalizeError> {
        let mut yes_no = [0; 8];
        for q in YesNoQuestion::ALL {
            yes_no[q.index()] = raw.require(q.column())?;
        }
        let mut percent = [0; 8];
        for q in PercentQuestion::ALL {
            percent[q.index()] = raw.require(q.column())?;
        }

        let mut layout = Layout {
            name: raw.require(schema::NAME)?,
            email: raw.position(schema::EMAIL),
            ministry: raw.require(schema::MINISTRIES)?,
            marital_status: raw.require(schema::MARITAL_STATUS)?,
            relationship: raw.require(schema::RELATIONSHIP)?,
            engagement: raw.position(schema::ENGAGEMENT),
            improvement_strategy: raw.position(schema::IMPROVEMENT_STRATEGY),
            yes_no,
            percent,
            others: Vec::new(),
        };
        layout.others = (0..raw.headers.len())
            .filter(|&i| layout.column_at(i).is_none())
            .collect();
        Ok(layout)
    }

    /// The typed column stored at header position `idx`, if any.
    fn column_at(&self, idx: usize) -> Option<Column> {
        if idx == self.name {
            return Some(Column::Name);
        }
        if idx == self.ministry {
            return Some(Column::Ministry);
        }
        if idx == self.marital_status {
            return Some(Column::MaritalStatus);
        }
        if idx == self.relationship {
            return Some(Column::Relationship);
        }
        if self.email == Some(idx) {
            return Some(Column::Email);
        }
        if self.engagement == Some(idx) {
            return Some(Column::Engagement);
        }
        if self.improvement_strategy == Some(idx) {
            return Some(Column::ImprovementStrategy);
        }
        if let Some(q) = YesNoQuestion::ALL
            .into_iter()
            .find(|q| self.yes_no[q.index()] == idx)
        {
            return Some(Column::YesNo(q));
        }
        PercentQuestion::ALL
            .into_iter()
            .find(|q| self.percent[q.index()] == idx)
            .map(Column::Percent)
    }

    /// Display order: name first, then every other header in file order.
    fn columns(&self, headers: &[String]) -> Vec<Column> {
        let mut columns = vec![Column::Name];
        let mut others = 0;
        for (idx, header) in headers.iter().enumerate() {
            match self.column_at(idx) {
                Some(Column::Name) => {}
                Some(column) => columns.push(column),
                None => {
                    columns.push(Column::Other {
                        header: header.clone(),
                        index: others,
                    });
                    others += 1;
                }
            }
        }
        columns
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    /// Header row of a real export, with the two bookkeeping columns.
    pub(crate) fn export_headers() -> Vec<String> {
        let mut headers = vec![
            "Carimbo de data/hora".to_string(),
            "Nome de usuário".to_string(),
            " Nome do Membro ".to_string(),
            "Ministérios que participa".to_string(),
            "Selecione seu Estado Civil".to_string(),
            "Está em relacionamento romântico?".to_string(),
        ];
        headers.extend(YesNoQuestion::ALL.iter().map(|q| q.column().to_string()));
        headers.extend(PercentQuestion::ALL.iter().map(|q| q.source_column().to_string()));
        headers.push("Como você considera seu engajamento e desempenho em seu Ministério?".to_string());
        headers.push("Observações".to_string());
        headers
    }

    /// One export row; `percent` fills all eight percentage cells.
    pub(crate) fn export_row(name: &str, ministries: &str, marital: &str, percent: &str) -> Vec<String> {
        let mut row = vec![
            "2024/11/02 10:00:00".to_string(),
            format!("{}@example.com", name.trim().to_lowercase()),
            name.to_string(),
            ministries.to_string(),
            marital.to_string(),
            "Não".to_string(),
        ];
        row.extend(std::iter::repeat(" Sim ".to_string()).take(8));
        row.extend(std::iter::repeat(percent.to_string()).take(8));
        row.push("Bom".to_string());
        row.push("nada".to_string());
        row
    }

    #[rstest]
    #[case("75%", 75.0)]
    #[case(" 50 % ", 50.0)]
    #[case("12.5", 12.5)]
    #[case("100", 100.0)]
    #[case("abc%", 0.0)]
    #[case("", 0.0)]
    #[case("NaN", 0.0)]
    #[case("12,5", 0.0)]
    fn percentages_parse_leniently(#[case] cell: &str, #[case] expected: f64) {
        assert_eq!(parse_percent(cell), expected);
    }

    #[test]
    fn bucketed_text_reparses_to_the_same_bucket() {
        for bucket in Bucket::ALL {
            let text = format!("{bucket}%");
            assert_eq!(Bucket::from_percent(parse_percent(&text)), bucket);
        }
    }

    #[test]
    fn drop_ignores_absent_columns() {
        let mut raw = RawTable::new(
            vec!["id".to_string(), "a".to_string()],
            vec![vec!["1".to_string(), "x".to_string()]],
        );
        raw.drop_columns(&schema::DROPPED_COLUMNS);
        assert_eq!(raw.headers, ["a"]);
        assert_eq!(raw.rows, [["x"]]);
    }

    #[test]
    fn explodes_one_row_per_ministry() {
        let raw = RawTable::new(
            export_headers(),
            vec![export_row(" Ana ", "A, B ,C", "Casado(a)", "60%")],
        );
        let table = normalize(raw).unwrap();

        assert_eq!(table.len(), 3);
        let ministries: Vec<&str> = table.rows.iter().map(|r| r.ministry.as_str()).collect();
        assert_eq!(ministries, ["A", "B", "C"]);
        for (i, r) in table.rows.iter().enumerate() {
            assert_eq!(r.row, i);
            assert_eq!(r.name, "Ana");
            assert_eq!(r.email.as_deref(), Some("ana@example.com"));
            assert_eq!(r.marital_status, "Casado(a)");
            assert_eq!(r.answer(YesNoQuestion::SoulsWon2024), "Sim");
            assert_eq!(r.percent, [Bucket::Fifty; 8]);
            assert_eq!(r.yes_no, table.rows[0].yes_no);
            assert_eq!(r.other_answers, ["nada"]);
        }
    }

    #[test]
    fn malformed_percentage_normalizes_to_zero() {
        let raw = RawTable::new(
            export_headers(),
            vec![export_row("Ana", "Louvor", "Solteiro(a)", "abc%")],
        );
        let table = normalize(raw).unwrap();
        assert_eq!(table.rows[0].percent, [Bucket::Zero; 8]);
    }

    #[test]
    fn empty_ministry_keeps_a_single_row() {
        let raw = RawTable::new(
            export_headers(),
            vec![export_row("Ana", "", "Solteiro(a)", "100%")],
        );
        let table = normalize(raw).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].ministry, "");
    }

    #[test]
    fn name_column_comes_first_and_bookkeeping_is_dropped() {
        let raw = RawTable::new(
            export_headers(),
            vec![export_row("Ana", "Louvor", "Solteiro(a)", "0")],
        );
        let table = normalize(raw).unwrap();

        let headers: Vec<&str> = table.columns.iter().map(Column::header).collect();
        assert_eq!(headers[0], "Nome");
        assert_eq!(headers[1], "Email");
        assert_eq!(headers[2], "Ministérios");
        assert!(headers.contains(&"Dificuldades Financeiras"));
        assert!(headers.contains(&"Engajamento"));
        assert!(!headers.contains(&"Carimbo de data/hora"));
        assert_eq!(headers.last(), Some(&"Observações"));
        assert_eq!(headers.len(), table.columns.len());
        assert_eq!(headers.iter().filter(|h| **h == "Nome").count(), 1);
    }

    #[test]
    fn missing_percentage_column_fails_fast() {
        let mut headers = export_headers();
        let mut row = export_row("Ana", "Louvor", "Solteiro(a)", "0");
        let idx = headers
            .iter()
            .position(|h| h == PercentQuestion::Tithes.source_column())
            .unwrap();
        headers.remove(idx);
        row.remove(idx);

        let err = normalize(RawTable::new(headers, vec![row])).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::MissingColumn(ref c) if c == PercentQuestion::Tithes.source_column()
        ));
    }

    #[test]
    fn missing_renamed_column_fails_fast() {
        let mut headers = export_headers();
        let mut row = export_row("Ana", "Louvor", "Solteiro(a)", "0");
        let idx = headers
            .iter()
            .position(|h| h == "Selecione seu Estado Civil")
            .unwrap();
        headers.remove(idx);
        row.remove(idx);

        let err = normalize(RawTable::new(headers, vec![row])).unwrap_err();
        assert_eq!(err.to_string(), "survey is missing the column 'Estado Civil'");
    }
}
