use super::model::{Column, SurveyTable};

/// One respondent's answers laid out vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    /// How many exploded rows (one per ministry) the respondent has.
    pub ministry_rows: usize,
    /// (column header, answer) for every column except the name.
    pub fields: Vec<(String, String)>,
}

/// Build the profile of `name` from its first row.
///
/// A respondent with several ministries appears on several rows; only the
/// first is shown, so the ministry field holds the first ministry listed.
pub fn profile(table: &SurveyTable, name: &str) -> Option<Profile> {
    let mut rows = table.rows_for(name);
    let first = rows.next()?;
    let ministry_rows = 1 + rows.count();

    let fields = table
        .columns
        .iter()
        .filter(|c| **c != Column::Name)
        .map(|c| (c.header().to_string(), first.cell(c).into_owned()))
        .collect();

    Some(Profile {
        name: first.name.clone(),
        ministry_rows,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::respondent;
    use crate::data::schema::YesNoQuestion;

    #[test]
    fn uses_the_first_row_and_counts_the_rest() {
        let rows = vec![
            respondent("Ana", "Louvor"),
            respondent("Bia", "Jovens"),
            respondent("Ana", "Jovens"),
        ];
        let columns = vec![
            Column::Name,
            Column::Ministry,
            Column::YesNo(YesNoQuestion::SoulsWon2023),
        ];
        let table = SurveyTable::from_rows(rows, columns);

        let p = profile(&table, "Ana").unwrap();
        assert_eq!(p.ministry_rows, 2);
        assert_eq!(
            p.fields,
            [
                ("Ministérios".to_string(), "Louvor".to_string()),
                ("Ganhou vidas em 2023?".to_string(), "Sim".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_name_has_no_profile() {
        let table = SurveyTable::from_rows(vec![respondent("Ana", "Louvor")], vec![Column::Name]);
        assert_eq!(profile(&table, "Zé"), None);
    }
}
