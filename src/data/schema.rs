//! Column names of the survey export and the questions they carry.
//!
//! Header matching is bit-exact: the export uses typographic quotes (“ ”)
//! inside several question texts, and a header that differs by a single
//! character will not be recognised.

use std::fmt;

// ---------------------------------------------------------------------------
// Fixed column names
// ---------------------------------------------------------------------------

/// Columns produced by the form tool that carry no survey data.
pub const DROPPED_COLUMNS: [&str; 3] = ["Carimbo de data/hora", "id", "index"];

pub const NAME: &str = "Nome";
pub const EMAIL: &str = "Email";
pub const MINISTRIES: &str = "Ministérios";
pub const MARITAL_STATUS: &str = "Estado Civil";
pub const RELATIONSHIP: &str = "Em Relacionamento";
pub const ENGAGEMENT: &str = "Engajamento";
pub const IMPROVEMENT_STRATEGY: &str = "Estratégia de Melhoria";

/// Answer literals used by every Yes/No question.
pub const YES: &str = "Sim";
pub const NO: &str = "Não";

const FINANCIAL_DIFFICULTY_SOURCE: &str = "Dificuldades financeiras, onde “0” é estar sem dívidas e “100” é estar muito endividado:";
const FINANCIAL_SATISFACTION_SOURCE: &str = "Está satisfeito financeiramente, onde “0” é estar insatisfeito e “100” é estar satisfeito:";

/// Long-form question text → short field name.
pub const RENAMES: [(&str, &str); 9] = [
    ("Nome de usuário", EMAIL),
    ("Nome do Membro", NAME),
    ("Ministérios que participa", MINISTRIES),
    (FINANCIAL_DIFFICULTY_SOURCE, "Dificuldades Financeiras"),
    (FINANCIAL_SATISFACTION_SOURCE, "Satisfação Financeira"),
    ("Selecione seu Estado Civil", MARITAL_STATUS),
    ("Está em relacionamento romântico?", RELATIONSHIP),
    ("Como você considera seu engajamento e desempenho em seu Ministério?", ENGAGEMENT),
    (
        "Escreva aqui o que deseja compartilhar como uma estratégia de melhoria em seu Ministério:",
        IMPROVEMENT_STRATEGY,
    ),
];

/// Short name for a (stripped) header, if it is one of the renamed questions.
pub fn renamed(header: &str) -> Option<&'static str> {
    RENAMES
        .iter()
        .find(|(long, _)| *long == header)
        .map(|(_, short)| *short)
}

// ---------------------------------------------------------------------------
// Yes/No questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YesNoQuestion {
    Discipleship,
    OikosRecord,
    SoulsWon2024,
    SoulsWon2023,
    DisciplingConverts,
    LeadershipMeetings,
    GrowthTrackTraining,
    ServingOtherMinistries,
}

impl YesNoQuestion {
    pub const ALL: [YesNoQuestion; 8] = [
        YesNoQuestion::Discipleship,
        YesNoQuestion::OikosRecord,
        YesNoQuestion::SoulsWon2024,
        YesNoQuestion::SoulsWon2023,
        YesNoQuestion::DisciplingConverts,
        YesNoQuestion::LeadershipMeetings,
        YesNoQuestion::GrowthTrackTraining,
        YesNoQuestion::ServingOtherMinistries,
    ];

    /// Position in [`YesNoQuestion::ALL`], used to index per-question arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn column(self) -> &'static str {
        match self {
            YesNoQuestion::Discipleship => "Está realizando seu discipulado de forma periódica?",
            YesNoQuestion::OikosRecord => "Está movimentando sua Ficha de Oikós?",
            YesNoQuestion::SoulsWon2024 => "Ganhou vidas em 2024?",
            YesNoQuestion::SoulsWon2023 => "Ganhou vidas em 2023?",
            YesNoQuestion::DisciplingConverts => {
                "Está discipulando novos convertidos/membros de sua célula?"
            }
            YesNoQuestion::LeadershipMeetings => {
                "Tem participado das Reuniões de Liderança com o Pr Joel?"
            }
            YesNoQuestion::GrowthTrackTraining => {
                "Tem participado dos Treinamentos do Trilho do Crescimento?"
            }
            YesNoQuestion::ServingOtherMinistries => {
                "Tem servido nos Encontros, Eventos de outros Ministérios e cursos da UDF?"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Percentage questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PercentQuestion {
    Tithes,
    Offerings,
    MissionOfferings,
    FinancialDifficulty,
    FinancialSatisfaction,
    CelebrationAttendance,
    CellAttendance,
    MinistryAttendance,
}

impl PercentQuestion {
    pub const ALL: [PercentQuestion; 8] = [
        PercentQuestion::Tithes,
        PercentQuestion::Offerings,
        PercentQuestion::MissionOfferings,
        PercentQuestion::FinancialDifficulty,
        PercentQuestion::FinancialSatisfaction,
        PercentQuestion::CelebrationAttendance,
        PercentQuestion::CellAttendance,
        PercentQuestion::MinistryAttendance,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Header as it appears in the export, before renaming.
    pub fn source_column(self) -> &'static str {
        match self {
            PercentQuestion::Tithes => "Dízimos praticados em 2024:",
            PercentQuestion::Offerings => "Ofertas praticadas em 2024:",
            PercentQuestion::MissionOfferings => "Ofertas destinadas a Missões praticadas em 2024:",
            PercentQuestion::FinancialDifficulty => FINANCIAL_DIFFICULTY_SOURCE,
            PercentQuestion::FinancialSatisfaction => FINANCIAL_SATISFACTION_SOURCE,
            PercentQuestion::CelebrationAttendance => {
                "Considera correta sua assiduidade nas Celebrações, onde “0” é estar incorreto e “100” é estar correto:"
            }
            PercentQuestion::CellAttendance => {
                "Considera correta sua assiduidade na sua Célula, onde “0” é estar incorreto e “100” é estar correto:"
            }
            PercentQuestion::MinistryAttendance => {
                "Considera correta sua assiduidade em seu Ministério, onde “0” é estar incorreto e “100” é estar correto:"
            }
        }
    }

    /// Header after renaming.
    pub fn column(self) -> &'static str {
        let source = self.source_column();
        renamed(source).unwrap_or(source)
    }
}

// ---------------------------------------------------------------------------
// Question – either kind, for the chart-target selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Question {
    YesNo(YesNoQuestion),
    Percent(PercentQuestion),
}

impl Question {
    /// Every question: the Yes/No block first, then the percentages.
    pub fn all() -> impl Iterator<Item = Question> {
        YesNoQuestion::ALL
            .into_iter()
            .map(Question::YesNo)
            .chain(PercentQuestion::ALL.into_iter().map(Question::Percent))
    }

    pub fn column(self) -> &'static str {
        match self {
            Question::YesNo(q) => q.column(),
            Question::Percent(q) => q.column(),
        }
    }
}

impl Default for Question {
    fn default() -> Self {
        Question::YesNo(YesNoQuestion::Discipleship)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_percentage_columns_are_renamed() {
        let renamed: Vec<_> = PercentQuestion::ALL
            .into_iter()
            .filter(|q| q.column() != q.source_column())
            .map(|q| q.column())
            .collect();
        assert_eq!(renamed, ["Dificuldades Financeiras", "Satisfação Financeira"]);
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (i, q) in YesNoQuestion::ALL.into_iter().enumerate() {
            assert_eq!(q.index(), i);
        }
        for (i, q) in PercentQuestion::ALL.into_iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }

    #[test]
    fn question_list_covers_both_kinds() {
        let all: Vec<Question> = Question::all().collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Question::default());
        assert_eq!(all[8], Question::Percent(PercentQuestion::Tithes));
    }

    #[test]
    fn unknown_header_is_not_renamed() {
        assert_eq!(renamed("Nome do Membro"), Some(NAME));
        assert_eq!(renamed(" Nome do Membro"), None);
    }
}
