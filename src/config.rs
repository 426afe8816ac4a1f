use std::path::{Path, PathBuf};

use clap::Parser;

use crate::data::filter::{FilterState, Selection};

/// Export read when no path is given on the command line.
pub const DEFAULT_SURVEY_PATH: &str = "dados.csv";

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "ministry-survey", version, about = "Ministry participation survey viewer")]
pub struct Cli {
    /// Survey export (CSV with the form's question texts as headers)
    pub path: Option<PathBuf>,

    /// Print the overview aggregates as JSON instead of opening the viewer
    #[arg(long)]
    pub summary: bool,

    /// Only count rows of this ministry (repeatable, summary mode)
    #[arg(long = "ministry", value_name = "NAME")]
    pub ministries: Vec<String>,

    /// Only count rows with this marital status (repeatable, summary mode)
    #[arg(long = "marital-status", value_name = "STATUS")]
    pub marital_statuses: Vec<String>,

    /// Only count rows with this relationship answer (repeatable, summary mode)
    #[arg(long = "relationship", value_name = "ANSWER")]
    pub relationship_statuses: Vec<String>,
}

impl Cli {
    /// Where to read the survey from.
    ///
    /// An explicit path always wins. Otherwise `dados.csv` in the working
    /// directory is used when it exists; failing that the viewer offers a
    /// file picker, while summary mode sticks to the default so the load
    /// error names it. `None` means the picker was cancelled.
    pub fn survey_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        let default = Path::new(DEFAULT_SURVEY_PATH);
        if default.exists() || self.summary {
            return Some(default.to_path_buf());
        }
        crate::ui::panels::pick_survey_file()
    }

    /// Filters given on the command line.
    pub fn filters(&self) -> FilterState {
        FilterState {
            ministries: Selection::only(self.ministries.iter().cloned()),
            marital_statuses: Selection::only(self.marital_statuses.iter().cloned()),
            relationship_statuses: Selection::only(self.relationship_statuses.iter().cloned()),
            ..FilterState::default()
        }
    }
}
