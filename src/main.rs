mod app;
mod color;
mod config;
mod data;
mod report;
mod state;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;

use app::SurveyApp;
use config::Cli;
use data::filter;
use data::loader::load_file;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let path = cli
        .survey_path()
        .ok_or_else(|| anyhow!("no survey file selected"))?;

    // The survey is read once; any failure here is fatal.
    let table = load_file(&path).inspect_err(|e| log::error!("Failed to load survey: {e:#}"))?;
    if table.is_empty() {
        log::warn!("{} has no respondents", path.display());
    }

    if cli.summary {
        let rows = filter::apply(&table, &cli.filters());
        println!("{}", report::to_json(&report::summarize(&rows))?);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ministry Survey Analysis",
        options,
        Box::new(move |_cc| Ok(Box::new(SurveyApp::new(table)))),
    )
    .map_err(|e| anyhow!("viewer exited with an error: {e}"))
}
