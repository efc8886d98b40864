//! Animated map of scheduled monuments, one frame per chronological period,
//! exported as a standalone interactive HTML page.
//!
//! ```text
//!  CSV ─▶ loader ─▶ filter ─▶ render ─▶ style ─▶ export (index.html)
//! ```

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod figure;

pub use config::Config;
pub use error::{Error, Result};

use figure::Figure;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub records_plotted: usize,
    /// Frame names in animation order.
    pub frames: Vec<String>,
}

/// Load, normalise and render the input into a styled figure.
pub fn build_figure(config: &Config) -> Result<(Figure, RunSummary)> {
    let rows = data::loader::load_csv(&config.input)?;
    let rows_loaded = rows.len();
    let dataset = data::filter::normalize(rows)?;

    let mut figure = figure::render::render(&dataset);
    figure::style::apply(&mut figure, &config.style);

    let summary = RunSummary {
        rows_loaded,
        records_plotted: dataset.len(),
        frames: figure.frame_names().into_iter().map(String::from).collect(),
    };
    Ok((figure, summary))
}

/// Run the whole pipeline and write `config.output`, opening it afterwards
/// when preview is enabled. A failed preview is only logged.
pub fn run(config: &Config) -> Result<RunSummary> {
    let (figure, summary) = build_figure(config)?;
    export::write_html(&figure, &config.output, &config.plotly_js)?;

    if config.preview {
        if let Err(e) = export::preview(&config.output) {
            log::warn!("Could not open preview of {}: {e}", config.output.display());
        }
    }
    Ok(summary)
}
