use anyhow::Context;

use monument_map::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env().context("reading configuration")?;
    let summary = monument_map::run(&config)
        .with_context(|| format!("building map from {}", config.input.display()))?;

    log::info!(
        "Plotted {} of {} monuments across {} periods",
        summary.records_plotted,
        summary.rows_loaded,
        summary.frames.len()
    );
    Ok(())
}
