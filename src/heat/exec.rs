use super::aggregate::{aggregate, GitSource};
use super::grid::Grid;
use super::offset::alignment_offset;
use super::output::Renderer;
use crate::cli::Cli;
use crate::config::Config;
use crate::scan::scan_folder;
use anyhow::Context;
use chrono::{Datelike, Local};
use std::io::Write;
use std::time::Instant;
use tracing::info;

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.state_dir.as_deref(), cli.strict)
        .context("Failed to resolve configuration")?;
    let registry = config.registry();

    if let Some(folder) = &cli.add {
        let found = scan_folder(folder)
            .with_context(|| format!("Failed to scan {}", folder.display()))?;
        let registered = registry
            .add(&found)
            .context("Failed to update repository registry")?;
        info!(found = found.len(), registered = registered.len(), "registry updated");
    }

    let repos = registry.load().context("Failed to read repository registry")?;

    let started = Instant::now();
    let now = Local::now();
    let aggregation = aggregate(&GitSource, &repos, &cli.email, &now, config.error_policy)
        .context("Failed to collect commits from repositories")?;
    info!(
        repositories = repos.len(),
        skipped = aggregation.skipped.len(),
        commits = aggregation.table.total(),
        elapsed = %humantime::format_duration(started.elapsed()),
        "history aggregated"
    );

    let alignment = alignment_offset(now.weekday());
    let grid = Grid::build(&aggregation.table, alignment);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Renderer::for_stdout()
        .render(&grid, alignment, now.date_naive(), &mut out)
        .context("Failed to write heatmap")?;
    out.flush()?;

    Ok(())
}
