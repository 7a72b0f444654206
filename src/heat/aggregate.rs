use super::offset::{day_offset, DayOffset};
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{CommitRecord, OffsetTable};
use chrono::{DateTime, TimeZone};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What to do when a single repository cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole run on the first failing repository.
    Strict,
    /// Log a warning and leave the repository out of the totals.
    #[default]
    SkipFailed,
}

/// Supplies the commit history of a repository.
pub trait CommitSource {
    fn for_each_commit(&self, repository: &Path, visit: &mut dyn FnMut(CommitRecord)) -> Result<()>;
}

/// Reads history from HEAD with gix.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSource;

impl CommitSource for GitSource {
    fn for_each_commit(&self, repository: &Path, visit: &mut dyn FnMut(CommitRecord)) -> Result<()> {
        let repo = GitRepo::open(repository)?;
        for record in repo.commits()? {
            visit(record?);
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Aggregation {
    pub table: OffsetTable,
    pub skipped: Vec<PathBuf>,
}

/// Count the commits `author_email` made in one repository.
pub fn aggregate_repository<S, Tz>(
    source: &S,
    repository: &Path,
    author_email: &str,
    now: &DateTime<Tz>,
    progress: &ProgressBar,
) -> Result<OffsetTable>
where
    S: CommitSource + ?Sized,
    Tz: TimeZone,
{
    let mut table = OffsetTable::new();
    source.for_each_commit(repository, &mut |record| {
        progress.tick();
        if record.author_email != author_email {
            return;
        }
        if let DayOffset::Within(offset) = day_offset(&record.author_time, now) {
            table.increment(offset);
            progress.inc(1);
        }
    })?;
    Ok(table)
}

/// Fold the history of every repository into one table.
///
/// Repositories are read one after another in the given order. Each one
/// fills its own partial table which is summed into the result, so the
/// order never changes the outcome.
pub fn aggregate<S, Tz>(
    source: &S,
    repositories: &[PathBuf],
    author_email: &str,
    now: &DateTime<Tz>,
    policy: ErrorPolicy,
) -> Result<Aggregation>
where
    S: CommitSource + ?Sized,
    Tz: TimeZone,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} ({pos} commits)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let mut aggregation = Aggregation::default();
    for repository in repositories {
        pb.set_message(format!("Reading {}", repository.display()));

        match aggregate_repository(source, repository, author_email, now, &pb) {
            Ok(partial) => {
                debug!(repository = %repository.display(), commits = partial.total(), "repository aggregated");
                aggregation.table.merge(&partial);
            }
            Err(err) if policy == ErrorPolicy::SkipFailed => {
                warn!(repository = %repository.display(), error = %err, "skipping repository");
                aggregation.skipped.push(repository.clone());
            }
            Err(err) => {
                pb.finish_and_clear();
                return Err(err);
            }
        }
    }

    pb.finish_and_clear();
    Ok(aggregation)
}
