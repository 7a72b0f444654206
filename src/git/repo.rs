use crate::error::{CommitGridError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use std::collections::HashSet;
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`; parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Lazily walk every commit reachable from HEAD, newest first.
    pub fn commits(&self) -> Result<CommitLog<'_>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        Ok(CommitLog {
            repo: &self.repo,
            seen: HashSet::new(),
            stack: vec![head_commit.id],
        })
    }
}

/// Depth-first history walk that yields each commit once.
pub struct CommitLog<'repo> {
    repo: &'repo Repository,
    seen: HashSet<ObjectId>,
    stack: Vec<ObjectId>,
}

impl CommitLog<'_> {
    fn read(&mut self, commit_id: ObjectId) -> Result<CommitRecord> {
        let repo = self.repo;
        let commit = repo.find_commit(commit_id)?;

        // Push in reverse so the first parent is walked first.
        let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.detach()).collect();
        self.stack.extend(parents.into_iter().rev());

        let author = commit.author()?;
        let time = author
            .time()
            .map_err(|e| CommitGridError::InvalidDate(format!("{commit_id}: {e}")))?;

        Ok(CommitRecord {
            author_email: author.email.to_string(),
            author_time: to_datetime(time.seconds, time.offset)?,
        })
    }
}

impl Iterator for CommitLog<'_> {
    type Item = Result<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(commit_id) = self.stack.pop() {
            if !self.seen.insert(commit_id) {
                continue;
            }
            return Some(self.read(commit_id));
        }
        None
    }
}

/// Author instant in the author's own UTC offset.
pub fn to_datetime(seconds: i64, offset_seconds: i32) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_seconds)
        .ok_or_else(|| CommitGridError::InvalidDate(format!("Invalid UTC offset: {offset_seconds}")))?;
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| CommitGridError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    Ok(utc.with_timezone(&offset))
}
