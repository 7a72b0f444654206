use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitGridError>;

#[derive(Error, Debug)]
pub enum CommitGridError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Registry error at {path}: {source}")]
    Registry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for CommitGridError {
    fn from(err: gix::open::Error) -> Self {
        CommitGridError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for CommitGridError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        CommitGridError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for CommitGridError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        CommitGridError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for CommitGridError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        CommitGridError::HeadPeel(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for CommitGridError {
    fn from(err: gix::objs::decode::Error) -> Self {
        CommitGridError::ObjectDecode(Box::new(err))
    }
}
