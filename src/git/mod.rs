pub mod repo;

pub use repo::{CommitLog, GitRepo};
