use crate::error::{CommitGridError, Result};
use crate::heat::ErrorPolicy;
use crate::registry::Registry;
use std::path::{Path, PathBuf};

/// Settings resolved once at startup and handed to the components that need them.
#[derive(Debug, Clone)]
pub struct Config {
    pub state_dir: PathBuf,
    pub error_policy: ErrorPolicy,
}

impl Config {
    /// Use `state_dir` when given, otherwise the user's home directory.
    pub fn resolve(state_dir: Option<&Path>, strict: bool) -> Result<Self> {
        let state_dir = match state_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::home_dir().ok_or_else(|| {
                CommitGridError::Config(
                    "could not determine home directory; pass --state-dir".to_string(),
                )
            })?,
        };

        Ok(Self {
            state_dir,
            error_policy: if strict {
                ErrorPolicy::Strict
            } else {
                ErrorPolicy::SkipFailed
            },
        })
    }

    pub fn registry(&self) -> Registry {
        Registry::in_dir(&self.state_dir)
    }
}
