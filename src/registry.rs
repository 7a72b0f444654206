use crate::error::{CommitGridError, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const REGISTRY_FILE_NAME: &str = ".commitgrid";

/// Newline separated list of repository paths, kept in insertion order.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Registry file inside `state_dir`.
    pub fn in_dir<P: AsRef<Path>>(state_dir: P) -> Self {
        Self::open(state_dir.as_ref().join(REGISTRY_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registered repositories. A missing file is an empty registry.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        Ok(contents
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(decode_path)
            .collect())
    }

    /// Append the paths not registered yet and persist the result.
    ///
    /// Existing entries keep their position; duplicates in `repos` are
    /// collapsed to their first occurrence.
    pub fn add(&self, repos: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut registered = self.load()?;
        let mut seen: HashSet<PathBuf> = registered.iter().cloned().collect();

        let before = registered.len();
        for repo in repos {
            if seen.insert(repo.clone()) {
                debug!(repository = %repo.display(), "registering repository");
                registered.push(repo.clone());
            }
        }

        if registered.len() != before || !self.path.exists() {
            self.save(&registered)?;
        }
        Ok(registered)
    }

    fn save(&self, repos: &[PathBuf]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut contents = Vec::new();
        for repo in repos {
            let bytes = encode_path(repo).map_err(|e| self.io_error(e))?;
            contents.extend_from_slice(&bytes);
            contents.push(b'\n');
        }
        fs::write(&self.path, contents).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> CommitGridError {
        CommitGridError::Registry {
            path: self.path.clone(),
            source,
        }
    }
}

/// Raw path bytes, so whitespace and non UTF-8 names are stored unchanged.
#[cfg(unix)]
fn encode_path(path: &Path) -> std::io::Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;

    check_single_line(path.as_os_str().as_bytes().to_vec(), path)
}

#[cfg(not(unix))]
fn encode_path(path: &Path) -> std::io::Result<Vec<u8>> {
    let text = path.to_str().ok_or_else(|| {
        std::io::Error::new(
            ErrorKind::InvalidData,
            format!("path is not valid UTF-8: {}", path.display()),
        )
    })?;
    check_single_line(text.as_bytes().to_vec(), path)
}

fn check_single_line(bytes: Vec<u8>, path: &Path) -> std::io::Result<Vec<u8>> {
    if bytes.is_empty() || bytes.ends_with(b"\r") || bytes.contains(&b'\n') {
        return Err(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("path cannot be stored on one line: {}", path.display()),
        ));
    }
    Ok(bytes)
}

#[cfg(unix)]
fn decode_path(line: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(std::ffi::OsStr::from_bytes(line))
}

#[cfg(not(unix))]
fn decode_path(line: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(line).into_owned())
}
