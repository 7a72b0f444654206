use crate::error::{CommitGridError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::info;

const GIT_DIR: &str = ".git";

/// Find every git repository under `root`, `root` itself included.
///
/// A directory is a repository when it holds a `.git` directory. `.git`
/// directories are never entered, but the working tree around them is, so
/// nested repositories are found too. Hidden and gitignored directories
/// are walked like any other. Results are absolute and sorted by path
/// within each directory.
pub fn scan_folder<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = normalize_root(root.as_ref())?;

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.file_name() != GIT_DIR)
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| CommitGridError::Scan {
            path: root.clone(),
            source,
        })?;

        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if is_dir && entry.path().join(GIT_DIR).is_dir() {
            info!(repository = %entry.path().display(), "found repository");
            repos.push(entry.into_path());
        }
    }
    Ok(repos)
}

fn normalize_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize().map_err(|e| CommitGridError::Scan {
        path: root.to_path_buf(),
        source: ignore::Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn mkrepo(path: &Path) {
        fs::create_dir_all(path.join(".git/refs")).unwrap();
    }

    #[test]
    fn finds_nested_repositories_in_order() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        mkrepo(&root.join("b"));
        mkrepo(&root.join("a"));
        mkrepo(&root.join("a/vendor/lib"));
        mkrepo(&root.join("deep/er/.hidden"));
        fs::create_dir_all(root.join("plain/dir")).unwrap();

        let repos = scan_folder(&root).unwrap();
        assert_eq!(
            repos,
            vec![
                root.join("a"),
                root.join("a/vendor/lib"),
                root.join("b"),
                root.join("deep/er/.hidden"),
            ]
        );
    }

    #[test]
    fn root_can_be_a_repository() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        mkrepo(&root);
        assert_eq!(scan_folder(&root).unwrap(), vec![root.clone()]);
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        mkrepo(&root.join("r"));
        let with_slash = format!("{}/", root.display());
        assert_eq!(scan_folder(with_slash).unwrap(), vec![root.join("r")]);
    }

    #[test]
    fn git_file_is_not_a_repository() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("worktree")).unwrap();
        fs::write(root.join("worktree/.git"), "gitdir: elsewhere").unwrap();
        assert!(scan_folder(&root).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            scan_folder(dir.path().join("absent")),
            Err(CommitGridError::Scan { .. })
        ));
    }
}
