//! Directory traversal with whole-subtree exclusion
//!
//! Architectural Principle: Service Layer - TreeWalker owns the rules for which files get classified
//! - Excluded directories are pruned before descent, never filtered per file
//! - Every non-directory entry is a leaf, symlinks are not followed
//! - Traversal errors abort the walk and surface to the caller unchanged

use crate::domain::violations::{FileEntry, GuardianError, GuardianResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Directory basenames whose subtrees are skipped entirely
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Build a set from directory names, used as given
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Parse a comma-separated host input, trimming each element.
    ///
    /// An empty input yields the single empty name, which cannot match any
    /// real directory and so prunes nothing.
    pub fn parse(input: &str) -> Self {
        Self::new(input.split(',').map(str::trim))
    }

    /// Whether a directory called `name` is excluded
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Recursively enumerates the files under a root
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    exclusions: ExclusionSet,
}

impl TreeWalker {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Collect every file below `root`, in directory-listing order
    pub fn walk<P: AsRef<Path>>(&self, root: P) -> GuardianResult<Vec<FileEntry>> {
        let root = root.as_ref();
        let mut files = Vec::new();

        // the root must be a directory; a link to one is followed
        let metadata = fs::metadata(root).map_err(|e| GuardianError::filesystem(root, e))?;
        if !metadata.is_dir() {
            return Err(GuardianError::filesystem(
                root,
                io::Error::new(io::ErrorKind::Other, "not a directory"),
            ));
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(root, e))?;

            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            files.push(FileEntry::new(relative.to_path_buf()));
        }

        tracing::debug!("Discovered {} files under {}", files.len(), root.display());
        Ok(files)
    }

    /// Whether `entry` is an excluded directory below the root.
    ///
    /// A symlink that resolves to a directory counts as one here, so an
    /// excluded name is skipped even when it is linked in.
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if !self.exclusions.contains(&name) {
            return false;
        }

        let is_dir = entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir());
        if is_dir {
            tracing::debug!("Skipping excluded directory {}", entry.path().display());
        }
        is_dir
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> GuardianError {
    let path = error.path().unwrap_or(root).to_path_buf();
    let message = error.to_string();
    let source = error
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
    GuardianError::filesystem(path, source)
}
