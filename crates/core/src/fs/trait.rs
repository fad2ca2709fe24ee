//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}

/// Read-only view of the build output directory
pub trait FileSystem: Send + Sync {
    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// List directory contents (unordered)
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Names of the regular files directly inside `dir`, sorted
    fn file_names(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .read_dir(dir)?
            .into_iter()
            .filter(DirEntry::is_file)
            .map(|e| e.name)
            .collect();
        names.sort();
        Ok(names)
    }
}
