use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads straight from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        fs::read_dir(path)
            .with_context(|| format!("Failed to list build directory {:?}", path))?
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err::<DirEntry, _>(e).with_context(|| {
                            format!("Failed to read entry in {:?}", path)
                        }))
                    }
                };
                // follows links: a symlinked runner counts as a file, a dangling one is skipped
                let target = entry.path();
                let file_type = if target.is_file() {
                    FileType::File
                } else if target.is_dir() {
                    FileType::Directory
                } else {
                    return None;
                };
                Some(Ok(DirEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    file_type,
                }))
            })
            .collect()
    }
}
