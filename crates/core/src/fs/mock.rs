use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory file tree used to stage build outputs in tests
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, FileType>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }
        entries.insert(path, FileType::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        Self::ensure_parents(&mut entries, &path);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, FileType>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries
                .entry(current.clone())
                .or_insert(FileType::Directory);
        }
    }

    fn file_type(&self, path: &Path) -> Option<FileType> {
        let path = self.normalize_path(path);
        self.entries.read().unwrap().get(&path).copied()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.file_type(path) == Some(FileType::File)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let entries = self.entries.read().unwrap();

        if entries.get(&path) != Some(&FileType::Directory) {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        Ok(entries
            .iter()
            .filter(|(p, _)| p.parent() == Some(path.as_path()))
            .map(|(p, file_type)| DirEntry {
                name: p
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string(),
                file_type: *file_type,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("target/app-runner.jar");

        assert!(fs.is_file(Path::new("/mock/target/app-runner.jar")));
        assert_eq!(fs.file_type(Path::new("/mock/target")), Some(FileType::Directory));
    }

    #[test]
    fn test_add_dir() {
        let fs = MockFileSystem::new();
        fs.add_dir("target/lib");

        assert!(!fs.is_file(Path::new("/mock/target/lib")));
        assert!(fs.read_dir(Path::new("/mock/target/lib")).unwrap().is_empty());
    }

    #[test]
    fn test_file_names() {
        let fs = MockFileSystem::new();
        fs.add_dir("target/lib");
        fs.add_file("target/b-runner.jar");
        fs.add_file("target/a-runner");
        fs.add_file("target/lib/dep.jar");

        let names = fs.file_names(Path::new("/mock/target")).unwrap();
        assert_eq!(names, vec!["a-runner", "b-runner.jar"]);
    }

    #[test]
    fn test_read_dir_on_file_fails() {
        let fs = MockFileSystem::new();
        fs.add_file("target/app-runner");

        assert!(fs.read_dir(Path::new("/mock/target/app-runner")).is_err());
        assert!(fs.read_dir(Path::new("/mock/missing")).is_err());
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/work"));
        fs.add_file("target/sample-runner");

        assert_eq!(fs.root(), Path::new("/work"));
        assert!(fs.is_file(Path::new("/work/target/sample-runner")));
    }
}
