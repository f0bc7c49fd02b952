//! High score file.
//!
//! The file holds one decimal integer and nothing else.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::core::ScoreStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    /// Missing file is `Ok(None)`; anything but a non-negative integer is `InvalidData`.
    fn load(&mut self) -> io::Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let value = text
            .trim()
            .parse::<u32>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        debug!("loaded high score {} from {}", value, self.path.display());
        Ok(Some(value))
    }

    /// Written to a fresh temp file in the same directory, then persisted over
    /// the target. The temp file is removed if that fails.
    fn save(&mut self, high_score: u32) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        write!(tmp, "{}", high_score)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!("saved high score {} to {}", high_score, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileScoreStore::new(dir.path().join("absent.txt"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        let mut store = FileScoreStore::new(&path);

        store.save(1200).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1200");
        assert_eq!(store.load().unwrap(), Some(1200));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "700\n").unwrap();
        assert_eq!(FileScoreStore::new(&path).load().unwrap(), Some(700));
    }

    #[test]
    fn garbage_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "lots").unwrap();

        let err = FileScoreStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn save_leaves_sibling_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores");
        let sibling = dir.path().join("scores.tmp");
        fs::write(&sibling, "keep me").unwrap();

        FileScoreStore::new(&path).save(900).unwrap();
        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
        assert_eq!(fs::read_to_string(&path).unwrap(), "900");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory in the way makes the final rename fail.
        let path = dir.path().join("hs.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inside"), "x").unwrap();

        assert!(FileScoreStore::new(&path).save(5).is_err());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("hs.txt")]);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileScoreStore::new(dir.path().join("nope").join("hs.txt"));
        assert!(store.save(5).is_err());
    }
}
