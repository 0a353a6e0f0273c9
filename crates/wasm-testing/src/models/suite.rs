//! Fixture files and directories of fixture files.

use std::path::{Path, PathBuf};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::{error::LoaderError, TestCase};
use crate::{
    constants::FIXTURE_EXTENSION,
    filter::Filter,
    utils::io::{deserialize_into, load_file, write_json},
};

/// A fixture file: groups of cases. Each group runs against a freshly
/// deployed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    pub path: PathBuf,
    pub groups: Vec<Vec<TestCase>>,
}

impl FixtureFile {
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        let content = load_file(path)?;
        let groups: Vec<Vec<TestCase>> = deserialize_into(&content, path)?;
        debug!("loaded {} groups from {}", groups.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            groups,
        })
    }

    /// Writes the groups back to [`FixtureFile::path`] as indented JSON.
    pub fn save(&self) -> Result<(), LoaderError> {
        write_json(&self.groups, &self.path)
    }

    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.groups.iter().flatten()
    }

    /// Removes the cases skipped by the filter, then the emptied groups.
    fn apply_filter(&mut self, filter: &Filter) {
        let path = self.path.clone();
        for group in &mut self.groups {
            group.retain(|case| {
                let skipped = filter.is_case_skipped(&path, &case.method);
                if skipped {
                    info!("skipping {}::{}", path.display(), case.method);
                }
                !skipped
            });
        }
        self.groups.retain(|group| !group.is_empty());
    }
}

/// All fixture files found under a root directory.
#[derive(Debug, Default)]
pub struct FixtureSuite {
    pub root: PathBuf,
    pub files: Vec<FixtureFile>,
}

impl FixtureSuite {
    /// Walks the given directory and returns the fixture files in it.
    /// Fails on the first entry that cannot be read.
    pub fn walk_dir(root: &Path) -> Result<Vec<DirEntry>, LoaderError> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let is_fixture = entry.file_type().is_file()
                        && entry
                            .path()
                            .extension()
                            .map(|ext| ext == FIXTURE_EXTENSION)
                            .unwrap_or_default();
                    is_fixture.then(|| Ok(entry))
                }
                Err(err) => Some(Err(LoaderError::Io {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    error: err.to_string(),
                })),
            })
            .collect()
    }

    /// Loads every fixture file under `root` that the filter keeps.
    /// Skip rules are matched against paths relative to `root`.
    /// Files are parsed in parallel and returned sorted by path.
    pub fn load(root: &Path, filter: &Filter) -> Result<Self, LoaderError> {
        if !root.is_dir() {
            return Err(LoaderError::Io {
                path: root.into(),
                error: "expected directory".into(),
            });
        }

        let mut files = Self::walk_dir(root)?
            .into_par_iter()
            .filter(|entry| {
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                let skipped = filter.is_skipped(relative);
                if skipped {
                    info!("skipping {}", entry.path().display());
                }
                !skipped
            })
            .map(|entry| {
                let mut file = FixtureFile::load(entry.path())?;
                file.apply_filter(filter);
                Ok(file)
            })
            .collect::<Result<Vec<_>, LoaderError>>()?;
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let suite = Self {
            root: root.to_path_buf(),
            files,
        };
        info!(
            "loaded {} cases from {} files in {}",
            suite.cases().count(),
            suite.files.len(),
            root.display()
        );
        Ok(suite)
    }

    /// Iterates all cases with the path of the file they come from.
    pub fn cases(&self) -> impl Iterator<Item = (&Path, &TestCase)> {
        self.files
            .iter()
            .flat_map(|file| file.cases().map(move |case| (file.path.as_path(), case)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestEnv;
    use address::ADDRESS_EMPTY;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wasm-testing-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn case(method: &str) -> TestCase {
        TestCase {
            env: TestEnv::new(vec![ADDRESS_EMPTY]),
            method: method.to_string(),
            param: "int:1".to_string(),
            expect: "int:2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_and_load() {
        // Given
        let dir = temp_dir("save");
        let file = FixtureFile {
            path: dir.join("add.json"),
            groups: vec![vec![case("add"), case("sub")], vec![case("mul")]],
        };

        // When
        file.save().unwrap();
        let loaded = FixtureFile::load(&file.path).unwrap();

        // Then
        assert_eq!(loaded, file);
        assert_eq!(loaded.cases().count(), 3);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_apply_filter() {
        // Given
        let mut file = FixtureFile {
            path: PathBuf::from("fixtures/arith/add.json"),
            groups: vec![vec![case("add"), case("sub")], vec![case("sub")]],
        };
        let filter = Filter::from_yaml("method:\n  add:\n    - sub\n").unwrap();

        // When
        file.apply_filter(&filter);

        // Then
        assert_eq!(file.groups, vec![vec![case("add")]]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = FixtureFile::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[test]
    fn test_load_suite_not_a_directory() {
        let err = FixtureSuite::load(Path::new("does/not/exist"), &Filter::default()).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[test]
    fn test_walk_dir_only_json() {
        // Given
        let dir = temp_dir("walk");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("a.json"), "[]").unwrap();
        fs::write(dir.join("nested/b.json"), "[]").unwrap();
        fs::write(dir.join("contract.wasm"), [0u8, 1]).unwrap();

        // When
        let mut entries: Vec<_> = FixtureSuite::walk_dir(&dir)
            .unwrap()
            .into_iter()
            .map(|e| e.path().to_path_buf())
            .collect();
        entries.sort();

        // Then
        assert_eq!(entries, vec![dir.join("a.json"), dir.join("nested/b.json")]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_walk_dir_error() {
        let err = FixtureSuite::walk_dir(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Io { ref path, .. } if path == Path::new("does/not/exist")
        ));
    }

    #[test]
    fn test_skip_rules_relative_to_root() {
        // Given
        let base = temp_dir("relative");
        let root = base.join("legacy/fixtures");
        fs::create_dir_all(root.join("arith")).unwrap();
        fs::create_dir_all(root.join("legacy")).unwrap();
        let file = FixtureFile {
            path: root.join("arith/add.json"),
            groups: vec![vec![case("add")]],
        };
        file.save().unwrap();
        fs::write(root.join("legacy/old.json"), "{}").unwrap();
        let filter = Filter::from_yaml("directories: [legacy]").unwrap();

        // When
        let suite = FixtureSuite::load(&root, &filter).unwrap();

        // Then
        assert_eq!(suite.files, vec![file]);
        fs::remove_dir_all(base).unwrap();
    }
}
