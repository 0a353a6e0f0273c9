use eyre::eyre;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};
use tracing::debug;

type Folder = String;
type FilterMap = BTreeMap<Folder, Vec<String>>;

/// Skip list as written in the YAML file.
#[derive(Deserialize, Default, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilterFile {
    /// List of directories that should be skipped.
    pub directories: Vec<String>,
    /// Mapping containing the directories and the files that should be skipped
    pub filename: FilterMap,
    /// Mapping containing the directories and the regex patterns that should be skipped
    pub regex: FilterMap,
    /// Mapping containing the fixture files and the methods that should be skipped
    pub method: FilterMap,
}

/// Filter to be applied on the fixture files and their cases
#[derive(Debug, Default)]
pub struct Filter {
    file: FilterFile,
    regex: BTreeMap<Folder, Vec<Regex>>,
}

impl Filter {
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, eyre::Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| eyre!("Unable to read filter file {}: {err}", path.display()))?;
        debug!("loaded filter file {}", path.display());
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, eyre::Error> {
        let file: FilterFile = serde_yaml::from_str(content)?;
        Self::try_from(file)
    }

    /// Checks if the fixture file at the given path is inside the filter object.
    /// The path is expected relative to the fixture root.
    pub fn is_skipped(&self, path: &Path) -> bool {
        let dir_name = dir_name(path);
        let file_name = file_stem(path);

        if self.file.directories.iter().any(|dir| {
            path.parent()
                .map(|parent| {
                    parent
                        .components()
                        .any(|c| c.as_os_str().to_str() == Some(dir.as_str()))
                })
                .unwrap_or_default()
        }) {
            return true;
        }

        let mut should_skip = self
            .file
            .filename
            .get(&dir_name)
            .map(|filtered_files| filtered_files.iter().any(|filename| filename == &file_name))
            .unwrap_or_default();

        should_skip |= self
            .regex
            .get(&dir_name)
            .map(|regexes| regexes.iter().any(|regex| regex.is_match(&file_name)))
            .unwrap_or_default();

        should_skip
    }

    /// Checks if a case invoking `method` in the given fixture file is skipped
    pub fn is_case_skipped(&self, path: &Path, method: &str) -> bool {
        self.file
            .method
            .get(&file_stem(path))
            .map(|methods| methods.iter().any(|m| m == method))
            .unwrap_or_default()
    }
}

impl TryFrom<FilterFile> for Filter {
    type Error = eyre::Error;

    fn try_from(file: FilterFile) -> Result<Self, Self::Error> {
        let regex = file
            .regex
            .iter()
            .map(|(folder, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|pattern| {
                        Regex::new(pattern)
                            .map_err(|err| eyre!("Invalid regex `{pattern}` for {folder}: {err}"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((folder.clone(), compiled))
            })
            .collect::<Result<BTreeMap<_, _>, eyre::Error>>()?;
        Ok(Self { file, regex })
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn dir_name(path: &Path) -> String {
    path.parent().map(file_stem).unwrap_or_default()
}
