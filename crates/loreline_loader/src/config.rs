//! Configuration for locating data files.

use std::path::{Path, PathBuf};

/// Where the loader looks for data files.
///
/// A file named `monster` resolves to `monster.txt` in the user directory
/// if it exists there, and otherwise in the game data directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory of user overrides, searched first.
    pub user_dir: Option<PathBuf>,

    /// Directory of the standard data files.
    pub gamedata_dir: PathBuf,

    /// Extension appended to file names, without the dot.
    pub extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            user_dir: None,
            gamedata_dir: PathBuf::from("gamedata"),
            extension: "txt".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Creates a configuration reading from `gamedata_dir` only.
    #[must_use]
    pub fn new(gamedata_dir: impl Into<PathBuf>) -> Self {
        Self {
            gamedata_dir: gamedata_dir.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the user override directory.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    /// Builder method to set the file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the file name for `name`, with the extension appended.
    #[must_use]
    pub fn file_name(&self, name: &str) -> String {
        if self.extension.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{}", self.extension)
        }
    }

    /// Returns the paths tried for `name`, in search order.
    #[must_use]
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file = self.file_name(name);
        self.user_dir
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.gamedata_dir.as_path()))
            .map(|dir: &Path| dir.join(&file))
            .collect()
    }
}
