//! Information about the project being operated on, supplied by the CPPython frontend.

use crate::error::SchemaError;
use serde::Serialize;
use std::path::{Path, PathBuf};

const PYPROJECT_FILE_NAME: &str = "pyproject.toml";

/// Highest supported verbosity level.
pub const MAX_VERBOSITY: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfiguration {
    pyproject_file: PathBuf,
    version: Option<String>,
    verbosity: u8,
    debug: bool,
}

impl ProjectConfiguration {
    /// # Errors
    /// [`SchemaError::Validation`] if the file is not named `pyproject.toml`.
    pub fn new(pyproject_file: impl Into<PathBuf>) -> Result<Self, SchemaError> {
        let pyproject_file = pyproject_file.into();

        if pyproject_file.file_name().and_then(|n| n.to_str()) != Some(PYPROJECT_FILE_NAME) {
            return Err(SchemaError::Validation {
                message: format!(
                    "'{}' is not a {PYPROJECT_FILE_NAME} file",
                    pyproject_file.display()
                )
                .into(),
                context: None,
            });
        }

        Ok(Self { pyproject_file, version: None, verbosity: 0, debug: false })
    }

    /// The version reported by an external source, used when `[project]` declares it dynamic.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Clamped to [`MAX_VERBOSITY`].
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity.min(MAX_VERBOSITY);
        self
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn pyproject_file(&self) -> &Path {
        &self.pyproject_file
    }

    /// The directory containing `pyproject.toml`. A bare file name resolves to `.`.
    #[must_use]
    pub fn root_directory(&self) -> &Path {
        match self.pyproject_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        self.verbosity
    }

    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_pyproject_file_name() {
        assert!(ProjectConfiguration::new("project/pyproject.toml").is_ok());
        assert!(matches!(
            ProjectConfiguration::new("project/Cargo.toml"),
            Err(SchemaError::Validation { .. })
        ));
        assert!(ProjectConfiguration::new("project/").is_err());
    }

    #[test]
    fn verbosity_is_clamped() {
        let config =
            ProjectConfiguration::new("pyproject.toml").expect("valid path").with_verbosity(7);
        assert_eq!(config.verbosity(), MAX_VERBOSITY);
    }

    #[test]
    fn root_directory_of_bare_file_is_current_dir() {
        let config = ProjectConfiguration::new("pyproject.toml").expect("valid path");
        assert_eq!(config.root_directory(), Path::new("."));

        let nested = ProjectConfiguration::new("a/b/pyproject.toml").expect("valid path");
        assert_eq!(nested.root_directory(), Path::new("a/b"));
    }
}
