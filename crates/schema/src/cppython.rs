//! `[tool.cppython]` and the user-wide CPPython configuration, before and after resolution.

use crate::requirement::Requirement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;

/// A plugin-specific table, e.g. `[tool.cppython.provider.vcpkg]`.
pub type PluginTable = toml::Table;

const DEFAULT_INSTALL_DIR: &str = ".cppython";
const DEFAULT_TOOL_PATH: &str = "tool";
const DEFAULT_BUILD_PATH: &str = "build";

/// The C++ build target type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEnum {
    #[default]
    Executable,
    Static,
    Shared,
}

impl fmt::Display for TargetEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Executable => "executable",
            Self::Static => "static",
            Self::Shared => "shared",
        })
    }
}

/// `~/.cppython`, or `.cppython` relative to the project when no home directory exists.
#[must_use]
pub fn default_install_path() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(DEFAULT_INSTALL_DIR)
}

/// The `[tool.cppython]` table of a project.
///
/// Keys are kebab-case only and unknown keys are rejected, since this table is owned by
/// CPPython.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct CPPythonLocalConfiguration {
    pub target: TargetEnum,
    pub dependencies: Vec<Requirement>,
    /// Overrides the global install path for this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_path: Option<PathBuf>,
    pub tool_path: PathBuf,
    pub build_path: PathBuf,
    /// Provider tables keyed by plugin name.
    pub provider: BTreeMap<String, PluginTable>,
    /// Generator tables keyed by plugin name.
    pub generator: BTreeMap<String, PluginTable>,
}

impl Default for CPPythonLocalConfiguration {
    fn default() -> Self {
        Self {
            target: TargetEnum::default(),
            dependencies: Vec::new(),
            install_path: None,
            tool_path: PathBuf::from(DEFAULT_TOOL_PATH),
            build_path: PathBuf::from(DEFAULT_BUILD_PATH),
            provider: BTreeMap::new(),
            generator: BTreeMap::new(),
        }
    }
}

/// Settings shared by every project of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct CPPythonGlobalConfiguration {
    pub install_path: PathBuf,
    /// Whether plugins check that their tooling is up to date.
    pub current_check: bool,
}

impl Default for CPPythonGlobalConfiguration {
    fn default() -> Self {
        Self { install_path: default_install_path(), current_check: true }
    }
}

/// Resolved CPPython data: every path is absolute and no field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CPPythonData {
    pub target: TargetEnum,
    pub dependencies: Vec<Requirement>,
    pub install_path: PathBuf,
    pub tool_path: PathBuf,
    pub build_path: PathBuf,
    pub current_check: bool,
}

/// [`CPPythonData`] specialized for one plugin: `install_path` points at the plugin's own
/// directory below the shared install path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CPPythonPluginData(CPPythonData);

impl CPPythonPluginData {
    #[must_use]
    pub const fn new(data: CPPythonData) -> Self {
        Self(data)
    }

    #[must_use]
    pub fn into_inner(self) -> CPPythonData {
        self.0
    }
}

impl Deref for CPPythonPluginData {
    type Target = CPPythonData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_configuration_defaults() {
        let local = CPPythonLocalConfiguration::default();
        assert_eq!(local.target, TargetEnum::Executable);
        assert_eq!(local.tool_path, PathBuf::from("tool"));
        assert_eq!(local.build_path, PathBuf::from("build"));
        assert!(local.install_path.is_none());
        assert!(local.provider.is_empty());
    }

    #[test]
    fn global_configuration_defaults() {
        let global = CPPythonGlobalConfiguration::default();
        assert!(global.current_check);
        assert!(global.install_path.ends_with(".cppython"));
    }

    #[test]
    fn target_display_matches_serialized_form() {
        assert_eq!(TargetEnum::Shared.to_string(), "shared");
        assert_eq!(TargetEnum::default().to_string(), "executable");
    }
}
