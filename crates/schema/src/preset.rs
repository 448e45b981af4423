//! The partial CMake presets schema CPPython reads and writes.
//!
//! See <https://cmake.org/cmake/help/latest/manual/cmake-presets.7.html>.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Schema version written by CPPython.
pub const PRESETS_VERSION: u32 = 4;

/// A cache variable value. `null` entries are represented by `None` in
/// [`Preset::cache_variables`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CacheVariable {
    Bool(bool),
    String(String),
    Typed {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        value: TypedValue,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    Bool(bool),
    String(String),
}

/// Fields common to every preset kind.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Always stored as a list, although CMake also accepts a single string.
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Option::is_none")]
    pub inherits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_variables: Option<BTreeMap<String, Option<CacheVariable>>>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// A configure preset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurePreset {
    #[serde(flatten)]
    pub preset: Preset,
    /// Always uses forward slashes.
    #[serde(default, deserialize_with = "posix_path", skip_serializing_if = "Option::is_none")]
    pub toolchain_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

impl ConfigurePreset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { preset: Preset::new(name), ..Self::default() }
    }

    #[must_use]
    pub fn with_toolchain_file(mut self, path: &Path) -> Self {
        self.toolchain_file = Some(to_posix(&path.to_string_lossy()));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.preset.name
    }
}

/// Root of a `CMakePresets.json`/`CMakeUserPresets.json` or an included presets file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CMakePresets {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub configure_presets: Vec<ConfigurePreset>,
}

impl Default for CMakePresets {
    fn default() -> Self {
        Self { version: PRESETS_VERSION, include: None, configure_presets: Vec::new() }
    }
}

fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(single) => vec![single],
        OneOrMany::Many(list) => list,
    }))
}

fn posix_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|p| to_posix(&p)))
}
