//! Plugin naming, feature reports and the per-group data handed to plugins.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The plugin kinds CPPython knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginGroup {
    Interface,
    Provider,
    Generator,
    Scm,
}

impl PluginGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Provider => "provider",
            Self::Generator => "generator",
            Self::Scm => "scm",
        }
    }
}

impl fmt::Display for PluginGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginGroup {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interface" => Ok(Self::Interface),
            "provider" => Ok(Self::Provider),
            "generator" => Ok(Self::Generator),
            "scm" => Ok(Self::Scm),
            other => Err(SchemaError::InvalidPluginName {
                message: format!("unknown plugin group '{other}'").into(),
                context: None,
            }),
        }
    }
}

/// A plugin's full name, `<name>.<group>`, derived from its type name.
///
/// The type name must consist of exactly two CamelCase words: the plugin name followed by
/// its group, e.g. `VcpkgProvider` is `vcpkg.provider`. Acronyms count as one word, so
/// `AcronymYA` is `acronym.ya` and `YAAcronym` is `ya.acronym`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginName {
    name: String,
    group: String,
}

impl PluginName {
    /// Parses a Rust type name, ignoring its module path and generic arguments.
    ///
    /// # Errors
    /// [`SchemaError::InvalidPluginName`] unless the bare type name has exactly two words.
    pub fn from_type_name(type_name: &str) -> Result<Self, SchemaError> {
        let bare = type_name.split('<').next().unwrap_or(type_name);
        let bare = bare.rsplit("::").next().unwrap_or(bare);

        let words = split_camel_case(bare);
        match words.as_slice() {
            [name, group] => Ok(Self { name: name.to_lowercase(), group: group.to_lowercase() }),
            _ => Err(SchemaError::InvalidPluginName {
                message: format!(
                    "'{bare}' must be two CamelCase words, the plugin name then its group"
                )
                .into(),
                context: None,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.group)
    }
}

/// Splits before an upper-case letter that follows a lower-case letter or digit, and before
/// the last capital of an acronym that runs into a lower-case letter.
fn split_camel_case(ident: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let boundary = c.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next.is_some_and(char::is_lowercase)));

        if boundary {
            words.push(&ident[start..offset]);
            start = offset;
        }
    }

    if start < ident.len() {
        words.push(&ident[start..]);
    }
    words
}

/// Identity of a registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginInformation {
    pub name: PluginName,
    pub group: PluginGroup,
}

/// Features a provider or generator supports in a given directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFeatures {
    /// The plugin can initialize a project that has no configuration for it yet.
    pub initialization: bool,
}

/// Features an SCM plugin supports in a given directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedScmFeatures {
    /// The directory is a repository this plugin understands.
    pub repository: bool,
}

/// Project data given to every provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderData {
    /// The directory where `pyproject.toml` lives.
    pub root_directory: PathBuf,
}

/// Project data given to every generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorData {
    /// The directory where `pyproject.toml` lives.
    pub root_directory: PathBuf,
}

/// Project data given to every SCM plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmData {
    /// The directory where `pyproject.toml` lives.
    pub root_directory: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_word_names() {
        let name = PluginName::from_type_name("BasicPlugin").expect("valid name");
        assert_eq!(name.to_string(), "basic.plugin");
        assert_eq!(name.name(), "basic");
        assert_eq!(name.group(), "plugin");
    }

    #[test]
    fn acronyms_are_single_words() {
        assert_eq!(
            PluginName::from_type_name("AcronymYA").expect("valid name").to_string(),
            "acronym.ya"
        );
        assert_eq!(
            PluginName::from_type_name("YAAcronym").expect("valid name").to_string(),
            "ya.acronym"
        );
    }

    #[test]
    fn single_words_are_rejected() {
        for ident in ["Broken", "BROKEN", "", "ThreeWordName"] {
            assert!(
                matches!(
                    PluginName::from_type_name(ident),
                    Err(SchemaError::InvalidPluginName { .. })
                ),
                "{ident:?} should be rejected"
            );
        }
    }

    #[test]
    fn module_path_and_generics_are_ignored() {
        let name = PluginName::from_type_name("my_crate::plugins::VcpkgProvider<std::string::String>")
            .expect("valid name");
        assert_eq!(name.to_string(), "vcpkg.provider");
    }

    #[test]
    fn groups_round_trip_through_strings() {
        for group in [PluginGroup::Interface, PluginGroup::Provider, PluginGroup::Generator, PluginGroup::Scm] {
            assert_eq!(group.as_str().parse::<PluginGroup>().expect("known group"), group);
        }
        assert!("linker".parse::<PluginGroup>().is_err());
    }
}
