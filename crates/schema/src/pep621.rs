//! The subset of the PEP 621 `[project]` table that CPPython reads.
//!
//! See <https://peps.python.org/pep-0621/>. The table belongs to the Python packaging
//! ecosystem, so unknown keys are ignored rather than rejected.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

const DYNAMIC_VERSION: &str = "version";

/// `[project]` as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPep621")]
pub struct Pep621Configuration {
    dynamic: Vec<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    description: String,
}

#[derive(Deserialize)]
struct RawPep621 {
    #[serde(default)]
    dynamic: Vec<String>,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: String,
}

impl TryFrom<RawPep621> for Pep621Configuration {
    type Error = SchemaError;

    fn try_from(raw: RawPep621) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.version, raw.dynamic).map(|c| c.with_description(raw.description))
    }
}

impl Pep621Configuration {
    /// Builds a validated configuration.
    ///
    /// # Errors
    /// [`SchemaError::Validation`] when `version` is both static and listed as dynamic, or is
    /// neither.
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        dynamic: Vec<String>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let is_dynamic = dynamic.iter().any(|d| d == DYNAMIC_VERSION);

        match (is_dynamic, version.is_some()) {
            (true, true) => {
                return Err(SchemaError::Validation {
                    message: "'version' is listed as dynamic but also has a value".into(),
                    context: Some(format!("project '{name}'").into()),
                });
            },
            (false, false) => {
                return Err(SchemaError::Validation {
                    message: "'version' must be set or listed as dynamic".into(),
                    context: Some(format!("project '{name}'").into()),
                });
            },
            _ => {},
        }

        Ok(Self { dynamic, name, version, description: String::new() })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn dynamic(&self) -> &[String] {
        &self.dynamic
    }

    /// Whether the version has to be supplied from outside the file (e.g. by an SCM plugin).
    #[must_use]
    pub fn has_dynamic_version(&self) -> bool {
        self.dynamic.iter().any(|d| d == DYNAMIC_VERSION)
    }
}

/// `[project]` after resolution: the version is always known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pep621Data {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_version_is_accepted() {
        let config = Pep621Configuration::new("demo", Some("1.0.0".into()), Vec::new())
            .expect("valid configuration");
        assert_eq!(config.version(), Some("1.0.0"));
        assert!(!config.has_dynamic_version());
    }

    #[test]
    fn dynamic_version_is_accepted() {
        let config = Pep621Configuration::new("demo", None, vec!["version".into()])
            .expect("valid configuration");
        assert!(config.has_dynamic_version());
        assert_eq!(config.version(), None);
    }

    #[test]
    fn missing_version_is_rejected() {
        let err = Pep621Configuration::new("empty-test", None, Vec::new()).expect_err("invalid");
        assert!(matches!(err, SchemaError::Validation { .. }));
    }

    #[test]
    fn conflicting_version_is_rejected() {
        let err =
            Pep621Configuration::new("both-test", Some("1.0.0".into()), vec!["version".into()])
                .expect_err("invalid");
        assert!(matches!(err, SchemaError::Validation { .. }));
        assert!(err.to_string().contains("both-test"));
    }

    #[test]
    fn unrelated_dynamic_fields_do_not_count() {
        let config =
            Pep621Configuration::new("demo", Some("0.1.0".into()), vec!["readme".into()])
                .expect("valid configuration");
        assert!(!config.has_dynamic_version());
    }
}
