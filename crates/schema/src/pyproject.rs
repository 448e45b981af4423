//! The parts of `pyproject.toml` that CPPython reads.

use crate::cppython::CPPythonLocalConfiguration;
use crate::pep621::Pep621Configuration;
use serde::{Deserialize, Serialize};

/// The `[tool]` table. Other tools' tables are ignored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cppython: Option<CPPythonLocalConfiguration>,
}

/// `pyproject.toml`. Unknown top-level tables such as `[build-system]` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyProject {
    pub project: Pep621Configuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolData>,
}

impl PyProject {
    /// The `[tool.cppython]` table, if present.
    #[must_use]
    pub fn cppython(&self) -> Option<&CPPythonLocalConfiguration> {
        self.tool.as_ref().and_then(|tool| tool.cppython.as_ref())
    }
}
