//! # Schema
//!
//! Data definitions exchanged between CPPython and its plugins.
//!
//! Everything here is plain data plus validation: the `[project]` and `[tool.cppython]`
//! tables of a `pyproject.toml`, their resolved forms, PEP 508 requirements, the partial
//! CMake presets schema, and plugin naming. Reading files and creating directories is left
//! to `cppython-core`.

pub mod cppython;
pub mod error;
pub mod pep621;
pub mod plugin;
pub mod preset;
pub mod project;
pub mod pyproject;
pub mod requirement;

pub use crate::cppython::{
    CPPythonData, CPPythonGlobalConfiguration, CPPythonLocalConfiguration, CPPythonPluginData,
    PluginTable, TargetEnum,
};
pub use crate::error::{SchemaError, SchemaErrorExt};
pub use crate::pep621::{Pep621Configuration, Pep621Data};
pub use crate::plugin::{
    GeneratorData, PluginGroup, PluginInformation, PluginName, ProviderData, ScmData,
    SupportedFeatures, SupportedScmFeatures,
};
pub use crate::preset::{CMakePresets, CacheVariable, ConfigurePreset, PRESETS_VERSION, Preset, TypedValue};
pub use crate::project::ProjectConfiguration;
pub use crate::pyproject::{PyProject, ToolData};
pub use crate::requirement::{Operator, Requirement, Specifier, canonicalize_name};
