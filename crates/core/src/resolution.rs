//! Turns user-written configuration into resolved data.
//!
//! Resolution makes every path absolute relative to the directory holding `pyproject.toml`,
//! fills in values supplied from outside the file (the dynamic version, the global install
//! path) and creates the directories the resolved data points at.

use crate::data::{CoreData, CorePluginData};
use crate::error::{CoreError, CoreErrorExt};
use cppython_schema::{
    CPPythonData, CPPythonGlobalConfiguration, CPPythonLocalConfiguration, CPPythonPluginData,
    GeneratorData, Pep621Configuration, Pep621Data, PluginName, PluginTable,
    ProjectConfiguration, ProviderData, PyProject, ScmData,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Builds the project configuration for `pyproject_file`.
///
/// # Errors
/// [`CoreError::Schema`] if the path does not name a `pyproject.toml`, [`CoreError::Config`] if
/// the file does not exist.
pub fn resolve_project_configuration(
    pyproject_file: impl Into<PathBuf>,
    version: Option<String>,
    verbosity: u8,
) -> Result<ProjectConfiguration, CoreError> {
    let mut project = ProjectConfiguration::new(pyproject_file)?.with_verbosity(verbosity);
    if let Some(version) = version {
        project = project.with_version(version);
    }

    if !project.pyproject_file().is_file() {
        return Err(CoreError::Config {
            message: format!("{} does not exist", project.pyproject_file().display()).into(),
            context: None,
        });
    }

    Ok(project)
}

/// Resolves `[project]`, taking a dynamic version from `project`.
///
/// # Errors
/// [`CoreError::Config`] if the version is dynamic and `project` carries none.
pub fn resolve_pep621(
    configuration: &Pep621Configuration,
    project: &ProjectConfiguration,
) -> Result<Pep621Data, CoreError> {
    let version = match configuration.version() {
        Some(version) => version.to_owned(),
        None => project.version().map(str::to_owned).ok_or_else(|| CoreError::Config {
            message: "the version is dynamic but no version was provided".into(),
            context: Some(format!("project '{}'", configuration.name()).into()),
        })?,
    };

    Ok(Pep621Data {
        name: configuration.name().to_owned(),
        version,
        description: configuration.description().to_owned(),
    })
}

/// Resolves `[tool.cppython]` against the user configuration and creates its directories.
///
/// Plugin tables are not part of the result; see [`extract_provider_data`] and
/// [`extract_generator_data`].
///
/// # Errors
/// [`CoreError::Io`] if a directory cannot be created or the root cannot be made absolute.
#[instrument(skip_all, fields(pyproject = %project.pyproject_file().display()))]
pub fn resolve_cppython(
    local: &CPPythonLocalConfiguration,
    global: &CPPythonGlobalConfiguration,
    project: &ProjectConfiguration,
) -> Result<CPPythonData, CoreError> {
    let root = std::path::absolute(project.root_directory())
        .context("Resolving the project root directory")?;

    let install_path = local.install_path.as_deref().unwrap_or(&global.install_path);

    let data = CPPythonData {
        target: local.target,
        dependencies: local.dependencies.clone(),
        install_path: anchor(&root, install_path),
        tool_path: anchor(&root, &local.tool_path),
        build_path: anchor(&root, &local.build_path),
        current_check: global.current_check,
    };

    for directory in [&data.install_path, &data.tool_path, &data.build_path] {
        create_directory(directory)?;
    }

    debug!(
        install = %data.install_path.display(),
        tool = %data.tool_path.display(),
        build = %data.build_path.display(),
        "Resolved CPPython paths"
    );

    Ok(data)
}

/// Specializes resolved data for one plugin: its install path gains a `<plugin name>`
/// subdirectory, which is created.
///
/// # Errors
/// [`CoreError::Io`] if the plugin directory cannot be created.
pub fn resolve_cppython_plugin(
    data: &CPPythonData,
    plugin: &PluginName,
) -> Result<CPPythonPluginData, CoreError> {
    let mut modified = data.clone();
    modified.install_path = data.install_path.join(plugin.name());
    create_directory(&modified.install_path)?;

    Ok(CPPythonPluginData::new(modified))
}

#[must_use]
pub fn resolve_provider(project: &ProjectConfiguration) -> ProviderData {
    ProviderData { root_directory: project.root_directory().to_path_buf() }
}

#[must_use]
pub fn resolve_generator(project: &ProjectConfiguration) -> GeneratorData {
    GeneratorData { root_directory: project.root_directory().to_path_buf() }
}

#[must_use]
pub fn resolve_scm(project: &ProjectConfiguration) -> ScmData {
    ScmData { root_directory: project.root_directory().to_path_buf() }
}

/// The `[tool.cppython.provider.<name>]` table for `plugin`, or an empty table.
#[must_use]
pub fn extract_provider_data(
    local: &CPPythonLocalConfiguration,
    plugin: &PluginName,
) -> PluginTable {
    local.provider.get(plugin.name()).cloned().unwrap_or_default()
}

/// The `[tool.cppython.generator.<name>]` table for `plugin`, or an empty table.
#[must_use]
pub fn extract_generator_data(
    local: &CPPythonLocalConfiguration,
    plugin: &PluginName,
) -> PluginTable {
    local.generator.get(plugin.name()).cloned().unwrap_or_default()
}

/// Resolves everything needed to drive plugins for a project.
///
/// # Errors
/// [`CoreError::Config`] if the project has no `[tool.cppython]` table or its version cannot
/// be determined; otherwise as [`resolve_cppython`].
pub fn resolve_core_data(
    pyproject: &PyProject,
    project: &ProjectConfiguration,
    global: &CPPythonGlobalConfiguration,
) -> Result<CoreData, CoreError> {
    let local = pyproject.cppython().ok_or_else(|| CoreError::Config {
        message: "the project has no [tool.cppython] table".into(),
        context: Some(project.pyproject_file().display().to_string().into()),
    })?;

    Ok(CoreData {
        project_data: project.clone(),
        pep621_data: resolve_pep621(&pyproject.project, project)?,
        cppython_data: resolve_cppython(local, global, project)?,
    })
}

/// [`CoreData`] specialized for one plugin.
///
/// # Errors
/// As [`resolve_cppython_plugin`].
pub fn resolve_core_plugin_data(
    core: &CoreData,
    plugin: &PluginName,
) -> Result<CorePluginData, CoreError> {
    Ok(CorePluginData {
        project_data: core.project_data.clone(),
        pep621_data: core.pep621_data.clone(),
        cppython_data: resolve_cppython_plugin(&core.cppython_data, plugin)?,
    })
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}

fn create_directory(path: &Path) -> Result<(), CoreError> {
    fs::create_dir_all(path).context(format!("Creating {}", path.display()))
}
