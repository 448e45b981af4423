//! Loading of project and user configuration.

use crate::error::{CoreError, CoreErrorExt};
use config::{Case, Config, Environment, File, FileFormat};
use cppython_schema::cppython::default_install_path;
use cppython_schema::{CPPythonGlobalConfiguration, PyProject};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const GLOBAL_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "CPPYTHON";
const ENV_SEPARATOR: &str = "__";

/// Reads and validates a `pyproject.toml`.
///
/// # Errors
/// [`CoreError::Io`] if the file cannot be read, [`CoreError::Toml`] if it is not a valid
/// project document.
pub fn load_pyproject(path: &Path) -> Result<PyProject, CoreError> {
    let content = fs::read_to_string(path).context(format!("Reading {}", path.display()))?;

    let pyproject = toml::from_str::<PyProject>(&content)
        .context(format!("Parsing {}", path.display()))?;
    debug!(path = %path.display(), "Loaded pyproject");
    Ok(pyproject)
}

/// Default location of the user-wide configuration file, `~/.cppython/config.toml`.
#[must_use]
pub fn default_global_configuration_path() -> PathBuf {
    default_install_path().join(GLOBAL_CONFIG_FILE)
}

/// Loads the user-wide configuration.
///
/// Layers, lowest priority first:
/// 1. Built-in defaults.
/// 2. The TOML file at `path` (default [`default_global_configuration_path`]), if it exists.
/// 3. Environment variables prefixed with `CPPYTHON__`, e.g. `CPPYTHON__CURRENT_CHECK=false`
///    overrides `current-check`.
///
/// # Errors
/// [`CoreError::Settings`] if a source is malformed or contains unknown keys.
pub fn load_global_configuration(
    path: Option<&Path>,
) -> Result<CPPythonGlobalConfiguration, CoreError> {
    load_global_configuration_with(path, None)
}

pub(crate) fn load_global_configuration_with(
    path: Option<&Path>,
    environment: Option<config::Map<String, String>>,
) -> Result<CPPythonGlobalConfiguration, CoreError> {
    let path = path.map_or_else(default_global_configuration_path, Path::to_path_buf);

    debug!(path = %path.display(), "Loading global configuration");

    let settings = Config::builder()
        .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(Case::Kebab)
                .try_parsing(true)
                .source(environment),
        )
        .build()
        .context("Failed to build global configuration")?;

    settings
        .try_deserialize::<CPPythonGlobalConfiguration>()
        .context("Failed to deserialize global configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_global_file_yields_defaults() {
        let tmp = tempdir().expect("temp dir");
        let absent = tmp.path().join("absent.toml");
        let config = load_global_configuration_with(Some(&absent), Some(config::Map::new()))
            .expect("defaults");
        assert_eq!(config, CPPythonGlobalConfiguration::default());
    }

    #[test]
    fn file_values_are_read() {
        let tmp = tempdir().expect("temp dir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "install-path = \"/opt/cppython\"\ncurrent-check = false\n")
            .expect("write config");

        let config =
            load_global_configuration_with(Some(&path), Some(config::Map::new())).expect("valid");
        assert_eq!(config.install_path, PathBuf::from("/opt/cppython"));
        assert!(!config.current_check);
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = tempdir().expect("temp dir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "current-check = false\n").expect("write config");

        let mut env = config::Map::new();
        env.insert("CPPYTHON__CURRENT_CHECK".to_owned(), "true".to_owned());
        env.insert("CPPYTHON__INSTALL_PATH".to_owned(), "/srv/cppython".to_owned());

        let config = load_global_configuration_with(Some(&path), Some(env)).expect("valid");
        assert!(config.current_check);
        assert_eq!(config.install_path, PathBuf::from("/srv/cppython"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempdir().expect("temp dir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "install_path = \"/opt\"\n").expect("write config");

        let err = load_global_configuration_with(Some(&path), Some(config::Map::new()))
            .expect_err("snake_case key is unknown");
        assert!(matches!(err, CoreError::Settings { .. }));
    }

    #[test]
    fn pyproject_errors_name_the_file() {
        let tmp = tempdir().expect("temp dir");
        let path = tmp.path().join("pyproject.toml");
        fs::write(&path, "[project]\nname = 3\n").expect("write pyproject");

        let err = load_pyproject(&path).expect_err("invalid document");
        assert!(matches!(err, CoreError::Toml { .. }));
        assert!(err.to_string().contains("pyproject.toml"));

        let missing = load_pyproject(&tmp.path().join("missing/pyproject.toml"))
            .expect_err("missing file");
        assert!(matches!(missing, CoreError::Io { .. }));
    }
}
