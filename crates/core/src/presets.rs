//! CMake preset files written on behalf of providers.
//!
//! Each provider's preset lands in `<directory>/<provider>.json`. `cppython.json` includes all
//! of them and defines a hidden `cppython` configure preset inheriting every provider preset,
//! so a project's own `CMakePresets.json` only needs to include that one file.

use crate::error::{CoreError, CoreErrorExt};
use cppython_schema::{CMakePresets, ConfigurePreset, PluginName};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Name of the aggregate presets file and its configure preset.
pub const CPPYTHON_PRESET_NAME: &str = "cppython";

/// A provider preset written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPresetFile {
    pub path: PathBuf,
    pub preset_name: String,
}

/// Writes `preset` to `<directory>/<provider name>.json`.
///
/// # Errors
/// [`CoreError::Io`] or [`CoreError::Json`] if the file cannot be written.
pub fn write_provider_preset(
    directory: &Path,
    provider: &PluginName,
    preset: &ConfigurePreset,
) -> Result<ProviderPresetFile, CoreError> {
    let path = directory.join(format!("{}.json", provider.name()));
    let document = CMakePresets { configure_presets: vec![preset.clone()], ..CMakePresets::default() };

    write_presets(&path, &document)?;
    Ok(ProviderPresetFile { path, preset_name: preset.name().to_owned() })
}

/// Writes `<directory>/cppython.json` aggregating `providers`.
///
/// # Errors
/// [`CoreError::Io`] or [`CoreError::Json`] if the file cannot be written.
pub fn write_cppython_preset(
    directory: &Path,
    providers: &[ProviderPresetFile],
) -> Result<PathBuf, CoreError> {
    let path = directory.join(format!("{CPPYTHON_PRESET_NAME}.json"));

    let include = providers.iter().map(|p| include_path(directory, &p.path)).collect();
    let inherits = providers.iter().map(|p| p.preset_name.clone()).collect();

    let mut preset = ConfigurePreset::new(CPPYTHON_PRESET_NAME);
    preset.preset.hidden = Some(true);
    preset.preset.inherits = Some(inherits);

    let document = CMakePresets {
        include: Some(include),
        configure_presets: vec![preset],
        ..CMakePresets::default()
    };

    write_presets(&path, &document)?;
    Ok(path)
}

/// Reads a presets file.
///
/// # Errors
/// [`CoreError::Io`] if unreadable, [`CoreError::Json`] if not a presets document.
pub fn read_presets(path: &Path) -> Result<CMakePresets, CoreError> {
    let content = fs::read_to_string(path).context(format!("Reading {}", path.display()))?;
    serde_json::from_str::<CMakePresets>(&content).context(format!("Parsing {}", path.display()))
}

/// Writes the document unless the file already holds identical content.
/// Returns whether the file changed.
fn write_presets(path: &Path, document: &CMakePresets) -> Result<bool, CoreError> {
    let mut rendered = serde_json::to_string_pretty(document)
        .context(format!("Serializing {}", path.display()))?;
    rendered.push('\n');

    if fs::read_to_string(path).is_ok_and(|existing| existing == rendered) {
        trace!(path = %path.display(), "Presets unchanged");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!("Creating {}", parent.display()))?;
    }
    fs::write(path, rendered).context(format!("Writing {}", path.display()))?;
    debug!(path = %path.display(), "Wrote presets");
    Ok(true)
}

fn include_path(directory: &Path, file: &Path) -> String {
    file.strip_prefix(directory).unwrap_or(file).to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn vcpkg() -> PluginName {
        PluginName::from_type_name("VcpkgProvider").expect("valid name")
    }

    #[test]
    fn unchanged_content_is_not_rewritten() {
        let tmp = tempdir().expect("temp dir");
        let path = tmp.path().join("presets").join("file.json");
        let document = CMakePresets::default();

        assert!(write_presets(&path, &document).expect("first write"));
        assert!(!write_presets(&path, &document).expect("second write"));
    }

    #[test]
    fn provider_preset_round_trips() {
        let tmp = tempdir().expect("temp dir");
        let preset = ConfigurePreset::new("vcpkg")
            .with_toolchain_file(Path::new("tool/vcpkg/scripts/buildsystems/vcpkg.cmake"));

        let written = write_provider_preset(tmp.path(), &vcpkg(), &preset).expect("written");
        assert_eq!(written.path, tmp.path().join("vcpkg.json"));
        assert_eq!(written.preset_name, "vcpkg");

        let read = read_presets(&written.path).expect("readable");
        assert_eq!(read.configure_presets, vec![preset]);
    }

    #[test]
    fn include_paths_are_relative_and_posix() {
        let dir = Path::new("/project/build");
        assert_eq!(include_path(dir, &dir.join("vcpkg.json")), "vcpkg.json");
        assert_eq!(include_path(dir, Path::new("/elsewhere/conan.json")), "/elsewhere/conan.json");
    }
}
