use super::DataPlugin;
use crate::error::CoreError;
use cppython_schema::{ConfigurePreset, GeneratorData, SupportedFeatures};
use std::path::Path;

/// Drives the build system, e.g. by writing CMake presets that include provider output.
pub trait Generator: DataPlugin<GroupData = GeneratorData> {
    fn features(directory: &Path) -> SupportedFeatures;

    /// Brings the build system in line with the presets produced by providers.
    ///
    /// # Errors
    /// I/O failures while writing build system files.
    fn sync(&self, presets: &[ConfigurePreset]) -> Result<(), CoreError>;
}
