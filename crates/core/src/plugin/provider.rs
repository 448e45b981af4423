use super::DataPlugin;
use crate::error::CoreError;
use cppython_schema::{ConfigurePreset, ProviderData, SupportedFeatures};
use std::future::Future;
use std::path::Path;

/// Installs C++ dependencies, e.g. through vcpkg or conan.
pub trait Provider: DataPlugin<GroupData = ProviderData> {
    /// What the provider can do for the project rooted at `directory`.
    fn features(directory: &Path) -> SupportedFeatures;

    /// Whether the provider's external tooling is already present in `path`.
    fn tooling_downloaded(path: &Path) -> bool;

    /// Fetches the provider's external tooling into `path`.
    fn download_tooling(path: &Path) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Installs dependencies as pinned by the lock file.
    ///
    /// # Errors
    /// Tooling or process failures.
    fn install(&self) -> Result<(), CoreError>;

    /// Updates dependencies and rewrites the lock file.
    ///
    /// # Errors
    /// Tooling or process failures.
    fn update(&self) -> Result<(), CoreError>;

    /// The configure preset that makes the installed dependencies visible to CMake,
    /// typically by pointing at a toolchain file.
    ///
    /// # Errors
    /// [`CoreError::NotSupported`] if the provider cannot integrate with CMake.
    fn generate_cmake_config(&self) -> Result<ConfigurePreset, CoreError>;
}
