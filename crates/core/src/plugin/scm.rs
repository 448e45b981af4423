use super::Plugin;
use crate::error::CoreError;
use cppython_schema::SupportedScmFeatures;
use std::path::Path;

/// Reads project metadata from version control.
pub trait Scm: Plugin {
    /// Whether `directory` is a repository this plugin understands.
    fn features(directory: &Path) -> SupportedScmFeatures;

    /// The project version recorded by version control, e.g. from the latest tag.
    ///
    /// # Errors
    /// [`CoreError::Plugin`] if no version can be derived.
    fn version(&self, directory: &Path) -> Result<String, CoreError>;

    /// The project description, if version control records one.
    fn description(&self) -> Option<String> {
        None
    }
}
