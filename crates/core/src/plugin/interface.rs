use super::Plugin;
use crate::error::CoreError;

/// The frontend CPPython is invoked through.
pub trait Interface: Plugin {
    /// Persists changes CPPython made to the project's `pyproject.toml`.
    ///
    /// # Errors
    /// I/O failures while writing the file.
    fn write_pyproject(&self) -> Result<(), CoreError>;
}
