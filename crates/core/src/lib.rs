//! # CPPython Core
//!
//! The contract between CPPython and its plugins.
//!
//! * [`config`] reads `pyproject.toml` and the user-wide configuration.
//! * [`resolution`] turns what the user wrote into absolute, fully populated data and hands
//!   each plugin its own slice of it.
//! * [`plugin`] defines the provider, generator, SCM and interface traits along with the
//!   registry used to select them.
//! * [`presets`] writes the CMake preset files that connect providers to generators.
//! * [`utility`] runs external tools with their output routed into `tracing`.
//!
//! ```rust,no_run
//! use cppython_core::{config, resolution};
//! use cppython_schema::ProjectConfiguration;
//! # fn main() -> Result<(), cppython_core::CoreError> {
//! let project = ProjectConfiguration::new("pyproject.toml")?.with_version("1.0.0");
//! let pyproject = config::load_pyproject(project.pyproject_file())?;
//! let global = config::load_global_configuration(None)?;
//! let core = resolution::resolve_core_data(&pyproject, &project, &global)?;
//! println!("installing into {}", core.cppython_data.install_path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod plugin;
pub mod presets;
pub mod resolution;
pub mod utility;

pub use crate::data::{CoreData, CorePluginData};
pub use crate::error::{CoreError, CoreErrorExt};
pub use cppython_schema as schema;
