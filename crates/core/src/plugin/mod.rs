//! Plugin contracts.
//!
//! A plugin is identified by its type name, which must read `<Name><Group>`: a type called
//! `VcpkgProvider` is the `vcpkg` plugin of the `provider` group and reads its settings
//! from `[tool.cppython.provider.vcpkg]`.
//!
//! Providers and generators are data plugins: they are built from their group's data, the
//! core data resolved for them, and their own configuration table (see [`build_provider`] and
//! [`build_generator`]). SCM and interface plugins only need [`Plugin`].

mod generator;
mod interface;
mod provider;
mod registry;
mod scm;

pub use self::generator::Generator;
pub use self::interface::Interface;
pub use self::provider::Provider;
pub use self::registry::PluginRegistry;
pub use self::scm::Scm;

use crate::data::{CoreData, CorePluginData};
use crate::error::CoreError;
use crate::resolution::{
    extract_generator_data, extract_provider_data, resolve_core_plugin_data, resolve_generator,
    resolve_provider,
};
use cppython_schema::{
    CPPythonLocalConfiguration, PluginGroup, PluginInformation, PluginName, PluginTable,
};
use tracing::Span;

/// Common identity of every plugin.
pub trait Plugin: Send + Sync + 'static {
    /// The group this plugin belongs to.
    const GROUP: PluginGroup;

    /// `<name>.<group>` parsed from the type name.
    ///
    /// # Errors
    /// [`CoreError::Schema`] if the type name is not two CamelCase words.
    fn full_name() -> Result<PluginName, CoreError>
    where
        Self: Sized,
    {
        Ok(PluginName::from_type_name(std::any::type_name::<Self>())?)
    }

    /// The plugin's name and group, checking that the type name ends with the group.
    ///
    /// # Errors
    /// [`CoreError::Plugin`] if the type name's group word disagrees with [`Self::GROUP`].
    fn information() -> Result<PluginInformation, CoreError>
    where
        Self: Sized,
    {
        let name = Self::full_name()?;
        if name.group() != Self::GROUP.as_str() {
            return Err(CoreError::Plugin {
                message: format!(
                    "'{name}' is registered as a {} plugin; its type name must end with '{}'",
                    Self::GROUP,
                    capitalize(Self::GROUP.as_str())
                )
                .into(),
                context: None,
            });
        }
        Ok(PluginInformation { name, group: Self::GROUP })
    }

    /// The span plugin logging happens in, `cppython.<group>.<name>`.
    fn span() -> Span
    where
        Self: Sized,
    {
        let name = Self::full_name()
            .map_or_else(|_| std::any::type_name::<Self>().to_owned(), |n| n.name().to_owned());
        tracing::info_span!("plugin", logger = %format_args!("cppython.{}.{name}", Self::GROUP))
    }
}

/// A plugin built from resolved project data and its own configuration table.
pub trait DataPlugin: Plugin + Sized {
    /// Data shared by every plugin of the group.
    type GroupData;

    /// # Errors
    /// Implementations report unusable configuration as [`CoreError::Config`].
    fn new(
        group_data: Self::GroupData,
        core_data: CorePluginData,
        configuration: PluginTable,
    ) -> Result<Self, CoreError>;
}

/// Resolves the data for provider `P` and constructs it.
///
/// # Errors
/// Name validation, directory creation or the provider's own construction errors.
pub fn build_provider<P: Provider>(
    core: &CoreData,
    local: &CPPythonLocalConfiguration,
) -> Result<P, CoreError> {
    let info = P::information()?;
    let _entered = P::span().entered();

    let group_data = resolve_provider(&core.project_data);
    let plugin_data = resolve_core_plugin_data(core, &info.name)?;
    let table = extract_provider_data(local, &info.name);

    tracing::debug!(plugin = %info.name, "Constructing provider");
    P::new(group_data, plugin_data, table)
}

/// Resolves the data for generator `G` and constructs it.
///
/// # Errors
/// Name validation, directory creation or the generator's own construction errors.
pub fn build_generator<G: Generator>(
    core: &CoreData,
    local: &CPPythonLocalConfiguration,
) -> Result<G, CoreError> {
    let info = G::information()?;
    let _entered = G::span().entered();

    let group_data = resolve_generator(&core.project_data);
    let plugin_data = resolve_core_plugin_data(core, &info.name)?;
    let table = extract_generator_data(local, &info.name);

    tracing::debug!(plugin = %info.name, "Constructing generator");
    G::new(group_data, plugin_data, table)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
