//! Registry of the plugin types available to CPPython.
//!
//! Plugins are registered by type; the registry keeps their identity and a probe for
//! their features so one can be selected per project without constructing anything.

use super::{Generator, Plugin, Provider, Scm};
use crate::error::CoreError;
use cppython_schema::{
    PluginGroup, PluginInformation, PluginTable, SupportedFeatures, SupportedScmFeatures,
};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
enum Probe {
    Data(fn(&Path) -> SupportedFeatures),
    Scm(fn(&Path) -> SupportedScmFeatures),
}

#[derive(Debug, Clone)]
struct Registration {
    info: PluginInformation,
    type_id: TypeId,
    probe: Probe,
}

/// Thread-safe plugin registry, ordered by registration within each group.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    groups: RwLock<FxHashMap<PluginGroup, Vec<Registration>>>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`CoreError::Plugin`] if the name is invalid or already taken within the group.
    pub fn register_provider<P: Provider>(&self) -> Result<PluginInformation, CoreError> {
        self.insert::<P>(Probe::Data(P::features))
    }

    /// # Errors
    /// [`CoreError::Plugin`] if the name is invalid or already taken within the group.
    pub fn register_generator<G: Generator>(&self) -> Result<PluginInformation, CoreError> {
        self.insert::<G>(Probe::Data(G::features))
    }

    /// # Errors
    /// [`CoreError::Plugin`] if the name is invalid or already taken within the group.
    pub fn register_scm<S: Scm>(&self) -> Result<PluginInformation, CoreError> {
        self.insert::<S>(Probe::Scm(S::features))
    }

    fn insert<P: Plugin>(&self, probe: Probe) -> Result<PluginInformation, CoreError> {
        let info = P::information().map_err(|e| match e {
            CoreError::Schema { source, .. } => CoreError::Plugin {
                message: source.to_string().into(),
                context: Some(std::any::type_name::<P>().into()),
            },
            other => other,
        })?;
        let mut groups = self.groups.write();
        let entries = groups.entry(info.group).or_default();

        if entries.iter().any(|r| r.info.name == info.name) {
            return Err(CoreError::Plugin {
                message: format!("'{}' is already registered", info.name).into(),
                context: None,
            });
        }

        debug!(plugin = %info.name, "Registered plugin");
        entries.push(Registration { info: info.clone(), type_id: TypeId::of::<P>(), probe });
        Ok(info)
    }

    /// Whether the plugin type `P` has been registered.
    #[must_use]
    pub fn contains<P: Plugin>(&self) -> bool {
        let id = TypeId::of::<P>();
        self.groups.read().values().flatten().any(|r| r.type_id == id)
    }

    /// Looks a plugin up by group and short name, e.g. `(Provider, "vcpkg")`.
    #[must_use]
    pub fn find(&self, group: PluginGroup, name: &str) -> Option<PluginInformation> {
        self.groups
            .read()
            .get(&group)?
            .iter()
            .find(|r| r.info.name.name() == name)
            .map(|r| r.info.clone())
    }

    /// Plugins of `group` in registration order.
    #[must_use]
    pub fn plugins(&self, group: PluginGroup) -> Vec<PluginInformation> {
        self.groups
            .read()
            .get(&group)
            .map(|entries| entries.iter().map(|r| r.info.clone()).collect())
            .unwrap_or_default()
    }

    /// Chooses the provider or generator for a project.
    ///
    /// A plugin named by one of the `configured` tables wins, checked in name order. Otherwise the
    /// first registered plugin that can initialize `directory` is chosen.
    ///
    /// # Errors
    /// [`CoreError::NotSupported`] for the SCM group, [`CoreError::Plugin`] if nothing matches.
    pub fn select(
        &self,
        group: PluginGroup,
        configured: &BTreeMap<String, PluginTable>,
        directory: &Path,
    ) -> Result<PluginInformation, CoreError> {
        if matches!(group, PluginGroup::Scm | PluginGroup::Interface) {
            return Err(CoreError::NotSupported {
                message: format!("{group} plugins are not selected from configuration").into(),
                context: None,
            });
        }

        let groups = self.groups.read();
        let entries = groups.get(&group).map(Vec::as_slice).unwrap_or_default();

        for name in configured.keys() {
            if let Some(found) = entries.iter().find(|r| r.info.name.name() == name) {
                debug!(plugin = %found.info.name, "Selected configured plugin");
                return Ok(found.info.clone());
            }
            warn!(group = %group, name = %name, "Configuration names an unregistered plugin");
        }

        entries
            .iter()
            .find(|r| matches!(r.probe, Probe::Data(features) if features(directory).initialization))
            .map(|r| {
                debug!(plugin = %r.info.name, "Selected plugin by feature probe");
                r.info.clone()
            })
            .ok_or_else(|| CoreError::Plugin {
                message: format!("no {group} plugin supports {}", directory.display()).into(),
                context: None,
            })
    }

    /// The first registered SCM plugin that recognizes `directory` as a repository.
    #[must_use]
    pub fn select_scm(&self, directory: &Path) -> Option<PluginInformation> {
        self.groups.read().get(&PluginGroup::Scm)?.iter().find_map(|r| match r.probe {
            Probe::Scm(features) if features(directory).repository => Some(r.info.clone()),
            _ => None,
        })
    }
}
