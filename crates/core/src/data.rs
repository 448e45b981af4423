use cppython_schema::{CPPythonData, CPPythonPluginData, Pep621Data, ProjectConfiguration};

/// Everything resolved for a project, before it is specialized per plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreData {
    pub project_data: ProjectConfiguration,
    pub pep621_data: Pep621Data,
    pub cppython_data: CPPythonData,
}

/// [`CoreData`] as seen by a single plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorePluginData {
    pub project_data: ProjectConfiguration,
    pub pep621_data: Pep621Data,
    pub cppython_data: CPPythonPluginData,
}
