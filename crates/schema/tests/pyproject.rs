use cppython_schema::{CPPythonLocalConfiguration, PyProject, Requirement, TargetEnum};
use std::path::PathBuf;

const PROJECT: &str = r#"
[project]
name = "test"
version = "1.0.0"
description = "A test document"
"#;

fn parse(document: &str) -> Result<PyProject, toml::de::Error> {
    toml::from_str(document)
}

#[test]
fn cppython_table_is_read() {
    let document = format!("{PROJECT}\n[tool.cppython]\n");
    let pyproject = parse(&document).expect("valid pyproject");

    assert!(pyproject.tool.is_some());
    assert_eq!(pyproject.cppython(), Some(&CPPythonLocalConfiguration::default()));
}

#[test]
fn other_tool_tables_are_ignored() {
    let document = format!("{PROJECT}\n[tool.test]\nvalue = 1\n\n[build-system]\nrequires = []\n");
    let pyproject = parse(&document).expect("valid pyproject");

    assert!(pyproject.tool.is_some());
    assert!(pyproject.cppython().is_none());
}

#[test]
fn missing_tool_table() {
    let pyproject = parse(PROJECT).expect("valid pyproject");
    assert!(pyproject.tool.is_none());
    assert_eq!(pyproject.project.name(), "test");
    assert_eq!(pyproject.project.description(), "A test document");
}

#[test]
fn full_cppython_table() {
    let document = format!(
        r#"{PROJECT}
[tool.cppython]
target = "shared"
dependencies = ["fmt>=10", "spdlog[header-only]"]
install-path = "/opt/cppython"
tool-path = "tools"
build-path = "out"

[tool.cppython.provider.vcpkg]
triplet = "x64-linux"

[tool.cppython.generator.cmake]
preset_file = "CMakePresets.json"
"#
    );

    let pyproject = parse(&document).expect("valid pyproject");
    let cppython = pyproject.cppython().expect("cppython table");

    assert_eq!(cppython.target, TargetEnum::Shared);
    assert_eq!(
        cppython.dependencies,
        vec![
            Requirement::parse("fmt>=10").expect("valid requirement"),
            Requirement::parse("spdlog[header-only]").expect("valid requirement"),
        ]
    );
    assert_eq!(cppython.install_path, Some(PathBuf::from("/opt/cppython")));
    assert_eq!(cppython.tool_path, PathBuf::from("tools"));
    assert_eq!(cppython.build_path, PathBuf::from("out"));
    assert_eq!(cppython.provider["vcpkg"]["triplet"].as_str(), Some("x64-linux"));
    assert!(cppython.generator.contains_key("cmake"));
}

#[test]
fn only_kebab_case_keys_are_accepted() {
    let document = format!("{PROJECT}\n[tool.cppython]\ntool_path = \"tools\"\n");
    assert!(parse(&document).is_err());

    let document = format!("{PROJECT}\n[tool.cppython]\ntool-path = \"tools\"\n");
    let pyproject = parse(&document).expect("valid pyproject");
    assert_eq!(pyproject.cppython().map(|c| c.tool_path.clone()), Some(PathBuf::from("tools")));
}

#[test]
fn invalid_dependency_is_rejected() {
    let document = format!("{PROJECT}\n[tool.cppython]\ndependencies = [\"fmt 10\"]\n");
    let err = parse(&document).expect_err("invalid requirement");
    assert!(err.to_string().contains("PEP 508"));
}

#[test]
fn invalid_target_is_rejected() {
    let document = format!("{PROJECT}\n[tool.cppython]\ntarget = \"module\"\n");
    assert!(parse(&document).is_err());
}

#[test]
fn project_version_must_be_static_or_dynamic() {
    let missing = "[project]\nname = \"empty-test\"\n";
    assert!(parse(missing).is_err());

    let both = "[project]\nname = \"both-test\"\nversion = \"1.0.0\"\ndynamic = [\"version\"]\n";
    assert!(parse(both).is_err());

    let dynamic = "[project]\nname = \"dynamic-test\"\ndynamic = [\"version\"]\n";
    let pyproject = parse(dynamic).expect("valid pyproject");
    assert!(pyproject.project.has_dynamic_version());
}

#[test]
fn cppython_table_serializes_back_to_kebab_case() {
    let local = CPPythonLocalConfiguration::default();
    let rendered = toml::to_string(&local).expect("serializable");

    assert!(rendered.contains("tool-path = \"tool\""));
    assert!(rendered.contains("build-path = \"build\""));
    assert!(!rendered.contains("install-path"));
}
