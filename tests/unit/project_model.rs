use doclink_cli::coordinate::ArtifactCoordinate;
use doclink_cli::manifest::Manifest;
use doclink_cli::models::ProjectModel;
use std::fs;
use tempfile::TempDir;

const MODEL: &str = r#"
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.0" },
    { group-id = "com.example", artifact-id = "lib-a", version = "1.0", classifier = "tests" },
    { group-id = "com.example", artifact-id = "bom", version = "1.0", type = "pom" },
]
dependency-management = [
    { group-id = "com.example", artifact-id = "managed", version = "2.0" },
    { group-id = "com.example", artifact-id = "unversioned" },
]
artifacts = [
    { group-id = "org.slf4j", artifact-id = "slf4j-api", version = "2.0.13", classifier = "javadoc", file = "/m2/slf4j-api-2.0.13-javadoc.jar" },
    { group-id = "org.slf4j", artifact-id = "slf4j-api", version = "2.0.13" },
]
"#;

fn keys(coordinates: &[ArtifactCoordinate]) -> Vec<String> {
    coordinates.iter().map(ToString::to_string).collect()
}

#[test]
fn test_load_toml_model() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("project.toml");
    fs::write(&path, MODEL).unwrap();

    let model = ProjectModel::load(&path).unwrap();
    assert_eq!(model.dependencies.len(), 3);
    assert_eq!(model.dependency_management[1].version, None);

    assert_eq!(
        keys(&model.javadoc_candidates(true)),
        ["com.example:lib-a:jar:javadoc:1.0", "com.example:managed:jar:javadoc:2.0"]
    );
    assert_eq!(keys(&model.javadoc_candidates(false)), ["com.example:lib-a:jar:javadoc:1.0"]);

    let resolved = model.resolved_javadocs();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].coordinate.artifact_id, "slf4j-api");
}

#[test]
fn test_link_candidates_start_with_resolved_artifacts() {
    let model: ProjectModel = toml::from_str(MODEL).unwrap();
    let candidates = keys(&model.link_candidates(false));

    assert_eq!(candidates[0], "org.slf4j:slf4j-api:jar:javadoc:2.0.13");
    assert!(candidates.contains(&"com.example:bom:pom:1.0".to_string()));
    assert!(!candidates.iter().any(|c| c.contains("managed")));
}

#[test]
fn test_manifest_with_inline_project() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doclink.toml");
    fs::write(
        &path,
        r#"
[settings]
include-dependency-management = false

[[link]]
artifact = "com.example:*, org.slf4j"
url = "https://docs.example.com/{a}/"

[[offlinelink]]
artifact = "org.slf4j:*"
url = "https://www.slf4j.org/apidocs/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.0" },
]
"#,
    )
    .unwrap();

    let manifest = Manifest::load(&path).unwrap();
    assert!(!manifest.settings.include_dependency_management);
    assert_eq!(manifest.link_rules().len(), 1);
    assert_eq!(manifest.offline_rules().len(), 1);
    assert_eq!(manifest.link_rules()[0].filter().patterns().count(), 2);
    assert_eq!(manifest.project.as_ref().unwrap().dependencies.len(), 1);
    assert_eq!(manifest.output_directory(), temp.path().join("target"));
}
