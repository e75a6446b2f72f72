use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::TestProject;

#[test]
fn test_missing_explicit_manifest() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .args(["--manifest-path", "nowhere/doclink.toml", "options"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locating manifest"));
}

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("doclink.toml"), "").unwrap();

    Command::cargo_bin("doclink")
        .unwrap()
        .current_dir(temp.path())
        .args(["--config", "missing.toml", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file missing.toml does not exist"));
}

#[test]
fn test_invalid_manifest_syntax() {
    let project = TestProject::new().unwrap();
    project.write_manifest("[[link]\nartifact = \n").unwrap();

    project
        .cmd()
        .arg("options")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest file syntax"));
}

#[test]
fn test_ambiguous_placeholder_aborts_options() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[link]]
artifact = "com.example:*"
url = "https://docs.example.com/{m}/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.2.3" },
]
"#,
        )
        .unwrap();

    project
        .cmd()
        .arg("options")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No unique value for 'm'"));

    assert!(!project.exists("target/javadoc-options/options"));
}

#[test]
fn test_corrupt_javadoc_jar_aborts() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[offlinelink]]
artifact = "com.example:*"
url = "https://docs.example.com/{a}/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "broken", version = "1" },
]
"#,
        )
        .unwrap();
    let jar = project
        .local_repository()
        .join("com/example/broken/1/broken-1-javadoc.jar");
    std::fs::create_dir_all(jar.parent().unwrap()).unwrap();
    std::fs::write(&jar, b"not a zip").unwrap();

    project
        .cmd()
        .arg("options")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read archive"));
}
