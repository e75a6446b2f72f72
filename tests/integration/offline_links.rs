use doclink_cli::test_utils::{JarBuilder, ManifestFixture};
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_offline_links_only_lists_offline_directives() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[link]]
artifact = "com.example:*"
url = "https://docs.example.com/{a}/"

[[offlinelink]]
artifact = "org.slf4j:*"
url = "https://www.slf4j.org/apidocs/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.0" },
    { group-id = "org.slf4j", artifact-id = "slf4j-api", version = "2.0.13" },
]
"#,
        )
        .unwrap();
    project
        .install_javadoc("org.slf4j:slf4j-api:2.0.13", &JarBuilder::new().entry("package-list", "org.slf4j\n"))
        .unwrap();

    project.cmd().arg("offline-links").assert().success();

    let options = project.read("target/offline-links/OPTIONS");
    assert_eq!(options.lines().count(), 1, "{options}");
    assert!(options.starts_with("-linkoffline https://www.slf4j.org/apidocs/ "));
    assert_eq!(
        project.read("target/offline-links/org.slf4j:slf4j-api/element-list"),
        "org.slf4j\n"
    );
}

#[test]
fn test_no_offline_links_warns() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic()).unwrap();

    project
        .cmd()
        .arg("offline-links")
        .assert()
        .success()
        .stderr(predicate::str::contains("No offline links configured"));

    assert_eq!(project.read("target/offline-links/OPTIONS"), "");
}

#[test]
fn test_unmatched_offline_rule_warns() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[offlinelink]]
artifact = "org.nothing:*"
url = "https://nothing.example/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.0" },
]
"#,
        )
        .unwrap();

    project
        .cmd()
        .arg("offline-links")
        .assert()
        .success()
        .stderr(predicate::str::contains("org.nothing:* does not match any project dependencies."));
}

#[test]
fn test_skip_flag() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic()).unwrap();

    project
        .cmd()
        .args(["offline-links", "--skip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping offline link options file generation"));
    assert!(!project.exists("target"));
}
