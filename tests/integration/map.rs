use doclink_cli::test_utils::{JarBuilder, ManifestFixture};
use predicates::prelude::*;
use std::fs;
use url::Url;

use crate::common::TestProject;

/// A manifest with a plain link to a `file:` documentation directory holding
/// `element-list`, and an offline link for slf4j.
fn setup() -> TestProject {
    let project = TestProject::new().unwrap();

    let docs = project.path().join("docs/lib-a");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("element-list"), "module:com.example\ncom.example.api\n\ncom.example.util\n")
        .unwrap();
    let docs_url = Url::from_directory_path(&docs).unwrap();

    project
        .write_manifest(&format!(
            r#"
[[link]]
artifact = "com.example:lib-a"
url = "{docs_url}"

[[offlinelink]]
artifact = "org.slf4j:*"
url = "https://www.slf4j.org/apidocs/"

[project]
dependencies = [
    {{ group-id = "com.example", artifact-id = "lib-a", version = "1.0" }},
    {{ group-id = "org.slf4j", artifact-id = "slf4j-api", version = "2.0.13" }},
]
"#
        ))
        .unwrap();
    project
        .install_javadoc(
            "org.slf4j:slf4j-api:2.0.13",
            &JarBuilder::new().entry("package-list", "org.slf4j\norg.slf4j.spi\n"),
        )
        .unwrap();
    project
}

#[test]
fn test_map_plain_properties() {
    let project = setup();

    project.cmd().arg("map").assert().success();

    let map = project.read("target/javadoc-map.properties");
    let lines: Vec<&str> = map.lines().collect();
    assert_eq!(lines[0], "#javadoc-map.properties");
    assert!(lines[1].starts_with('#'));

    assert!(map.contains("\norg.slf4j=https\\://www.slf4j.org/apidocs/\n"), "{map}");
    assert!(map.contains("\norg.slf4j-artifact=org.slf4j\\:slf4j-api\n"), "{map}");
    assert!(!map.contains("org.slf4j-module"), "{map}");
    assert!(map.contains("\ncom.example.api=file\\:"), "{map}");
    assert!(map.contains("\ncom.example.util-module=com.example\n"), "{map}");
    assert!(!map.contains("com.example.api-artifact"), "{map}");
}

#[test]
fn test_map_xml_output() {
    let project = setup();

    project.cmd().args(["map", "--output-file", "javadoc-map.xml"]).assert().success();

    let xml = project.read("target/javadoc-map.xml");
    assert!(xml.contains("<!DOCTYPE properties SYSTEM \"http://java.sun.com/dtd/properties.dtd\">"));
    assert!(xml.contains("<entry key=\"org.slf4j.spi\">https://www.slf4j.org/apidocs/</entry>"), "{xml}");
    assert!(xml.contains("<entry key=\"com.example.api-module\">com.example</entry>"), "{xml}");
}

#[test]
fn test_map_warns_on_missing_index() {
    let project = TestProject::new().unwrap();
    let empty = project.path().join("empty-docs");
    fs::create_dir_all(&empty).unwrap();
    let url = Url::from_directory_path(&empty).unwrap();

    project
        .write_manifest(&format!(
            r#"
[[link]]
artifact = "*"
url = "{url}"

[project]
dependencies = [
    {{ group-id = "com.example", artifact-id = "lib-a", version = "1.0" }},
]
"#
        ))
        .unwrap();

    project
        .cmd()
        .arg("map")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not read any of [element-list, package-list] from"));

    let map = project.read("target/javadoc-map.properties");
    assert_eq!(map.lines().count(), 2, "{map}");
}

#[test]
fn test_map_skip_setting() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(&format!("[settings]\nskip = true\n\n{}", ManifestFixture::basic()))
        .unwrap();

    project
        .cmd()
        .arg("map")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping javadoc map generation."));
}
