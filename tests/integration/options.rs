use doclink_cli::test_utils::{JarBuilder, ManifestFixture};
use predicates::prelude::*;

use crate::common::TestProject;

const OPTIONS: &str = "target/javadoc-options/options";

#[test]
fn test_link_rule_produces_link_directive() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic()).unwrap();

    project
        .cmd()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 link(s), 0 offline link(s)"));

    assert_eq!(project.read(OPTIONS), "-link https://docs.example.com/lib-a/1.2.3/\n");
}

#[test]
fn test_offline_link_supersedes_plain_link() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[link]]
artifact = "com.example:*"
url = "https://docs.example.com/{a}/"

[[offlinelink]]
artifact = "com.example:lib-b"
url = "https://docs.example.com/lib-b/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.0" },
    { group-id = "com.example", artifact-id = "lib-b", version = "2.0" },
]
"#,
        )
        .unwrap();
    project
        .install_javadoc("com.example:lib-b:2.0", &JarBuilder::javadoc(&["com.example.b"]))
        .unwrap();

    project.cmd().arg("options").assert().success();

    let options = project.read(OPTIONS);
    let lines: Vec<&str> = options.lines().collect();
    assert_eq!(lines.len(), 2, "{options}");
    assert_eq!(lines[0], "-link https://docs.example.com/lib-a/");
    assert!(lines[1].starts_with("-linkoffline https://docs.example.com/lib-b/ "), "{options}");
    assert!(lines[1].ends_with("com.example:lib-b"), "{options}");
    assert!(!options.contains("-link https://docs.example.com/lib-b/"));
}

#[test]
fn test_element_list_is_copied_to_package_list() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[offlinelink]]
artifact = "org.slf4j:*"
url = "https://www.slf4j.org/apidocs/"

[project]
dependencies = [
    { group-id = "org.slf4j", artifact-id = "slf4j-api", version = "2.0.13" },
]
"#,
        )
        .unwrap();
    project
        .install_javadoc(
            "org.slf4j:slf4j-api:2.0.13",
            &JarBuilder::new()
                .entry("element-list", "module:org.slf4j\norg.slf4j\norg.slf4j.spi\n")
                .entry("index.html", "<html/>"),
        )
        .unwrap();

    project.cmd().arg("options").assert().success();

    let directory = "target/javadoc-options/org.slf4j:slf4j-api";
    let element_list = project.read(&format!("{directory}/element-list"));
    let package_list = project.read(&format!("{directory}/package-list"));
    assert_eq!(element_list, "module:org.slf4j\norg.slf4j\norg.slf4j.spi\n");
    assert_eq!(element_list, package_list);
    assert!(!project.exists(&format!("{directory}/index.html")));
}

#[test]
fn test_unresolvable_artifact_is_left_out() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[offlinelink]]
artifact = "com.example:*"
url = "https://docs.example.com/{a}/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "a1", version = "1" },
    { group-id = "com.example", artifact-id = "a2", version = "1" },
    { group-id = "com.example", artifact-id = "a3", version = "1" },
]
"#,
        )
        .unwrap();
    project.install_javadoc("com.example:a1:1", &JarBuilder::javadoc(&["a1"])).unwrap();
    project.install_javadoc("com.example:a3:1", &JarBuilder::javadoc(&["a3"])).unwrap();

    project
        .cmd()
        .arg("options")
        .assert()
        .success()
        .stderr(predicate::str::contains("com.example:a2:jar:javadoc:1"));

    let options = project.read(OPTIONS);
    assert!(options.contains("-linkoffline https://docs.example.com/a1/"));
    assert!(options.contains("-linkoffline https://docs.example.com/a3/"));
    assert!(!options.contains("docs.example.com/a2/"));
}

#[test]
fn test_resolved_javadoc_jar_is_used_directly() {
    let project = TestProject::new().unwrap();
    let jar = JarBuilder::javadoc(&["com.example.api"])
        .write(&project.path().join("build/lib-a-1.0-javadoc.jar"))
        .unwrap();
    project.write_manifest(&ManifestFixture::offline_with_resolved_jar(&jar)).unwrap();

    project.cmd().arg("options").assert().success();

    let options = project.read(OPTIONS);
    assert!(options.starts_with("-linkoffline https://docs.example.com/lib-a/ "), "{options}");
    assert!(!project.local_repository().exists());
}

#[test]
fn test_dependency_management_can_be_excluded() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[link]]
artifact = "*"
url = "https://docs.example.com/{a}/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "direct", version = "1" },
]
dependency-management = [
    { group-id = "com.example", artifact-id = "managed", version = "1" },
]
"#,
        )
        .unwrap();

    project.cmd().arg("options").assert().success();
    assert!(project.read(OPTIONS).contains("managed"));

    project.cmd().args(["options", "--no-dependency-management"]).assert().success();
    assert_eq!(project.read(OPTIONS), "-link https://docs.example.com/direct/\n");
}

#[test]
fn test_skip_setting() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(&format!("[settings]\nskip = true\n\n{}", ManifestFixture::basic()))
        .unwrap();

    project
        .cmd()
        .arg("options")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping javadoc options file generation."));

    assert!(!project.exists("target"));
}

#[test]
fn test_output_directory_option() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic()).unwrap();

    project.cmd().args(["options", "--output-directory", "build/docs"]).assert().success();

    assert!(project.exists("build/docs/javadoc-options/options"));
    assert!(!project.exists("target"));
}
