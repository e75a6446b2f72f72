use doclink_cli::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_check_lists_matches() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic()).unwrap();

    project
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("link(artifact=com.example:*"))
        .stdout(predicate::str::contains(
            "com.example:lib-a:jar:1.2.3 -> https://docs.example.com/lib-a/1.2.3/",
        ))
        .stdout(predicate::str::contains("1 rule(s) checked"));

    assert!(!project.exists("target"));
}

#[test]
fn test_check_reports_template_errors_without_failing() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[link]]
artifact = "com.example:*"
url = "https://docs.example.com/{m}/"

[[offlinelink]]
artifact = "org.nothing:*"
url = "https://nothing.example/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.2.3" },
]
"#,
        )
        .unwrap();

    project
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No unique value for 'm'"))
        .stdout(predicate::str::contains("does not match any project dependencies"))
        .stdout(predicate::str::contains("1 without matches, 1 with URL errors"));
}
