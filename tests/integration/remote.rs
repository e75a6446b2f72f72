use doclink_cli::test_utils::JarBuilder;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::TestProject;

const JAR_PATH: &str = "/maven2/com/example/lib-b/2.0/lib-b-2.0-javadoc.jar";

fn manifest(server: &MockServer) -> String {
    format!(
        r#"
[[offlinelink]]
artifact = "com.example:*"
url = "https://docs.example.com/{{a}}/"

[[repositories]]
id = "test"
url = "{}/maven2/"

[project]
dependencies = [
    {{ group-id = "com.example", artifact-id = "lib-b", version = "2.0" }},
]
"#,
        server.uri()
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn test_javadoc_jar_is_downloaded_into_local_repository() {
    let project = TestProject::new().unwrap();
    project.write_config(false, "").unwrap();

    let jar_file = JarBuilder::javadoc(&["com.example.b"])
        .write(&project.path().join("fixture.jar"))
        .unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JAR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(std::fs::read(&jar_file).unwrap()))
        .expect(1)
        .mount(&server)
        .await;
    project.write_manifest(&manifest(&server)).unwrap();

    project.cmd().arg("options").assert().success();

    let options = project.read("target/javadoc-options/options");
    assert!(options.starts_with("-linkoffline https://docs.example.com/lib-b/ "), "{options}");
    assert!(project.local_repository().join(&JAR_PATH["/maven2/".len()..]).is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_offline_flag_prevents_download() {
    let project = TestProject::new().unwrap();
    project.write_config(false, "").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    project.write_manifest(&manifest(&server)).unwrap();

    project.cmd().args(["--offline", "options"]).assert().success();

    assert_eq!(project.read("target/javadoc-options/options"), "");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_mirror_replaces_repository() {
    let project = TestProject::new().unwrap();

    let jar_file = JarBuilder::javadoc(&["com.example.b"])
        .write(&project.path().join("fixture.jar"))
        .unwrap();
    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JAR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(std::fs::read(&jar_file).unwrap()))
        .expect(1)
        .mount(&mirror)
        .await;
    project
        .write_config(
            false,
            &format!("\n[[mirrors]]\nid = \"mirror\"\nurl = \"{}/maven2/\"\nmirror-of = \"*\"\n", mirror.uri()),
        )
        .unwrap();

    project
        .write_manifest(
            r#"
[[offlinelink]]
artifact = "com.example:*"
url = "https://docs.example.com/{a}/"

[[repositories]]
id = "unreachable"
url = "http://127.0.0.1:9/maven2/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-b", version = "2.0" },
]
"#,
        )
        .unwrap();

    project.cmd().arg("options").assert().success();

    assert!(project.read("target/javadoc-options/options").contains("-linkoffline"));
}
