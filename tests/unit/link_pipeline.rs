use doclink_cli::coordinate::{ArtifactCoordinate, VersionlessKey};
use doclink_cli::links::{LinkRule, collect_link_set};
use doclink_cli::output::{Directive, JavadocMap, OfflineExtractor, assemble_options, parse_index, render_options};
use doclink_cli::resolver::OfflineResolver;
use doclink_cli::test_utils::{JarBuilder, ScriptedResolver, init_test_logging};
use tempfile::TempDir;
use url::Url;

fn gav(s: &str) -> ArtifactCoordinate {
    ArtifactCoordinate::from_gav(s)
}

fn rules() -> Vec<LinkRule> {
    vec![
        LinkRule::link("*", "https://docs.example.com/{a}/"),
        LinkRule::offline("com.example:*", "https://docs.example.com/{a}/"),
    ]
}

#[tokio::test]
async fn test_offline_url_never_appears_as_plain_link() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let resolver = ScriptedResolver::new(temp.path().join("repo"))
        .with_jar("com.example:lib-a", JarBuilder::javadoc(&["com.example.a"]))
        .with_jar("com.example:lib-b", JarBuilder::javadoc(&["com.example.b"]));
    let rules = rules();
    let dependencies = vec![gav("com.example:lib-a:1"), gav("com.example:lib-b:2"), gav("org.other:lib-c:3")];
    let javadocs: Vec<ArtifactCoordinate> = dependencies.iter().map(ArtifactCoordinate::as_javadoc).collect();

    let links = collect_link_set(&rules, &dependencies).unwrap();
    assert_eq!(links.len(), 3);

    let resolution = OfflineResolver::new(&resolver, &rules).resolve(&[], &javadocs).await.unwrap();
    assert_eq!(resolution.map.len(), 2);

    let extractor = OfflineExtractor::new(temp.path().join("out")).unwrap();
    let directives = assemble_options(&links, &resolution.map, &extractor).unwrap();

    let offline_urls: Vec<&Url> = directives
        .iter()
        .filter_map(|d| match d {
            Directive::LinkOffline { url, .. } => Some(url),
            Directive::Link(_) => None,
        })
        .collect();
    assert_eq!(offline_urls.len(), 2);
    for directive in &directives {
        if let Directive::Link(url) = directive {
            assert!(!offline_urls.contains(&url), "{url} is emitted twice");
        }
    }

    let text = render_options(&directives);
    assert!(text.starts_with("-link https://docs.example.com/lib-c/\n"), "{text}");
    assert_eq!(text.lines().count(), 3);
}

#[tokio::test]
async fn test_failed_resolution_falls_back_to_plain_link() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let resolver = ScriptedResolver::new(temp.path().join("repo")).fail_on("com.example:lib-a");
    let rules = rules();
    let dependencies = vec![gav("com.example:lib-a:1")];

    let links = collect_link_set(&rules, &dependencies).unwrap();
    let resolution = OfflineResolver::new(&resolver, &rules)
        .resolve(&[], &[gav("com.example:lib-a:1").as_javadoc()])
        .await
        .unwrap();
    assert!(resolution.map.is_empty());
    assert_eq!(resolution.failures.len(), 1);

    let extractor = OfflineExtractor::new(temp.path().join("out")).unwrap();
    let directives = assemble_options(&links, &resolution.map, &extractor).unwrap();
    assert_eq!(render_options(&directives), "-link https://docs.example.com/lib-a/\n");
}

#[tokio::test]
async fn test_offline_artifacts_sharing_a_url_each_get_a_directory() {
    let temp = TempDir::new().unwrap();
    let resolver = ScriptedResolver::new(temp.path().join("repo"))
        .with_jar("org.slf4j:slf4j-api", JarBuilder::javadoc(&["org.slf4j"]))
        .with_jar("org.slf4j:slf4j-simple", JarBuilder::javadoc(&["org.slf4j.simple"]));
    let rules = vec![LinkRule::offline("org.slf4j:*", "https://www.slf4j.org/apidocs/")];
    let javadocs = vec![
        gav("org.slf4j:slf4j-simple:2.0.13").as_javadoc(),
        gav("org.slf4j:slf4j-api:2.0.13").as_javadoc(),
    ];

    let resolution = OfflineResolver::new(&resolver, &rules).resolve(&[], &javadocs).await.unwrap();
    let extractor = OfflineExtractor::new(temp.path().join("out")).unwrap();
    let directives = assemble_options(&Default::default(), &resolution.map, &extractor).unwrap();

    let directories: Vec<String> = directives
        .iter()
        .map(|d| match d {
            Directive::LinkOffline { directory, .. } => {
                directory.file_name().unwrap().to_string_lossy().into_owned()
            }
            Directive::Link(url) => panic!("unexpected -link {url}"),
        })
        .collect();
    assert_eq!(directories, ["org.slf4j:slf4j-api", "org.slf4j:slf4j-simple"]);
    assert!(temp.path().join("out/org.slf4j:slf4j-api/package-list").is_file());
}

#[test]
fn test_javadoc_map_first_index_wins() {
    let first = Url::parse("https://first.example/").unwrap();
    let second = Url::parse("https://second.example/").unwrap();
    let key = VersionlessKey::new("com.example", "lib-a");

    let mut map = JavadocMap::new();
    let added = map.add_index(&parse_index(&["module:m", "com.example.api", ""]), &first, Some(&key));
    assert_eq!(added, 1);
    let added = map.add_index(&parse_index(&["com.example.api", "com.example.spi"]), &second, None);
    assert_eq!(added, 1);

    assert_eq!(map.get("com.example.api"), Some("https://first.example/"));
    assert_eq!(map.get("com.example.api-module"), Some("m"));
    assert_eq!(map.get("com.example.api-artifact"), Some("com.example:lib-a"));
    assert_eq!(map.get("com.example.spi"), Some("https://second.example/"));
    assert_eq!(map.get("com.example.spi-artifact"), None);
}
