use doclink_cli::coordinate::ArtifactCoordinate;
use doclink_cli::links::LinkRule;
use doclink_cli::templating::{VersionSegments, has_placeholders, resolve_template};

fn gav(s: &str) -> ArtifactCoordinate {
    ArtifactCoordinate::from_gav(s)
}

#[test]
fn test_version_segments() {
    let segments = VersionSegments::parse("12.3.4-beta");
    assert_eq!(
        segments.iter().collect::<Vec<_>>(),
        [("major", "12"), ("minor", "3"), ("micro", "4")]
    );

    let segments = VersionSegments::parse("7");
    assert_eq!(segments.iter().collect::<Vec<_>>(), [("major", "7")]);
}

#[test]
fn test_single_segment_version_makes_prefix_unique() {
    assert_eq!(resolve_template("{m}", &gav("g:a:7")).unwrap(), "7");
    assert!(resolve_template("{m}", &gav("g:a:7.1")).is_err());
}

#[test]
fn test_templates_without_placeholders_resolve_to_themselves() {
    let coordinates = [gav("com.example:lib-a:1.2.3"), gav("g:a:1.0-20240102.030405-6"), gav("g:a")];
    let templates = ["https://docs.example.com/", "file:///opt/docs/api/", "https://x/{/", "https://x/{}/"];

    for template in templates {
        assert!(!has_placeholders(template), "{template}");
        for coordinate in &coordinates {
            assert_eq!(resolve_template(template, coordinate).unwrap(), template);
        }
    }
}

#[test]
fn test_snapshot_version_uses_base_version() {
    let url = resolve_template("https://x/{v}/{major}/", &gav("g:a:1.0-20240102.030405-6")).unwrap();
    assert_eq!(url, "https://x/1.0-SNAPSHOT/1/");
}

#[test]
fn test_exact_pattern_rule_includes_its_own_coordinate() {
    for coordinate in ["com.example:lib-a:1.2.3", "org.slf4j:slf4j-api:2.0.13", "g:a:1.0-SNAPSHOT"] {
        let rule = LinkRule::link(coordinate, "https://x/");
        assert!(rule.include(&gav(coordinate)), "{coordinate}");
        assert!(!rule.include(&gav("other:other:0")), "{coordinate}");
    }
}
