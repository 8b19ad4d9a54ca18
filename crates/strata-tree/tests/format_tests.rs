//! Tests for format detection and rendering of resolved trees

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use strata_tree::{Format, FormatHandler};

#[rstest]
#[case("app.yml", Format::Yaml)]
#[case("app.yaml", Format::Yaml)]
#[case("conf/app.json", Format::Json)]
#[case("file:///etc/app/settings.toml", Format::Toml)]
fn test_detect_from_location(#[case] location: &str, #[case] expected: Format) {
    assert_eq!(Format::detect(location, ""), expected);
}

#[rstest]
#[case("{\"a\": 1}", Format::Json)]
#[case("[server]\nport = 1\n", Format::Toml)]
#[case("a: 1\n", Format::Yaml)]
fn test_detect_falls_back_to_content(#[case] content: &str, #[case] expected: Format) {
    assert_eq!(Format::detect("settings", content), expected);
}

#[rstest]
#[case(Format::Yaml)]
#[case(Format::Json)]
#[case(Format::Toml)]
fn test_rendered_tree_parses_back(#[case] format: Format) {
    let tree = json!({
        "name": "child",
        "opts": {"a": 1, "b": 2},
        "hosts": ["a", "b"],
        "enabled": true
    });

    let handler = format.handler();
    assert_eq!(handler.format(), format);

    let rendered = handler.render(&tree).unwrap();
    assert_eq!(handler.parse(&rendered).unwrap(), Some(tree));
}

#[test]
fn test_same_tree_from_every_format() {
    let yaml = "name: base\nopts:\n  a: 0\n  b: 2\n";
    let json = r#"{"name": "base", "opts": {"a": 0, "b": 2}}"#;
    let toml = "name = \"base\"\n[opts]\na = 0\nb = 2\n";

    let expected = Some(json!({"name": "base", "opts": {"a": 0, "b": 2}}));
    assert_eq!(Format::Yaml.handler().parse(yaml).unwrap(), expected);
    assert_eq!(Format::Json.handler().parse(json).unwrap(), expected);
    assert_eq!(Format::Toml.handler().parse(toml).unwrap(), expected);
}
