use exopack::coordinate::Coordinate;

#[test]
fn parse_four_parts() {
    let coord = Coordinate::parse("org.jibx:jibx-run:jar:1.2.1").unwrap();
    assert_eq!(coord.group, "org.jibx");
    assert_eq!(coord.artifact, "jibx-run");
    assert_eq!(coord.packaging, "jar");
    assert_eq!(coord.version, "1.2.1");
}

#[test]
fn parse_three_parts_defaults_packaging_to_jar() {
    let coord = Coordinate::parse("commons-lang:commons-lang:2.4").unwrap();
    assert_eq!(coord.packaging, "jar");
    assert_eq!(coord.version, "2.4");
}

#[test]
fn parse_two_parts_returns_none() {
    assert!(Coordinate::parse("group:artifact").is_none());
}

#[test]
fn parse_empty_string_returns_none() {
    assert!(Coordinate::parse("").is_none());
}

#[test]
fn parse_empty_field_returns_none() {
    assert!(Coordinate::parse("group::jar:1.0").is_none());
}

#[test]
fn parse_five_parts_returns_none() {
    assert!(Coordinate::parse("group:artifact:jar:1.0:extra").is_none());
}

#[test]
fn display_roundtrip() {
    let s = "xpp3:xpp3:jar:1.1.3.4.O";
    let coord = Coordinate::parse(s).unwrap();
    assert_eq!(coord.to_string(), s);
}

#[test]
fn key_is_group_and_artifact() {
    let coord = Coordinate::parse("javax.mail:mail:jar:1.4.2").unwrap();
    assert_eq!(coord.key(), "javax.mail:mail");
}
