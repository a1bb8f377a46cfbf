use dnslink_domain::{validate_domain, Reason, UrlParts};

#[test]
fn test_parse_plain_domain() {
    let parts = UrlParts::parse("example.com");
    assert_eq!(parts.domain, "example.com");
    assert_eq!(parts.pathname, "");
    assert!(parts.search.is_empty());
}

#[test]
fn test_parse_path_query_and_fragment() {
    let parts = UrlParts::parse("example.com/foo/bar?x=1&x=2&y=z#frag");
    assert_eq!(parts.domain, "example.com");
    assert_eq!(parts.pathname, "/foo/bar");
    assert_eq!(parts.search["x"], vec!["1", "2"]);
    assert_eq!(parts.search["y"], vec!["z"]);
}

#[test]
fn test_parse_strips_scheme() {
    let parts = UrlParts::parse("https://example.com/a");
    assert_eq!(parts.domain, "example.com");
    assert_eq!(parts.pathname, "/a");
}

#[test]
fn test_parse_escapes_each_segment() {
    let parts = UrlParts::parse("example.com/a b/ä");
    assert_eq!(parts.pathname, "/a%20b/%C3%A4");
}

#[test]
fn test_parse_keeps_double_slash() {
    let parts = UrlParts::parse("example.com//baz");
    assert_eq!(parts.pathname, "//baz");
}

#[test]
fn test_validate_prepends_prefix() {
    let parts = validate_domain("example.com/foo?x=1").unwrap();
    assert_eq!(parts.domain, "_dnslink.example.com");
    assert_eq!(parts.pathname, "/foo");
    assert_eq!(parts.search["x"], vec!["1"]);
}

#[test]
fn test_validate_keeps_single_prefix() {
    let parts = validate_domain("_dnslink.example.com").unwrap();
    assert_eq!(parts.domain, "_dnslink.example.com");
    assert_eq!(parts.bare_domain(), "example.com");
}

#[test]
fn test_validate_strips_trailing_dot() {
    let parts = validate_domain("example.com.").unwrap();
    assert_eq!(parts.domain, "_dnslink.example.com");
}

#[test]
fn test_validate_rejects_double_prefix() {
    assert_eq!(
        validate_domain("_dnslink._dnslink.example.com"),
        Err(Reason::RecursiveDnslinkPrefix)
    );
}

#[test]
fn test_validate_rejects_empty_label() {
    assert_eq!(validate_domain("hello..com"), Err(Reason::EmptyPart));
    assert_eq!(validate_domain(""), Err(Reason::EmptyPart));
}

#[test]
fn test_validate_rejects_long_names() {
    let label = "a".repeat(64);
    assert_eq!(
        validate_domain(&format!("{}.com", label)),
        Err(Reason::TooLong)
    );

    let long = vec!["abcdefghi"; 25].join(".");
    assert!(long.len() > 244);
    assert_eq!(validate_domain(&long), Err(Reason::TooLong));
}
