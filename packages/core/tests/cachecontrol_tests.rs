use crumb_core::prelude::*;

#[test]
fn parse_coerces_integer_values() {
    let cc = CacheControl::parse("max-age=3600, s-maxage=600");
    assert_eq!(cc.max_age(), Some(3600));
    assert_eq!(cc.s_maxage(), Some(600));
}

#[test]
fn parse_keeps_field_lists() {
    let cc = CacheControl::parse(r#"no-cache="Set-Cookie", private"#);
    assert_eq!(cc.no_cache(), Some(FieldList::Fields("Set-Cookie".into())));
    assert_eq!(cc.private(), Some(FieldList::All));
}

#[test]
fn serialization_round_trips() {
    let input = r#"max-age=0, must-revalidate, no-cache, private="Set-Cookie, X-Auth""#;
    let cc = CacheControl::parse(input);
    assert_eq!(cc.to_string(), input);

    let reparsed = CacheControl::parse(&cc.to_string());
    assert_eq!(reparsed, cc);
}

#[test]
fn values_quote_only_when_needed() {
    let mut cc = CacheControl::new();
    cc.set_directive("community", Some(DirectiveValue::Str("UCI".into())));
    assert_eq!(cc.to_string(), "community=UCI");

    cc.set_directive("community", Some(DirectiveValue::Str("a b".into())));
    assert_eq!(cc.to_string(), "community=\"a b\"");
}

#[test]
fn request_scope_rejects_response_directives() {
    let mut cc = CacheControl::request();
    let err = cc.set_must_revalidate(true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "directive `must-revalidate` only applies to response Cache-Control"
    );
    assert!(cc.is_empty());
}

#[test]
fn response_scope_rejects_request_directives() {
    let mut cc = CacheControl::response();
    assert!(cc.set_min_fresh(Some(5)).is_err());
    assert!(cc.set_only_if_cached(true).is_err());
    assert!(cc.set_must_revalidate(true).is_ok());
    assert_eq!(cc.to_string(), "must-revalidate");
}

#[test]
fn typed_setters_build_a_header() {
    let mut cc = CacheControl::response();
    cc.set_max_age(Some(300));
    cc.set_public(true).unwrap();
    cc.set_no_transform(true);
    assert_eq!(cc.to_string(), "max-age=300, no-transform, public");
}

#[test]
fn unknown_directives_survive_the_round_trip() {
    let cc = CacheControl::parse("stale-while-revalidate=30, immutable");
    assert_eq!(cc.directive("immutable"), Some(None));
    assert_eq!(
        cc.directive("stale-while-revalidate"),
        Some(Some(&DirectiveValue::Int(30)))
    );
    assert_eq!(cc.to_string(), "immutable, stale-while-revalidate=30");
}

#[test]
fn garbage_is_dropped_not_reported() {
    let cc = CacheControl::parse("=, ;;; max-age=10");
    assert_eq!(cc.max_age(), Some(10));
}
