use crumb::{
    CookieJar, FieldList, RequestCacheControl, ResponseCacheControl, SetCookie,
    add_cookie_header,
};
use http::HeaderMap;
use http::header::COOKIE;

#[test]
fn parse_mutate_serialize_cycle() {
    let mut jar = CookieJar::parse("session=abc123; Path=/old; theme=dark");

    jar.get_mut("session").unwrap().set_path("/");
    jar.insert_morsel(SetCookie::new("lang", "en").into_morsel());

    assert_eq!(jar.to_string(), "lang=en; session=abc123; Path=/; theme=dark");
}

#[test]
fn builder_output_reparses_to_the_same_cookie() {
    let header = SetCookie::new("id", "a;b").path("/api").build();
    let jar = CookieJar::parse(&header);
    let morsel = jar.get("id").unwrap();
    assert_eq!(morsel.value(), "a;b");
    assert_eq!(morsel.path(), Some("/api"));
}

#[test]
fn jar_to_request_header() {
    let jar: CookieJar = [SetCookie::new("a", "1"), SetCookie::new("b", "2")]
        .into_iter()
        .collect();

    let mut headers = HeaderMap::new();
    add_cookie_header(&mut headers, &jar);
    assert_eq!(headers.get(COOKIE).unwrap(), "a=1; b=2");
}

#[test]
fn cache_control_builders_cover_both_scopes() {
    let request = RequestCacheControl::new().no_cache().max_stale(60).build();
    assert_eq!(request.to_string(), "max-stale=60, no-cache");

    let response = ResponseCacheControl::new()
        .private(FieldList::Fields("Set-Cookie".into()))
        .s_maxage(600)
        .build();
    assert_eq!(response.to_string(), "private=Set-Cookie, s-maxage=600");
}
