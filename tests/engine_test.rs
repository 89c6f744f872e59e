use rampart::http::engine;
use rampart::{ContentType, JsonRequest, RequestError};

#[test]
fn prepare_builds_a_complete_reqwest_request() {
    let descriptor =
        JsonRequest::post_from_string("http://localhost:9876/sushi", "{\"name\":\"happiness\"}")
            .unwrap()
            .add_header("Accept", "application/json")
            .add_query_param("table", "12");

    let client = reqwest::Client::new();
    let request = engine::prepare(&client, &descriptor)
        .expect("descriptor should prepare")
        .build()
        .expect("builder should produce a request");

    assert_eq!(request.method(), &reqwest::Method::POST);
    assert_eq!(request.url().as_str(), "http://localhost:9876/sushi?table=12");
    assert_eq!(
        request.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(request.headers().get("accept").unwrap(), "application/json");

    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(body, &b"{\"name\":\"happiness\"}"[..]);
}

#[test]
fn prepare_appends_query_params_in_order() {
    let descriptor = JsonRequest::put_from_string("http://localhost/search", "{}")
        .unwrap()
        .add_query_param("tag", "fresh")
        .add_query_param("tag", "spicy")
        .add_query_param("limit", "10");

    let client = reqwest::Client::new();
    let request = engine::prepare(&client, &descriptor)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        request.url().as_str(),
        "http://localhost/search?tag=fresh&tag=spicy&limit=10"
    );
}

#[test]
fn overridden_content_type_reaches_the_wire_header() {
    let descriptor = JsonRequest::post_from_string("http://localhost/raw", "{}")
        .unwrap()
        .override_content_type(ContentType::plain_text());

    let client = reqwest::Client::new();
    let request = engine::prepare(&client, &descriptor)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        request.headers().get("content-type").unwrap(),
        "text/plain"
    );
}

#[test]
fn prepare_rejects_unparseable_urls() {
    let descriptor = JsonRequest::post_from_string("not a url", "{}").unwrap();

    let client = reqwest::Client::new();
    match engine::prepare(&client, &descriptor) {
        Err(RequestError::InvalidUrl { url, .. }) => assert_eq!(url, "not a url"),
        Ok(_) => panic!("expected InvalidUrl, got a builder"),
        Err(other) => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[test]
fn prepare_rejects_illegal_header_names() {
    let descriptor = JsonRequest::post_from_string("http://localhost/raw", "{}")
        .unwrap()
        .add_header("bad header\n", "x");

    let client = reqwest::Client::new();
    match engine::prepare(&client, &descriptor) {
        Err(RequestError::InvalidHeader { name, .. }) => assert_eq!(name, "bad header\n"),
        Ok(_) => panic!("expected InvalidHeader, got a builder"),
        Err(other) => panic!("expected InvalidHeader, got {other:?}"),
    }
}
