// src/tests/router_tests/manage_tests.rs

use crate::router::handle;
use crate::tests::utils::{get, location_of, post_form, read_body, sample_properties, StubApi};

#[test]
fn manage_page_shows_stats_and_table() {
    let api = StubApi::new(sample_properties());

    let mut resp = handle(get("/manage"), &api).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    // Three fixtures, one market value (500,000) averaged over all of them.
    assert!(body.contains("<dt>Total properties</dt><dd>3</dd>"));
    assert!(body.contains("$166,667"));
    assert!(body.contains("12 Oak Ln"));
    assert!(body.contains("Add a property"));
}

#[test]
fn manage_survives_a_failing_stats_endpoint() {
    let mut api = StubApi::new(sample_properties());
    api.fail_stats = true;

    let mut resp = handle(get("/manage"), &api).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(!body.contains("Total properties"));
    assert!(body.contains("12 Oak Ln"));
}

#[test]
fn adding_a_property_posts_to_the_api_and_redirects() {
    let api = StubApi::new(Vec::new());

    let resp = handle(
        post_form(
            "/properties",
            "address=7+Birch+Ct&property_type=Condo&bedrooms=2&market_value=410000\
             &amenities=gym%2C+rooftop",
        ),
        &api,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let location = location_of(&resp);
    assert!(location.starts_with("/manage?"));
    assert!(location.contains("msg=Property+added"));

    // The new property is now listed.
    let mut browse = handle(get("/browse"), &api).unwrap();
    let body = read_body(&mut browse);
    assert!(body.contains("7 Birch Ct"));
    assert!(body.contains("$410,000"));
}

#[test]
fn add_without_an_address_is_a_bad_request() {
    let api = StubApi::new(Vec::new());

    let err = handle(post_form("/properties", "bedrooms=2"), &api).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}

#[test]
fn lenient_form_parsing_defaults_unparsable_numbers() {
    let api = StubApi::new(Vec::new());

    handle(
        post_form(
            "/properties",
            "address=5+Fen+Way&property_type=SFH&bedrooms=lots&market_value=",
        ),
        &api,
    )
    .unwrap();

    let mut resp = handle(get("/manage"), &api).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("5 Fen Way"));
}
