// src/tests/router_tests/selection_tests.rs
//
// The selection travels in query parameters, so these tests drive the
// toggle/assign/clear endpoints and inspect the redirect they hand back.

use crate::router::handle;
use crate::tests::utils::{get, location_of, sample_properties, StubApi};

#[test]
fn toggle_claims_the_first_free_slot() {
    let api = StubApi::new(sample_properties());

    let resp = handle(get("/select/toggle?addr=12%20Oak%20Ln&back=browse"), &api).unwrap();
    assert_eq!(resp.status(), 303);

    let location = location_of(&resp);
    assert!(location.starts_with("/browse?"));
    assert!(location.contains("p1=12+Oak+Ln"));
    assert!(!location.contains("p2="));
}

#[test]
fn toggle_on_a_selected_address_frees_its_slot() {
    let api = StubApi::new(sample_properties());

    let resp = handle(
        get("/select/toggle?addr=12%20Oak%20Ln&p1=12%20Oak%20Ln&p2=9%20Elm%20St"),
        &api,
    )
    .unwrap();

    let location = location_of(&resp);
    assert!(!location.contains("p1="));
    assert!(location.contains("p2=9+Elm+St"));
}

#[test]
fn toggle_on_a_full_selection_reports_instead_of_evicting() {
    let api = StubApi::new(sample_properties());

    let resp = handle(
        get("/select/toggle?addr=3%20Pier%20Rd&p1=12%20Oak%20Ln&p2=9%20Elm%20St"),
        &api,
    )
    .unwrap();

    let location = location_of(&resp);
    // Selection unchanged, message attached.
    assert!(location.contains("p1=12+Oak+Ln"));
    assert!(location.contains("p2=9+Elm+St"));
    assert!(location.contains("msg="));
    assert!(!location.contains("Pier"));
}

#[test]
fn assign_moves_an_address_between_slots() {
    let api = StubApi::new(sample_properties());

    let resp = handle(
        get("/select/assign?slot=2&addr=12%20Oak%20Ln&p1=12%20Oak%20Ln"),
        &api,
    )
    .unwrap();

    let location = location_of(&resp);
    assert!(!location.contains("p1="));
    assert!(location.contains("p2=12+Oak+Ln"));
}

#[test]
fn assign_evicts_the_previous_slot_occupant() {
    let api = StubApi::new(sample_properties());

    let resp = handle(
        get("/select/assign?slot=1&addr=9%20Elm%20St&p1=12%20Oak%20Ln"),
        &api,
    )
    .unwrap();

    let location = location_of(&resp);
    assert!(location.contains("p1=9+Elm+St"));
    assert!(!location.contains("Oak"));
}

#[test]
fn assign_rejects_slot_numbers_other_than_1_and_2() {
    let api = StubApi::new(sample_properties());

    let err = handle(get("/select/assign?slot=3&addr=12%20Oak%20Ln"), &api).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}

#[test]
fn clear_drops_both_slots_but_keeps_the_search_query() {
    let api = StubApi::new(sample_properties());

    let resp = handle(
        get("/select/clear?p1=12%20Oak%20Ln&p2=9%20Elm%20St&q=oak&back=browse"),
        &api,
    )
    .unwrap();

    let location = location_of(&resp);
    assert!(!location.contains("p1="));
    assert!(!location.contains("p2="));
    assert!(location.contains("q=oak"));
}

#[test]
fn back_parameter_routes_the_redirect_to_manage() {
    let api = StubApi::new(sample_properties());

    let resp = handle(get("/select/toggle?addr=12%20Oak%20Ln&back=manage"), &api).unwrap();
    assert!(location_of(&resp).starts_with("/manage?"));
}
