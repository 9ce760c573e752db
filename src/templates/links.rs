// src/templates/links.rs
//
// Every selection-mutating link carries the current slot state (`p1`, `p2`)
// and search query so the next request can rebuild the SelectionSet the view
// was rendered with. Addresses contain spaces, so everything goes through
// form_urlencoded.

use url::form_urlencoded::Serializer;

use crate::domain::selection::{SelectionSet, Slot};

fn with_state(path: &str, selection: &SelectionSet, query: &str) -> Serializer<'static, String> {
    let mut ser = query_serializer(path);
    if let Some(p1) = selection.get(Slot::One) {
        ser.append_pair("p1", p1);
    }
    if let Some(p2) = selection.get(Slot::Two) {
        ser.append_pair("p2", p2);
    }
    if !query.is_empty() {
        ser.append_pair("q", query);
    }
    ser
}

// Serializer::new assumes an empty target; for_suffix keeps the "path?"
// prefix out of the pair encoding.
fn query_serializer(path: &str) -> Serializer<'static, String> {
    let prefix = format!("{path}?");
    let start = prefix.len();
    Serializer::for_suffix(prefix, start)
}

pub fn toggle(path: &str, address: &str, selection: &SelectionSet, query: &str) -> String {
    let mut ser = with_state("/select/toggle", selection, query);
    ser.append_pair("addr", address);
    ser.append_pair("back", path);
    ser.finish()
}

pub fn assign(path: &str, slot: Slot, address: &str, selection: &SelectionSet, query: &str) -> String {
    let slot_no = match slot {
        Slot::One => "1",
        Slot::Two => "2",
    };
    let mut ser = with_state("/select/assign", selection, query);
    ser.append_pair("slot", slot_no);
    ser.append_pair("addr", address);
    ser.append_pair("back", path);
    ser.finish()
}

pub fn clear(path: &str, query: &str) -> String {
    let mut ser = query_serializer("/select/clear");
    if !query.is_empty() {
        ser.append_pair("q", query);
    }
    ser.append_pair("back", path);
    ser.finish()
}

/// Target for a selection-mutating redirect: same `p1`/`p2`/`q` encoding as
/// the in-page links, plus an optional user-visible message.
pub fn redirect(path: &str, selection: &SelectionSet, query: &str, msg: Option<&str>) -> String {
    let mut ser = with_state(path, selection, query);
    if let Some(msg) = msg {
        ser.append_pair("msg", msg);
    }
    ser.finish()
}

pub fn compare(selection: &SelectionSet) -> Option<String> {
    let (p1, p2) = selection.as_pair()?;
    let mut ser = query_serializer("/compare");
    ser.append_pair("p1", p1);
    ser.append_pair("p2", p2);
    Some(ser.finish())
}
