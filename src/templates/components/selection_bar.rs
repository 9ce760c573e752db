use maud::{html, Markup};

use crate::domain::selection::{SelectionSet, Slot};
use crate::templates::links;

/// Sticky strip showing both comparison slots. Rendered from the same
/// SelectionSet as the cards, so the two can never disagree about what is
/// selected.
pub fn selection_bar(selection: &SelectionSet, page: &str, query: &str) -> Markup {
    html! {
        section class="selection-bar card" {
            h3 { "Comparing" }
            div class="slots" {
                (slot_chip(selection, Slot::One, "Property 1"))
                (slot_chip(selection, Slot::Two, "Property 2"))
            }
            @match links::compare(selection) {
                Some(href) => a class="compare-button" href=(href) { "Compare" },
                None => p class="hint" {
                    "Select two properties to compare them."
                },
            }
            @if !selection.is_empty() {
                a class="clear" href=(links::clear(page, query)) { "Clear selection" }
            }
        }
    }
}

fn slot_chip(selection: &SelectionSet, slot: Slot, label: &str) -> Markup {
    html! {
        div class="slot" {
            span class="slot-label" { (label) }
            @match selection.get(slot) {
                Some(address) => strong { (address) },
                None => em { "empty" },
            }
        }
    }
}
