use maud::{html, Markup};

use crate::domain::record::PropertyRecord;
use crate::domain::selection::{SelectionSet, Slot};
use crate::templates::{desktop_layout, notice, property_card, selection_bar};

pub struct BrowseVm {
    pub properties: Vec<PropertyRecord>,
    pub selection: SelectionSet,
    pub query: String,
    /// Provenance tag from the remote API; shown as a footnote only.
    pub source: Option<String>,
    pub notice: Option<String>,
}

pub fn browse_page(vm: &BrowseVm) -> Markup {
    desktop_layout(
        "Browse Properties",
        html! {
            main class="container" {
                h1 { "Browse Properties" }

                @if let Some(msg) = &vm.notice {
                    (notice(msg))
                }

                form class="search" method="get" action="/browse" {
                    input type="text" name="q" value=(vm.query)
                        placeholder="Search by address, type, or feature";
                    @if let Some(p1) = (vm.selection.get(Slot::One)) {
                        input type="hidden" name="p1" value=(p1);
                    }
                    @if let Some(p2) = (vm.selection.get(Slot::Two)) {
                        input type="hidden" name="p2" value=(p2);
                    }
                    button type="submit" { "Search" }
                }

                p class="hint" {
                    "Click a card's slot buttons to choose it as Property 1 or "
                    "Property 2, then hit Compare."
                }

                (selection_bar(&vm.selection, "browse", &vm.query))

                @if vm.properties.is_empty() {
                    p { "No properties matched." }
                } @else {
                    div class="property-grid" {
                        @for property in &vm.properties {
                            (property_card(property, &vm.selection, "browse", &vm.query))
                        }
                    }
                }

                @if let Some(source) = &vm.source {
                    p class="source-note" { "Data source: " (source) }
                }
            }
        },
    )
}
