use maud::{html, Markup};

use crate::domain::price;
use crate::domain::record::{PropertyRecord, PropertyType};
use crate::domain::selection::{SelectionSet, Slot};
use crate::templates::{format_number, format_usd, links};

/// One property card in a grid. The displayed price always comes from the
/// resolver, never from reading a price field directly.
pub fn property_card(
    property: &PropertyRecord,
    selection: &SelectionSet,
    page: &str,
    query: &str,
) -> Markup {
    let resolved = price::resolve(property);
    let selected = selection.is_selected(&property.address);

    html! {
        div.card.property-card.selected[selected] {
            div class="card-header" {
                h3 { (property.address) }
            }
            div class="card-body" {
                div class="price" {
                    strong { (format_usd(resolved)) }
                    span class="price-caption" { (price::price_caption(property)) }
                }
                @if let Some(sold) = property.last_sold_price {
                    p class="last-sold" {
                        "Last Sold: " (format_usd(sold))
                        @if let Some(date) = property.last_sold_date {
                            " on " (date.format("%Y-%m-%d"))
                        }
                    }
                }

                dl class="details" {
                    dt { "Property Type" }
                    dd { (property.property_type.label()) }

                    @match (&property.property_type, property.lot_area, property.building_area) {
                        (PropertyType::SingleFamilyHome, Some(lot), _) if lot > 0.0 => {
                            dt { "Lot Area" }
                            dd { (format_number(lot)) " sq ft" }
                        }
                        (PropertyType::Condominium, _, Some(building)) if building > 0.0 => {
                            dt { "Building Area" }
                            dd { (format_number(building)) " sq ft" }
                        }
                        _ => {}
                    }

                    @if let Some(beds) = property.bedrooms {
                        dt { "Bedrooms" }
                        dd { (beds) }
                    }
                    @if let Some(baths) = property.bathrooms {
                        dt { "Bathrooms" }
                        dd { (baths) }
                    }
                    @if let Some(year) = property.year_built {
                        dt { "Year Built" }
                        dd { (year) }
                    }
                    @if let Some(sqft) = property.square_footage {
                        dt { "Size" }
                        dd { (format_number(sqft)) " sq ft" }
                    }
                    @if let Some(condition) = property.condition {
                        dt { "Condition" }
                        dd class={ "condition-" (condition.label()) } { (condition.label()) }
                    }
                }

                @if !property.amenities.is_empty() {
                    div class="amenities" {
                        @for amenity in property.amenities.iter().take(6) {
                            span class="tag" { (amenity.replace('_', " ")) }
                        }
                    }
                }

                div class="select-actions" {
                    (slot_button(property, selection, Slot::One, "Property 1", page, query))
                    (slot_button(property, selection, Slot::Two, "Property 2", page, query))
                    a class="toggle"
                        href=(links::toggle(page, &property.address, selection, query)) {
                        @if selected { "Remove from comparison" } @else { "Add to comparison" }
                    }
                }
            }
        }
    }
}

fn slot_button(
    property: &PropertyRecord,
    selection: &SelectionSet,
    slot: Slot,
    label: &str,
    page: &str,
    query: &str,
) -> Markup {
    let occupied_by_this = selection.slot_of(&property.address) == Some(slot);

    html! {
        @if occupied_by_this {
            span class="slot-button active" { "\u{2713} " (label) }
        } @else {
            a class="slot-button"
                href=(links::assign(page, slot, &property.address, selection, query)) {
                "Select as " (label)
            }
        }
    }
}
