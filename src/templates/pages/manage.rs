use maud::{html, Markup};

use crate::api::models::PropertyStats;
use crate::domain::price;
use crate::domain::record::PropertyRecord;
use crate::domain::selection::SelectionSet;
use crate::templates::{desktop_layout, format_usd, links, notice, selection_bar};

pub struct ManageVm {
    pub properties: Vec<PropertyRecord>,
    pub selection: SelectionSet,
    pub stats: Option<PropertyStats>,
    pub source: Option<String>,
    pub notice: Option<String>,
}

pub fn manage_page(vm: &ManageVm) -> Markup {
    desktop_layout(
        "Manage Properties",
        html! {
            main class="container" {
                h1 { "Manage Properties" }

                @if let Some(msg) = &vm.notice {
                    (notice(msg))
                }

                @if let Some(stats) = &vm.stats {
                    (stats_card(stats))
                }

                (add_property_card())

                (selection_bar(&vm.selection, "manage", ""))

                (property_table(vm))

                @if let Some(source) = &vm.source {
                    p class="source-note" { "Data source: " (source) }
                }
            }
        },
    )
}

fn stats_card(stats: &PropertyStats) -> Markup {
    html! {
        section class="card" {
            h3 { "Dataset" }
            dl class="stats" {
                dt { "Total properties" }
                dd { (stats.total_properties) }
                dt { "Average market value" }
                dd { (format_usd(stats.average_market_value)) }
            }
            @if !stats.property_types.is_empty() {
                ul class="type-counts" {
                    @for (property_type, count) in sorted_types(stats) {
                        li { (property_type) ": " (count) }
                    }
                }
            }
        }
    }
}

// HashMap iteration order is unstable; sort so the list doesn't jump around
// between page loads.
fn sorted_types(stats: &PropertyStats) -> Vec<(&String, &u64)> {
    let mut types: Vec<_> = stats.property_types.iter().collect();
    types.sort_by_key(|(name, _)| name.as_str());
    types
}

fn add_property_card() -> Markup {
    html! {
        section class="card" {
            h3 { "Add a property" }
            form method="post" action="/properties" class="add-property" {
                label { "Address"
                    input type="text" name="address" required;
                }
                label { "Type"
                    select name="property_type" {
                        option value="SFH" { "Single Family Home" }
                        option value="Condo" { "Condominium" }
                    }
                }
                label { "Lot size (sq ft)" input type="text" name="lot_size"; }
                label { "Square footage" input type="text" name="square_footage"; }
                label { "Bedrooms" input type="text" name="bedrooms"; }
                label { "Bathrooms" input type="text" name="bathrooms"; }
                label { "Garage spaces" input type="text" name="garage"; }
                label { "Year built" input type="text" name="year_built"; }
                label { "Market value ($)" input type="text" name="market_value"; }
                label { "Amenities (comma separated)"
                    input type="text" name="amenities" placeholder="pool, garage, solar_panels";
                }
                label { "Neighborhood features (comma separated)"
                    input type="text" name="neighborhood_features";
                }
                label { "Condition"
                    select name="condition" {
                        option value="excellent" { "Excellent" }
                        option value="good" { "Good" }
                        option value="fair" selected { "Fair" }
                        option value="poor" { "Poor" }
                    }
                }
                button type="submit" { "Add property" }
            }
        }
    }
}

fn property_table(vm: &ManageVm) -> Markup {
    html! {
        section class="card" {
            h3 { "Properties" }
            @if vm.properties.is_empty() {
                p { "No properties yet." }
            } @else {
                table class="property-table" {
                    thead {
                        tr {
                            th { "Address" }
                            th { "Type" }
                            th { "Price" }
                            th { "Beds" }
                            th { "Baths" }
                            th { "Compare" }
                        }
                    }
                    tbody {
                        @for property in &vm.properties {
                            (property_row(property, &vm.selection))
                        }
                    }
                }
            }
        }
    }
}

fn property_row(property: &PropertyRecord, selection: &SelectionSet) -> Markup {
    let selected = selection.is_selected(&property.address);
    html! {
        tr class=[selected.then_some("selected")] {
            td { (property.address) }
            td { (property.property_type.label()) }
            td {
                @if price::has_known_price(property) {
                    (format_usd(price::resolve(property)))
                } @else {
                    em { "n/a" }
                }
            }
            td { @if let Some(beds) = property.bedrooms { (beds) } @else { "-" } }
            td { @if let Some(baths) = property.bathrooms { (baths) } @else { "-" } }
            td {
                a href=(links::toggle("manage", &property.address, selection, "")) {
                    @if selected { "Remove" } @else { "Select" }
                }
            }
        }
    }
}
