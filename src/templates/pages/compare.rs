use maud::{html, Markup};

use crate::domain::comparison::{ComparisonResult, FieldDelta};
use crate::domain::record::PropertyRecord;
use crate::templates::{desktop_layout, format_usd};

/// Side-by-side comparison view. All numbers shown here come from the local
/// ComparisonResult; `chart` is the remote service's pre-rendered image,
/// passed through as an opaque base64 blob.
pub fn compare_page(result: &ComparisonResult, chart: Option<&str>) -> Markup {
    desktop_layout(
        "Comparison Results",
        html! {
            main class="container" {
                h1 { "Comparison Results" }

                (summary_card(result))

                div class="compare-grid" {
                    (side_card("Property 1", &result.property_a, result.resolved_price_a, result))
                    (side_card("Property 2", &result.property_b, result.resolved_price_b, result))
                }

                @if !result.field_deltas.is_empty() {
                    (deltas_card(result))
                }

                @if let Some(encoded) = chart {
                    section class="card chart" {
                        h3 { "Comparison Chart" }
                        // The blob is remote input; normal attribute escaping
                        // applies. Valid base64 passes through untouched.
                        img alt="Comparison chart"
                            src=(format!("data:image/png;base64,{encoded}"));
                    }
                }

                p { a href="/browse" { "Back to Browse" } }
            }
        },
    )
}

fn summary_card(result: &ComparisonResult) -> Markup {
    html! {
        section class="card summary" {
            h3 { "Summary" }
            dl {
                dt { "Price difference" }
                dd { (format_usd(result.price_difference)) }

                dt { "Percentage difference" }
                dd {
                    @match result.percentage_difference {
                        Some(pct) => { (format!("{pct:.1}%")) },
                        None => em { "n/a" },
                    }
                }

                dt { "Higher priced" }
                dd { (result.higher_address) }

                dt { "Lower priced" }
                dd { (result.lower_address) }
            }
        }
    }
}

fn side_card(
    label: &str,
    property: &PropertyRecord,
    resolved: f64,
    result: &ComparisonResult,
) -> Markup {
    let is_higher = property.address == result.higher_address;
    html! {
        section.card.side.higher[is_higher] {
            h3 { (label) }
            p class="address" { (property.address) }
            p class="price" {
                strong { (format_usd(resolved)) }
                @if is_higher { span class="badge" { "higher" } }
                @else { span class="badge" { "lower" } }
            }
            dl {
                dt { "Type" }
                dd { (property.property_type.label()) }
                @if let Some(beds) = property.bedrooms {
                    dt { "Bedrooms" } dd { (beds) }
                }
                @if let Some(baths) = property.bathrooms {
                    dt { "Bathrooms" } dd { (baths) }
                }
                @if let Some(year) = property.year_built {
                    dt { "Year Built" } dd { (year) }
                }
            }
        }
    }
}

fn deltas_card(result: &ComparisonResult) -> Markup {
    html! {
        section class="card deltas" {
            h3 { "Feature differences" }
            table {
                thead {
                    tr {
                        th { "Feature" }
                        th { "Property 1" }
                        th { "Property 2" }
                        th { "Difference" }
                    }
                }
                tbody {
                    @for delta in &result.field_deltas {
                        (delta_row(delta))
                    }
                }
            }
        }
    }
}

fn delta_row(delta: &FieldDelta) -> Markup {
    let is_money = matches!(delta.field, "property_tax" | "hoa_fee" | "last_sold_price");
    let show = |v: f64| {
        if is_money {
            format_usd(v)
        } else {
            format!("{v}")
        }
    };
    html! {
        tr {
            td { (delta.field.replace('_', " ")) }
            td { (show(delta.value_a)) }
            td { (show(delta.value_b)) }
            td { (show(delta.difference())) }
        }
    }
}
