use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Property Compare",
        html! {
            main class="container" {
                h1 { "Property Compare" }
                p { "Browse listed properties, pick two, and compare them side by side." }

                section class="card" {
                    h3 { "Browse & Compare" }
                    p { "Pick properties from the grid and compare their prices and features." }
                    a href="/browse" { "Go to Browse" }
                }

                section class="card" {
                    h3 { "Manage" }
                    p { "Dataset statistics and a form for adding your own properties." }
                    a href="/manage" { "Go to Manage" }
                }
            }
        },
    )
}
