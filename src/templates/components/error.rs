use maud::{html, Markup};

/// Inline, dismissible-by-navigation message strip. Used for recoverable
/// problems (selection full, remote API down) that should not replace the
/// page the user was looking at.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice" role="alert" {
            p { (message) }
        }
    }
}
