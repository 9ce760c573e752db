pub mod components;
pub mod layouts;
pub mod links;
pub mod pages;

// Re-exports for convenience
pub use components::{notice, property_card, selection_bar};
pub use layouts::desktop::desktop_layout;

/// "$1,234,568" — prices are rounded to whole dollars for display.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.abs().round() as i64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded))
}

/// "12,500" for areas and counts.
pub fn format_number(value: f64) -> String {
    group_thousands(value.abs().round() as i64)
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
