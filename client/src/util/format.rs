//! Display formatting for prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency symbol for listing prices.
pub const NAIRA: &str = "₦";

/// Format an amount as naira with thousands separators, e.g. `₦230,000`.
/// Kobo are shown only when non-zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_naira(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{NAIRA}0");
    }
    let negative = amount < 0.0;
    let kobo_total = (amount.abs() * 100.0).round() as u64;
    let whole = kobo_total / 100;
    let kobo = kobo_total % 100;

    let mut out = String::new();
    if negative && kobo_total > 0 {
        out.push('-');
    }
    out.push_str(NAIRA);
    out.push_str(&group_thousands(whole));
    if kobo > 0 {
        out.push_str(&format!(".{kobo:02}"));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `"(N bids)"` label, singular for one.
pub fn bid_count_label(count: u32) -> String {
    if count == 1 { "(1 bid)".to_owned() } else { format!("({count} bids)") }
}
