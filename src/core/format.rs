/// Fixed USD to INR conversion rate used for catalog prices
pub const USD_TO_INR_RATE: f64 = 83.0;

/// Convert a catalog price from USD to INR
#[inline]
pub fn usd_to_inr(price_usd: f64) -> f64 {
    price_usd * USD_TO_INR_RATE
}

/// Format an amount as INR with Indian digit grouping and no fractional
/// digits: 4500000 becomes "₹45,00,000".
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let grouped = group_indian(&rounded.unsigned_abs().to_string());
    if rounded < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Indian grouping: the last three digits form one group, the rest pair up.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Per-area unit price, rounded to the nearest rupee
#[inline]
pub fn price_per_area(total_inr: f64, area: f64) -> i64 {
    (total_inr / area).round() as i64
}

/// Unit-price string in the "₹8,300/sq ft" style
pub fn format_price_per_area(total_inr: f64, area: f64) -> String {
    format!("{}/sq ft", format_inr(price_per_area(total_inr, area) as f64))
}

/// Lakh-scaled label for chart axes: 830000 becomes "₹8.3L"
pub fn format_lakhs(amount: f64) -> String {
    format!("₹{:.1}L", amount / 100_000.0)
}
