/// Format a currency value
pub fn format_currency(value: f64) -> String {
    // Format with thousands separators manually
    let abs_value = value.abs();
    let dollars = abs_value as i64;
    let cents = ((abs_value - dollars as f64) * 100.0).round() as i64;

    // Rounding cents can carry into the dollar part
    let (dollars, cents) = if cents >= 100 {
        (dollars + 1, 0)
    } else {
        (dollars, cents)
    };

    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${}.{:02}", dollars_formatted, cents)
    } else {
        format!("-${}.{:02}", dollars_formatted, cents)
    }
}

/// Format an APR value already expressed in percent (e.g. 24.99 → "24.99%")
pub fn format_apr(value: f64) -> String {
    format!("{value:.2}%")
}

/// Format a month count as a rough duration (e.g. 34 → "2y 10m")
pub fn format_months(months: u32) -> String {
    let years = months / 12;
    let rest = months % 12;
    if years == 0 {
        format!("{rest}m")
    } else if rest == 0 {
        format!("{years}y")
    } else {
        format!("{years}y {rest}m")
    }
}
