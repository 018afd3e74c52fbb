//! Display formatting for currency amounts

/// Format as dollars with thousands separators, e.g. `-$1,234.50`
pub fn currency(value: f64, decimals: usize) -> String {
    let digits = group_thousands(&format!("{:.*}", decimals, value.abs()));
    // Skip the sign when the value rounds to zero
    let negative = value < 0.0 && digits.bytes().any(|b| (b'1'..=b'9').contains(&b));
    if negative {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Insert commas into the integer part of an unsigned decimal string
pub fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = match number.find('.') {
        Some(idx) => number.split_at(idx),
        None => (number, ""),
    };

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}
