/// Currency with grouped thousands and no cents, e.g. "$1,234,567".
/// NaN passes through as "$NaN" on purpose — a garbage upstream price
/// renders as garbage rather than masquerading as missing data.
pub fn usd(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let rounded = value.round() as i64;
    format!("${}", group(rounded))
}

/// Integer with thousands separators, e.g. "1,234,567".
pub fn group(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Compact axis label: millions get one decimal and an M suffix.
pub fn compact(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else {
        group(value)
    }
}
