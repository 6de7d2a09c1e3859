//! Phone number normalization

/// Keep only ASCII digits
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a Russian phone number as `+7 (XXX) XXX-XX-XX`.
///
/// Accepts 11-digit numbers with a leading 7 or 8 and bare 10-digit
/// numbers. Anything else is passed through trimmed, since customers
/// sometimes leave foreign or partial numbers.
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    let local = match digits.len() {
        11 if digits.starts_with('7') || digits.starts_with('8') => &digits[1..],
        10 => digits.as_str(),
        _ => return raw.trim().to_string(),
    };
    format!(
        "+7 ({}) {}-{}-{}",
        &local[0..3],
        &local[3..6],
        &local[6..8],
        &local[8..10]
    )
}
