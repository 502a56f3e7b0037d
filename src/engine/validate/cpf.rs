use std::sync::LazyLock;

use regex::Regex;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").expect("static pattern"));

/// Strips every non-digit character from a raw CPF string.
pub fn normalize(raw: &str) -> String {
    NON_DIGITS.replace_all(raw, "").into_owned()
}

/// Validates a CPF (Brazilian taxpayer id) by its two check digits.
///
/// After normalization the string must hold exactly 11 digits. An
/// all-identical digit string is rejected before the checksum runs even
/// though it can satisfy both check digits.
pub fn is_valid(raw: &str) -> bool {
    let normalized = normalize(raw);
    let Some(digits) = digit_array(&normalized) else {
        return false;
    };
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

fn digit_array(normalized: &str) -> Option<[u32; 11]> {
    if normalized.chars().count() != 11 {
        return None;
    }
    let mut digits = [0u32; 11];
    for (index, ch) in normalized.chars().enumerate() {
        digits[index] = ch.to_digit(10)?;
    }
    Some(digits)
}

// Weighted sum with weights (len+1)..2; first check digit covers positions
// 0..9, second covers 0..10. A remainder of 10 or 11 normalizes to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let len = prefix.len() as u32;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(position, &digit)| digit * (len + 1 - position as u32))
        .sum();
    let resto = (sum * 10) % 11;
    if resto == 10 || resto == 11 { 0 } else { resto }
}
