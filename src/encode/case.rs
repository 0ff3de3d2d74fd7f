//! camelCase / PascalCase to kebab-case conversion.

/// Convert a key to kebab-case.
///
/// A hyphen goes between a lowercase letter or digit and a following
/// uppercase letter (`colorGreen` -> `color-green`), and between two
/// uppercase letters when the second starts a capitalized word
/// (`XMLParser` -> `xml-parser`). The result is then lowercased. Everything
/// else, including existing hyphens and a leading colon, is left alone.
pub fn to_kebab_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let word_start = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let acronym_end =
                prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase());
            if word_start || acronym_end {
                out.push('-');
            }
        }
        out.push(c);
    }

    out.to_lowercase()
}
