//! Formatting helpers for presenting contact details.

/// `https://www.linkedin.com/in/x` -> `www.linkedin.com/in/x`.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// 1-based ordinal used in image alt texts.
pub fn ordinal(index: usize) -> String {
    (index + 1).to_string()
}
