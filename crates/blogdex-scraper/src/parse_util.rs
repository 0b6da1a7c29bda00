//! Shared low-level parsing helpers for the stage extractors.

use scraper::{ElementRef, Selector};

/// Parses a CSS selector that is known valid at compile time.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// First run of digits in `text`, thousands separators stripped.
pub(crate) fn first_number(text: &str) -> Option<u32> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let start = cleaned.find(|c: char| c.is_ascii_digit())?;
    let digits: String = cleaned[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Parses a captured digit string that may still carry commas.
pub(crate) fn parse_grouped(digits: &str) -> Option<u32> {
    digits.replace(',', "").parse().ok()
}

/// Whitespace-trimmed text content of an element, including descendants.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Strip HTML tags from a string, returning plain text.
pub(crate) fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_number_skips_leading_text_and_commas() {
        assert_eq!(first_number("이웃 1,234명"), Some(1234));
        assert_eq!(first_number("no digits here"), None);
        assert_eq!(first_number("42"), Some(42));
    }

    #[test]
    fn parse_grouped_accepts_separators() {
        assert_eq!(parse_grouped("12,345"), Some(12345));
        assert_eq!(parse_grouped("7"), Some(7));
        assert_eq!(parse_grouped("abc"), None);
    }

    #[test]
    fn strip_html_removes_tags_and_trims() {
        assert_eq!(strip_html("<p>맛집 <b>후기</b></p> "), "맛집 후기");
        assert_eq!(strip_html("plain"), "plain");
    }
}
