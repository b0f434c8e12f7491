use unicode_width::UnicodeWidthChar;

use url::{ParseError, Url};

/// Safely truncate a string, ensuring it is not cut in the middle of
/// multi-byte characters and that the display width stays within bounds.
#[allow(dead_code)]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);

        if current_width + char_width + 3 > max_width {
            break;
        }

        result.push(c);
        current_width += char_width;
    }

    result.push_str("...");
    result
}

/// Hostname of a web link, used by the theme-color domain rule.
pub fn domain_of(url: &str) -> Result<String, ParseError> {
    let parsed_url = Url::parse(url)?;
    let host = parsed_url.host_str().ok_or(ParseError::EmptyHost)?;
    Ok(host.to_string())
}
