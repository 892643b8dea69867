const MAX_VISIBLE_LENGTH: usize = 200;

const REDACTED: &str = "[REDACTED]";

/// Lowercase markers; matched case-insensitively. Quotes, colons and spaces
/// between a marker and its value are skipped so header and JSON forms match.
const SENSITIVE_PATTERNS: [&str; 5] = ["bearer ", "api_key=", "key=", "x-api-key", "token="];

/// Truncates provider text and redacts credentials before it is logged.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let sanitized = match trimmed.char_indices().nth(MAX_VISIBLE_LENGTH) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();
    for pattern in SENSITIVE_PATTERNS {
        let mut search_from = 0;
        loop {
            // ASCII lowercasing keeps byte offsets aligned with `result`.
            let lowered = result.to_ascii_lowercase();
            let Some(found) = lowered[search_from..].find(pattern) else {
                break;
            };
            let after_pattern = search_from + found + pattern.len();
            let value_start = result[after_pattern..]
                .find(|c: char| !matches!(c, '"' | '\'' | ':' | ' '))
                .map(|i| after_pattern + i)
                .unwrap_or(result.len());
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ',' | '}'))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            if value_end > value_start {
                result.replace_range(value_start..value_end, REDACTED);
                search_from = value_start + REDACTED.len();
            } else {
                search_from = value_start;
            }
        }
    }

    result
}
