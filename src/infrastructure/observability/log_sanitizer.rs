const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens user text (transcripts, prompts) for log output and masks
/// credential-looking fragments.
pub fn sanitize_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    const PATTERNS: [(&str, &str); 4] = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in PATTERNS {
        let mut cursor = 0;
        while let Some(offset) = result[cursor..].find(pattern) {
            let idx = cursor + offset;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(idx..end, replacement);
            cursor = idx + replacement.len();
        }
    }

    result
}
