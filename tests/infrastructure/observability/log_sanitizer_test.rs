use babel::infrastructure::observability::sanitize_text;

#[test]
fn given_long_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "ñ".repeat(150);

    let sanitized = sanitize_text(&text);

    assert!(sanitized.starts_with(&"ñ".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_in_text_when_sanitizing_then_redacts_values() {
    let sanitized = sanitize_text("call with Bearer abc123 and api_key=xyz&next=1");

    assert!(!sanitized.contains("abc123"));
    assert!(!sanitized.contains("xyz"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(sanitized.contains("&next=1"));
}

#[test]
fn given_repeated_credentials_when_sanitizing_then_redacts_every_occurrence() {
    let sanitized =
        sanitize_text("first Bearer aaa then Bearer bbb, token=one&token=two password=p1 password=p2");

    for secret in ["aaa", "bbb", "one", "two", "p1", "p2"] {
        assert!(!sanitized.contains(secret), "{} leaked in {}", secret, sanitized);
    }
    assert_eq!(sanitized.matches("Bearer [REDACTED]").count(), 2);
    assert_eq!(sanitized.matches("token=[REDACTED]").count(), 2);
    assert_eq!(sanitized.matches("password=[REDACTED]").count(), 2);
}

#[test]
fn given_blank_text_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_text("   "), "[EMPTY]");
}
