//! Input validation helpers returning `AppError::BadRequest`.

use crate::server::error::AppError;

/// Trims `value` and requires it to be non-empty and at most `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {max} characters"
        )));
    }

    Ok(value.to_string())
}

/// Trims an optional value; blank becomes `None`.
pub fn optional_text(field: &str, value: Option<String>, max: usize) -> Result<Option<String>, AppError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_text(field, v, max).map(Some),
    }
}

/// Trims free text, allowing it to be empty, but bounding its length.
pub fn bounded_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let value = value.trim();

    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {max} characters"
        )));
    }

    Ok(value.to_string())
}

/// Accepts `local@domain.tld` shaped addresses and lowercases them.
///
/// Exactly one `@`, a non-empty local part, and a domain containing a dot that is neither
/// its first nor last character. No whitespace anywhere.
pub fn email(value: &str) -> Result<String, AppError> {
    let value = value.trim().to_lowercase();
    let invalid = || AppError::BadRequest("A valid email address is required".to_string());

    if value.chars().any(char::is_whitespace) || value.len() > 254 {
        return Err(invalid());
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let dotted = domain
        .find('.')
        .is_some_and(|i| i > 0 && !domain.ends_with('.'));
    if local.is_empty() || !dotted {
        return Err(invalid());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_bounds() {
        assert_eq!(required_text("Title", "  Hi  ", 10).unwrap(), "Hi");
        assert!(required_text("Title", "   ", 10).is_err());
        assert!(required_text("Title", "abcdef", 5).is_err());
    }

    #[test]
    fn optional_text_treats_blank_as_none() {
        assert_eq!(optional_text("Mood", Some("  ".to_string()), 10).unwrap(), None);
        assert_eq!(optional_text("Mood", None, 10).unwrap(), None);
        assert_eq!(
            optional_text("Mood", Some(" happy ".to_string()), 10).unwrap(),
            Some("happy".to_string())
        );
    }

    #[test]
    fn accepts_reasonable_emails() {
        assert_eq!(email(" Me@Example.COM ").unwrap(), "me@example.com");
        assert!(email("a.b+c@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "plain", "@example.com", "me@", "me@example", "me@.com", "me@example.", "a@b@c.com", "me @example.com"] {
            assert!(email(bad).is_err(), "{bad} should be rejected");
        }
    }
}
