/// Validation utilities for user input
///
/// All rules run client-side before any request is issued; a failed
/// validation never reaches the API gateway. Error strings are the exact
/// copy the forms display.

/// Maximum tweet body length in characters, after trimming.
pub const MAX_TWEET_LEN: usize = 280;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.') && !email.contains(' ')
        }
        None => false,
    };

    if valid {
        ValidationResult::ok()
    } else {
        ValidationResult::err("Please enter a valid email")
    }
}

/// Validate the login password (presence only; strength is checked at
/// registration, not every sign-in)
pub fn validate_login_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    ValidationResult::ok()
}

/// Validate the display name
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err("Name is required");
    }

    ValidationResult::ok()
}

/// Validate a new password's strength
pub fn validate_register_password(password: &str) -> ValidationResult {
    if password.chars().count() < 8 {
        return ValidationResult::err("Password must be at least 8 characters long");
    }

    ValidationResult::ok()
}

/// Validate the password confirmation field
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::err("Passwords do not match");
    }

    ValidationResult::ok()
}

/// Validate a tweet body. Callers submit the trimmed body; length counts
/// characters, not bytes.
pub fn validate_tweet_body(body: &str) -> ValidationResult {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return ValidationResult::err("Tweet cannot be empty");
    }

    if trimmed.chars().count() > MAX_TWEET_LEN {
        return ValidationResult::err("Tweet cannot exceed 280 characters");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("test@nodot").is_valid);
        assert!(!validate_email("spaced out@example.com").is_valid);
    }

    #[test]
    fn test_login_password_presence() {
        assert!(validate_login_password("anything").is_valid);
        let result = validate_login_password("");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Alice").is_valid);
        assert!(!validate_name("").is_valid);
        assert!(!validate_name("   ").is_valid);
    }

    #[test]
    fn test_register_password_length() {
        assert!(validate_register_password("12345678").is_valid);
        let result = validate_register_password("1234567");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_password_confirmation() {
        assert!(validate_password_confirmation("secret12", "secret12").is_valid);
        let result = validate_password_confirmation("secret12", "secret13");
        assert_eq!(result.error.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_tweet_body_rejects_whitespace_only() {
        let result = validate_tweet_body("   \n\t  ");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Tweet cannot be empty"));
    }

    #[test]
    fn test_tweet_body_length_boundary() {
        assert!(validate_tweet_body(&"x".repeat(280)).is_valid);

        let result = validate_tweet_body(&"x".repeat(281));
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Tweet cannot exceed 280 characters")
        );

        // Surrounding whitespace does not count against the limit.
        let padded = format!("  {}  ", "x".repeat(280));
        assert!(validate_tweet_body(&padded).is_valid);
    }

    #[test]
    fn test_tweet_body_counts_characters_not_bytes() {
        // 280 multibyte characters are within the limit even though the
        // byte length is far larger.
        let body = "ä".repeat(280);
        assert!(validate_tweet_body(&body).is_valid);
    }
}
