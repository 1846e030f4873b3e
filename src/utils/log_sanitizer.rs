//! Log sanitization for masking sensitive data.
//!
//! Emails are PII; every log line that mentions one goes through
//! [`mask_email`] first.

/// Mask an email address for safe logging.
///
/// Shows only the first 3 characters (or fewer if the local part is shorter)
/// followed by asterisks and the domain.
///
/// # Examples
/// ```
/// use user_directory::utils::mask_email;
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let local_part = &email[..at_pos];
        let domain = &email[at_pos..];

        // Take characters, not bytes: local parts may be multibyte.
        let visible: String = local_part.chars().take(3).collect();
        format!("{}***{}", visible, domain)
    } else {
        // Not a valid email format, just mask most of it
        let visible: String = email.chars().take(3).collect();
        format!("{}***", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("johndoe@test.org"), "joh***@test.org");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("a@test.org"), "a***@test.org");
    }

    #[test]
    fn test_mask_email_invalid() {
        assert_eq!(mask_email("notanemail"), "not***");
    }

    #[test]
    fn test_mask_email_multibyte_local_part() {
        assert_eq!(mask_email("aaé@x.com"), "aaé***@x.com");
        assert_eq!(mask_email("日本語長い@x.com"), "日本語***@x.com");
        assert_eq!(mask_email("héllo"), "hél***");
    }
}
