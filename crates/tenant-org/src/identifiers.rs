//! Identifier validation
//!
//! Checks for the two identifiers the admin API accepts from callers:
//! user emails and organization URL prefixes.

/// Longest email accepted, per RFC 5321 path limits.
const MAX_EMAIL_LEN: usize = 254;

/// Check that `email` is a plausible address: one `@`, a non-empty local
/// part, and a dotted domain without empty labels or whitespace.
///
/// # Examples
///
/// ```
/// use tenant_org::is_valid_email;
///
/// assert!(is_valid_email("dev@acme.io"));
/// assert!(!is_valid_email("dev@acme"));
/// assert!(!is_valid_email("not an email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Check that `prefix` only uses URL-safe characters (`A-Z a-z 0-9 _ -`).
///
/// # Examples
///
/// ```
/// use tenant_org::is_valid_url_prefix;
///
/// assert!(is_valid_url_prefix("acme-corp_2"));
/// assert!(!is_valid_url_prefix("acme corp"));
/// assert!(!is_valid_url_prefix(""));
/// ```
pub fn is_valid_url_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Canonical lookup key for an email: trimmed and ASCII-lowercased.
///
/// Records keep the address as supplied; only lookups use this form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(is_valid_email("AbCdEf@XyZ.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@acme.io"));
        assert!(!is_valid_email("dev@"));
        assert!(!is_valid_email("dev@@acme.io"));
        assert!(!is_valid_email("dev@acme..io"));
        assert!(!is_valid_email("dev@-acme.io"));
        assert!(!is_valid_email("dev @acme.io"));
        assert!(!is_valid_email("devacme.io"));

        let long = format!("{}@acme.io", "a".repeat(MAX_EMAIL_LEN));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn test_url_prefix() {
        assert!(is_valid_url_prefix("abc123"));
        assert!(is_valid_url_prefix("A-b_C"));
        assert!(!is_valid_url_prefix("a/b"));
        assert!(!is_valid_url_prefix("a.b"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Dev@Acme.IO "), "dev@acme.io");
    }
}
