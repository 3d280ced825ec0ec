//! Client-side field validation.
//!
//! Presence and format checks run before a wizard step advances.
//! These are a convenience layer only: the backend re-validates every
//! submission, so nothing here needs to be exhaustive.
//!
//! Each validator returns `None` when the value is acceptable, or
//! `Some(message)` to display inline under the field.

/// Non-empty after trimming.
pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", label))
    } else {
        None
    }
}

/// Minimal email shape: one `@`, a dot somewhere after it, no spaces.
pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let ok = !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(' ')
        && !domain.contains('@');
    if ok {
        None
    } else {
        Some("Enter a valid email address".to_string())
    }
}

/// Indian mobile number: exactly 10 digits, starting 6-9.
pub fn mobile(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Mobile number is required".to_string());
    }
    let ok = value.len() == 10
        && value.bytes().all(|b| b.is_ascii_digit())
        && matches!(value.as_bytes()[0], b'6'..=b'9');
    if ok {
        None
    } else {
        Some("Enter a valid 10-digit mobile number".to_string())
    }
}

/// Indian PIN code: 6 digits, not starting with 0.
pub fn pincode(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("PIN code is required".to_string());
    }
    let ok = value.len() == 6
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.as_bytes()[0] != b'0';
    if ok {
        None
    } else {
        Some("Enter a valid 6-digit PIN code".to_string())
    }
}

/// PAN: 5 letters, 4 digits, 1 letter (e.g. ABCDE1234F).
pub fn pan(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("PAN is required".to_string());
    }
    let bytes = value.as_bytes();
    let ok = bytes.len() == 10
        && bytes[..5].iter().all(|b| b.is_ascii_uppercase())
        && bytes[5..9].iter().all(|b| b.is_ascii_digit())
        && bytes[9].is_ascii_uppercase();
    if ok {
        None
    } else {
        Some("Enter a valid PAN (e.g. ABCDE1234F)".to_string())
    }
}

/// Positive integer within `[min, max]`.
///
/// Used for counts like trademark classes, directors or employees.
pub fn count_in_range(value: &str, label: &str, min: u32, max: u32) -> Option<String> {
    match value.trim().parse::<u32>() {
        Ok(n) if (min..=max).contains(&n) => None,
        _ => Some(format!("{} must be between {} and {}", label, min, max)),
    }
}

/// Parse a count that already passed [`count_in_range`].
///
/// Falls back to `min` so a stale value can never panic a handler.
pub fn parse_count(value: &str, min: u32) -> u32 {
    value.trim().parse::<u32>().unwrap_or(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required("", "Name").is_some());
        assert!(required("   ", "Name").is_some());
        assert!(required("Asha", "Name").is_none());
    }

    #[test]
    fn required_message_names_the_field() {
        assert_eq!(required("", "City").unwrap(), "City is required");
    }

    #[test]
    fn email_shapes() {
        assert!(email("asha@example.com").is_none());
        assert!(email("a.b@sub.example.co.in").is_none());
        assert!(email("").is_some());
        assert!(email("no-at-sign").is_some());
        assert!(email("two@@example.com").is_some());
        assert!(email("x@nodot").is_some());
        assert!(email("x@.com").is_some());
        assert!(email("x@example.com.").is_some());
        assert!(email("spaced name@example.com").is_some());
    }

    #[test]
    fn mobile_shapes() {
        assert!(mobile("9876543210").is_none());
        assert!(mobile("6000000000").is_none());
        assert!(mobile("5876543210").is_some());
        assert!(mobile("98765").is_some());
        assert!(mobile("98765432100").is_some());
        assert!(mobile("98765o3210").is_some());
        assert!(mobile("").is_some());
    }

    #[test]
    fn pincode_shapes() {
        assert!(pincode("560001").is_none());
        assert!(pincode("060001").is_some());
        assert!(pincode("5600").is_some());
        assert!(pincode("56000a").is_some());
    }

    #[test]
    fn pan_shapes() {
        assert!(pan("ABCDE1234F").is_none());
        assert!(pan("abcde1234f").is_some());
        assert!(pan("ABCD1234FF").is_some());
        assert!(pan("ABCDE1234").is_some());
        assert!(pan("").is_some());
    }

    #[test]
    fn count_bounds() {
        assert!(count_in_range("1", "Classes", 1, 45).is_none());
        assert!(count_in_range("45", "Classes", 1, 45).is_none());
        assert!(count_in_range("0", "Classes", 1, 45).is_some());
        assert!(count_in_range("46", "Classes", 1, 45).is_some());
        assert!(count_in_range("three", "Classes", 1, 45).is_some());
        assert!(count_in_range("", "Classes", 1, 45).is_some());
    }

    #[test]
    fn parse_count_never_panics() {
        assert_eq!(parse_count("7", 1), 7);
        assert_eq!(parse_count("junk", 2), 2);
        assert_eq!(parse_count("", 1), 1);
    }
}
