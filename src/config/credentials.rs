//! Secret handling for credentials typed into the welcome screen.
//!
//! API keys and the sign-up token pass through logs and render paths;
//! these helpers keep the raw value out of both.

const MASK: &str = "••••••••";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when it has to leave the process.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString({MASK})")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{MASK}")
    }
}

/// Render form for a secret field: one bullet per character, capped, plus
/// the last four characters once the value is long enough to keep them
/// anonymous.
pub fn mask_for_display(value: &str) -> String {
    let count = value.chars().count();
    if count == 0 {
        return String::new();
    }
    if count < 12 {
        return "•".repeat(count);
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("{}{}", "•".repeat(8), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains(MASK));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));
        assert!(display_output.contains(MASK));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn mask_short_values_fully() {
        assert_eq!(mask_for_display(""), "");
        assert_eq!(mask_for_display("abc"), "•••");
    }

    #[test]
    fn mask_long_values_keeps_tail() {
        let masked = mask_for_display("sk-ant-0123456789abcd");
        assert!(masked.ends_with("abcd"));
        assert!(!masked.contains("sk-ant"));
    }
}
