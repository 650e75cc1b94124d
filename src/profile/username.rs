use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.]{3,20}$").expect("username regex is valid"));

pub fn check_format(raw: &str) -> Result<&str, ValidationError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }

    if !USERNAME_RE.is_match(username) {
        return Err(ValidationError::Format);
    }

    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_before_checking() {
        assert_eq!(check_format("  giulia_87 "), Ok("giulia_87"));
    }

    #[test]
    fn blank_is_empty_username() {
        assert_eq!(check_format(""), Err(ValidationError::EmptyUsername));
        assert_eq!(check_format("   "), Err(ValidationError::EmptyUsername));
    }

    #[test]
    fn enforces_length_bounds() {
        assert_eq!(check_format("ab"), Err(ValidationError::Format));
        assert_eq!(check_format("abc"), Ok("abc"));
        assert_eq!(check_format(&"a".repeat(20)), Ok("a".repeat(20).as_str()));
        assert_eq!(check_format(&"a".repeat(21)), Err(ValidationError::Format));
    }

    #[test]
    fn enforces_charset() {
        assert_eq!(check_format("mario.rossi_1"), Ok("mario.rossi_1"));
        assert_eq!(check_format("mario rossi"), Err(ValidationError::Format));
        assert_eq!(check_format("mario-rossi"), Err(ValidationError::Format));
        assert_eq!(check_format("niccolò"), Err(ValidationError::Format));
    }
}
