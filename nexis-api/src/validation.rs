//! Email and password format checks shared by the login and registration forms.

use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("lowercase pattern is valid"));
static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern is valid"));
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));
static SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[!@#$%^\&*()_+{}\[\]:;"'<>,.?\~`\-]"#).expect("symbol pattern is valid")
});
static ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[A-Za-z0-9!@#$%^\&*()_+{}\[\]:;"'<>,.?\~`\-]*$"#)
        .expect("allowed characters pattern is valid")
});

/// A password rule that was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordIssue {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password may only contain letters, digits and the symbols !@#$%^&*()_+{{}}[]:;\"'<>,.?~`-")]
    DisallowedCharacter,
    #[error("Password must contain a lowercase letter")]
    MissingLowercase,
    #[error("Password must contain an uppercase letter")]
    MissingUppercase,
    #[error("Password must contain a digit")]
    MissingDigit,
    #[error("Password must contain a symbol")]
    MissingSymbol,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password_issues(password).is_empty()
}

/// Lists every rule `password` breaks, in form display order.
pub fn password_issues(password: &str) -> Vec<PasswordIssue> {
    let mut issues = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        issues.push(PasswordIssue::TooShort);
    }
    if !ALLOWED.is_match(password) {
        issues.push(PasswordIssue::DisallowedCharacter);
    }
    if !LOWERCASE.is_match(password) {
        issues.push(PasswordIssue::MissingLowercase);
    }
    if !UPPERCASE.is_match(password) {
        issues.push(PasswordIssue::MissingUppercase);
    }
    if !DIGIT.is_match(password) {
        issues.push(PasswordIssue::MissingDigit);
    }
    if !SYMBOL.is_match(password) {
        issues.push(PasswordIssue::MissingSymbol);
    }
    issues
}
