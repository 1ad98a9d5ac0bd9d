use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParticipantError {
    #[error("name cannot be empty")]
    MissingName,

    #[error("email cannot be empty")]
    MissingEmail,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// The player taking the quiz, as collected on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    email: String,
}

impl Participant {
    /// Trim and validate the player's details.
    ///
    /// # Errors
    ///
    /// Returns `ParticipantError::MissingName` or `ParticipantError::MissingEmail`
    /// for blank input, and `ParticipantError::InvalidEmail` when the email does
    /// not look like `local@domain.tld`.
    pub fn new(name: &str, email: &str) -> Result<Self, ParticipantError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(ParticipantError::MissingName);
        }
        if email.is_empty() {
            return Err(ParticipantError::MissingEmail);
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ParticipantError::InvalidEmail(email.to_owned()));
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_details() {
        let p = Participant::new("  Ada ", " ada@example.com ").unwrap();
        assert_eq!(p.name(), "Ada");
        assert_eq!(p.email(), "ada@example.com");
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            Participant::new("", "a@b.co").unwrap_err(),
            ParticipantError::MissingName
        );
        assert_eq!(
            Participant::new("Ada", "   ").unwrap_err(),
            ParticipantError::MissingEmail
        );
    }

    #[test]
    fn email_pattern_matches_plain_address() {
        assert!(EMAIL_PATTERN.is_match("grace@navy.mil"));
        assert!(!EMAIL_PATTERN.is_match("grace@navy"));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ada", "ada@example", "a da@example.com", "@example.com"] {
            assert!(
                matches!(
                    Participant::new("Ada", email),
                    Err(ParticipantError::InvalidEmail(_))
                ),
                "{email} should be rejected"
            );
        }
    }
}
