use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;
use thiserror::Error;

/// A contact form submission exactly as entered by the visitor.
///
/// Fields that were not sent at all are represented by an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Returns `true` if none of the four fields is empty.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }
}

/// The outcome of a submission as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionResult {
    pub success: bool,
    pub message: String,
}

impl ContactSubmissionResult {
    pub fn accepted(name: &str, email: &ContactEmailAddress) -> Self {
        Self {
            success: true,
            message: format!(
                "Thank you {name}! Your message has been received. I'll get back to you soon at \
                 {email}."
            ),
        }
    }

    pub fn rejected(error: ContactSubmissionError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }
}

impl From<ContactSubmissionError> for ContactSubmissionResult {
    fn from(value: ContactSubmissionError) -> Self {
        Self::rejected(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactSubmissionError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
}

/// An email address of the shape `local@domain.tld`.
///
/// Deliberately permissive: any run of characters other than whitespace and
/// `@` is accepted for each of the three parts.
#[nutype(
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactEmailAddress(String);

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{BROWSER_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

/// The characters matched by `\s` in browser regular expressions. Differs
/// from Unicode `White_Space`: includes U+FEFF, excludes U+0085.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// The diagnostic record kept for every accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionRecord {
    pub name: String,
    pub email: ContactEmailAddress,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn complete_submission() {
        assert!(submission().is_complete());
    }

    #[test]
    fn incomplete_submission() {
        let setters: [fn(&mut ContactSubmission); 4] = [
            |s| s.name.clear(),
            |s| s.email.clear(),
            |s| s.subject.clear(),
            |s| s.message.clear(),
        ];
        for clear in setters {
            let mut submission = submission();
            clear(&mut submission);
            assert!(!submission.is_complete(), "{submission:?}");
        }
        assert!(!ContactSubmission::default().is_complete());
    }

    #[test]
    fn whitespace_only_fields_count_as_present() {
        let submission = ContactSubmission {
            name: " ".into(),
            ..submission()
        };
        assert!(submission.is_complete());
    }

    #[test]
    fn valid_email_addresses() {
        for email in [
            "jo@example.com",
            "a@b.c",
            "first.last+tag@sub.example.co.uk",
            "JO@EXAMPLE.COM",
            "x@y..z",
            "user@[127.0.0.1].x",
            "jo@exa\u{85}mple.com",
        ] {
            assert!(ContactEmailAddress::try_new(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn invalid_email_addresses() {
        for email in [
            "not-an-email",
            "jo@example",
            "@example.com",
            "jo@.com",
            "jo@example.",
            "jo@@example.com",
            "jo@exa@mple.com",
            "jo @example.com",
            "jo@example.com ",
            " jo@example.com",
            "jo@exam\tple.com",
            "jo@exa\u{feff}mple.com",
            "jo@exa\u{a0}mple.com",
            "jo\u{2028}x@example.com",
            "jo@example.c\u{3000}om",
            "\"jo doe\"@example.com",
            "",
        ] {
            assert!(ContactEmailAddress::try_new(email).is_err(), "{email:?}");
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ContactSubmissionError::MissingField.to_string(),
            "All fields are required."
        );
        assert_eq!(
            ContactSubmissionError::InvalidEmailFormat.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn accepted_result_interpolates_name_and_email() {
        let email = ContactEmailAddress::try_new("jo@example.com").unwrap();
        assert_eq!(
            ContactSubmissionResult::accepted("Jo", &email),
            ContactSubmissionResult {
                success: true,
                message: "Thank you Jo! Your message has been received. I'll get back to you \
                          soon at jo@example.com."
                    .into(),
            }
        );
    }

    #[test]
    fn rejected_result() {
        assert_eq!(
            ContactSubmissionResult::from(ContactSubmissionError::InvalidEmailFormat),
            ContactSubmissionResult {
                success: false,
                message: "Please enter a valid email address.".into(),
            }
        );
    }

    #[test]
    fn email_deserialization_is_validated() {
        let ok = serde_json::from_value::<ContactEmailAddress>("jo@example.com".into());
        assert_eq!(ok.unwrap().as_str(), "jo@example.com");

        let err = serde_json::from_value::<ContactEmailAddress>("nope".into());
        assert!(err.is_err());
    }
}
