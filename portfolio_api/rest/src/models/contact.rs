use portfolio_models::contact::{ContactSubmission, ContactSubmissionResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Contact form fields. Fields missing from the request or set to `null` are
/// read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    /// Full name of the visitor
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Email address to reply to
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// Subject of the message
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    /// Content of the message
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactSubmissionResult {
    pub success: bool,
    pub message: String,
}

impl From<ContactSubmissionResult> for ApiContactSubmissionResult {
    fn from(value: ContactSubmissionResult) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}
