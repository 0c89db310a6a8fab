use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::ContactError;

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain part.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

/// Raw contact form payload as posted by the browser.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    #[validate(regex(path = *EMAIL_REGEX), email)]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<ContactInput> for ContactSubmission {
    type Error = ContactError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        let (
            Some(first_name),
            Some(last_name),
            Some(company),
            Some(email),
            Some(subject),
            Some(message),
        ) = (
            present(input.first_name),
            present(input.last_name),
            present(input.company),
            present(input.email),
            present(input.subject),
            present(input.message),
        )
        else {
            return Err(ContactError::MissingFields);
        };

        let submission = Self {
            first_name,
            last_name,
            company,
            email,
            subject,
            message,
        };

        submission
            .validate()
            .map_err(|_| ContactError::InvalidEmail)?;

        Ok(submission)
    }
}
