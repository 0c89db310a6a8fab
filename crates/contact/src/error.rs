#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Failed to send email")]
    Delivery(#[source] anyhow::Error),
}

impl ContactError {
    /// Input errors are the caller's fault and carry no server-side cause.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingFields | Self::InvalidEmail)
    }
}

impl From<askama::Error> for ContactError {
    fn from(value: askama::Error) -> Self {
        Self::Delivery(value.into())
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
