use askama::Template;
use boxline_shared::EmailMessage;

use crate::ContactSubmission;

#[derive(Template)]
#[template(path = "emails/notification.html")]
struct NotificationHtmlTemplate<'a> {
    submission: &'a ContactSubmission,
}

#[derive(Template)]
#[template(path = "emails/notification.txt")]
struct NotificationTextTemplate<'a> {
    submission: &'a ContactSubmission,
}

#[derive(Template)]
#[template(path = "emails/acknowledgement.html")]
struct AcknowledgementHtmlTemplate<'a> {
    submission: &'a ContactSubmission,
}

#[derive(Template)]
#[template(path = "emails/acknowledgement.txt")]
struct AcknowledgementTextTemplate<'a> {
    submission: &'a ContactSubmission,
}

impl ContactSubmission {
    /// Copy for the operator inbox. Replies go straight to the visitor.
    pub fn notification(&self, contact_address: &str) -> Result<EmailMessage, askama::Error> {
        let html = NotificationHtmlTemplate { submission: self }.render()?;
        let plain = NotificationTextTemplate { submission: self }.render()?;

        Ok(EmailMessage::new(
            contact_address,
            format!("New contact form submission: {}", self.subject),
            html,
            plain,
        )
        .reply_to(&self.email))
    }

    /// Confirmation sent back to the visitor.
    pub fn acknowledgement(&self) -> Result<EmailMessage, askama::Error> {
        let html = AcknowledgementHtmlTemplate { submission: self }.render()?;
        let plain = AcknowledgementTextTemplate { submission: self }.render()?;

        Ok(EmailMessage::new(
            &self.email,
            format!("We received your message: {}", self.subject),
            html,
            plain,
        ))
    }
}
