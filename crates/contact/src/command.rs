use boxline_shared::Mailer;

use crate::{ContactError, ContactInput, ContactSubmission};

#[derive(Clone)]
pub struct Command<M: Mailer> {
    mailer: M,
    contact_address: String,
}

impl<M: Mailer> Command<M> {
    pub fn new(mailer: M, contact_address: impl Into<String>) -> Self {
        Self {
            mailer,
            contact_address: contact_address.into(),
        }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Validate a contact form payload, then mail the operator and the
    /// visitor at the same time. Fails if either delivery fails.
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, input: ContactInput) -> crate::Result<()> {
        let submission = ContactSubmission::try_from(input)?;

        let (notification, acknowledgement) = submission
            .notification(&self.contact_address)
            .and_then(|notification| Ok((notification, submission.acknowledgement()?)))
            .inspect_err(|err| tracing::error!("Failed to render contact emails: {err}"))?;

        let (notified, acknowledged) = futures::join!(
            self.mailer.send(&notification),
            self.mailer.send(&acknowledgement)
        );

        if let Err(err) = &notified {
            tracing::error!(to = %notification.to, "Failed to send contact notification: {err:#}");
        }

        if let Err(err) = &acknowledged {
            tracing::error!(to = %acknowledgement.to, "Failed to send contact acknowledgement: {err:#}");
        }

        notified.and(acknowledged).map_err(ContactError::Delivery)?;

        tracing::info!(
            email = %submission.email,
            company = %submission.company,
            "Contact form submitted"
        );

        Ok(())
    }
}
