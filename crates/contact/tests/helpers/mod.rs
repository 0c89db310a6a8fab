use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use boxline_contact::ContactInput;
use boxline_shared::{EmailMessage, Mailer};

pub const CONTACT_ADDRESS: &str = "sales@boxline.localhost";

/// Records every message and fails for the listed recipients.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<EmailMessage>>>,
    pub failing: Arc<Vec<String>>,
}

impl RecordingMailer {
    #[allow(dead_code)]
    pub fn failing_for(recipient: impl Into<String>) -> Self {
        Self {
            failing: Arc::new(vec![recipient.into()]),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(message.clone());

        if self.failing.contains(&message.to) {
            anyhow::bail!("relay rejected {}", message.to);
        }

        Ok(())
    }
}

pub fn command(mailer: RecordingMailer) -> boxline_contact::Command<RecordingMailer> {
    boxline_contact::Command::new(mailer, CONTACT_ADDRESS)
}

pub fn john() -> ContactInput {
    serde_json::from_value(serde_json::json!({
        "firstName": "John",
        "lastName": "Smith",
        "company": "Acme",
        "email": "john@acme.com",
        "subject": "Quote",
        "message": "Please send pricing."
    }))
    .unwrap()
}
