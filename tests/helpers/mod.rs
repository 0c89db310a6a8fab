//! Shared setup for router-level tests.

#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use boxline::{
    AppState, Config,
    config::{MapConfig, ObservabilityConfig, ServerConfig, SiteConfig, StatsConfig},
    stats::{Stat, StatSource, StatsCache, StatsError},
};
use boxline_notification::EmailConfig;
use boxline_shared::{EmailMessage, Mailer};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const CONTACT_ADDRESS: &str = "sales@boxline.localhost";

/// Records every message and fails for the listed recipients.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    failing: Arc<Vec<String>>,
}

impl RecordingMailer {
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
            anyhow::bail!("550 mailbox unavailable: {}", message.to);
        }

        Ok(())
    }
}

pub struct FixedStats(pub Option<Vec<Stat>>);

#[async_trait]
impl StatSource for FixedStats {
    async fn fetch(&self) -> Result<Vec<Stat>, StatsError> {
        self.0.clone().ok_or(StatsError::Empty)
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig::default(),
        email: EmailConfig {
            from_address: "hello@boxline.localhost".to_owned(),
            contact_address: CONTACT_ADDRESS.to_owned(),
            ..Default::default()
        },
        stats: StatsConfig::default(),
        map: MapConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app_with(mailer: RecordingMailer, stats: FixedStats) -> Router {
    let state = AppState::new(
        config(),
        Arc::new(mailer),
        StatsCache::new(stats, Duration::from_secs(60)),
    );

    boxline::app(state)
}

pub fn app(mailer: RecordingMailer) -> Router {
    app_with(mailer, FixedStats(None))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    read(get_response(app, uri).await).await
}

pub async fn get_response(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
    read(post_json_response(app, uri, body).await).await
}

pub async fn post_json_response(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn john() -> serde_json::Value {
    serde_json::json!({
        "firstName": "John",
        "lastName": "Smith",
        "company": "Acme",
        "email": "john@acme.com",
        "subject": "Quote",
        "message": "Please send pricing."
    })
}
