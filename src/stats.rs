//! Company figures shown on the home page, read through a TTL cache from a
//! spreadsheet-backed endpoint.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub suffix: String,
}

impl Stat {
    pub fn new(label: &str, value: &str, suffix: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
            suffix: suffix.to_owned(),
        }
    }
}

/// Served whenever the upstream sheet cannot be read.
pub fn fallback() -> Vec<Stat> {
    vec![
        Stat::new("Years in business", "25", "+"),
        Stat::new("Clients served", "1200", "+"),
        Stat::new("Countries reached", "40", "+"),
        Stat::new("Packaging waste reduced", "30", "%"),
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("no stats source configured")]
    NotConfigured,

    #[error("stats upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("stats upstream returned no usable rows")]
    Empty,
}

#[async_trait]
pub trait StatSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<Vec<Stat>, StatsError>;
}

/// Google Sheets `values` response: `{"values": [["Label","Value","Suffix"], ...]}`.
#[derive(Debug, Deserialize)]
struct SheetValues {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// First row is the header. Rows without a label and a value are dropped.
fn parse_rows(values: &[Vec<Value>]) -> Vec<Stat> {
    values
        .iter()
        .skip(1)
        .filter_map(|row| {
            let label = cell_text(row.first());
            let value = cell_text(row.get(1));

            if label.is_empty() || value.is_empty() {
                return None;
            }

            Some(Stat {
                label,
                value,
                suffix: cell_text(row.get(2)),
            })
        })
        .collect()
}

pub struct SheetSource {
    client: reqwest::Client,
    url: String,
}

impl SheetSource {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl StatSource for SheetSource {
    async fn fetch(&self) -> Result<Vec<Stat>, StatsError> {
        if self.url.is_empty() {
            return Err(StatsError::NotConfigured);
        }

        let sheet = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<SheetValues>()
            .await?;

        let stats = parse_rows(&sheet.values);
        if stats.is_empty() {
            return Err(StatsError::Empty);
        }

        Ok(stats)
    }
}

#[derive(Clone)]
pub struct StatsCache {
    source: Arc<dyn StatSource>,
    cache: Cache<(), Arc<Vec<Stat>>>,
}

impl StatsCache {
    pub fn new(source: impl StatSource, ttl: Duration) -> Self {
        Self {
            source: Arc::new(source),
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    /// Cached stats, or the fallback set when the upstream fails. Failures
    /// are not cached so the next request tries again.
    pub async fn get(&self) -> Arc<Vec<Stat>> {
        let source = self.source.clone();
        let result = self
            .cache
            .try_get_with((), async move { source.fetch().await.map(Arc::new) })
            .await;

        match result {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!("Serving fallback stats: {err}");
                Arc::new(fallback())
            }
        }
    }
}
