use crate::endpoint::Endpoint;
use crate::resource::{Image, Resource};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;

/// 게임 관련 뉴스 기사
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Pulse {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub url: String,
    pub author: Option<String>,
    pub image: Option<Image>,
    /// 기사 출처
    pub pulse_source: Option<i64>,
    pub tags: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Pulse {
    const ENDPOINT: Endpoint = Endpoint::Pulse;
}
