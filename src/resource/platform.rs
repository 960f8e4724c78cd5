use crate::endpoint::Endpoint;
use crate::resource::{Image, Resource};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub alternative_name: Option<String>,
    pub summary: Option<String>,
    pub generation: Option<i32>,
    pub category: Option<i32>,
    pub website: Option<String>,
    pub logo: Option<Image>,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Platform {
    const ENDPOINT: Endpoint = Endpoint::Platform;
}
