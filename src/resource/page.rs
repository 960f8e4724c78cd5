use crate::endpoint::Endpoint;
use crate::resource::Resource;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;

/// 개인, 회사, 게임의 소개 페이지
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Page {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub category: Option<i32>,
    pub sub_category: Option<i32>,
    pub country: Option<i32>,
    /// 페이지 대표 색상
    pub color: Option<i32>,
    pub page_logo: Option<i64>,
    pub game: Option<i64>,
    pub company: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Page {
    const ENDPOINT: Endpoint = Endpoint::Page;
}

/// 페이지 로고 이미지
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PageLogo {
    pub id: i64,
    pub alpha_channel: bool,
    pub animated: bool,
    pub image_id: String,
    pub url: String,
    pub width: i32,
    pub height: i32,
}

impl Resource for PageLogo {
    const ENDPOINT: Endpoint = Endpoint::PageLogo;
}
