use crate::endpoint::Endpoint;
use crate::resource::Resource;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;

/// 사용자 리뷰
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub url: String,
    pub game: i64,
    pub platform: Option<i64>,
    pub category: Option<i32>,
    /// 작성자 아이디
    pub user: Option<i64>,
    /// 작성자가 준 평점
    pub user_rating: Option<i64>,
    pub introduction: Option<String>,
    pub content: Option<String>,
    pub conclusion: Option<String>,
    pub positive_points: Option<String>,
    pub negative_points: Option<String>,
    pub views: Option<i32>,
    pub likes: Option<i32>,
    /// 리뷰 영상
    pub video: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Review {
    const ENDPOINT: Endpoint = Endpoint::Review;
}

/// 리뷰에 첨부된 영상
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ReviewVideo {
    pub id: i64,
    /// 신뢰할 수 있는 출처의 영상인지 여부
    pub trusted: bool,
    pub url: String,
}

impl Resource for ReviewVideo {
    const ENDPOINT: Endpoint = Endpoint::ReviewVideo;
}
