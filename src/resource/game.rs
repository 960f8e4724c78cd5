use crate::endpoint::Endpoint;
use crate::resource::{Image, Resource};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;

/// 게임
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub summary: Option<String>,
    pub storyline: Option<String>,
    /// 속한 컬렉션(시리즈)
    pub collection: Option<i64>,
    /// 대표 프랜차이즈
    pub franchise: Option<i64>,
    pub franchises: Vec<i64>,
    /// DLC, 확장팩 등의 원본 게임
    pub game: Option<i64>,
    pub hypes: Option<i32>,
    pub popularity: Option<f64>,
    /// 사용자 평점 (0 ~ 100)
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    /// 평론가 평점 (0 ~ 100)
    pub aggregated_rating: Option<f64>,
    pub aggregated_rating_count: Option<i32>,
    pub total_rating: Option<f64>,
    pub total_rating_count: Option<i32>,
    pub category: Option<i32>,
    pub status: Option<i32>,
    pub developers: Vec<i64>,
    pub publishers: Vec<i64>,
    pub game_engines: Vec<i64>,
    pub game_modes: Vec<i64>,
    pub genres: Vec<i64>,
    pub themes: Vec<i64>,
    pub keywords: Vec<i64>,
    pub player_perspectives: Vec<i64>,
    pub platforms: Vec<i64>,
    pub cover: Option<Image>,
    pub screenshots: Vec<Image>,
    pub artworks: Vec<Image>,
    pub videos: Vec<GameVideo>,
    pub websites: Vec<Website>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub first_release_date: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Game {
    const ENDPOINT: Endpoint = Endpoint::Game;
}

/// 게임 영상, `video_id`는 영상 서비스의 아이디
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GameVideo {
    pub name: String,
    pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Website {
    pub category: i32,
    pub url: String,
}

/// 게임 모드 (싱글 플레이어, 멀티 플레이어 등)
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameMode {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for GameMode {
    const ENDPOINT: Endpoint = Endpoint::GameMode;
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Genre {
    const ENDPOINT: Endpoint = Endpoint::Genre;
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Theme {
    const ENDPOINT: Endpoint = Endpoint::Theme;
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Keyword {
    const ENDPOINT: Endpoint = Endpoint::Keyword;
}

/// 플레이어 시점 (1인칭, 3인칭, 탑뷰 등)
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Perspective {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Perspective {
    const ENDPOINT: Endpoint = Endpoint::Perspective;
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Franchise {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Franchise {
    const ENDPOINT: Endpoint = Endpoint::Franchise;
}

/// 게임 시리즈
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Collection {
    const ENDPOINT: Endpoint = Endpoint::Collection;
}

/// 게임 엔진
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Engine {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub logo: Option<Image>,
    pub companies: Vec<i64>,
    pub platforms: Vec<i64>,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Engine {
    const ENDPOINT: Endpoint = Endpoint::Engine;
}

/// 플랫폼, 지역별 출시일
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    pub id: i64,
    pub game: i64,
    pub platform: i64,
    pub category: i32,
    pub region: Option<i32>,
    /// 사람이 읽을 수 있는 형태의 출시일 (예: "2015-May-19", "Q4 2018")
    pub human: String,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub date: Option<DateTime<Utc>>,
    pub y: Option<i32>,
    pub m: Option<i32>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for ReleaseDate {
    const ENDPOINT: Endpoint = Endpoint::ReleaseDate;
}
