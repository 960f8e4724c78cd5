use crate::endpoint::Endpoint;
use crate::resource::{Image, Resource};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;

/// 게임 개발사, 배급사
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    /// ISO 3166-1 국가 코드
    pub country: Option<i32>,
    pub website: Option<String>,
    pub logo: Option<Image>,
    /// 모회사
    pub parent: Option<i64>,
    /// 개발한 게임
    pub developed: Vec<i64>,
    /// 배급한 게임
    pub published: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Company {
    const ENDPOINT: Endpoint = Endpoint::Company;
}

/// 게임 제작에 참여한 사람
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub gender: Option<i32>,
    pub country: Option<i32>,
    pub mug_shot: Option<Image>,
    pub games: Vec<i64>,
    pub characters: Vec<i64>,
    /// 생년월일
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub dob: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Person {
    const ENDPOINT: Endpoint = Endpoint::Person;
}

/// 게임 등장 인물
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub akas: Vec<String>,
    pub gender: Option<i32>,
    pub species: Option<i32>,
    pub mug_shot: Option<Image>,
    /// 캐릭터를 연기한 사람
    pub people: Vec<i64>,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Character {
    const ENDPOINT: Endpoint = Endpoint::Character;
}

/// 직함 (디렉터, 작곡가 등)
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Title {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub games: Vec<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Title {
    const ENDPOINT: Endpoint = Endpoint::Title;
}
