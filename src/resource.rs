use crate::endpoint::Endpoint;
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod company;
mod game;
mod page;
mod platform;
mod pulse;
mod review;

pub use company::{Character, Company, Person, Title};
pub use game::{Collection, Engine, Franchise, Game, GameMode, GameVideo, Genre, Keyword, Perspective, ReleaseDate, Theme, Website};
pub use page::{Page, PageLogo};
pub use platform::Platform;
pub use pulse::Pulse;
pub use review::{Review, ReviewVideo};

/// 엔드포인트에서 조회되는 레코드
///
/// 응답 JSON 객체 하나가 레코드 하나로 해석된다.
pub trait Resource: DeserializeOwned {
    const ENDPOINT: Endpoint;
}

/// 이미지 정보 (표지, 로고, 스크린샷 등)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub cloudinary_id: String,
    pub width: i32,
    pub height: i32,
}
