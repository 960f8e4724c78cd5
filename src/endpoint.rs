use crate::client::{Client, ClientError};
use crate::option::{FuncOption, OptionError};
use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// 서비스에서 제공하는 엔드포인트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Character,
    Collection,
    Company,
    Credit,
    Engine,
    Feed,
    Franchise,
    Game,
    GameMode,
    Genre,
    Keyword,
    Page,
    PageLogo,
    Person,
    Platform,
    Perspective,
    Pulse,
    PulseGroup,
    PulseSource,
    ReleaseDate,
    Review,
    ReviewVideo,
    Theme,
    Title,
    Version,
}

impl Endpoint {
    pub const ALL: [Endpoint; 25] = [
        Endpoint::Character,
        Endpoint::Collection,
        Endpoint::Company,
        Endpoint::Credit,
        Endpoint::Engine,
        Endpoint::Feed,
        Endpoint::Franchise,
        Endpoint::Game,
        Endpoint::GameMode,
        Endpoint::Genre,
        Endpoint::Keyword,
        Endpoint::Page,
        Endpoint::PageLogo,
        Endpoint::Person,
        Endpoint::Platform,
        Endpoint::Perspective,
        Endpoint::Pulse,
        Endpoint::PulseGroup,
        Endpoint::PulseSource,
        Endpoint::ReleaseDate,
        Endpoint::Review,
        Endpoint::ReviewVideo,
        Endpoint::Theme,
        Endpoint::Title,
        Endpoint::Version,
    ];

    /// 루트 주소 뒤에 붙는 경로, 항상 `/`로 끝난다.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Character => "characters/",
            Endpoint::Collection => "collections/",
            Endpoint::Company => "companies/",
            Endpoint::Credit => "credits/",
            Endpoint::Engine => "game_engines/",
            Endpoint::Feed => "feeds/",
            Endpoint::Franchise => "franchises/",
            Endpoint::Game => "games/",
            Endpoint::GameMode => "game_modes/",
            Endpoint::Genre => "genres/",
            Endpoint::Keyword => "keywords/",
            Endpoint::Page => "pages/",
            Endpoint::PageLogo => "page_logos/",
            Endpoint::Person => "people/",
            Endpoint::Platform => "platforms/",
            Endpoint::Perspective => "player_perspectives/",
            Endpoint::Pulse => "pulses/",
            Endpoint::PulseGroup => "pulse_groups/",
            Endpoint::PulseSource => "pulse_sources/",
            Endpoint::ReleaseDate => "release_dates/",
            Endpoint::Review => "reviews/",
            Endpoint::ReviewVideo => "review_videos/",
            Endpoint::Theme => "themes/",
            Endpoint::Title => "titles/",
            Endpoint::Version => "game_versions/",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().trim_end_matches('/'))
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = OptionError;

    /// `games`, `games/` 처럼 경로 이름으로 엔드포인트를 찾는다.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let name = value.trim().trim_end_matches('/').to_lowercase();
        Endpoint::ALL.iter()
            .find(|end| end.path().trim_end_matches('/') == name)
            .copied()
            .ok_or_else(|| OptionError::UnknownToken(value.to_owned()))
    }
}

/// 엔드포인트의 레코드 수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Count {
    pub count: i64,
}

impl Client {
    /// 엔드포인트에서 제공하는 데이터 모델의 필드 목록을 조회한다.
    /// 결과가 없으면 에러 대신 빈 목록을 반환한다.
    pub fn get_endpoint_field_list(&self, end: Endpoint) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint_url(end, "meta", None)?;

        match self.get::<Vec<String>>(&url) {
            Ok(fields) => Ok(fields),
            Err(ClientError::NoResults) => {
                debug!("{} 엔드포인트의 필드 목록이 비어 있습니다.", end);
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// 옵션 조건에 맞는 엔드포인트의 레코드 수를 조회한다.
    pub fn get_endpoint_count(&self, end: Endpoint, opts: Vec<FuncOption>) -> Result<i64, ClientError> {
        let options = self.build_options(opts)?;
        let url = self.endpoint_url(end, "count", Some(&options))?;

        let count: Count = self.get(&url)?;
        Ok(count.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_end_with_slash() {
        for end in Endpoint::ALL {
            assert!(end.path().ends_with('/'), "{:?}", end);
        }
    }

    #[test]
    fn parse_from_name() {
        assert_eq!(Endpoint::try_from("games"), Ok(Endpoint::Game));
        assert_eq!(Endpoint::try_from("page_logos/"), Ok(Endpoint::PageLogo));
        assert_eq!(Endpoint::try_from("Player_Perspectives"), Ok(Endpoint::Perspective));
        assert_eq!(Endpoint::try_from("consoles"), Err(OptionError::UnknownToken("consoles".to_owned())));
    }

    #[test]
    fn display_is_name_round_trip() {
        for end in Endpoint::ALL {
            assert_eq!(Endpoint::try_from(end.to_string().as_str()), Ok(end));
        }
    }
}
