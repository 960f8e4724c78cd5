pub mod transport;
pub mod service;

use crate::configs::Config;
use crate::endpoint::Endpoint;
use crate::option::{FuncOption, OptionError, OptionSet, DEFAULT_OFFSET_BOUND};
use crate::resource::*;
pub use reqwest::Url;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::{debug, warn};

pub use service::Service;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

/// 서비스 기본 주소
pub const DEFAULT_ROOT_URL: &str = "https://api-endpoint.igdb.com/";

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    InvalidBaseUrl,
    InvalidCredentials(String),

    /// 음수 아이디가 입력됨
    NegativeId,

    /// 아이디 목록이 비어 있음
    EmptyIds,

    /// 하나 이상의 결과를 기대했으나 빈 결과를 받음
    NoResults,

    /// 응답 본문을 기대한 형태로 해석할 수 없음
    InvalidJson(String),

    /// 요청 옵션 검증 실패
    Option(OptionError),

    RequestFailed(String),
    ResponseTextExtractionFailed(String),

    /// 서비스가 성공이 아닌 상태 코드로 응답함
    ServerError { status: u16, message: String },
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidBaseUrl => write!(f, "invalid base url"),
            ClientError::InvalidCredentials(message) => write!(f, "invalid credentials, {}", message),
            ClientError::NegativeId => write!(f, "id must be a non-negative number"),
            ClientError::EmptyIds => write!(f, "at least one id is required"),
            ClientError::NoResults => write!(f, "results are empty"),
            ClientError::InvalidJson(message) => write!(f, "invalid json response, {}", message),
            ClientError::Option(err) => write!(f, "invalid option, {}", err),
            ClientError::RequestFailed(message) => write!(f, "request failed, {}", message),
            ClientError::ResponseTextExtractionFailed(message) => write!(f, "cannot read response body, {}", message),
            ClientError::ServerError { status, message } => write!(f, "server error ({}), {}", status, message),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<OptionError> for ClientError {
    fn from(err: OptionError) -> Self {
        ClientError::Option(err)
    }
}

/// 게임 데이터베이스 API 클라이언트
pub struct Client {
    root_url: String,
    offset_bound: i32,
    transport: Box<dyn Transport>,
}

impl Client {
    /// 기본 주소와 reqwest 전송 계층으로 클라이언트를 생성한다.
    pub fn new(api_key: &str) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::with_default_timeout(api_key)?;
        Self::with_transport(DEFAULT_ROOT_URL, transport)
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(
            config.api_key(),
            Duration::from_secs(config.timeout_seconds()),
        )?;

        Ok(Self::with_transport(config.root_url(), transport)?
            .set_offset_bound(config.offset_bound()))
    }

    /// 전송 계층을 직접 지정하여 클라이언트를 생성한다.
    pub fn with_transport(root_url: &str, transport: impl Transport + 'static) -> Result<Self, ClientError> {
        let mut root_url = Url::parse(root_url)
            .map_err(|_| ClientError::InvalidBaseUrl)?
            .to_string();
        if !root_url.ends_with('/') {
            root_url.push('/');
        }

        Ok(Client {
            root_url,
            offset_bound: DEFAULT_OFFSET_BOUND,
            transport: Box::new(transport),
        })
    }

    pub fn set_offset_bound(mut self, bound: i32) -> Self {
        self.offset_bound = bound;
        self
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn offset_bound(&self) -> i32 {
        self.offset_bound
    }

    /// 리소스 타입에 해당하는 접근자를 반환한다.
    pub fn service<R: Resource>(&self) -> Service<'_, R> {
        Service::new(self)
    }

    pub fn characters(&self) -> Service<'_, Character> { self.service() }
    pub fn collections(&self) -> Service<'_, Collection> { self.service() }
    pub fn companies(&self) -> Service<'_, Company> { self.service() }
    pub fn engines(&self) -> Service<'_, Engine> { self.service() }
    pub fn franchises(&self) -> Service<'_, Franchise> { self.service() }
    pub fn games(&self) -> Service<'_, Game> { self.service() }
    pub fn game_modes(&self) -> Service<'_, GameMode> { self.service() }
    pub fn genres(&self) -> Service<'_, Genre> { self.service() }
    pub fn keywords(&self) -> Service<'_, Keyword> { self.service() }
    pub fn pages(&self) -> Service<'_, Page> { self.service() }
    pub fn page_logos(&self) -> Service<'_, PageLogo> { self.service() }
    pub fn people(&self) -> Service<'_, Person> { self.service() }
    pub fn perspectives(&self) -> Service<'_, Perspective> { self.service() }
    pub fn platforms(&self) -> Service<'_, Platform> { self.service() }
    pub fn pulses(&self) -> Service<'_, Pulse> { self.service() }
    pub fn release_dates(&self) -> Service<'_, ReleaseDate> { self.service() }
    pub fn reviews(&self) -> Service<'_, Review> { self.service() }
    pub fn review_videos(&self) -> Service<'_, ReviewVideo> { self.service() }
    pub fn themes(&self) -> Service<'_, Theme> { self.service() }
    pub fn titles(&self) -> Service<'_, Title> { self.service() }

    /// 엔드포인트의 목록을 원하는 타입으로 조회한다.
    pub fn index_endpoint<T: DeserializeOwned>(&self, end: Endpoint, opts: Vec<FuncOption>) -> Result<Vec<T>, ClientError> {
        let options = self.build_options(opts)?;
        let url = self.endpoint_url(end, "", Some(&options))?;
        self.get(&url)
    }

    /// 엔드포인트에서 검색어로 목록을 조회한다.
    pub fn search_endpoint<T: DeserializeOwned>(&self, end: Endpoint, query: &str, mut opts: Vec<FuncOption>) -> Result<Vec<T>, ClientError> {
        opts.insert(0, crate::option::search(query));
        self.index_endpoint(end, opts)
    }

    pub(crate) fn build_options(&self, opts: Vec<FuncOption>) -> Result<OptionSet, ClientError> {
        Ok(OptionSet::with_offset_bound(self.offset_bound, opts)?)
    }

    /// `{root}{endpoint}{suffix}?{query}` 형태의 URL을 만든다.
    pub(crate) fn endpoint_url(&self, end: Endpoint, suffix: &str, options: Option<&OptionSet>) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}{}", self.root_url, end.path(), suffix))
            .map_err(|_| ClientError::InvalidBaseUrl)?;

        if let Some(options) = options {
            options.append_to(&mut url);
        }

        Ok(url)
    }

    /// GET 요청을 보내고 응답 본문을 `T`로 해석한다.
    pub(crate) fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ClientError> {
        debug!("GET {}", url);

        let response = self.transport.get(url)?;
        if !response.is_success() {
            warn!("요청이 실패 하였습니다. => {} (URL: {})", response.status(), url);
            return Err(ClientError::ServerError {
                status: response.status(),
                message: response.body().to_owned(),
            });
        }

        decode(response.body())
    }
}

/// 빈 배열은 [`ClientError::NoResults`]로, 해석할 수 없는 본문은 [`ClientError::InvalidJson`]으로 변환한다.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    if let Ok(items) = serde_json::from_str::<Vec<IgnoredAny>>(body) {
        if items.is_empty() {
            return Err(ClientError::NoResults);
        }
    }

    serde_json::from_str(body).map_err(|e| {
        warn!("응답을 해석할 수 없습니다. => {}", e);
        ClientError::InvalidJson(e.to_string())
    })
}
