use crate::client::ClientError;
use reqwest::blocking;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;
use std::time::Duration;

/// API 요청의 기본 타임아웃 시간(초)
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// 인증 키를 전달하는 헤더 이름
const API_KEY_HEADER: &str = "user-key";

/// GET 요청의 응답
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 전송 계층
///
/// 클라이언트는 GET 요청을 보내고 상태 코드와 본문을 받는 것 외에는 전송 계층에 의존하지 않는다.
/// 재시도, 타임아웃, 취소는 구현체가 책임진다.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<HttpResponse, ClientError>;
}

/// reqwest blocking 클라이언트를 사용하는 전송 계층
pub struct ReqwestTransport {
    client: blocking::Client,
}

impl ReqwestTransport {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| ClientError::InvalidCredentials(e.to_string()))?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::RequestFailed(format!("클라이언트 생성 실패: {}", e)))?;

        Ok(ReqwestTransport { client })
    }

    pub fn with_default_timeout(api_key: &str) -> Result<Self, ClientError> {
        Self::new(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, ClientError> {
        let response = self.client.get(url.clone())
            .send()
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text()
            .map_err(|e| ClientError::ResponseTextExtractionFailed(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}
