#![allow(dead_code)]

use igdb::client::{HttpResponse, Transport, Url};
use igdb::{Client, ClientError};
use std::cell::RefCell;
use std::rc::Rc;

pub const ROOT_URL: &str = "https://api.example.com/";

pub const EMPTY: &str = "";
pub const EMPTY_ARRAY: &str = "[]";

/// 요청된 URL을 기록하고 항상 같은 응답을 돌려주는 전송 계층
pub struct StubTransport {
    response: HttpResponse,
    requests: Rc<RefCell<Vec<String>>>,
}

impl Transport for StubTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, ClientError> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.response.clone())
    }
}

pub fn client_with(status: u16, body: &str) -> (Client, Rc<RefCell<Vec<String>>>) {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let transport = StubTransport {
        response: HttpResponse::new(status, body),
        requests: requests.clone(),
    };

    let client = Client::with_transport(ROOT_URL, transport).unwrap();
    (client, requests)
}

pub fn client(body: &str) -> Client {
    client_with(200, body).0
}

/// 응답 본문의 해석 에러 메시지는 비교하지 않는다.
pub fn assert_result<T: PartialEq + std::fmt::Debug>(name: &str, actual: Result<T, ClientError>, expected: Result<T, ClientError>) {
    match (actual, expected) {
        (Err(ClientError::InvalidJson(_)), Err(ClientError::InvalidJson(_))) => {}
        (actual, expected) => pretty_assertions::assert_eq!(actual, expected, "{}", name),
    }
}
