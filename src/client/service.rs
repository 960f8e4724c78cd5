use crate::client::{Client, ClientError};
use crate::option::FuncOption;
use crate::resource::Resource;
use std::marker::PhantomData;

/// 리소스 타입별 접근자 (Get/List/Index/Search/Count/Fields)
///
/// 모든 리소스가 같은 방식으로 조회되기 때문에 리소스의 엔드포인트와 응답 타입만 다르다.
/// 인자와 옵션은 요청을 보내기 전에 모두 검증된다.
pub struct Service<'a, R> {
    client: &'a Client,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> Service<'a, R> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Service {
            client,
            _resource: PhantomData,
        }
    }

    /// 아이디로 하나의 레코드를 조회한다.
    pub fn get(&self, id: i64, opts: Vec<FuncOption>) -> Result<R, ClientError> {
        if id < 0 {
            return Err(ClientError::NegativeId);
        }

        let options = self.client.build_options(opts)?;
        let url = self.client.endpoint_url(R::ENDPOINT, &id.to_string(), Some(&options))?;

        let records: Vec<R> = self.client.get(&url)?;
        records.into_iter()
            .next()
            .ok_or(ClientError::NoResults)
    }

    /// 여러 아이디의 레코드를 한 번에 조회한다.
    pub fn list(&self, ids: &[i64], opts: Vec<FuncOption>) -> Result<Vec<R>, ClientError> {
        if ids.is_empty() {
            return Err(ClientError::EmptyIds);
        }
        if ids.iter().any(|id| *id < 0) {
            return Err(ClientError::NegativeId);
        }

        let options = self.client.build_options(opts)?;
        let joined = ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = self.client.endpoint_url(R::ENDPOINT, &joined, Some(&options))?;

        self.client.get(&url)
    }

    /// 옵션 조건에 맞는 레코드 목록을 조회한다.
    pub fn index(&self, opts: Vec<FuncOption>) -> Result<Vec<R>, ClientError> {
        self.client.index_endpoint(R::ENDPOINT, opts)
    }

    /// 검색어로 레코드 목록을 조회한다.
    pub fn search(&self, query: &str, opts: Vec<FuncOption>) -> Result<Vec<R>, ClientError> {
        self.client.search_endpoint(R::ENDPOINT, query, opts)
    }

    /// 옵션 조건에 맞는 레코드 수
    pub fn count(&self, opts: Vec<FuncOption>) -> Result<i64, ClientError> {
        self.client.get_endpoint_count(R::ENDPOINT, opts)
    }

    /// 리소스의 필드 목록
    pub fn fields(&self) -> Result<Vec<String>, ClientError> {
        self.client.get_endpoint_field_list(R::ENDPOINT)
    }
}
