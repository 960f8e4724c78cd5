//! 게임 데이터베이스 웹 서비스 클라이언트
//!
//! 리소스 별 접근자(Get/List/Index/Search/Count/Fields)는 [`client::Service`] 하나로 구현되며
//! 요청 조건은 [`option`] 모듈의 옵션들을 조합하여 만든다.
//!
//! ```no_run
//! use igdb::option::{fields, filter, limit, order, Operator, Order};
//! use igdb::Client;
//!
//! let client = Client::new("api-key")?;
//! let games = client.games().index(vec![
//!     fields(&["name", "rating"]),
//!     filter("rating", Operator::GreaterThan, "80"),
//!     order("rating", Order::Descending, &[]),
//!     limit(10),
//! ])?;
//! # Ok::<(), igdb::ClientError>(())
//! ```

pub mod client;
pub mod configs;
pub mod endpoint;
pub mod option;
pub mod resource;

pub use client::{Client, ClientError, Service};
pub use endpoint::Endpoint;
pub use option::{compose, FuncOption, OptionError, OptionSet};
