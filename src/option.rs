use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use url::{form_urlencoded, Url};

/// 한 번의 요청에서 받을 수 있는 최소 결과 수
pub const MIN_LIMIT: i32 = 1;
/// 한 번의 요청에서 받을 수 있는 최대 결과 수
pub const MAX_LIMIT: i32 = 50;
/// 오프셋 최솟값
pub const MIN_OFFSET: i32 = 0;
/// 오프셋 상한 (이 값은 포함되지 않는다.)
///
/// 서비스에서 관측된 값으로 [`OptionSet::with_offset_bound`]로 변경할 수 있다.
pub const DEFAULT_OFFSET_BOUND: i32 = 100;

const KEY_LIMIT: &str = "limit";
const KEY_OFFSET: &str = "offset";
const KEY_FIELDS: &str = "fields";
const KEY_ORDER: &str = "order";
const KEY_SEARCH: &str = "search";

/// 옵션 검증 중 발생하는 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// 필수 문자열 인자가 비어 있거나 공백뿐임
    EmptyField,

    /// 필수 목록 인자에 요소가 없음
    EmptySlice,

    /// 검색어가 빈 문자열임
    EmptyQuery,

    /// 숫자 인자가 허용 범위를 벗어남
    OutOfRange,

    /// 허용된 개수보다 많은 부가 인자가 입력됨
    TooManyArgs,

    /// 한 번만 설정할 수 있는 옵션이 이미 설정됨
    AlreadySet(&'static str),

    /// 알 수 없는 토큰
    UnknownToken(String),
}

impl Display for OptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::EmptyField => write!(f, "field argument is empty"),
            OptionError::EmptySlice => write!(f, "slice argument is empty"),
            OptionError::EmptyQuery => write!(f, "search query is empty"),
            OptionError::OutOfRange => write!(f, "numeric argument is out of range"),
            OptionError::TooManyArgs => write!(f, "too many arguments"),
            OptionError::AlreadySet(key) => write!(f, "option '{}' is already set", key),
            OptionError::UnknownToken(token) => write!(f, "unknown token: {}", token),
        }
    }
}

impl std::error::Error for OptionError {}

/// 필터 비교 연산자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    Prefix,
    Postfix,
    In,
    NotIn,
    Exists,
    NotExists,
}

impl Operator {
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::NotEquals => "not_eq",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanEqual => "gte",
            Operator::LessThan => "lt",
            Operator::LessThanEqual => "lte",
            Operator::Prefix => "prefix",
            Operator::Postfix => "postfix",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::Exists => "exists",
            Operator::NotExists => "not_exists",
        }
    }

    /// 비교할 값이 반드시 있어야 하는 연산자인지 여부
    pub fn requires_value(&self) -> bool {
        !matches!(self, Operator::Exists | Operator::NotExists)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl TryFrom<&str> for Operator {
    type Error = OptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "eq" => Ok(Operator::Equals),
            "not_eq" => Ok(Operator::NotEquals),
            "gt" => Ok(Operator::GreaterThan),
            "gte" => Ok(Operator::GreaterThanEqual),
            "lt" => Ok(Operator::LessThan),
            "lte" => Ok(Operator::LessThanEqual),
            "prefix" => Ok(Operator::Prefix),
            "postfix" => Ok(Operator::Postfix),
            "in" => Ok(Operator::In),
            "not_in" => Ok(Operator::NotIn),
            "exists" => Ok(Operator::Exists),
            "not_exists" => Ok(Operator::NotExists),
            _ => Err(OptionError::UnknownToken(value.to_owned())),
        }
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Ascending,
    Descending,
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "asc"),
            Order::Descending => write!(f, "desc"),
        }
    }
}

impl TryFrom<&str> for Order {
    type Error = OptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "asc" => Ok(Order::Ascending),
            "desc" => Ok(Order::Descending),
            _ => Err(OptionError::UnknownToken(value.to_owned())),
        }
    }
}

/// 정렬 시 여러 값을 가진 필드를 하나로 모으는 집계 한정자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subfilter {
    Min,
    Max,
    Average,
    Sum,
    Median,
}

impl Display for Subfilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Subfilter::Min => write!(f, "min"),
            Subfilter::Max => write!(f, "max"),
            Subfilter::Average => write!(f, "avg"),
            Subfilter::Sum => write!(f, "sum"),
            Subfilter::Median => write!(f, "median"),
        }
    }
}

impl TryFrom<&str> for Subfilter {
    type Error = OptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "min" => Ok(Subfilter::Min),
            "max" => Ok(Subfilter::Max),
            "avg" => Ok(Subfilter::Average),
            "sum" => Ok(Subfilter::Sum),
            "median" => Ok(Subfilter::Median),
            _ => Err(OptionError::UnknownToken(value.to_owned())),
        }
    }
}

/// 옵션 집합에 적용되는 검증 + 변경 단위
///
/// 적용에 실패한 옵션은 집합을 변경하지 않는다.
pub type FuncOption = Box<dyn Fn(&mut OptionSet) -> Result<(), OptionError>>;

/// 한 번의 요청에 사용될 쿼리 파라미터 집합
///
/// `limit`, `offset`, `fields`, `order`, `search`는 한 번씩만 설정할 수 있으며
/// 필터는 `[field][operator]` 키로 누적된다. 같은 필드와 연산자의 필터는 덮어쓴다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    limit: Option<String>,
    offset: Option<String>,
    fields: Option<String>,
    order: Option<String>,
    search: Option<String>,
    filters: BTreeMap<String, String>,

    offset_bound: i32,
}

impl Default for OptionSet {
    fn default() -> Self {
        OptionSet {
            limit: None,
            offset: None,
            fields: None,
            order: None,
            search: None,
            filters: BTreeMap::new(),
            offset_bound: DEFAULT_OFFSET_BOUND,
        }
    }
}

impl OptionSet {
    /// 빈 옵션 집합에 전달 받은 옵션들을 순서대로 적용한다.
    /// 처음 실패한 옵션의 에러를 반환하며 이후 옵션은 적용하지 않는다.
    pub fn new(opts: Vec<FuncOption>) -> Result<Self, OptionError> {
        Self::with_offset_bound(DEFAULT_OFFSET_BOUND, opts)
    }

    /// [`OptionSet::new`]와 같으나 오프셋 상한을 직접 지정한다.
    pub fn with_offset_bound(offset_bound: i32, opts: Vec<FuncOption>) -> Result<Self, OptionError> {
        let mut set = OptionSet {
            offset_bound,
            ..OptionSet::default()
        };

        for opt in &opts {
            opt(&mut set)?;
        }

        Ok(set)
    }

    pub fn offset_bound(&self) -> i32 {
        self.offset_bound
    }

    /// 파라미터 이름으로 값을 찾는다.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            KEY_LIMIT => self.limit.as_deref(),
            KEY_OFFSET => self.offset.as_deref(),
            KEY_FIELDS => self.fields.as_deref(),
            KEY_ORDER => self.order.as_deref(),
            KEY_SEARCH => self.search.as_deref(),
            _ => self.filters.get(key).map(|v| v.as_str()),
        }
    }

    /// 설정된 모든 파라미터를 키 순서로 반환한다.
    pub fn values(&self) -> Vec<(&str, &str)> {
        let slots = [
            (KEY_LIMIT, &self.limit),
            (KEY_OFFSET, &self.offset),
            (KEY_FIELDS, &self.fields),
            (KEY_ORDER, &self.order),
            (KEY_SEARCH, &self.search),
        ];

        let mut values: BTreeMap<&str, &str> = slots.into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
            .collect();
        values.extend(self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        values.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 설정된 파라미터를 키 순서로 url-encoded 쿼리 스트링으로 만든다.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.values())
            .finish()
    }

    /// URL에 쿼리 스트링으로 파라미터를 추가한다.
    pub fn append_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }

        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, self.query_string()),
            _ => self.query_string(),
        };
        url.set_query(Some(&query));
    }

    fn set_once(slot: &mut Option<String>, key: &'static str, value: String) -> Result<(), OptionError> {
        if slot.is_some() {
            return Err(OptionError::AlreadySet(key));
        }
        *slot = Some(value);
        Ok(())
    }
}

/// 여러 옵션을 하나의 옵션으로 묶는다.
///
/// 묶인 옵션을 적용한 결과는 같은 옵션들을 [`OptionSet::new`]에 직접 전달한 결과와 같다.
pub fn compose(opts: Vec<FuncOption>) -> FuncOption {
    Box::new(move |set: &mut OptionSet| {
        for opt in &opts {
            opt(&mut *set)?;
        }
        Ok(())
    })
}

/// 결과 수 제한 ([`MIN_LIMIT`] ~ [`MAX_LIMIT`])
pub fn limit(lim: i32) -> FuncOption {
    Box::new(move |set: &mut OptionSet| {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&lim) {
            return Err(OptionError::OutOfRange);
        }
        OptionSet::set_once(&mut set.limit, KEY_LIMIT, lim.to_string())
    })
}

/// 결과 오프셋, 0 이상 옵션 집합의 오프셋 상한 미만
pub fn offset(off: i32) -> FuncOption {
    Box::new(move |set: &mut OptionSet| {
        if off < MIN_OFFSET || off >= set.offset_bound {
            return Err(OptionError::OutOfRange);
        }
        OptionSet::set_once(&mut set.offset, KEY_OFFSET, off.to_string())
    })
}

/// 응답에 포함될 필드 목록
///
/// 입력 순서대로 콤마로 이어 붙이며 하나라도 비어 있으면 전체가 실패한다.
pub fn fields(fields: &[&str]) -> FuncOption {
    let fields: Vec<String> = fields.iter().map(|f| f.trim().to_owned()).collect();

    Box::new(move |set: &mut OptionSet| {
        if fields.is_empty() {
            return Err(OptionError::EmptySlice);
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(OptionError::EmptyField);
        }
        OptionSet::set_once(&mut set.fields, KEY_FIELDS, fields.join(","))
    })
}

/// `[field][operator]` 필터
///
/// 서로 다른 필터는 함께 적용되며 같은 필드, 같은 연산자의 필터는 나중 값으로 덮어쓴다.
pub fn filter(field: &str, op: Operator, value: &str) -> FuncOption {
    let field = field.trim().to_owned();
    let value = value.to_owned();

    Box::new(move |set: &mut OptionSet| {
        if field.is_empty() {
            return Err(OptionError::EmptyField);
        }

        let value = if value.trim().is_empty() {
            if op.requires_value() {
                return Err(OptionError::EmptyField);
            }
            "1".to_owned()
        } else {
            value.clone()
        };

        set.filters.insert(format!("[{}][{}]", field, op), value);
        Ok(())
    })
}

/// 정렬 조건, `field:direction[:subfilter]`로 전달된다.
pub fn order(field: &str, order: Order, subfilters: &[Subfilter]) -> FuncOption {
    let field = field.trim().to_owned();
    let subfilters = subfilters.to_vec();

    Box::new(move |set: &mut OptionSet| {
        if field.is_empty() {
            return Err(OptionError::EmptyField);
        }
        if subfilters.len() > 1 {
            return Err(OptionError::TooManyArgs);
        }

        let value = match subfilters.first() {
            Some(sub) => format!("{}:{}:{}", field, order, sub),
            None => format!("{}:{}", field, order),
        };
        OptionSet::set_once(&mut set.order, KEY_ORDER, value)
    })
}

/// 검색어, 빈 문자열만 거부하고 공백은 그대로 전달한다.
pub(crate) fn search(query: &str) -> FuncOption {
    let query = query.to_owned();

    Box::new(move |set: &mut OptionSet| {
        if query.is_empty() {
            return Err(OptionError::EmptyQuery);
        }
        OptionSet::set_once(&mut set.search, KEY_SEARCH, query.clone())
    })
}
