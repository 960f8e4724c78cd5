use crate::client::DEFAULT_ROOT_URL;
use crate::client::transport::DEFAULT_TIMEOUT_SECONDS;
use crate::option::DEFAULT_OFFSET_BOUND;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing_appender::non_blocking::WorkerGuard;

pub mod logging;

/// 환경 변수 접두사 (`IGDB_API_KEY`, `IGDB_ROOT_URL` ...)
const ENV_PREFIX: &str = "IGDB";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// API 키가 설정 되지 않음
    MissingApiKey,

    /// 로그 디렉토리(`LOGGER_DIR`)가 설정 되지 않아 파일 로깅을 사용하지 않음
    LoggingDisabled,

    Load(String),
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(f, "api key is not configured"),
            ConfigError::LoggingDisabled => write!(f, "file logging is disabled, LOGGER_DIR is not set"),
            ConfigError::Load(message) => write!(f, "cannot load config, {}", message),
            ConfigError::Logging(message) => write!(f, "cannot configure logging, {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_key: Option<String>,
    root_url: Option<String>,
    timeout_seconds: Option<u64>,
    offset_bound: Option<i32>,
}

/// 클라이언트 설정
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api_key: String,
    root_url: String,
    timeout_seconds: u64,
    offset_bound: i32,
}

impl Config {
    /// API 키 외에는 기본값을 사용한다.
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            root_url: DEFAULT_ROOT_URL.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            offset_bound: DEFAULT_OFFSET_BOUND,
        }
    }

    /// `config/{RUN_MODE}` 설정 파일(선택)과 `IGDB_` 환경 변수에서 설정을 읽는다.
    /// 환경 변수가 파일보다 우선한다.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let source = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        Self::from_source(source)
    }

    fn from_source(source: config::Config) -> Result<Self, ConfigError> {
        let raw: RawConfig = source.try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        let api_key = raw.api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Config {
            api_key,
            root_url: raw.root_url.unwrap_or_else(|| DEFAULT_ROOT_URL.to_owned()),
            timeout_seconds: raw.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            offset_bound: raw.offset_bound.unwrap_or(DEFAULT_OFFSET_BOUND),
        })
    }

    pub fn set_root_url(mut self, root_url: impl Into<String>) -> Self {
        self.root_url = root_url.into();
        self
    }

    pub fn set_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn set_offset_bound(mut self, offset_bound: i32) -> Self {
        self.offset_bound = offset_bound;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    pub fn offset_bound(&self) -> i32 {
        self.offset_bound
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// 프로그램에서 사용할 로깅 옵션을 설정한다.
///
/// `LOGGER_DIR`가 없으면 [`ConfigError::LoggingDisabled`]를, 나머지 `LOGGER_*` 값이 잘못 되었으면
/// [`ConfigError::Logging`]을 반환한다.
pub fn set_global_logging_config() -> Result<WorkerGuard, ConfigError> {
    let dir = env::var("LOGGER_DIR")
        .map_err(|_| ConfigError::LoggingDisabled)?;
    let name = env::var("LOGGER_FILE_NAME")
        .map_err(|e| ConfigError::Logging(format!("LOGGER_FILE_NAME: {}", e)))?;

    let keep = match env::var("LOGGER_KEEP") {
        Ok(v) => Some(v.parse::<usize>()
            .map_err(|e| ConfigError::Logging(format!("LOGGER_KEEP: {}", e)))?),
        Err(_) => None,
    };
    let level = env::var("LOGGER_LEVEL").ok();
    let rotation = env::var("LOGGER_ROTATION").ok();

    let options = logging::Config {
        dir,
        name,
        keep,
        level,
        rotation,
    };

    logging::set_global_logging_config(&options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn source(pairs: &[(&str, &str)]) -> config::Config {
        let mut builder = config::Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_source(source(&[("api_key", "secret")])).unwrap();
        assert_eq!(config, Config::new("secret"));
        assert_eq!(config.root_url(), DEFAULT_ROOT_URL);
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.offset_bound(), 100);
    }

    #[test]
    fn values_are_read_from_source() {
        let config = Config::from_source(source(&[
            ("api_key", "secret"),
            ("root_url", "http://localhost:8080/"),
            ("timeout_seconds", "3"),
            ("offset_bound", "5000"),
        ])).unwrap();

        assert_eq!(config, Config::new("secret")
            .set_root_url("http://localhost:8080/")
            .set_timeout_seconds(3)
            .set_offset_bound(5000));
    }

    #[test]
    fn missing_or_blank_api_key() {
        assert_eq!(Config::from_source(source(&[])), Err(ConfigError::MissingApiKey));
        assert_eq!(Config::from_source(source(&[("api_key", "  ")])), Err(ConfigError::MissingApiKey));
    }

    fn set_env(pairs: &[(&str, &str)]) {
        for (key, value) in pairs {
            unsafe { env::set_var(key, value) };
        }
    }

    fn remove_env(keys: &[&str]) {
        for key in keys {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn load_reads_prefixed_environment() {
        set_env(&[
            ("RUN_MODE", "env-only"),
            ("IGDB_API_KEY", "k"),
            ("IGDB_OFFSET_BOUND", "5000"),
            ("IGDB_TIMEOUT_SECONDS", "3"),
        ]);

        let config = Config::load();
        remove_env(&["RUN_MODE", "IGDB_API_KEY", "IGDB_OFFSET_BOUND", "IGDB_TIMEOUT_SECONDS"]);

        let config = config.unwrap();
        assert_eq!(config.api_key(), "k");
        assert_eq!(config.offset_bound(), 5000);
        assert_eq!(config.timeout_seconds(), 3);
        assert_eq!(config.root_url(), DEFAULT_ROOT_URL);
    }

    #[test]
    #[serial]
    fn logging_is_disabled_without_directory() {
        remove_env(&["LOGGER_DIR", "LOGGER_FILE_NAME", "LOGGER_LEVEL", "LOGGER_ROTATION", "LOGGER_KEEP"]);

        let result = set_global_logging_config();
        assert!(matches!(result, Err(ConfigError::LoggingDisabled)));
    }

    #[test]
    #[serial]
    fn invalid_logging_values_are_reported() {
        let dir = env::temp_dir().join("igdb-logging-test").to_string_lossy().into_owned();
        set_env(&[
            ("LOGGER_DIR", dir.as_str()),
            ("LOGGER_FILE_NAME", "igdb"),
            ("LOGGER_LEVEL", "verbose"),
        ]);

        let level = set_global_logging_config();

        remove_env(&["LOGGER_LEVEL"]);
        set_env(&[("LOGGER_ROTATION", "WEEKLY")]);
        let rotation = set_global_logging_config();

        remove_env(&["LOGGER_DIR", "LOGGER_FILE_NAME", "LOGGER_ROTATION"]);

        assert!(matches!(level, Err(ConfigError::Logging(_))));
        assert!(matches!(rotation, Err(ConfigError::Logging(_))));
    }

    #[test]
    fn invalid_number_fails_to_load() {
        let result = Config::from_source(source(&[("api_key", "secret"), ("timeout_seconds", "soon")]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
