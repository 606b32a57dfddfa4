pub mod log;

use crate::novel::date::DateCodec;
use crate::provider::NOVEL_API_ENDPOINT;
use chrono::Locale;
use config::ConfigError;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::env;
use std::time::Duration;

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Api {
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// 요청 타임아웃(초). 설정하지 않으면 HTTP 클라이언트의 기본값을 사용한다.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    timeout: Option<Duration>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: None,
        }
    }
}

impl Api {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn default_endpoint() -> String {
    NOVEL_API_ENDPOINT.to_owned()
}

/// 일시 변환 로케일 설정
///
/// 읽기 로케일과 출력 로케일을 따로 지정한다.
#[derive(Debug, Deserialize)]
pub struct Date {
    #[serde(default = "default_parse_locale")]
    parse_locale: String,

    #[serde(default = "default_display_locale")]
    display_locale: String,
}

impl Default for Date {
    fn default() -> Self {
        Self {
            parse_locale: default_parse_locale(),
            display_locale: default_display_locale(),
        }
    }
}

impl Date {
    pub fn parse_locale(&self) -> &str {
        &self.parse_locale
    }

    pub fn display_locale(&self) -> &str {
        &self.display_locale
    }

    pub fn codec(&self) -> Result<DateCodec, ConfigError> {
        Ok(DateCodec::new(parse_locale(&self.parse_locale)?, parse_locale(&self.display_locale)?))
    }
}

fn default_parse_locale() -> String {
    "en_US".to_owned()
}

fn default_display_locale() -> String {
    "ja_JP".to_owned()
}

fn parse_locale(s: &str) -> Result<Locale, ConfigError> {
    match s {
        "POSIX" => Ok(Locale::POSIX),
        "en_US" => Ok(Locale::en_US),
        "ja_JP" => Ok(Locale::ja_JP),
        "ko_KR" => Ok(Locale::ko_KR),
        _ => Err(ConfigError::Message(format!(
            "로케일은 \"{}\", \"{}\", \"{}\", \"{}\"만 가능 합니다. (입력 ==> {})",
            "POSIX", "en_US", "ja_JP", "ko_KR", s
        ))),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    api: Api,

    #[serde(default)]
    date: Date,

    logger: Option<log::Config>,
}

impl AppConfig {
    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn logger(&self) -> Option<&log::Config> {
        self.logger.as_ref()
    }
}

/// `NAROU_` 접두사 환경 변수. 섹션과 필드는 `__`로 구분한다. (예: `NAROU_API__ENDPOINT`)
fn environment() -> config::Environment {
    config::Environment::with_prefix("NAROU")
        .prefix_separator("_")
        .separator("__")
}

/// `config/{RUN_MODE}.json` 파일과 `NAROU_` 접두사 환경 변수로 설정을 읽는다.
///
/// 설정 파일이 없어도 기본값으로 동작한다.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = config::Config::builder()
        .add_source(config::File::with_name(&format!("config/{}.json", env)).required(false))
        .add_source(environment())
        .build()?;

    config.try_deserialize()
}
