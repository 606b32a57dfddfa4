use config::ConfigError;
use serde::Deserialize;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Debug, Deserialize)]
pub struct Config {
    dir: String,
    name: String,

    /// 최대 로그 파일 개수로 로그 파일이 설정한 개수보다 커질 경우 기존의 로그파일들은 삭제 된다.
    /// 설정 되지 않을 시 로그 파일은 삭제 되지 않는다.
    keep: Option<usize>,

    /// 파일과 stdout에 출력할 로그의 레벨로 지정된 로그 레벨 이상만 로깅된다.
    /// 설정하지 않을시 기본값은 DEBUG로 설정 된다.
    level: Option<String>,

    /// 로깅 파일이 분리 되는 기간. 설정 되지 않을시 기본값은 DAILY로 설정된다.
    rotation: Option<String>,
}

impl Config {
    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keep(&self) -> Option<usize> {
        self.keep
    }
}

/// 전역 로거를 설정한다.
///
/// 반환된 [`WorkerGuard`]가 살아 있는 동안만 파일에 로그가 기록되므로 프로그램 종료까지 들고 있어야 한다.
pub fn set_global_logging_config(c: &Config) -> Result<WorkerGuard, ConfigError> {
    let rotation = c.rotation.as_deref()
        .map(parse_rotation)
        .transpose()?
        .unwrap_or(rolling::Rotation::DAILY);
    let level = c.level.as_deref()
        .map(parse_level)
        .transpose()?
        .unwrap_or(tracing::Level::DEBUG);

    let mut file_appender = rolling::RollingFileAppender::builder()
        .filename_prefix(c.name.clone())
        .filename_suffix("log")
        .rotation(rotation);

    if let Some(keep) = c.keep {
        file_appender = file_appender.max_log_files(keep);
    }

    let file_appender = file_appender.build(&c.dir)
        .map_err(|e| ConfigError::Message(format!("Cannot create log file appender: {}", e)))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let writer = std::io::stdout.and(non_blocking);

    tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_timer(LocalTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]")))
        .with_writer(writer)
        .with_max_level(level)
        .try_init()
        .map_err(|e| ConfigError::Message(format!("Cannot set global logger: {}", e)))?;

    Ok(guard)
}

fn parse_rotation(s: &str) -> Result<rolling::Rotation, ConfigError> {
    match s {
        "DAILY" => Ok(rolling::Rotation::DAILY),
        "HOURLY" => Ok(rolling::Rotation::HOURLY),
        "MINUTELY" => Ok(rolling::Rotation::MINUTELY),
        "NEVER" => Ok(rolling::Rotation::NEVER),
        _ => Err(ConfigError::Message(format!(
            "로깅 파일 로테이션(rotation)은 \"{}\", \"{}\", \"{}\", \"{}\"만 가능 합니다. (입력 ==> {})",
            "DAILY", "HOURLY", "MINUTELY", "NEVER", s
        ))),
    }
}

fn parse_level(l: &str) -> Result<tracing::Level, ConfigError> {
    match l {
        "TRACE" => Ok(tracing::Level::TRACE),
        "DEBUG" => Ok(tracing::Level::DEBUG),
        "INFO" => Ok(tracing::Level::INFO),
        "WARN" => Ok(tracing::Level::WARN),
        "ERROR" => Ok(tracing::Level::ERROR),
        _ => Err(ConfigError::Message(format!(
            "로그 레벨(level)은 \"{}\", \"{}\", \"{}\", \"{}\", \"{}\"만 가능 합니다. (입력 ==> {})",
            "TRACE", "DEBUG", "INFO", "WARN", "ERROR", l
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_are_parsed() {
        assert_eq!(parse_level("TRACE").unwrap(), tracing::Level::TRACE);
        assert_eq!(parse_level("WARN").unwrap(), tracing::Level::WARN);
    }

    #[test]
    fn unknown_level_is_an_error() {
        assert!(parse_level("VERBOSE").is_err());
        assert!(parse_level("info").is_err());
    }

    #[test]
    fn unknown_rotation_is_an_error() {
        assert!(parse_rotation("HOURLY").is_ok());
        assert!(parse_rotation("WEEKLY").is_err());
    }
}
