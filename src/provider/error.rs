use std::fmt;
use std::fmt::{Display, Formatter};

/// 전송 계층에서 발생한 에러
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// HTTP 클라이언트 생성 실패
    ClientBuildFailed(String),
    /// 연결 실패, 타임아웃 등 요청 자체가 실패함
    RequestFailed(String),
    /// 2xx가 아닌 응답 코드
    Status(u16),
    /// 응답 본문을 읽지 못함
    BodyReadFailed(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ClientBuildFailed(s) => write!(f, "Failed to build http client: {}", s),
            TransportError::RequestFailed(s) => write!(f, "Request failed: {}", s),
            TransportError::Status(code) => write!(f, "Unexpected http status: {}", code),
            TransportError::BodyReadFailed(s) => write!(f, "Failed to read response body: {}", s),
        }
    }
}

impl std::error::Error for TransportError {}

/// 검색 요청 중 발생한 에러
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// 설정된 API 엔드포인트가 올바른 URL이 아님
    InvalidBaseUrl(String),
    /// 전송 계층의 에러를 해석하지 않고 그대로 전달한다.
    Transport(TransportError),
    /// 응답 본문이 JSON이 아님
    ResponseParseFailed(String),
    /// 응답 JSON의 최상위가 배열이 아님
    UnexpectedJsonType,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidBaseUrl(s) => write!(f, "Invalid base url: {}", s),
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::ResponseParseFailed(s) => write!(f, "Failed to parse response: {}", s),
            FetchError::UnexpectedJsonType => write!(f, "Unexpected json type, top level must be an array"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(e: TransportError) -> Self {
        FetchError::Transport(e)
    }
}
