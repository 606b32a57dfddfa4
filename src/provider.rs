pub mod error;
pub mod transport;

use crate::novel::date::DateCodec;
use crate::provider::error::{FetchError, TransportError};
use crate::provider::transport::{HttpTransport, Transport};
use crate::query::NarouQuery;
use std::time::Duration;

/// 소설가가 되자 소설 검색 API 엔드포인트 URL
pub const NOVEL_API_ENDPOINT: &str = "https://api.syosetu.com/novelapi/api/";

/// 소설 검색 API 클라이언트
///
/// 엔드포인트와 전송 계층만 가지며 요청 사이에 상태를 공유하지 않는다.
/// 한번 만들어 필요한 곳에 전달해 사용한다.
pub struct NarouClient {
    endpoint: String,
    transport: Box<dyn Transport>,
    date_codec: DateCodec,
}

impl NarouClient {
    pub fn new(endpoint: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            date_codec: DateCodec::default(),
        }
    }

    /// 기본 엔드포인트와 reqwest 전송 계층으로 클라이언트를 만든다.
    pub fn with_http(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(timeout)?;
        Ok(Self::new(NOVEL_API_ENDPOINT, Box::new(transport)))
    }

    /// 응답의 일시 필드를 읽고 출력할 때 사용할 변환기를 지정한다.
    pub fn with_date_codec(mut self, codec: DateCodec) -> Self {
        self.date_codec = codec;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn date_codec(&self) -> DateCodec {
        self.date_codec
    }

    /// 비어 있는 검색 쿼리를 만든다.
    pub fn query(&self) -> NarouQuery<'_> {
        NarouQuery::new(self)
    }

    pub(crate) fn get(&self, url: &reqwest::Url) -> Result<Vec<u8>, FetchError> {
        self.transport.get(url).map_err(FetchError::from)
    }
}
