use crate::provider::error::TransportError;
use reqwest::{blocking, Url};
use std::time::Duration;
use tracing::debug;

/// URL로 GET 요청을 보내 응답 본문을 받아오는 전송 계층
///
/// 타임아웃, 연결 관리 등은 모두 구현체가 책임진다.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        (**self).get(url)
    }
}

/// reqwest blocking 클라이언트를 사용하는 전송 계층
pub struct HttpTransport {
    client: blocking::Client,
}

impl HttpTransport {
    /// 타임아웃이 `None`이면 reqwest 기본값을 따른다.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()
            .map_err(|e| TransportError::ClientBuildFailed(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url.clone())
            .send()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let bytes = response.bytes()
            .map_err(|e| TransportError::BodyReadFailed(e.to_string()))?;
        debug!("Received {} bytes from {}", bytes.len(), url.host_str().unwrap_or_default());

        Ok(bytes.to_vec())
    }
}
