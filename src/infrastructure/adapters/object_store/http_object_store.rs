//! HTTP Object Store - 通过 HTTP 读取公开 bucket 中的 .json.gz 文档
//!
//! 实现 ObjectStorePort trait
//!
//! 文档可能以两种方式返回：
//! - `Content-Encoding: gzip`，由 reqwest 解压
//! - 原始 gzip 字节（无 Content-Encoding），按魔数 `1f 8b` 识别后用 flate2 解压

use async_trait::async_trait;
use flate2::read::GzDecoder;
use reqwest::Client;
use serde_json::Value;
use std::io::Read;
use std::time::Duration;

use crate::application::ports::{FetchError, ObjectStorePort};
use crate::infrastructure::adapters::map_reqwest_error;

/// gzip 魔数
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// HTTP Object Store 配置
#[derive(Debug, Clone, Default)]
pub struct HttpObjectStoreConfig {
    /// 请求超时时间（秒），0 表示使用传输层默认
    pub timeout_secs: u64,
}

pub struct HttpObjectStore {
    client: Client,
}

impl HttpObjectStore {
    pub fn new(config: HttpObjectStoreConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().gzip(true);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ObjectStorePort for HttpObjectStore {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url = %url, "Fetching object");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let size = bytes.len();
        let document = decode_json_body_blocking(bytes).await?;

        tracing::debug!(url = %url, size = size, "Object fetched");
        Ok(document)
    }
}

/// 在 blocking 线程池中解压与解析
pub(crate) async fn decode_json_body_blocking<B>(bytes: B) -> Result<Value, FetchError>
where
    B: AsRef<[u8]> + Send + 'static,
{
    tokio::task::spawn_blocking(move || decode_json_body(bytes.as_ref()))
        .await
        .map_err(|e| FetchError::InvalidResponse(format!("Decode task failed: {}", e)))?
}

/// 解析响应体，必要时先 gunzip
pub(crate) fn decode_json_body(bytes: &[u8]) -> Result<Value, FetchError> {
    let parsed = if bytes.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzDecoder::new(bytes);
        let mut json = Vec::new();
        decoder
            .read_to_end(&mut json)
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to gunzip: {}", e)))?;
        serde_json::from_slice::<Value>(&json)
    } else {
        serde_json::from_slice::<Value>(bytes)
    };

    parsed.map_err(|e| FetchError::InvalidResponse(format!("Failed to parse JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_decode_plain_json() {
        let value = decode_json_body(br#"{"routes": []}"#).unwrap();
        assert_eq!(value, json!({"routes": []}));
    }

    #[test]
    fn test_decode_raw_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"version": "v2"}"#).unwrap();
        let compressed = encoder.finish().unwrap();

        let value = decode_json_body(&compressed).unwrap();
        assert_eq!(value, json!({"version": "v2"}));
    }

    #[tokio::test]
    async fn test_decode_off_runtime_thread() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(br#"{"stops": {"4970": {"arrivals": [1, 2, 3]}}}"#)
            .unwrap();
        let compressed = encoder.finish().unwrap();

        let value = decode_json_body_blocking(compressed).await.unwrap();
        assert_eq!(value["stops"]["4970"]["arrivals"], json!([1, 2, 3]));

        let err = decode_json_body_blocking(b"not json".to_vec()).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_response");
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_json_body(b"<Error><Code>NoSuchKey</Code></Error>").unwrap_err();
        assert_eq!(err.kind(), "invalid_response");

        let err = decode_json_body(&[0x1f, 0x8b, 0x00]).unwrap_err();
        assert_eq!(err.kind(), "invalid_response");
    }
}
