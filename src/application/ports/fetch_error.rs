//! Fetch Error - 出站请求错误
//!
//! metrics API 与对象存储共用

use thiserror::Error;

use crate::domain::TransportError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed with status code {status}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout => "timeout",
            FetchError::Http { .. } => "http",
            FetchError::InvalidResponse(_) => "invalid_response",
        }
    }

    /// 服务端在响应体中给出的 `error` 字段
    pub fn server_message(&self) -> Option<String> {
        let FetchError::Http { body, .. } = self else {
            return None;
        };

        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("error")?
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// 面向用户的错误信息：优先服务端信息，否则为传输层信息
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or_else(|| self.to_string())
    }
}

impl From<&FetchError> for TransportError {
    fn from(err: &FetchError) -> Self {
        let status = match err {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        };
        TransportError {
            kind: err.kind().to_string(),
            message: err.to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_error() {
        let err = FetchError::Http {
            status: 400,
            body: r#"{"error": "Invalid stop id"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "Invalid stop id");
    }

    #[test]
    fn test_user_message_falls_back_to_transport_message() {
        let err = FetchError::Http {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(err.user_message(), "Request failed with status code 502");

        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error: connection refused");
    }

    #[test]
    fn test_transport_error_conversion() {
        let err = FetchError::Http {
            status: 403,
            body: String::new(),
        };
        let transport = TransportError::from(&err);
        assert_eq!(transport.kind, "http");
        assert_eq!(transport.status, Some(403));
    }
}
