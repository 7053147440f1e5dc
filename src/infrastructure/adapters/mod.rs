//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod metrics;
pub mod object_store;

pub use metrics::*;
pub use object_store::*;

use crate::application::ports::FetchError;

/// reqwest 错误映射为 FetchError
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_connect() {
        FetchError::Network(format!("Cannot connect: {}", err))
    } else if err.is_decode() {
        FetchError::InvalidResponse(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}
