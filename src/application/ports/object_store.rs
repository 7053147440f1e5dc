//! Object Store Port - 对象存储抽象
//!
//! 读取压缩的 JSON 文档（线路列表、预计算统计、到站历史）

use async_trait::async_trait;
use serde_json::Value;

use super::FetchError;

#[async_trait]
pub trait ObjectStorePort: Send + Sync {
    /// 下载并解析 JSON 文档（自动处理 gzip）
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}
