//! Object Store Adapter - S3 兼容对象存储客户端实现

mod fake_object_store;
mod http_object_store;

pub use fake_object_store::FakeObjectStore;
pub use http_object_store::*;
