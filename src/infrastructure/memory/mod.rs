//! Memory Layer - In-Memory State Management
//!
//! 实现 StorePort，应用状态保存在内存中

mod store;

pub use store::InMemoryStore;
