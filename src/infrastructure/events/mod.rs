//! Events - Action 广播

mod publisher;

pub use publisher::EventPublisher;
