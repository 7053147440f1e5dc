//! Store Port - 应用状态存储
//!
//! 派发 Action 并读取状态快照，具体实现在 infrastructure/memory 层

use crate::domain::{Action, GraphParams, RoutesState, StatCaches};

pub trait StorePort: Send + Sync {
    /// 派发事件：先应用到状态，再广播
    fn dispatch(&self, action: Action);

    /// 当前状态快照
    fn snapshot(&self) -> RoutesState;

    /// 当前查询参数
    fn graph_params(&self) -> GraphParams {
        self.snapshot().graph_params
    }

    /// 当前预计算统计缓存
    fn stat_caches(&self) -> StatCaches {
        self.snapshot().stat_caches
    }
}
