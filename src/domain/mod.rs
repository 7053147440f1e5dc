//! Domain Layer - 领域层
//!
//! - graph_params: 用户查询参数
//! - precomputed: 预计算统计文件寻址
//! - actions: 派发事件
//! - state: 应用状态与 reducer

pub mod actions;
pub mod graph_params;
pub mod precomputed;
pub mod state;

pub use actions::{Action, LatLng, TransportError};
pub use graph_params::{parse_service_date, GraphParams, GraphParamsError, GraphParamsPatch};
pub use precomputed::{cache_key, stat_path, time_path, ObjectStoreLayout, StatKind, MEDIAN};
pub use state::{ArrivalsState, RoutesState, SpiderSelection, StatCaches};
