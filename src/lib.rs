// ==========================================
// 酒店房价批量操作系统 - 核心库
// ==========================================
// 技术栈: Rust + Tokio + Reqwest
// 系统定位: 决策支持工具 (人工最终控制权)
// 对接对象: 酒店 PMS 后端 REST 接口
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 客户端层 - 远端 PMS 数据访问
pub mod client;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RatePlanStatus, WeekdaySet};

// 领域实体
pub use domain::{
    BulkOperation, PairKey, PreviewChange, PreviewReport, PreviewSummary, RateKey, RatePlan,
    RateSelection, RoomRate, RoomRateDraft, RoomRatePatch, RoomType,
};

// 客户端
pub use client::{ClientError, ClientResult, PmsRateClient, RestPmsClient};

// 引擎
pub use engine::{
    ApplyExecutor, ApplyProgress, ApplyProgressSink, ApplyReport, BulkRateOrchestrator,
    ChangeComputer, LogProgressSink, NoOpProgressSink, OptionalProgressSink, RateSnapshot,
    RateSnapshotLoader,
};

// API
pub use api::{ApiError, ApiResult, BulkRateApi, ReferenceData, ReferenceDataApi};

// 配置
pub use config::{env_keys, AppSettings};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "酒店房价批量操作系统";

// ==========================================
// 预编译检查
// ==========================================
