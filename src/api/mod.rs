// ==========================================
// 酒店房价批量操作系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供界面/CLI 调用
// ==========================================

pub mod bulk_rate_api;
pub mod error;
pub mod reference_api;

// 重导出核心类型
pub use bulk_rate_api::BulkRateApi;
pub use error::{ApiError, ApiResult};
pub use reference_api::{ReferenceData, ReferenceDataApi};

// TODO: 应用结果增加逐行失败明细（当前仅聚合成功计数）
