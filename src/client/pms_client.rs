// ==========================================
// 酒店房价批量操作系统 - PMS 数据访问 Trait
// ==========================================
// 职责: 定义批量流程所需的远端读写接口（不包含实现）
// 用途: 引擎与 API 层只依赖本 trait；REST 实现与
//       测试 Mock 分别提供具体行为，便于替换取数策略
// ==========================================

use crate::client::error::ClientResult;
use crate::domain::rate::{RoomRate, RoomRateDraft, RoomRatePatch};
use crate::domain::reference::{RatePlan, RoomType};
use async_trait::async_trait;
use chrono::NaiveDate;

// ==========================================
// PmsRateClient Trait
// ==========================================
#[async_trait]
pub trait PmsRateClient: Send + Sync {
    /// 分页拉取全部房型
    ///
    /// # 参数
    /// - page_size: 单页大小（取足够大的值一次取全）
    async fn list_room_types(&self, page_size: u32) -> ClientResult<Vec<RoomType>>;

    /// 分页拉取全部价格方案
    ///
    /// # 参数
    /// - page_size: 单页大小（取足够大的值一次取全）
    async fn list_rate_plans(&self, page_size: u32) -> ClientResult<Vec<RatePlan>>;

    /// 按 (方案编码, 房型编码, 日期区间) 查询已有房价行
    ///
    /// # 参数
    /// - rate_plan_code: 价格方案编码
    /// - room_type_code: 房型编码
    /// - start_date: 起始日期（含）
    /// - end_date: 结束日期（含）
    async fn list_rates(
        &self,
        rate_plan_code: &str,
        room_type_code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClientResult<Vec<RoomRate>>;

    /// 创建一行房价
    ///
    /// # 返回
    /// 后端回写的完整行（含分配的 id）
    async fn create_rate(&self, draft: &RoomRateDraft) -> ClientResult<RoomRate>;

    /// 按后端主键更新一行房价
    ///
    /// # 参数
    /// - rate_id: 后端主键（来自预览快照中的已有行）
    async fn update_rate(&self, rate_id: i64, patch: &RoomRatePatch) -> ClientResult<RoomRate>;
}
