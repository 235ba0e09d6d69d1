// ==========================================
// 酒店房价批量操作系统 - 基础数据接口
// ==========================================
// 职责: 界面挂载时一次性加载房型与价格方案
// 策略: 两个列表并发请求；任一失败视为整体失败，
//       由调用方以非阻塞提示呈现，列表保持为空，不重试
// ==========================================

use crate::api::error::ApiResult;
use crate::client::pms_client::PmsRateClient;
use crate::domain::reference::{RatePlan, RoomType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// ==========================================
// ReferenceData - 基础数据
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub room_types: Vec<RoomType>,
    pub rate_plans: Vec<RatePlan>,
}

impl ReferenceData {
    /// 按业务编码查找房型
    pub fn room_type_by_code(&self, code: &str) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| rt.code == code)
    }

    /// 按业务编码查找价格方案
    pub fn rate_plan_by_code(&self, code: &str) -> Option<&RatePlan> {
        self.rate_plans.iter().find(|rp| rp.code == code)
    }

    /// 两个列表是否都已加载到数据
    pub fn is_loaded(&self) -> bool {
        !self.room_types.is_empty() && !self.rate_plans.is_empty()
    }
}

// ==========================================
// ReferenceDataApi - 基础数据接口
// ==========================================
pub struct ReferenceDataApi {
    client: Arc<dyn PmsRateClient>,
    page_size: u32,
}

impl ReferenceDataApi {
    /// 构造函数
    ///
    /// # 参数
    /// - client: 远端数据访问
    /// - page_size: 单页大小（足够大即一次取全）
    pub fn new(client: Arc<dyn PmsRateClient>, page_size: u32) -> Self {
        Self { client, page_size }
    }

    /// 并发加载房型与价格方案
    ///
    /// # 返回
    /// - Ok(ReferenceData): 两个列表都加载成功
    /// - Err: 任一请求失败（不重试）
    pub async fn load(&self) -> ApiResult<ReferenceData> {
        let (room_types, rate_plans) = futures::try_join!(
            self.client.list_room_types(self.page_size),
            self.client.list_rate_plans(self.page_size)
        )?;

        info!(
            room_types = room_types.len(),
            rate_plans = rate_plans.len(),
            "基础数据加载完成"
        );

        Ok(ReferenceData {
            room_types,
            rate_plans,
        })
    }
}
