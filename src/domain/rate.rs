// ==========================================
// 酒店房价批量操作系统 - 房价领域模型
// ==========================================
// 红线: 房价金额不得为负
// 说明: 调用方以 (方案编码, 房型编码, 日期) 复合键定位一行,
//       后端在创建后才分配数值主键 id
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RoomRate - 房价行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRate {
    pub id: Option<i64>,                 // 后端主键（创建后分配）
    pub rate_plan_code: String,          // 价格方案编码
    pub room_type_code: String,          // 房型编码
    pub rate_date: NaiveDate,            // 价格日期
    pub rate_amount: f64,                // 房价金额（非负）
    pub availability_count: Option<i32>, // 可售房量（可选，非负）
    #[serde(default)]
    pub stop_sell: bool,                 // 停售标志
}

// ==========================================
// RoomRateDraft - 创建载荷
// ==========================================
// 用途: Apply 阶段对不存在的行发起创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRateDraft {
    pub rate_plan_code: String,
    pub room_type_code: String,
    pub rate_date: NaiveDate,
    pub rate_amount: f64,
    pub availability_count: Option<i32>,
    pub stop_sell: bool,
}

// ==========================================
// RoomRatePatch - 更新载荷
// ==========================================
// 用途: Apply 阶段按后端主键更新已有行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRatePatch {
    pub rate_amount: f64,
    pub availability_count: Option<i32>,
    pub stop_sell: bool,
}

// ==========================================
// RateKey - 快照行键
// ==========================================
// 对应缓存键 "{ratePlanId}-{roomTypeId}-{rateDate}"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateKey {
    pub rate_plan_id: i64,
    pub room_type_id: i64,
    pub rate_date: NaiveDate,
}

impl RateKey {
    pub fn new(rate_plan_id: i64, room_type_id: i64, rate_date: NaiveDate) -> Self {
        Self {
            rate_plan_id,
            room_type_id,
            rate_date,
        }
    }

    /// 去掉日期维度，得到复制源键
    pub fn pair(&self) -> PairKey {
        PairKey {
            rate_plan_id: self.rate_plan_id,
            room_type_id: self.room_type_id,
        }
    }
}

// ==========================================
// PairKey - 复制源键
// ==========================================
// 对应缓存键 "{ratePlanId}-{roomTypeId}"（COPY_FROM_DATE 使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    pub rate_plan_id: i64,
    pub room_type_id: i64,
}

impl PairKey {
    pub fn new(rate_plan_id: i64, room_type_id: i64) -> Self {
        Self {
            rate_plan_id,
            room_type_id,
        }
    }
}
