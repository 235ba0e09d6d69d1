// ==========================================
// 酒店房价批量操作系统 - 基础数据领域模型
// ==========================================
// 用途: 房型与价格方案（本流程中只读，不回写）
// 生命周期: 界面挂载时一次性加载
// ==========================================

use crate::domain::types::RatePlanStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// RoomType - 房型
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: i64,        // 后端主键
    pub code: String,   // 业务编码（接口筛选用的唯一键）
    pub name: String,   // 展示名称
}

// ==========================================
// RatePlan - 价格方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    pub id: i64,                // 后端主键
    pub code: String,           // 业务编码
    pub name: String,           // 展示名称
    pub status: RatePlanStatus, // 启用状态
}

impl RatePlan {
    /// 判断方案是否处于启用状态
    pub fn is_active(&self) -> bool {
        self.status == RatePlanStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_plan_is_active() {
        let plan = RatePlan {
            id: 1,
            code: "BAR".to_string(),
            name: "Best Available Rate".to_string(),
            status: RatePlanStatus::Active,
        };
        assert!(plan.is_active());

        let closed = RatePlan {
            status: RatePlanStatus::Inactive,
            ..plan
        };
        assert!(!closed.is_active());
    }

    #[test]
    fn test_room_type_wire_format() {
        // 后端接口为 camelCase 字段
        let json = r#"{"id":7,"code":"DLX","name":"豪华大床房"}"#;
        let room_type: RoomType = serde_json::from_str(json).unwrap();
        assert_eq!(room_type.id, 7);
        assert_eq!(room_type.code, "DLX");
    }
}
