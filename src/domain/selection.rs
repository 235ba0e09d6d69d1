// ==========================================
// 酒店房价批量操作系统 - 选择状态
// ==========================================
// 用途: 界面控制器持有的显式选择状态，整体可序列化，
//       以引用传入纯计算函数，保证变更计算可独立测试
// 说明: room_types / rate_plans 保持用户选择顺序，
//       该顺序是预览输出顺序契约的一部分
// ==========================================

use crate::domain::operation::BulkOperation;
use crate::domain::reference::{RatePlan, RoomType};
use crate::domain::types::WeekdaySet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RateSelection - 批量操作选择状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSelection {
    pub start_date: NaiveDate,      // 起始日期（含）
    pub end_date: NaiveDate,        // 结束日期（含）
    pub weekdays: WeekdaySet,       // 允许的星期（默认全选）
    pub room_types: Vec<RoomType>,  // 选中房型（保持选择顺序）
    pub rate_plans: Vec<RatePlan>,  // 选中价格方案（保持选择顺序）
    pub operation: BulkOperation,   // 当前批量操作
}

impl RateSelection {
    /// 创建默认星期过滤（全选）的选择状态
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        room_types: Vec<RoomType>,
        rate_plans: Vec<RatePlan>,
        operation: BulkOperation,
    ) -> Self {
        Self {
            start_date,
            end_date,
            weekdays: WeekdaySet::all(),
            room_types,
            rate_plans,
            operation,
        }
    }

    /// 链式设置星期过滤
    pub fn with_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.weekdays = weekdays;
        self
    }

    /// 判断选择是否缺少任一维度（房型/方案为空）
    pub fn has_empty_dimension(&self) -> bool {
        self.room_types.is_empty() || self.rate_plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RatePlanStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_selection_dimensions() {
        let selection = RateSelection::new(
            date(2024, 6, 1),
            date(2024, 6, 3),
            vec![],
            vec![RatePlan {
                id: 1,
                code: "BAR".to_string(),
                name: "Best Available Rate".to_string(),
                status: RatePlanStatus::Active,
            }],
            BulkOperation::SetRate { amount: 100.0 },
        );
        assert!(selection.has_empty_dimension());
        assert_eq!(selection.weekdays.len(), 7);
    }
}
