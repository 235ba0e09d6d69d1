// ==========================================
// 测试数据构造器
// ==========================================
// 用途: 以最少样板构造房型/方案/房价/选择状态
// ==========================================

use chrono::NaiveDate;
use hotel_rate_ops::domain::types::RatePlanStatus;
use hotel_rate_ops::{BulkOperation, RatePlan, RateSelection, RoomRate, RoomType};

/// 构造日期（测试中的非法日期视为编码错误）
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 构造测试用房型
pub fn room_type(id: i64, code: &str) -> RoomType {
    RoomType {
        id,
        code: code.to_string(),
        name: format!("房型{}", code),
    }
}

/// 构造测试用价格方案（默认启用）
pub fn rate_plan(id: i64, code: &str) -> RatePlan {
    RatePlan {
        id,
        code: code.to_string(),
        name: format!("方案{}", code),
        status: RatePlanStatus::Active,
    }
}

/// 构造测试用房价行（无 id，交给 Mock 分配）
pub fn room_rate(plan_code: &str, room_type_code: &str, d: NaiveDate, amount: f64) -> RoomRate {
    RoomRate {
        id: None,
        rate_plan_code: plan_code.to_string(),
        room_type_code: room_type_code.to_string(),
        rate_date: d,
        rate_amount: amount,
        availability_count: None,
        stop_sell: false,
    }
}

/// 构造选择状态（星期全选）
pub fn selection(
    start: NaiveDate,
    end: NaiveDate,
    rate_plans: Vec<RatePlan>,
    room_types: Vec<RoomType>,
    operation: BulkOperation,
) -> RateSelection {
    RateSelection::new(start, end, room_types, rate_plans, operation)
}
