// ==========================================
// 酒店房价批量操作系统 - 日历展开
// ==========================================
// 职责: 把选择状态展开为逐日序列（闭区间 + 星期过滤）
// 说明: 纯函数、可重入、有限序列；选择变化时重新计算
// ==========================================

use crate::domain::selection::RateSelection;
use chrono::{Datelike, NaiveDate};

/// 展开选择范围内的全部日期
///
/// # 规则
/// - [start_date, end_date] 闭区间内逐日遍历
/// - 仅保留星期在过滤集合中的日期
/// - start_date > end_date 时返回空序列
///
/// # 返回
/// 升序、无重复的日期列表
pub fn dates_in_range(selection: &RateSelection) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = selection.start_date;
    while current <= selection.end_date {
        if selection.weekdays.contains(current.weekday()) {
            dates.push(current);
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break, // 日历上限，不再推进
        }
    }
    dates
}

/// 全组合操作数 = |日期| × |房型| × |价格方案|
///
/// 用途: 预览动作的门槛与影响范围提示
pub fn total_operations(selection: &RateSelection) -> u64 {
    dates_in_range(selection).len() as u64
        * selection.room_types.len() as u64
        * selection.rate_plans.len() as u64
}
