// ==========================================
// 酒店房价批量操作系统 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与后端接口一致)
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 价格方案状态 (Rate Plan Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatePlanStatus {
    Active,   // 启用
    Inactive, // 停用
}

impl fmt::Display for RatePlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatePlanStatus::Active => write!(f, "ACTIVE"),
            RatePlanStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

// ==========================================
// 星期集合 (Weekday Set)
// ==========================================
// 用途: 日期展开时的星期过滤（默认全选）
// 存储: 固定 7 槽位，周一为 0（与 chrono::Weekday 对齐）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySet {
    days: [bool; 7],
}

/// 星期代码（与后端筛选参数一致）
const WEEKDAY_CODES: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

impl WeekdaySet {
    /// 全部七天
    pub fn all() -> Self {
        Self { days: [true; 7] }
    }

    /// 空集合（不允许任何日期）
    pub fn none() -> Self {
        Self { days: [false; 7] }
    }

    /// 判断某个星期是否被允许
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// 加入一个星期
    pub fn insert(&mut self, weekday: Weekday) {
        self.days[weekday.num_days_from_monday() as usize] = true;
    }

    /// 移除一个星期
    pub fn remove(&mut self, weekday: Weekday) {
        self.days[weekday.num_days_from_monday() as usize] = false;
    }

    /// 链式构造: 在当前集合上加入一个星期
    pub fn with(mut self, weekday: Weekday) -> Self {
        self.insert(weekday);
        self
    }

    /// 链式构造: 在当前集合上移除一个星期
    pub fn without(mut self, weekday: Weekday) -> Self {
        self.remove(weekday);
        self
    }

    /// 已选中的星期数量
    pub fn len(&self) -> usize {
        self.days.iter().filter(|d| **d).count()
    }

    /// 是否为空集合
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| !d)
    }

    /// 解析逗号分隔的星期代码列表（如 "MON,WED,FRI"）
    ///
    /// # 返回
    /// - Ok(WeekdaySet): 解析成功
    /// - Err(String): 第一个无法识别的代码
    pub fn parse_list(input: &str) -> Result<Self, String> {
        let mut set = Self::none();
        for raw in input.split(',') {
            let code = raw.trim().to_uppercase();
            if code.is_empty() {
                continue;
            }
            let index = WEEKDAY_CODES
                .iter()
                .position(|c| **c == code)
                .ok_or_else(|| format!("无法识别的星期代码: {}", code))?;
            set.days[index] = true;
        }
        Ok(set)
    }
}

impl Default for WeekdaySet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = WEEKDAY_CODES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.days[*i])
            .map(|(_, c)| *c)
            .collect();
        write!(f, "{}", codes.join(","))
    }
}
