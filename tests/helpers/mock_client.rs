// ==========================================
// Mock PMS 客户端 - 用于集成测试
// ==========================================
// 行为: 内存存储 + 可注入故障
// - fail_reference: 基础数据请求整体失败
// - fail_list_rates: 现价查询整体失败（预览中止路径）
// - fail_rows: 指定 (方案, 房型, 日期) 的写入失败（逐行跳过路径）
// ==========================================

use async_trait::async_trait;
use chrono::NaiveDate;
use hotel_rate_ops::client::{ClientError, ClientResult, PmsRateClient};
use hotel_rate_ops::domain::{RatePlan, RoomRate, RoomRateDraft, RoomRatePatch, RoomType};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct MockState {
    room_types: Vec<RoomType>,
    rate_plans: Vec<RatePlan>,
    rates: Vec<RoomRate>,
    next_id: i64,
    list_rate_calls: usize,
    create_calls: usize,
    update_calls: usize,
    fail_reference: bool,
    fail_list_rates: bool,
    fail_rows: HashSet<(String, String, NaiveDate)>,
}

/// Mock PMS 客户端
pub struct MockPmsClient {
    state: Mutex<MockState>,
}

impl MockPmsClient {
    /// 创建空客户端
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                next_id: 1,
                ..MockState::default()
            }),
        }
    }

    /// 创建带基础数据的客户端
    pub fn with_reference(room_types: Vec<RoomType>, rate_plans: Vec<RatePlan>) -> Self {
        let client = Self::new();
        {
            let mut state = client.state.lock().unwrap();
            state.room_types = room_types;
            state.rate_plans = rate_plans;
        }
        client
    }

    /// 预置一行房价（缺 id 时自动分配）
    pub fn seed_rate(&self, mut rate: RoomRate) {
        let mut state = self.state.lock().unwrap();
        if rate.id.is_none() {
            rate.id = Some(state.next_id);
            state.next_id += 1;
        }
        state.rates.push(rate);
    }

    /// 让指定行的写入（创建/更新）失败
    pub fn fail_row(&self, rate_plan_code: &str, room_type_code: &str, rate_date: NaiveDate) {
        self.state.lock().unwrap().fail_rows.insert((
            rate_plan_code.to_string(),
            room_type_code.to_string(),
            rate_date,
        ));
    }

    /// 让基础数据请求失败
    pub fn set_fail_reference(&self, on: bool) {
        self.state.lock().unwrap().fail_reference = on;
    }

    /// 让现价查询失败
    pub fn set_fail_list_rates(&self, on: bool) {
        self.state.lock().unwrap().fail_list_rates = on;
    }

    /// 当前全部房价行
    pub fn rates(&self) -> Vec<RoomRate> {
        self.state.lock().unwrap().rates.clone()
    }

    /// 查找指定行
    pub fn rate_for(
        &self,
        rate_plan_code: &str,
        room_type_code: &str,
        rate_date: NaiveDate,
    ) -> Option<RoomRate> {
        self.state
            .lock()
            .unwrap()
            .rates
            .iter()
            .find(|r| {
                r.rate_plan_code == rate_plan_code
                    && r.room_type_code == room_type_code
                    && r.rate_date == rate_date
            })
            .cloned()
    }

    pub fn list_rate_calls(&self) -> usize {
        self.state.lock().unwrap().list_rate_calls
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state.lock().unwrap().update_calls
    }
}

impl Default for MockPmsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PmsRateClient for MockPmsClient {
    async fn list_room_types(&self, _page_size: u32) -> ClientResult<Vec<RoomType>> {
        let state = self.state.lock().unwrap();
        if state.fail_reference {
            return Err(ClientError::Internal("模拟基础数据故障".to_string()));
        }
        Ok(state.room_types.clone())
    }

    async fn list_rate_plans(&self, _page_size: u32) -> ClientResult<Vec<RatePlan>> {
        let state = self.state.lock().unwrap();
        if state.fail_reference {
            return Err(ClientError::Internal("模拟基础数据故障".to_string()));
        }
        Ok(state.rate_plans.clone())
    }

    async fn list_rates(
        &self,
        rate_plan_code: &str,
        room_type_code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClientResult<Vec<RoomRate>> {
        let mut state = self.state.lock().unwrap();
        state.list_rate_calls += 1;
        if state.fail_list_rates {
            return Err(ClientError::Internal("模拟查询故障".to_string()));
        }
        Ok(state
            .rates
            .iter()
            .filter(|r| {
                r.rate_plan_code == rate_plan_code
                    && r.room_type_code == room_type_code
                    && r.rate_date >= start_date
                    && r.rate_date <= end_date
            })
            .cloned()
            .collect())
    }

    async fn create_rate(&self, draft: &RoomRateDraft) -> ClientResult<RoomRate> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        let key = (
            draft.rate_plan_code.clone(),
            draft.room_type_code.clone(),
            draft.rate_date,
        );
        if state.fail_rows.contains(&key) {
            return Err(ClientError::Internal("模拟写入故障".to_string()));
        }
        let rate = RoomRate {
            id: Some(state.next_id),
            rate_plan_code: draft.rate_plan_code.clone(),
            room_type_code: draft.room_type_code.clone(),
            rate_date: draft.rate_date,
            rate_amount: draft.rate_amount,
            availability_count: draft.availability_count,
            stop_sell: draft.stop_sell,
        };
        state.next_id += 1;
        state.rates.push(rate.clone());
        Ok(rate)
    }

    async fn update_rate(&self, rate_id: i64, patch: &RoomRatePatch) -> ClientResult<RoomRate> {
        let mut state = self.state.lock().unwrap();
        state.update_calls += 1;
        let position = state
            .rates
            .iter()
            .position(|r| r.id == Some(rate_id))
            .ok_or_else(|| ClientError::Internal(format!("未找到房价行: id={}", rate_id)))?;
        let key = (
            state.rates[position].rate_plan_code.clone(),
            state.rates[position].room_type_code.clone(),
            state.rates[position].rate_date,
        );
        if state.fail_rows.contains(&key) {
            return Err(ClientError::Internal("模拟写入故障".to_string()));
        }
        let row = &mut state.rates[position];
        row.rate_amount = patch.rate_amount;
        row.availability_count = patch.availability_count;
        row.stop_sell = patch.stop_sell;
        Ok(row.clone())
    }
}
