// ==========================================
// 酒店房价批量操作系统 - REST 客户端实现
// ==========================================
// 职责: PmsRateClient 的 reqwest 实现
// 接口约定: 列表端点返回 {content: [...]}，
//           创建 POST /room-rates，更新 PUT /room-rates/{id}
// 说明: 除非配置了超时，单个请求不额外施加超时；
//       本层不做自动重试
// ==========================================

use crate::client::error::{ClientError, ClientResult};
use crate::client::pms_client::PmsRateClient;
use crate::config::AppSettings;
use crate::domain::rate::{RoomRate, RoomRateDraft, RoomRatePatch};
use crate::domain::reference::{RatePlan, RoomType};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

// ==========================================
// 分页响应包装
// ==========================================
#[derive(Debug, Deserialize)]
struct PageResponse<T> {
    content: Vec<T>,
}

// ==========================================
// RestPmsClient - REST 客户端
// ==========================================
pub struct RestPmsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RestPmsClient {
    /// 根据配置构建客户端
    ///
    /// # 参数
    /// - settings: 应用配置（服务地址、令牌、可选超时）
    pub fn new(settings: &AppSettings) -> ClientResult<Self> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            api_token: settings.api_token.clone(),
        })
    }

    /// 拼接端点地址
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 附加鉴权头（如配置了令牌）
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// 发送请求并解析 JSON 响应
    ///
    /// 非 2xx 状态读取响应体前 200 字符作为错误消息
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> ClientResult<T> {
        let response = self.authed(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message: String = body.chars().take(200).collect();
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PmsRateClient for RestPmsClient {
    async fn list_room_types(&self, page_size: u32) -> ClientResult<Vec<RoomType>> {
        let url = self.endpoint("api/room-types");
        debug!(url = %url, page_size, "拉取房型列表");

        let size = page_size.to_string();
        let request = self
            .http
            .get(&url)
            .query(&[("page", "0"), ("size", size.as_str())]);
        let page: PageResponse<RoomType> = self.send_json(request, &url).await?;
        Ok(page.content)
    }

    async fn list_rate_plans(&self, page_size: u32) -> ClientResult<Vec<RatePlan>> {
        let url = self.endpoint("api/rate-plans");
        debug!(url = %url, page_size, "拉取价格方案列表");

        let size = page_size.to_string();
        let request = self
            .http
            .get(&url)
            .query(&[("page", "0"), ("size", size.as_str())]);
        let page: PageResponse<RatePlan> = self.send_json(request, &url).await?;
        Ok(page.content)
    }

    async fn list_rates(
        &self,
        rate_plan_code: &str,
        room_type_code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClientResult<Vec<RoomRate>> {
        let url = self.endpoint("api/room-rates");
        debug!(
            url = %url,
            rate_plan_code,
            room_type_code,
            start_date = %start_date,
            end_date = %end_date,
            "查询已有房价"
        );

        let start = start_date.to_string();
        let end = end_date.to_string();
        let request = self.http.get(&url).query(&[
            ("ratePlanCode", rate_plan_code),
            ("roomTypeCode", room_type_code),
            ("startDate", start.as_str()),
            ("endDate", end.as_str()),
        ]);
        let page: PageResponse<RoomRate> = self.send_json(request, &url).await?;
        Ok(page.content)
    }

    async fn create_rate(&self, draft: &RoomRateDraft) -> ClientResult<RoomRate> {
        let url = self.endpoint("api/room-rates");
        debug!(
            url = %url,
            rate_plan_code = %draft.rate_plan_code,
            room_type_code = %draft.room_type_code,
            rate_date = %draft.rate_date,
            "创建房价行"
        );

        let request = self.http.post(&url).json(draft);
        self.send_json(request, &url).await
    }

    async fn update_rate(&self, rate_id: i64, patch: &RoomRatePatch) -> ClientResult<RoomRate> {
        let url = self.endpoint(&format!("api/room-rates/{}", rate_id));
        debug!(url = %url, rate_id, "更新房价行");

        let request = self.http.put(&url).json(patch);
        self.send_json(request, &url).await
    }
}
