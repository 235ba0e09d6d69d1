// ==========================================
// 酒店房价批量操作系统 - 远端数据访问层
// ==========================================
// 职责: 封装 PMS 后端 REST 接口，屏蔽 HTTP 细节
// 红线: Client 不含业务逻辑，只做取数/写数
// 约束: 所有筛选条件通过查询参数传递，不拼接 URL 字符串
// ==========================================

pub mod error;
pub mod pms_client;
pub mod rest;

// 重导出核心类型
pub use error::{ClientError, ClientResult};
pub use pms_client::PmsRateClient;
pub use rest::RestPmsClient;
