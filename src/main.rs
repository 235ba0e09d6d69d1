// ==========================================
// 酒店房价批量操作系统 - CLI 主入口
// ==========================================
// 技术栈: Tokio + Reqwest
// 系统定位: 决策支持工具 (人工最终控制权)
// 流程: 加载基础数据 → 设定选择 → 生成预览 →
//       (可选导出 CSV) → (可选 --apply 应用)
// ==========================================

use hotel_rate_ops::engine::LogProgressSink;
use hotel_rate_ops::{
    i18n, logging, AppSettings, BulkOperation, BulkRateApi, RateSelection, RestPmsClient,
    WeekdaySet,
};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

// ==========================================
// CLI 参数
// ==========================================
#[derive(Debug, Default)]
struct CliOptions {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    rate_plan_codes: Vec<String>,
    room_type_codes: Vec<String>,
    weekdays: Option<WeekdaySet>,
    op: Option<String>,
    value: Option<f64>,
    count: Option<i32>,
    stop_sell: Option<bool>,
    source_date: Option<NaiveDate>,
    apply: bool,
    export: Option<PathBuf>,
}

impl CliOptions {
    /// 解析命令行参数
    ///
    /// # 返回
    /// - Ok(None): 请求帮助
    /// - Ok(Some(options)): 解析成功
    /// - Err(String): 第一个解析错误
    fn parse(args: &[String]) -> Result<Option<Self>, String> {
        if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
            return Ok(None);
        }

        let mut options = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--from" => options.from = Some(parse_date(next_value(args, &mut i)?)?),
                "--to" => options.to = Some(parse_date(next_value(args, &mut i)?)?),
                "--plans" => {
                    options.rate_plan_codes = parse_code_list(next_value(args, &mut i)?);
                }
                "--room-types" => {
                    options.room_type_codes = parse_code_list(next_value(args, &mut i)?);
                }
                "--weekdays" => {
                    options.weekdays = Some(WeekdaySet::parse_list(next_value(args, &mut i)?)?);
                }
                "--op" => options.op = Some(next_value(args, &mut i)?.to_lowercase()),
                "--value" => {
                    let raw = next_value(args, &mut i)?;
                    options.value =
                        Some(raw.parse::<f64>().map_err(|_| format!("无效数值: {}", raw))?);
                }
                "--count" => {
                    let raw = next_value(args, &mut i)?;
                    options.count =
                        Some(raw.parse::<i32>().map_err(|_| format!("无效数量: {}", raw))?);
                }
                "--stop-sell" => {
                    let raw = next_value(args, &mut i)?;
                    options.stop_sell = Some(match raw {
                        "true" | "1" => true,
                        "false" | "0" => false,
                        _ => return Err(format!("无效布尔值: {}", raw)),
                    });
                }
                "--source-date" => {
                    options.source_date = Some(parse_date(next_value(args, &mut i)?)?)
                }
                "--apply" => options.apply = true,
                "--export" => options.export = Some(PathBuf::from(next_value(args, &mut i)?)),
                other => return Err(format!("无法识别的参数: {}", other)),
            }
            i += 1;
        }
        Ok(Some(options))
    }

    /// 组装批量操作
    fn build_operation(&self) -> Result<BulkOperation, String> {
        let op = self.op.as_deref().ok_or("缺少 --op 参数")?;
        let need_value = || self.value.ok_or(format!("操作 {} 需要 --value 参数", op));
        match op {
            "set-rate" => Ok(BulkOperation::SetRate {
                amount: need_value()?,
            }),
            "increase-percent" => Ok(BulkOperation::IncreasePercent {
                percent: need_value()?,
            }),
            "decrease-percent" => Ok(BulkOperation::DecreasePercent {
                percent: need_value()?,
            }),
            "increase-fixed" => Ok(BulkOperation::IncreaseFixed {
                amount: need_value()?,
            }),
            "decrease-fixed" => Ok(BulkOperation::DecreaseFixed {
                amount: need_value()?,
            }),
            "copy-from-date" => Ok(BulkOperation::CopyFromDate {
                source_date: self.source_date.ok_or("操作 copy-from-date 需要 --source-date 参数")?,
            }),
            "set-availability" => Ok(BulkOperation::SetAvailability {
                count: self.count.ok_or("操作 set-availability 需要 --count 参数")?,
            }),
            "set-stop-sell" => Ok(BulkOperation::SetStopSell {
                stop_sell: self
                    .stop_sell
                    .ok_or("操作 set-stop-sell 需要 --stop-sell 参数")?,
            }),
            other => Err(format!("无法识别的操作: {}", other)),
        }
    }
}

fn next_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("参数 {} 缺少取值", flag))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("无效日期: {}", raw))
}

fn parse_code_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn print_usage() {
    println!("==================================================");
    println!("{} v{}", hotel_rate_ops::APP_NAME, hotel_rate_ops::VERSION);
    println!("==================================================");
    println!();
    println!("用法:");
    println!("  hotel-rate-ops --from 2024-06-01 --to 2024-06-30 \\");
    println!("      --plans BAR,COR --room-types DLX,STD \\");
    println!("      --op increase-percent --value 10 [--apply]");
    println!();
    println!("参数:");
    println!("  --from / --to        日期范围（含两端, YYYY-MM-DD）");
    println!("  --plans              价格方案编码列表（逗号分隔）");
    println!("  --room-types         房型编码列表（逗号分隔）");
    println!("  --weekdays           星期过滤（如 MON,FRI,SAT；默认全选）");
    println!("  --op                 批量操作: set-rate / increase-percent /");
    println!("                       decrease-percent / increase-fixed / decrease-fixed /");
    println!("                       copy-from-date / set-availability / set-stop-sell");
    println!("  --value              操作数值（价格类操作）");
    println!("  --count              可售房量（set-availability）");
    println!("  --stop-sell          true/false（set-stop-sell）");
    println!("  --source-date        复制源日期（copy-from-date）");
    println!("  --export <path>      把预览导出为 CSV");
    println!("  --apply              确认应用（缺省仅生成预览）");
    println!();
    println!("环境变量: PMS_BASE_URL / PMS_API_TOKEN / PMS_REFERENCE_PAGE_SIZE /");
    println!("          PMS_REQUEST_TIMEOUT_SECS / PMS_LOCALE");
}

fn fmt_opt<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

async fn run(settings: AppSettings, options: CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let client = Arc::new(RestPmsClient::new(&settings)?);
    let mut api = BulkRateApi::with_progress_sink(
        client,
        settings.reference_page_size,
        Arc::new(LogProgressSink),
    );

    // 基础数据加载失败不阻塞（列表为空时后续编码解析会给出明确错误）
    if let Err(e) = api.initialize().await {
        eprintln!("警告: {}", e);
    }

    let from = options.from.ok_or("缺少 --from 参数")?;
    let to = options.to.ok_or("缺少 --to 参数")?;
    let operation = options.build_operation()?;

    // 把编码解析为带 id 的基础数据条目（保持命令行给定顺序）
    let (rate_plans, room_types) = {
        let reference = api.reference();
        let mut rate_plans = Vec::new();
        for code in &options.rate_plan_codes {
            let plan = reference
                .rate_plan_by_code(code)
                .ok_or_else(|| format!("未知价格方案编码: {}", code))?;
            rate_plans.push(plan.clone());
        }
        let mut room_types = Vec::new();
        for code in &options.room_type_codes {
            let room_type = reference
                .room_type_by_code(code)
                .ok_or_else(|| format!("未知房型编码: {}", code))?;
            room_types.push(room_type.clone());
        }
        (rate_plans, room_types)
    };

    let mut selection = RateSelection::new(from, to, room_types, rate_plans, operation);
    if let Some(weekdays) = options.weekdays {
        selection = selection.with_weekdays(weekdays);
    }
    api.set_selection(selection);

    println!("全组合操作数: {}", api.total_operations());

    let report = api.generate_preview().await?;
    let summary = report.summary.clone();
    println!(
        "预览: 共 {} 项, 有变更 {} 项 (新建 {} / 更新 {})",
        summary.total_cells, summary.changed_count, summary.create_count, summary.update_count
    );
    for change in report.changed().iter().take(20) {
        println!(
            "  {} {} {}  价格 {} -> {}  房量 {} -> {}  停售 {} -> {}",
            change.rate_date,
            change.rate_plan_code,
            change.room_type_code,
            fmt_opt(&change.current_rate),
            fmt_opt(&change.new_rate),
            fmt_opt(&change.current_availability),
            fmt_opt(&change.new_availability),
            fmt_opt(&change.current_stop_sell),
            fmt_opt(&change.new_stop_sell),
        );
    }
    if summary.changed_count > 20 {
        println!("  ... 其余 {} 项省略", summary.changed_count - 20);
    }

    if let Some(path) = &options.export {
        let rows = api.export_preview_csv(path)?;
        println!("已导出 {} 行预览到 {}", rows, path.display());
    }

    if options.apply {
        let result = api.apply_changes().await?;
        println!(
            "应用完成: 成功 {} / 共 {} (失败 {}, 批次 {})",
            result.succeeded, result.total, result.failed, result.batch_id
        );
    } else {
        println!("未指定 --apply，仅生成预览。");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持工具", hotel_rate_ops::APP_NAME);
    tracing::info!("系统版本: {}", hotel_rate_ops::VERSION);
    tracing::info!("==================================================");

    let settings = AppSettings::load();
    i18n::set_locale(&settings.locale);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match CliOptions::parse(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("参数错误: {}", e);
            println!();
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(e) = run(settings, options).await {
        eprintln!("执行失败: {}", e);
        std::process::exit(1);
    }
}
