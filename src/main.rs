// ==========================================
// 罐装生产线日报系统 - 命令行入口
// ==========================================
// 子命令: add / list / delete / export-csv / export-doc / summary
// 存储文件: --data-file > CANNING_REPORT_DATA_FILE > 用户数据目录
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use canning_report::api::ReportRow;
use canning_report::i18n::{t, t_with_args};
use canning_report::{
    logging, AppConfig, AppState, ProductionReport, QuantityField, ReportFilter,
};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "canning-report", about = "罐装生产线日报录入与报表工具", version)]
struct Cli {
    /// 日报存储文件路径
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// 以 JSON 输出结果
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    /// 界面/导出语言（zh-CN / en）
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 录入一条日报
    Add(AddArgs),
    /// 按条件查询日报
    List(FilterArgs),
    /// 删除日报（按条件或全部）
    Delete(DeleteArgs),
    /// 导出筛选结果为 CSV
    ExportCsv(ExportArgs),
    /// 导出筛选结果为分页报告文档
    ExportDoc(ExportArgs),
    /// 分析汇总（品种汇总 / 剔除分布 / 每日产量）
    Summary(FilterArgs),
}

#[derive(Args, Clone)]
struct FilterArgs {
    /// 起始日期 (YYYY-MM-DD)，需与 --end 同时给出
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,
    /// 结束日期 (YYYY-MM-DD)，需与 --start 同时给出
    #[arg(long, value_parser = parse_date)]
    end: Option<NaiveDate>,
    /// 批次号（精确匹配）
    #[arg(long)]
    batch: Option<String>,
    /// 品种名称（精确匹配）
    #[arg(long)]
    variant: Option<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> ReportFilter {
        ReportFilter::from_form(
            self.start,
            self.end,
            self.batch.as_deref(),
            self.variant.as_deref(),
        )
    }
}

#[derive(Args)]
struct DeleteArgs {
    #[command(flatten)]
    filter: FilterArgs,
    /// 删除全部日报（忽略其他条件）；未给出任何条件时必须显式指定
    #[arg(long, action = ArgAction::SetTrue)]
    all: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,
    /// 输出目录
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct AddArgs {
    /// 日报日期 (YYYY-MM-DD)，默认今天
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    variant: String,
    #[arg(long, default_value = "")]
    batch: String,

    #[arg(long, default_value_t = 0)]
    total_case: u64,
    #[arg(long, default_value_t = 0)]
    loose_cans: u64,
    #[arg(long, default_value_t = 0)]
    wip_cans: u64,

    #[arg(long, default_value_t = 0)]
    qa_sample: u64,
    #[arg(long, default_value_t = 0)]
    qa_other_sample: u64,
    #[arg(long, default_value_t = 0)]
    empty_sample: u64,

    #[arg(long, default_value_t = 0)]
    empty_rejection: u64,
    #[arg(long, default_value_t = 0)]
    filled_rejection: u64,
    #[arg(long, default_value_t = 0)]
    breakdown_rejection: u64,
    #[arg(long, default_value_t = 0)]
    manpower_dent_rejection: u64,
    #[arg(long, default_value_t = 0)]
    high_pressure_rejection: u64,
    #[arg(long, default_value_t = 0)]
    water_can_rejection: u64,
    #[arg(long, default_value_t = 0)]
    machine_dent_cans: u64,
    #[arg(long, default_value_t = 0)]
    fade_cans: u64,
    #[arg(long, default_value_t = 0)]
    unprinted_cans: u64,
    #[arg(long, default_value_t = 0)]
    scratched_cans: u64,
    #[arg(long, default_value_t = 0)]
    lid_rejection: u64,
    #[arg(long, default_value_t = 0)]
    reject_shipper: u64,
}

impl AddArgs {
    fn into_report(self) -> ProductionReport {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let quantities = [
            (QuantityField::TotalCase, self.total_case),
            (QuantityField::LooseCans, self.loose_cans),
            (QuantityField::WipCans, self.wip_cans),
            (QuantityField::QaSample, self.qa_sample),
            (QuantityField::QaOtherSample, self.qa_other_sample),
            (QuantityField::EmptySample, self.empty_sample),
            (QuantityField::EmptyRejection, self.empty_rejection),
            (QuantityField::FilledRejection, self.filled_rejection),
            (QuantityField::BreakdownRejection, self.breakdown_rejection),
            (QuantityField::ManpowerDentRejection, self.manpower_dent_rejection),
            (QuantityField::HighPressureRejection, self.high_pressure_rejection),
            (QuantityField::WaterCanRejection, self.water_can_rejection),
            (QuantityField::MachineDentCans, self.machine_dent_cans),
            (QuantityField::FadeCans, self.fade_cans),
            (QuantityField::UnprintedCans, self.unprinted_cans),
            (QuantityField::ScratchedCans, self.scratched_cans),
            (QuantityField::LidRejection, self.lid_rejection),
            (QuantityField::RejectShipper, self.reject_shipper),
        ];

        quantities
            .into_iter()
            .fold(ProductionReport::new(date, self.variant, self.batch), |r, (f, v)| {
                r.with_quantity(f, v)
            })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("日期格式错误（应为YYYY-MM-DD）: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init_with_default("warn");

    let mut config = AppConfig::from_env();
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    tracing::info!("{} v{}", canning_report::APP_NAME, canning_report::VERSION);

    let state = AppState::new(config).context("初始化失败")?;
    canning_report::i18n::set_locale(&state.config.locale);
    let api = state.report_api.clone();
    let json = cli.json;

    match cli.command {
        Commands::Add(args) => {
            let report = args.into_report();
            api.submit_report(report.clone())?;
            if json {
                print_json(&report)?;
            } else {
                println!("{}", t("cli.report_saved"));
            }
        }
        Commands::List(args) => {
            let rows = api.list_report_rows(&args.to_filter())?;
            if json {
                print_json(&rows)?;
            } else {
                print_rows(&rows);
            }
        }
        Commands::Delete(args) => {
            let outcome = if args.all {
                api.delete_all()?
            } else {
                api.delete_filtered(&args.filter.to_filter())?
            };
            if json {
                print_json(&outcome)?;
            } else {
                let count = outcome.removed_count().to_string();
                let remaining = outcome.remaining.len().to_string();
                println!(
                    "{}",
                    t_with_args(
                        "cli.reports_deleted",
                        &[("count", count.as_str()), ("remaining", remaining.as_str())]
                    )
                );
            }
        }
        Commands::ExportCsv(args) => {
            let artifact = api.export_csv(&args.filter.to_filter())?;
            write_artifact(&args.out_dir, &artifact.file_name, &artifact.content)?;
        }
        Commands::ExportDoc(args) => {
            let artifact = api.export_document(&args.filter.to_filter())?;
            write_artifact(&args.out_dir, &artifact.file_name, &artifact.content)?;
        }
        Commands::Summary(args) => {
            let filter = args.to_filter();
            let summary = SummaryOutput {
                variants: api.variant_summary(&filter)?,
                rejections: api.rejection_breakdown(&filter)?,
                daily: api.daily_production(&filter)?,
            };
            if json {
                print_json(&summary)?;
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SummaryOutput {
    variants: Vec<canning_report::VariantSummary>,
    rejections: Vec<canning_report::engine::RejectionTotal>,
    daily: Vec<canning_report::engine::DailyProduction>,
}

fn write_artifact(out_dir: &Path, file_name: &str, content: &[u8]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("无法创建输出目录: {}", out_dir.display()))?;
    let path = out_dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("写入失败: {}", path.display()))?;
    let shown = path.display().to_string();
    println!("{}", t_with_args("cli.file_written", &[("path", shown.as_str())]));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_rows(rows: &[ReportRow]) {
    if rows.is_empty() {
        println!("{}", t("common.no_reports"));
        return;
    }
    println!(
        "{:<10}  {:<20}  {:<12}  {:>10}  {:>10}  {:>10}",
        t("field.date"),
        t("field.variant_name"),
        t("field.batch_code"),
        t("field.total_case"),
        t("field.loose_cans"),
        t("field.total_cans"),
    );
    for row in rows {
        println!(
            "{:<10}  {:<20}  {:<12}  {:>10}  {:>10}  {:>10}",
            row.report.date,
            row.report.variant_name,
            row.report.batch_code,
            row.report.total_case,
            row.report.loose_cans,
            row.total_cans,
        );
    }
}

fn print_summary(summary: &SummaryOutput) {
    for v in &summary.variants {
        println!(
            "{}: {}={} {}={} {}={} {}={}",
            v.variant_name,
            t("field.total_case"),
            v.total_case,
            t("field.empty_rejection"),
            v.empty_rejection,
            t("field.filled_rejection"),
            v.filled_rejection,
            t("field.qa_sample"),
            v.qa_sample,
        );
    }
    println!();
    for r in &summary.rejections {
        println!("{}: {}", t(r.field.label_key()), r.count);
    }
    println!();
    for d in &summary.daily {
        println!(
            "{} {}: {}={} {}={}",
            d.date,
            d.variant_name,
            t("field.total_case"),
            d.total_case,
            t("field.loose_cans"),
            d.loose_cans,
        );
    }
}
