// ==========================================
// 罐装生产线日报系统 - 分页报告文档
// ==========================================
// 结构: 标题 + 统计区间，之后每条日报独占一页
// 每页: 标题行 + 基本信息 / 剔除明细 / 质量抽检 三张表（基本信息含总罐数）
// 输出: 纯文本，页间以换页符 (\x0C) 分隔；版式样式不在此处理
// ==========================================

use serde::Serialize;

use crate::domain::criteria::DateRange;
use crate::domain::report::{FieldGroup, ProductionReport, QuantityField};
use crate::engine::metrics::total_cans;
use crate::export::export_file_name;
use crate::i18n::{t_for, t_for_with_args};

/// 页分隔符
pub const PAGE_BREAK: char = '\u{0C}';

/// 两列表格（标签, 值）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTable {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// 单条日报对应的一页
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPage {
    pub heading: String,
    pub total_cans: u64,
    pub basic_information: DocumentTable,
    pub rejection_details: DocumentTable,
    pub quality_assurance: DocumentTable,
}

/// 分页报告文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub period: Option<String>,
    pub pages: Vec<DocumentPage>,
}

impl ReportDocument {
    /// 由筛选结果构建文档
    ///
    /// # 参数
    /// - reports: 筛选后的日报（每条一页，保持顺序）
    /// - range: 当前筛选的日期区间（用于统计区间行）
    /// - locale: 标签语言
    pub fn build(reports: &[ProductionReport], range: Option<&DateRange>, locale: &str) -> Self {
        let period = range.map(|r| {
            let (start, end) = (r.start.to_string(), r.end.to_string());
            t_for_with_args(
                locale,
                "document.period",
                &[("start", start.as_str()), ("end", end.as_str())],
            )
        });

        let pages = reports.iter().map(|r| build_page(r, locale)).collect();

        Self {
            title: t_for(locale, "document.title"),
            period,
            pages,
        }
    }

    /// 文档文件名
    pub fn file_name(range: Option<&DateRange>) -> String {
        export_file_name(range, "txt")
    }

    /// 渲染为纯文本
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        if let Some(period) = &self.period {
            out.push_str(period);
            out.push('\n');
        }
        out.push('\n');

        for (idx, page) in self.pages.iter().enumerate() {
            if idx > 0 {
                out.push(PAGE_BREAK);
                out.push('\n');
            }
            out.push_str(&page.heading);
            out.push_str("\n\n");
            for table in [
                &page.basic_information,
                &page.rejection_details,
                &page.quality_assurance,
            ] {
                render_table(&mut out, table);
                out.push('\n');
            }
        }
        out
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.render_text().into_bytes()
    }
}

fn build_page(report: &ProductionReport, locale: &str) -> DocumentPage {
    let total = total_cans(report);
    let label = |key: &str| t_for(locale, key);
    let quantity_row = |field: QuantityField| (label(field.label_key()), report.quantity(field).to_string());

    let date = report.date.to_string();
    let heading = t_for_with_args(
        locale,
        "document.report_heading",
        &[
            ("date", date.as_str()),
            ("variant", report.variant_name.as_str()),
            ("batch", report.batch_code.as_str()),
        ],
    );

    let group_rows = |group: FieldGroup| -> Vec<(String, String)> {
        QuantityField::in_group(group).map(&quantity_row).collect()
    };

    let mut basic_rows = vec![
        (label("field.date"), date),
        (label("field.variant_name"), report.variant_name.clone()),
        (label("field.batch_code"), report.batch_code.clone()),
        (label("field.total_cans"), total.to_string()),
    ];
    basic_rows.extend(group_rows(FieldGroup::Production));

    let basic_information = DocumentTable {
        title: label("document.basic_information"),
        rows: basic_rows,
    };

    let rejection_details = DocumentTable {
        title: label("document.rejection_details"),
        rows: group_rows(FieldGroup::Rejection),
    };

    let quality_assurance = DocumentTable {
        title: label("document.quality_assurance"),
        rows: group_rows(FieldGroup::Sample),
    };

    DocumentPage {
        heading,
        total_cans: total,
        basic_information,
        rejection_details,
        quality_assurance,
    }
}

fn render_table(out: &mut String, table: &DocumentTable) {
    let width = table
        .rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    out.push_str(&table.title);
    out.push('\n');
    for (label, value) in &table.rows {
        let pad = width - label.chars().count();
        out.push_str("  ");
        out.push_str(label);
        out.push_str(&" ".repeat(pad));
        out.push_str(" | ");
        out.push_str(value);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reports() -> Vec<ProductionReport> {
        vec![
            ProductionReport::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "Cola", "B1")
                .with_quantity(QuantityField::TotalCase, 100)
                .with_quantity(QuantityField::LooseCans, 5)
                .with_quantity(QuantityField::EmptyRejection, 2)
                .with_quantity(QuantityField::FilledRejection, 1),
            ProductionReport::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), "Lemon", "B2")
                .with_quantity(QuantityField::RejectShipper, 4),
        ]
    }

    #[test]
    fn test_one_page_per_report() {
        let doc = ReportDocument::build(&reports(), None, "en");
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.period, None);
        assert_eq!(doc.pages[0].total_cans, 108);
        assert_eq!(doc.pages[1].total_cans, 0);
    }

    #[test]
    fn test_table_shapes() {
        let doc = ReportDocument::build(&reports(), None, "en");
        let page = &doc.pages[0];
        assert_eq!(page.basic_information.rows.len(), 7);
        assert_eq!(page.rejection_details.rows.len(), 12);
        assert_eq!(page.quality_assurance.rows.len(), 3);
        assert_eq!(page.basic_information.rows[3].1, "108");
        assert_eq!(doc.pages[1].rejection_details.rows[11].1, "4");
    }

    #[test]
    fn test_tables_follow_field_groups() {
        let doc = ReportDocument::build(&reports(), None, "en");
        let page = &doc.pages[0];
        let labels = |fields: Vec<QuantityField>| -> Vec<String> {
            fields.into_iter().map(|f| t_for("en", f.label_key())).collect()
        };

        let basic: Vec<String> = page.basic_information.rows[4..]
            .iter()
            .map(|(l, _)| l.clone())
            .collect();
        assert_eq!(basic, labels(QuantityField::in_group(FieldGroup::Production).collect()));

        let qa: Vec<String> = page.quality_assurance.rows.iter().map(|(l, _)| l.clone()).collect();
        assert_eq!(qa, labels(QuantityField::in_group(FieldGroup::Sample).collect()));

        let rejection: Vec<String> = page.rejection_details.rows.iter().map(|(l, _)| l.clone()).collect();
        assert_eq!(rejection, labels(QuantityField::in_group(FieldGroup::Rejection).collect()));
    }

    #[test]
    fn test_render_text_page_breaks() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        let doc = ReportDocument::build(&reports(), Some(&range), "en");
        let text = doc.render_text();

        assert_eq!(text.matches(PAGE_BREAK).count(), 1);
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("Lemon"));
        assert!(doc.period.as_deref().unwrap_or_default().contains("2024-01-02"));
    }

    #[test]
    fn test_empty_document() {
        let doc = ReportDocument::build(&[], None, "zh-CN");
        assert!(doc.pages.is_empty());
        assert!(!doc.render_text().contains(PAGE_BREAK));
    }
}
