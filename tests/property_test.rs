// ==========================================
// 罐装生产线日报系统 - 属性测试
// ==========================================
// 覆盖: 筛选幂等 / 条件合取 / 删除互补 / 日期区间闭区间
// ==========================================

use canning_report::engine::FilterEngine;
use canning_report::{DeleteCriteria, DeletionEngine, ProductionReport, ReportFilter};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

const VARIANTS: [&str; 3] = ["Cola", "Lemon", "Orange"];
const BATCHES: [&str; 3] = ["B-01", "B-02", "B-03"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_report() -> impl Strategy<Value = ProductionReport> {
    (0i64..20, 0usize..3, 0usize..3, 0u64..500).prop_map(|(day, v, b, cases)| {
        ProductionReport::new(base_date() + Duration::days(day), VARIANTS[v], BATCHES[b])
            .with_quantity(canning_report::QuantityField::TotalCase, cases)
    })
}

fn arb_reports() -> impl Strategy<Value = Vec<ProductionReport>> {
    prop::collection::vec(arb_report(), 0..40)
}

fn arb_filter() -> impl Strategy<Value = ReportFilter> {
    (
        prop::option::of((0i64..20, 0i64..20)),
        prop::option::of(0usize..3),
        prop::option::of(0usize..3),
    )
        .prop_map(|(range, b, v)| {
            let mut filter = ReportFilter::new();
            if let Some((s, e)) = range {
                filter = filter.with_date_range(
                    base_date() + Duration::days(s),
                    base_date() + Duration::days(e),
                );
            }
            if let Some(b) = b {
                filter = filter.with_batch_code(BATCHES[b]);
            }
            if let Some(v) = v {
                filter = filter.with_variant_name(VARIANTS[v]);
            }
            filter
        })
}

fn arb_criteria() -> impl Strategy<Value = DeleteCriteria> {
    (
        prop::option::of(0i64..20),
        prop::option::of(0usize..3),
        prop::option::of(0usize..3),
        prop::bool::weighted(0.1),
    )
        .prop_map(|(d, b, v, all)| {
            if all {
                return DeleteCriteria::all();
            }
            let mut criteria = DeleteCriteria::default();
            if let Some(d) = d {
                criteria = criteria.with_date(base_date() + Duration::days(d));
            }
            if let Some(b) = b {
                criteria = criteria.with_batch_code(BATCHES[b]);
            }
            if let Some(v) = v {
                criteria = criteria.with_variant_name(VARIANTS[v]);
            }
            criteria
        })
}

proptest! {
    #[test]
    fn filter_is_idempotent(reports in arb_reports(), filter in arb_filter()) {
        let engine = FilterEngine::new();
        let once = engine.filter(&reports, &filter);
        let twice = engine.filter(&once, &filter);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_is_conjunction_of_predicates(reports in arb_reports(), filter in arb_filter()) {
        let engine = FilterEngine::new();
        let combined = engine.filter(&reports, &filter);

        let mut stepwise = reports.clone();
        if let Some(range) = filter.date_range {
            stepwise = engine.filter(
                &stepwise,
                &ReportFilter::new().with_date_range(range.start, range.end),
            );
        }
        if let Some(batch) = &filter.batch_code {
            stepwise = engine.filter(&stepwise, &ReportFilter::new().with_batch_code(batch.clone()));
        }
        if let Some(variant) = &filter.variant_name {
            stepwise = engine.filter(&stepwise, &ReportFilter::new().with_variant_name(variant.clone()));
        }
        prop_assert_eq!(combined, stepwise);
    }

    #[test]
    fn filter_result_is_ordered_subsequence(reports in arb_reports(), filter in arb_filter()) {
        let result = FilterEngine::new().filter(&reports, &filter);
        let mut it = reports.iter();
        for r in &result {
            prop_assert!(it.any(|x| x == r));
        }
    }

    #[test]
    fn date_range_is_inclusive(reports in arb_reports(), s in 0i64..20, e in 0i64..20) {
        let (start, end) = (base_date() + Duration::days(s), base_date() + Duration::days(e));
        let result = FilterEngine::new()
            .filter(&reports, &ReportFilter::new().with_date_range(start, end));
        let expected: Vec<_> = reports
            .iter()
            .filter(|r| start <= r.date && r.date <= end)
            .cloned()
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn deletion_partitions_collection(reports in arb_reports(), criteria in arb_criteria()) {
        let outcome = DeletionEngine::partition(reports.clone(), &criteria);

        prop_assert_eq!(outcome.remaining.len() + outcome.removed.len(), reports.len());
        prop_assert!(outcome.removed.iter().all(|r| criteria.matches(r)));
        prop_assert!(outcome.remaining.iter().all(|r| !criteria.matches(r)));

        // 两部分都保持原顺序
        let expected_remaining: Vec<_> =
            reports.iter().filter(|r| !criteria.matches(r)).cloned().collect();
        prop_assert_eq!(outcome.remaining, expected_remaining);
    }
}
