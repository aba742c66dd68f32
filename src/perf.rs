use std::time::Instant;

/// 性能统计 Guard：记录 elapsed_ms 与处理的日报条数
///
/// 使用方式：
/// ```ignore
/// let mut perf = canning_report::perf::PerfGuard::new("list_reports");
/// // do work...
/// perf.set_rows(reports.len());
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    rows: Option<usize>,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            rows: None,
        }
    }

    /// 记录本次操作涉及的日报条数
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = Some(rows);
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            rows = ?self.rows,
            "done"
        );
    }
}
