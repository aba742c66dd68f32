// ==========================================
// 罐装生产线日报系统 - 日报存储仓储
// ==========================================
// 职责: 日报集合的持久化（append / load_all / overwrite）
// 存储: 带表头的 CSV 文件（21 列，固定顺序）
// 红线: Repository 不含业务逻辑
// ==========================================
// 并发: 单进程内所有写操作（含 ensure 建文件）经 write_lock 串行化；
//       跨进程无锁，后写覆盖先写。每次写入使用独立命名的临时文件，
//       rename 原子替换，读者只会看到完整文件
// ==========================================

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::NamedTempFile;

use crate::domain::report::ProductionReport;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::report_codec::{read_reports, write_reports};

// ==========================================
// ReportStore - 日报存储
// ==========================================

/// 日报存储
/// 职责: 管理单个 CSV 存储文件的整表读写
pub struct ReportStore {
    data_file: PathBuf,
    write_lock: Mutex<()>,
}

impl ReportStore {
    /// 创建新的存储实例
    ///
    /// # 参数
    /// - data_file: 存储文件路径（由配置注入）
    ///
    /// 仅记录路径；文件在首次读写前由 ensure() 创建
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// 存储文件路径
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 保证存储文件存在且带正确表头（幂等）
    ///
    /// 父目录不存在时一并创建；已存在的文件不做任何修改
    pub fn ensure(&self) -> RepositoryResult<()> {
        let _guard = self.lock()?;
        self.ensure_locked()
    }

    /// 读取全部日报
    ///
    /// # 返回
    /// - Ok(Vec): 存储顺序的全部日报（无数据行时为空）
    /// - Err(SchemaMismatch / MalformedDate): 文件结构损坏
    pub fn load_all(&self) -> RepositoryResult<Vec<ProductionReport>> {
        self.ensure()?;
        self.read_all()
    }

    /// 追加一条日报（整表读-改-写）
    pub fn append(&self, report: ProductionReport) -> RepositoryResult<()> {
        let _guard = self.lock()?;
        self.ensure_locked()?;

        let mut reports = self.read_all()?;
        reports.push(report);
        self.write_all(&reports)?;

        tracing::info!(
            total = reports.len(),
            "日报已追加: {}",
            self.data_file.display()
        );
        Ok(())
    }

    /// 用给定集合整体替换存储内容
    pub fn overwrite(&self, reports: &[ProductionReport]) -> RepositoryResult<()> {
        let _guard = self.lock()?;
        self.create_parent_dir()?;

        self.write_all(reports)?;
        tracing::info!(
            total = reports.len(),
            "日报存储已覆盖写入: {}",
            self.data_file.display()
        );
        Ok(())
    }

    /// 在写锁内执行读-改-写
    ///
    /// 闭包接收当前全部日报，返回值为需要写回的新集合
    pub fn update<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(Vec<ProductionReport>) -> (Vec<ProductionReport>, T),
    {
        let _guard = self.lock()?;
        self.ensure_locked()?;

        let current = self.read_all()?;
        let (next, output) = f(current);
        self.write_all(&next)?;
        Ok(output)
    }

    // ==========================================
    // 内部读写
    // ==========================================

    /// 调用方须持有 write_lock
    fn ensure_locked(&self) -> RepositoryResult<()> {
        if self.data_file.exists() {
            return Ok(());
        }
        self.create_parent_dir()?;

        // 不覆盖其他进程刚创建的文件
        let tmp = self.write_tmp(&[])?;
        match tmp.persist_noclobber(&self.data_file) {
            Ok(_) => {
                tracing::info!("创建日报存储文件: {}", self.data_file.display());
                Ok(())
            }
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(self.write_error(e.error)),
        }
    }

    fn read_all(&self) -> RepositoryResult<Vec<ProductionReport>> {
        let file = fs::File::open(&self.data_file).map_err(|e| {
            RepositoryError::FileReadError(format!("{}: {}", self.data_file.display(), e))
        })?;
        let reports = read_reports(file)?;
        tracing::debug!(count = reports.len(), "读取日报: {}", self.data_file.display());
        Ok(reports)
    }

    /// 写入同目录的独立临时文件，再 rename 覆盖目标文件
    fn write_all(&self, reports: &[ProductionReport]) -> RepositoryResult<()> {
        let tmp = self.write_tmp(reports)?;
        tmp.persist(&self.data_file)
            .map_err(|e| self.write_error(e.error))?;
        Ok(())
    }

    fn write_tmp(&self, reports: &[ProductionReport]) -> RepositoryResult<NamedTempFile> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.write_error(e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            write_reports(&mut writer, reports)?;
            writer
                .into_inner()
                .map_err(|e| self.write_error(e.into_error()))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        Ok(tmp)
    }

    fn parent_dir(&self) -> &Path {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn create_parent_dir(&self) -> RepositoryResult<()> {
        fs::create_dir_all(self.parent_dir()).map_err(|e| self.write_error(e))
    }

    fn write_error(&self, err: io::Error) -> RepositoryError {
        RepositoryError::FileWriteError(format!("{}: {}", self.data_file.display(), err))
    }
}
