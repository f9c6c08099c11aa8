use crate::passes::{default_passes, Pass};
use crate::utils::UnifyError;
use serde::Serialize;
use std::path::PathBuf;

/// 单个样式表缓冲区
///
/// 生命周期与数据流严格线性：`load` 一次性读入全文，
/// `unify` 按固定顺序折叠各替换趟，`write_in_place` 整体覆写回原路径。
/// 中间不产生备份，也没有其他持久状态。
#[derive(Debug)]
pub struct Stylesheet {
    /// 文件路径
    pub path: PathBuf,
    /// 全文内容（UTF-8）
    pub content: String,
}

/// 各趟替换次数的统计报告
#[derive(Debug, Clone, Serialize)]
pub struct UnifyStats {
    /// (趟名, 替换次数)，按执行顺序排列
    pub passes: Vec<PassCount>,
    /// 总替换次数
    pub total: usize,
}

/// 单趟的替换计数
#[derive(Debug, Clone, Serialize)]
pub struct PassCount {
    pub name: &'static str,
    pub count: usize,
}

impl std::fmt::Display for UnifyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 替换统计 ===")?;
        for pass in &self.passes {
            writeln!(f, "{}: {}", pass.name, pass.count)?;
        }
        writeln!(f, "总计: {}", self.total)?;
        Ok(())
    }
}

impl UnifyStats {
    /// 是否所有趟都未命中（文件已迁移或完全不匹配）
    pub fn is_noop(&self) -> bool {
        self.total == 0
    }
}

impl Stylesheet {
    /// 加载样式表文件
    ///
    /// 全文读入内存，固定按 UTF-8 解码。读取失败（文件不存在、
    /// 无权限）直接返回资源访问错误，不重试。
    pub fn load(path: PathBuf) -> Result<Self, UnifyError> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Stylesheet { path, content })
    }

    /// 从内存文本构造（用于测试和库调用方）
    pub fn from_content(path: PathBuf, content: String) -> Self {
        Stylesheet { path, content }
    }

    /// 应用默认的统一化替换流水线
    pub fn unify(&mut self) -> UnifyStats {
        self.apply(&default_passes())
    }

    /// 按给定顺序应用一组替换趟
    ///
    /// 每趟作用于前一趟的输出。未命中的趟计数为 0，不报错。
    pub fn apply(&mut self, passes: &[Pass]) -> UnifyStats {
        let mut counts = Vec::with_capacity(passes.len());
        let mut total = 0;

        for pass in passes {
            let (next, count) = pass.apply(&self.content);
            self.content = next;
            total += count;
            counts.push(PassCount {
                name: pass.name,
                count,
            });
        }

        UnifyStats {
            passes: counts,
            total,
        }
    }

    /// 覆写回加载时的路径
    ///
    /// 直接整体覆写，不走临时文件改名，也不留备份，
    /// 与被迁移脚本的原始行为一致。
    pub fn write_in_place(&self) -> Result<(), UnifyError> {
        self.write_to_file(&self.path)
    }

    /// 写入指定路径
    pub fn write_to_file(&self, path: &std::path::Path) -> Result<(), UnifyError> {
        std::fs::write(path, self.content.as_bytes())?;
        Ok(())
    }
}
