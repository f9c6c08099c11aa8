use std::path::Path;
use thiserror::Error;

/// 自定义错误类型
///
/// 只有资源访问一类可识别错误：样式表读不出来或写不回去。
/// 模式未命中不是错误，由各替换趟内部吸收为零计数。
#[derive(Error, Debug)]
pub enum UnifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 检查路径扩展名是否为受支持的样式表类型
pub fn is_css_file(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    crate::SUPPORTED_EXTENSIONS
        .iter()
        .any(|&ext| Some(ext) == extension.as_deref())
}
