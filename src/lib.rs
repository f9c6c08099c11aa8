pub mod passes;
pub mod stylesheet;
pub mod utils;

// 重新导出主要结构
pub use passes::{default_passes, Pass, NEW_ROOT_BLOCK, RENOVATION_MARKER};
pub use stylesheet::{PassCount, Stylesheet, UnifyStats};
pub use utils::{is_css_file, UnifyError};

// 常量定义
pub const SUPPORTED_EXTENSIONS: &[&str] = &["css"];
