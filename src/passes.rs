use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// 统一后的 :root 变量块（Neo Dashboard 调色板）
///
/// 替换文件开头的旧主题变量块。末尾的 `--k-*` 是旧变量名的别名映射，
/// 保证尚未迁移的规则仍能正常解析。
pub const NEW_ROOT_BLOCK: &str = r#":root {
    /* Unified Neo Dashboard Palette */
    --primary-color: #2563eb;
    --brand-900: #0f172a;
    --brand-700: #1d4ed8;
    --brand-500: #3b82f6;
    --surface-soft: #f8fbff;
    --surface-card: #ffffff;
    --border-soft: #dbe7ff;
    --text-main: #0f172a;
    --text-sub: #475569;

    --shadow-soft: 0 10px 30px rgba(37, 99, 235, 0.08);
    --shadow-hard: 0 14px 34px rgba(15, 23, 42, 0.12);
    --radius-xl: 18px;
    --radius-lg: 14px;
    --radius-md: 10px;
    --radius-sm: 6px;

    /* Legacy variable mappings (to ensure classic components adapt to the new theme seamlessly) */
    --k-bg-body: #eff6ff;
    --k-bg-surface: var(--surface-card);
    --k-primary: var(--brand-700);
    --k-primary-dark: var(--brand-900);
    --k-text-main: var(--text-main);
    --k-text-light: var(--text-sub);
    --k-border: var(--border-soft);
    --k-success: #10b981;
    --k-warning: #f59e0b;
    --k-danger: #ef4444;

    /* Layout Logic */
    --nav-height: 62px;
    --spacing-xs: 4px;
    --spacing-sm: 8px;
    --spacing-md: 16px;
    --spacing-lg: 24px;

    /* Typography */
    --font-base: 'Outfit', 'Segoe UI', 'Roboto', 'Helvetica Neue', sans-serif;
    --text-xs: 11px;
    --text-sm: 12px;
    --text-base: 13px;
    --text-lg: 16px;
    --text-xl: 20px;
}"#;

/// 第二个 :root 块前的版本标记注释，删除块体后原样保留
pub const RENOVATION_MARKER: &str = "/* ===== Renovation: Neo Dashboard Format (v6) ===== */";

// 旧变量块：从首个 :root 开始，非贪婪跨行匹配到 Typography 注释，
// 再到终止声明 --text-xl: 20px; 与收尾大括号
static OLD_ROOT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":root\s*\{(?s:.)*?/\*\s*Typography\s*\*/(?s:.)*?--text-xl:\s*20px;\s*\}")
        .unwrap()
});

// 冗余块：标记注释 + 重复的 :root 块体，终止于 --radius-md: 10px;
static RENOVATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"/\*\s*=====\s*Renovation:\s*Neo Dashboard Format\s*\(v6\)\s*=====\s*\*/\s*:root\s*\{(?s:.)*?--radius-md:\s*10px;\s*\}",
    )
    .unwrap()
});

// 方角覆盖：声明与注释成对出现，\r?\n 同时容忍两种行尾约定
static SQUARE_CORNERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"border-radius:\s*0;\r?\n\s*/\*\s*Square corners\s*\*/").unwrap());

static SLIGHT_ROUNDNESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"border-radius:\s*2px;\r?\n\s*/\*\s*Slight roundness\s*\*/").unwrap());

/// 单个替换趟的匹配方式
enum PassKind {
    /// 仅替换首个正则匹配（变量块替换）
    PatternFirst(&'static Lazy<Regex>, &'static str),
    /// 替换所有正则匹配（带注释的成对模式）
    PatternAll(&'static Lazy<Regex>, &'static str),
    /// 替换所有字面子串出现处，不限上下文
    LiteralAll(&'static str, &'static str),
}

/// 一趟独立的查找替换变换
///
/// 纯函数：输入整个样式表文本，输出变换后的文本和替换次数。
/// 匹配失败不是错误，返回原文本和 0。
pub struct Pass {
    pub name: &'static str,
    kind: PassKind,
}

impl Pass {
    /// 对文本应用本趟替换，返回结果文本与替换次数
    pub fn apply(&self, text: &str) -> (String, usize) {
        match &self.kind {
            PassKind::PatternFirst(re, replacement) => {
                if re.is_match(text) {
                    (re.replace(text, NoExpand(replacement)).into_owned(), 1)
                } else {
                    (text.to_string(), 0)
                }
            }
            PassKind::PatternAll(re, replacement) => {
                let count = re.find_iter(text).count();
                if count == 0 {
                    (text.to_string(), 0)
                } else {
                    (re.replace_all(text, NoExpand(replacement)).into_owned(), count)
                }
            }
            PassKind::LiteralAll(needle, replacement) => {
                let count = text.matches(needle).count();
                if count == 0 {
                    (text.to_string(), 0)
                } else {
                    (text.replace(needle, replacement), count)
                }
            }
        }
    }
}

/// 返回固定顺序的替换趟列表
///
/// 顺序即执行顺序，后一趟作用于前一趟的输出：
/// 1. 旧变量块 → 统一调色板（含 --k-* 别名）
/// 2. 删除冗余的 v6 重复变量块，仅保留标记注释
/// 3-8. 把硬编码的圆角/边框值归一为 token 引用
///
/// 注意 square-corners 必须先于 zero-radius，否则裸字面量会先吃掉
/// 声明行、留下孤立注释。
pub fn default_passes() -> Vec<Pass> {
    vec![
        Pass {
            name: "root-block",
            kind: PassKind::PatternFirst(&OLD_ROOT_RE, NEW_ROOT_BLOCK),
        },
        Pass {
            name: "renovation-block",
            kind: PassKind::PatternFirst(&RENOVATION_RE, RENOVATION_MARKER),
        },
        Pass {
            name: "square-corners",
            kind: PassKind::PatternAll(&SQUARE_CORNERS_RE, "border-radius: var(--radius-md);"),
        },
        Pass {
            name: "zero-radius",
            kind: PassKind::LiteralAll("border-radius: 0;", "border-radius: var(--radius-sm);"),
        },
        Pass {
            name: "hard-border",
            kind: PassKind::LiteralAll(
                "border: 1px solid #aaa;",
                "border: 1px solid var(--border-soft);",
            ),
        },
        Pass {
            name: "radius-4px",
            kind: PassKind::LiteralAll("border-radius: 4px;", "border-radius: var(--radius-md);"),
        },
        Pass {
            name: "radius-3px",
            kind: PassKind::LiteralAll("border-radius: 3px;", "border-radius: var(--radius-sm);"),
        },
        Pass {
            name: "slight-roundness",
            kind: PassKind::PatternAll(&SLIGHT_ROUNDNESS_RE, "border-radius: var(--radius-md);"),
        },
    ]
}
