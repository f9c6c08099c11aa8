//! 端到端流水线测试
//!
//! 覆盖完整的 读取 → 替换 → 覆写 数据流：
//! - 迁移前样例文件的全量改写
//! - 已迁移文件的逐字节不变
//! - 磁盘上的写回往返（写出字节 == 内存文本）
//! - 连续运行两次与运行一次结果一致

use css_unifier::{Stylesheet, NEW_ROOT_BLOCK, RENOVATION_MARKER};
use std::path::PathBuf;
use tempfile::TempDir;

/// 迁移前的样例样式表
fn legacy_css() -> String {
    concat!(
        ":root {\n",
        "    --k-bg-body: #f4f4f4;\n",
        "    --k-primary: #336699;\n",
        "    --k-border: #cccccc;\n",
        "    /* Typography */\n",
        "    --font-base: Arial, sans-serif;\n",
        "    --text-xl: 20px;\n",
        "}\n",
        "\n",
        "/* ===== Renovation: Neo Dashboard Format (v6) ===== */\n",
        ":root {\n",
        "    --radius-xl: 18px;\n",
        "    --radius-md: 10px;\n",
        "}\n",
        "\n",
        "input, select {\n",
        "    border-radius: 0;\n",
        "    /* Square corners */\n",
        "}\n",
        "\n",
        ".input-compact {\n",
        "    border-radius: 0;\n",
        "    border: 1px solid #aaa;\n",
        "}\n",
        "\n",
        ".view-toggle {\n",
        "    border-radius: 4px;\n",
        "}\n",
        "\n",
        ".btn {\n",
        "    border-radius: 2px;\n",
        "    /* Slight roundness */\n",
        "}\n",
    )
    .to_string()
}

/// 在临时目录里放一个待迁移的样式表
fn write_fixture(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("style.css");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_in_place_rewrite() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &legacy_css());

    let mut sheet = Stylesheet::load(path.clone()).unwrap();
    let stats = sheet.unify();
    sheet.write_in_place().unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(on_disk.starts_with(NEW_ROOT_BLOCK));
    assert!(on_disk.contains(RENOVATION_MARKER));
    assert!(!on_disk.contains("#336699"));
    assert!(!on_disk.contains("border-radius: 0;"));
    assert!(!on_disk.contains("border-radius: 4px;"));
    assert!(!on_disk.contains("border-radius: 2px;"));
    assert!(!stats.is_noop());
}

#[test]
fn test_write_roundtrip_is_exact() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &legacy_css());

    let mut sheet = Stylesheet::load(path.clone()).unwrap();
    sheet.unify();
    sheet.write_in_place().unwrap();

    // 磁盘字节与内存文本完全一致，无多余或缺失字节
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, sheet.content.as_bytes());
}

#[test]
fn test_second_run_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &legacy_css());

    let mut first = Stylesheet::load(path.clone()).unwrap();
    first.unify();
    first.write_in_place().unwrap();
    let after_first = std::fs::read(&path).unwrap();

    let mut second = Stylesheet::load(path.clone()).unwrap();
    second.unify();
    second.write_in_place().unwrap();
    let after_second = std::fs::read(&path).unwrap();

    assert_eq!(after_first, after_second);
}

#[test]
fn test_migrated_file_unchanged() {
    // 无旧块也无字面量模式：输出逐字节等于输入
    let css = ".card {\n    border-radius: var(--radius-md);\n    color: var(--text-main);\n}\n";
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, css);

    let mut sheet = Stylesheet::load(path.clone()).unwrap();
    let stats = sheet.unify();
    sheet.write_in_place().unwrap();

    assert!(stats.is_noop());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), css);
}

#[test]
fn test_write_to_other_path_keeps_input() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &legacy_css());
    let out_path = dir.path().join("style_unified.css");

    let mut sheet = Stylesheet::load(path.clone()).unwrap();
    sheet.unify();
    sheet.write_to_file(&out_path).unwrap();

    // 输入保持原样，输出是迁移结果
    assert_eq!(std::fs::read_to_string(&path).unwrap(), legacy_css());
    assert!(std::fs::read_to_string(&out_path)
        .unwrap()
        .starts_with(NEW_ROOT_BLOCK));
}

#[test]
fn test_load_missing_file_is_resource_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.css");

    let result = Stylesheet::load(missing);
    assert!(result.is_err());
}

#[test]
fn test_crlf_fixture_square_corners() {
    // 混合行尾约定：CRLF 的成对模式同样被单一规则命中
    let css = "input {\r\n    border-radius: 0;\r\n    /* Square corners */\r\n}\r\n";
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, css);

    let mut sheet = Stylesheet::load(path.clone()).unwrap();
    sheet.unify();
    sheet.write_in_place().unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("border-radius: var(--radius-md);"));
    assert!(!on_disk.contains("Square corners"));
}
