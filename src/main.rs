use anyhow::{Context, Result};
use clap::Parser;
use css_unifier::{is_css_file, Stylesheet, UnifyStats};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "css_unifier")]
#[command(about = "将仪表盘样式表迁移到统一的 Neo Dashboard 设计 token")]
#[command(version)]
struct Cli {
    /// 输入CSS文件路径（默认原地覆写）
    #[arg(short, long)]
    input: PathBuf,

    /// 输出文件路径（不指定时原地覆写输入文件）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 试运行：只应用替换并报告，不写回文件
    #[arg(long)]
    dry_run: bool,

    /// 显示各趟替换统计
    #[arg(long)]
    stats: bool,

    /// 以JSON格式输出替换统计
    #[arg(long)]
    json: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    validate_input(&cli.input)?;

    let mut sheet = Stylesheet::load(cli.input.clone())
        .with_context(|| format!("读取样式表失败: {:?}", cli.input))?;

    let stats = sheet.unify();

    if !cli.dry_run {
        write_result(&cli, &sheet)?;
    }

    report(&cli, &stats)?;

    Ok(())
}

/// 验证输入文件
fn validate_input(input: &PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("输入文件不存在: {:?}", input);
    }

    if !is_css_file(input) {
        anyhow::bail!("输入文件必须是CSS文件");
    }

    Ok(())
}

/// 写回转换结果
fn write_result(cli: &Cli, sheet: &Stylesheet) -> Result<()> {
    match &cli.output {
        Some(output) => sheet
            .write_to_file(output)
            .with_context(|| format!("写入文件失败: {:?}", output))?,
        None => sheet
            .write_in_place()
            .with_context(|| format!("覆写样式表失败: {:?}", sheet.path))?,
    }

    Ok(())
}

/// 打印运行报告
fn report(cli: &Cli, stats: &UnifyStats) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    if cli.quiet {
        return Ok(());
    }

    if cli.stats {
        print!("{}", stats);
    }

    if cli.dry_run {
        println!("试运行完成，共 {} 处替换，未写回文件", stats.total);
        return Ok(());
    }

    if stats.is_noop() {
        println!("未发现可替换的模式（文件可能已迁移）");
    }
    println!("CSS Unification Applied");

    Ok(())
}
