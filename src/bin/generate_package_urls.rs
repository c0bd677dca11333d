// ==========================================
// 制造看板 - package-urls.txt 生成工具
// ==========================================
// 用法:
//   generate-package-urls [--lockfile package-lock.json] [--output package-urls.txt]
//
// 依赖增删后先执行 npm install,再运行本工具重新生成 URL 列表。
// ==========================================

use anyhow::Result;
use clap::Parser;
use manufacturing_dashboard::i18n::t_with_args_in;
use manufacturing_dashboard::lockfile::{
    generate_package_urls, LockfileError, DEFAULT_LOCKFILE, DEFAULT_OUTPUT,
};
use manufacturing_dashboard::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-package-urls")]
#[command(about = "Extract every https download URL from package-lock.json")]
struct Args {
    /// package-lock.json 路径
    #[arg(short, long, default_value = DEFAULT_LOCKFILE)]
    lockfile: PathBuf,

    /// 输出文件路径
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// 提示语言（ja / en / zh-CN）
    #[arg(long, env = "MFG_DASHBOARD_LOCALE", default_value = "ja")]
    locale: String,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let report = match generate_package_urls(&args.lockfile, &args.output) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", diagnostic(&args.locale, &err));
            std::process::exit(1);
        }
    };

    println!(
        "{}",
        t_with_args_in(
            &args.locale,
            "lockfile.generated",
            &[("count", report.count.to_string().as_str())],
        )
    );
    println!("  -> {}", report.output.display());
    Ok(())
}

fn diagnostic(locale: &str, err: &LockfileError) -> String {
    match err {
        LockfileError::MissingLockfile(path) => t_with_args_in(
            locale,
            "lockfile.not_found",
            &[("path", path.display().to_string().as_str())],
        ),
        LockfileError::NoUrlsFound(path) => t_with_args_in(
            locale,
            "lockfile.no_urls",
            &[("path", path.display().to_string().as_str())],
        ),
        other => other.to_string(),
    }
}
