use std::path::PathBuf;

use clap::Parser;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cflint", bin_name = "cflint", version = get_version())]
#[command(about = "Checks that C and C++ sources are clang-format clean", long_about = None)]
pub struct Cli {
    /// Path to clang-format
    #[arg(short = 'c', long, value_name = "PATH")]
    pub clang_format_path: Option<PathBuf>,

    /// Show the fix-it command and the diff for each misformatted file
    #[arg(long)]
    pub print_output: bool,

    /// Operate on all files under revision control
    #[arg(short = 'A', long)]
    pub all_files: bool,

    /// Increase logging
    #[arg(short, long)]
    pub verbose: bool,
}
