//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

/// Present the `<section>` blocks of a web page as full-screen slides.
#[derive(Debug, Parser)]
#[command(name = "section-slides", version, about)]
pub struct Cli {
    /// Page to open right away; without it the URL form is shown
    pub url: Option<String>,

    /// Config file (default: <config dir>/section-slides/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file (default: <cache dir>/section-slides/section-slides.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
