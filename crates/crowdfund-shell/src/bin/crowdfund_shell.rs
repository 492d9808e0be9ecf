//! 命令行宿主：在终端里驱动应用外壳。
//!
//! 每行标准输入视为一次导航目标，`:back` 与 `:forward` 在历史中移动，
//! 每一步之后把渲染根节点的内容打印到标准输出。导航失败打印到标准错误后继续读取。

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use crowdfund_shell::{
    Application, MemoryRoot, ShellBuilder, ShellConfig, ShellError, StubHttpClient, telemetry,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Drive the crowdfunding shell from the terminal", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// JSON file mapping API paths to response bodies.
    #[arg(long, short)]
    fixtures: Option<PathBuf>,

    /// Location resolved at startup.
    #[arg(long, default_value = "/")]
    start: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("crowdfund-shell: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ShellError> {
    let config = match &cli.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    telemetry::install(&config.logging.filter)?;

    let http = match &cli.fixtures {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            StubHttpClient::from_fixture_json(&config.api.base_url, &text)?
        }
        None => StubHttpClient::new(),
    };
    let root = Arc::new(MemoryRoot::new(config.app.anchor.clone()));
    let app = ShellBuilder::new()
        .with_config(config)
        .with_http_client(Arc::new(http))
        .with_render_root(root.clone())
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = app.start(&cli.start) {
        report(&err);
    }
    writeln!(out, "{}", root.content())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Err(err) = step(&app, input) {
            report(&err);
        }
        writeln!(out, "{}", root.content())?;
    }
    Ok(())
}

fn step(app: &Application, input: &str) -> Result<(), ShellError> {
    match input {
        ":back" => {
            app.router().back()?;
        }
        ":forward" => {
            app.router().forward()?;
        }
        path => {
            app.navigate(path)?;
        }
    }
    Ok(())
}

fn report(err: &ShellError) {
    error!(error = %err, "navigation failed");
    eprintln!("navigation failed: {err}");
}
