use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use filecmp_diff::{compare, ComparisonReport, TextDocument};
use filecmp_protocol::CompareResponse;
use filecmp_server::{FilecmpServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Compare(args) => cmd_compare(args, cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(FilecmpServer::new(config).serve())?;
    Ok(())
}

fn cmd_compare(args: CompareArgs, format: OutputFormat) -> anyhow::Result<()> {
    let first = read_document(&args.file1)?;
    let second = read_document(&args.file2)?;
    let report = compare(&first, &second);
    tracing::debug!(differences = report.difference_count(), "compared local files");
    match format {
        OutputFormat::Text => print!("{}", render_text(&report)?),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}

fn read_document(path: &Path) -> anyhow::Result<TextDocument> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(TextDocument::from_bytes(name, &bytes))
}

fn render_json(report: &ComparisonReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&CompareResponse::new(report.clone()))?)
}

fn render_line(line: Option<&str>) -> String {
    match line {
        Some(text) => text.escape_debug().to_string(),
        None => "(absent)".dimmed().to_string(),
    }
}

fn render_text(report: &ComparisonReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({} lines) vs {} ({} lines)",
        report.file1_name.bold(),
        report.file1_lines,
        report.file2_name.bold(),
        report.file2_lines,
    )?;
    if report.is_identical() {
        writeln!(out, "{} No differences.", "✓".green().bold())?;
        return Ok(out);
    }
    for diff in &report.differences {
        writeln!(out, "line {}", diff.line_number.to_string().yellow())?;
        writeln!(out, "  {} {}", "-".red(), render_line(diff.file1.as_deref()))?;
        writeln!(out, "  {} {}", "+".green(), render_line(diff.file2.as_deref()))?;
    }
    writeln!(out, "{} differing line(s).", report.difference_count().to_string().bold())?;
    Ok(out)
}
