// Report generation from a finished rank run

use crate::error::{RankError, Result};
use crate::ingest::IngestStats;
use crate::pipeline::RankOutcome;
use crate::presenter::{RankedPage, format_rank_line};
use crate::rank::{RankConfig, RankSummary};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub corpus: String,
    pub config: RankConfig,
    pub summary: RankSummary,
    pub stats: IngestStats,
    pub pages: Vec<RankedPage>,
}

impl ReportData {
    pub fn from_outcome(outcome: &RankOutcome, corpus: &str) -> Self {
        Self {
            corpus: corpus.to_string(),
            config: outcome.config,
            summary: outcome.summary,
            stats: outcome.stats.clone(),
            pages: outcome.pages.clone(),
        }
    }
}

pub fn generate_report(data: &ReportData, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => generate_text_report(data),
        ReportFormat::Json => generate_json_report(data)?,
        ReportFormat::Csv => generate_csv_report(data)?,
        ReportFormat::Markdown => generate_markdown_report(data),
    })
}

/// One `<url> <outDegree> <weight>` line per page; the same layout that
/// `pageRankList.txt` is read back with.
pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();
    for page in &data.pages {
        report.push_str(&format_rank_line(page));
        report.push('\n');
    }
    report
}

pub fn generate_json_report(data: &ReportData) -> std::result::Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "linkrank",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "corpus": data.corpus,
            "parameters": data.config,
            "convergence": data.summary,
            "ingest": data.stats,
            "pages": data.pages
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_csv_report(data: &ReportData) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(["url", "out_degree", "weight"])?;
    for page in &data.pages {
        writer.write_record([
            page.url.as_str(),
            page.out_degree.to_string().as_str(),
            format!("{:.7}", page.weight).as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        RankError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn generate_markdown_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str("# Link Rank Report\n\n");
    report.push_str(&format!("- Corpus: `{}`\n", data.corpus));
    report.push_str(&format!("- Damping: {}\n", data.config.damping));
    report.push_str(&format!("- Minimum difference: {}\n", data.config.min_diff));
    report.push_str(&format!(
        "- Iterations: {} of {}{}\n",
        data.summary.iterations,
        data.config.max_iterations,
        if data.summary.converged {
            " (converged)"
        } else {
            ""
        }
    ));
    report.push_str(&format!(
        "- Pages: {}, links: {}\n\n",
        data.stats.pages, data.stats.links
    ));

    report.push_str("| # | URL | Out-degree | Weight |\n");
    report.push_str("|---|-----|-----------:|-------:|\n");
    for (idx, page) in data.pages.iter().enumerate() {
        report.push_str(&format!(
            "| {} | {} | {} | {:.7} |\n",
            idx + 1,
            page.url.replace('|', "\\|"),
            page.out_degree,
            page.weight
        ));
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
