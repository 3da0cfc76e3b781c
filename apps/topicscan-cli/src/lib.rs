//! File and directory front end for the subheading analysis.
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use topicscan_core::config::AnalysisConfig;
use topicscan_core::traits::Researcher;
use topicscan_core::types::{CoverageResult, Document, Locale};
use topicscan_engine::{SubheadingAnalyzer, ThresholdPolicy};
use topicscan_text::{HtmlHeadingExtractor, HtmlSanitizer, TantivyWordTokenizer};

pub type HtmlAnalyzer = SubheadingAnalyzer<HtmlSanitizer, HtmlHeadingExtractor, TantivyWordTokenizer>;

/// What to look for in every analyzed file.
#[derive(Debug, Clone)]
pub struct TopicRequest {
    pub keyphrase: String,
    pub synonyms: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub policy: ThresholdPolicy,
    #[serde(flatten)]
    pub result: CoverageResult,
}

pub fn build_analyzer(config: &AnalysisConfig) -> HtmlAnalyzer {
    SubheadingAnalyzer::new(HtmlSanitizer::new(), HtmlHeadingExtractor::new(config.headings), TantivyWordTokenizer::new())
        .with_synonyms(config.use_synonyms)
}

pub fn analyze_file<R: Researcher + ?Sized>(analyzer: &HtmlAnalyzer, researcher: &R, path: &Path, request: &TopicRequest) -> Result<FileReport> {
    let text = read_file_content(path)?;
    let document = Document::new(text, request.keyphrase.clone(), request.locale.clone()).with_synonyms(request.synonyms.clone());
    let result = analyzer
        .analyze_with_researcher(&document, researcher)
        .with_context(|| format!("analyzing {}", path.display()))?;
    let policy = ThresholdPolicy::for_function_words(researcher.has_function_words(&request.locale));
    Ok(FileReport { path: path.to_string_lossy().to_string(), policy, result })
}

/// Analyze one file, or every `.html`/`.htm` file below a directory in path order.
pub fn analyze_path<R: Researcher + ?Sized>(analyzer: &HtmlAnalyzer, researcher: &R, path: &Path, request: &TopicRequest, show_progress: bool) -> Result<Vec<FileReport>> {
    if !path.exists() { bail!("{} does not exist", path.display()); }
    if path.is_file() { return Ok(vec![analyze_file(analyzer, researcher, path, request)?]); }
    let files = list_html_files(path);
    if files.is_empty() { warn!(dir = %path.display(), "no .html files found"); return Ok(vec![]); }
    let pb = if show_progress { ProgressBar::new(files.len() as u64) } else { ProgressBar::hidden() };
    pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")?.progress_chars("#>-"));
    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        pb.set_message(file.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default());
        reports.push(analyze_file(analyzer, researcher, file, request)?);
        pb.inc(1);
    }
    pb.finish_and_clear();
    info!(files = reports.len(), dir = %path.display(), "analyzed directory");
    Ok(reports)
}

pub fn list_html_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
        let path = entry.path();
        if matches!(path.extension().and_then(|s| s.to_str()), Some("html" | "htm")) { files.push(path.to_path_buf()); }
    }
    files.sort();
    files
}

fn read_file_content(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(path).with_context(|| format!("reading {}", path.display()))?).to_string()),
    }
}
