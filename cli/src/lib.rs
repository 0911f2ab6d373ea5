use anyhow::{Context, Result};
use bm25_core::corpus::{load_corpus, TokenizeMode};
use bm25_core::{Bm25Params, DocId, Variant};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Okapi,
    L,
    Plus,
}

/// Engine parameters shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct EngineArgs {
    /// Scoring variant; overrides the one in --config
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Term-frequency saturation
    #[arg(long)]
    pub k1: Option<f64>,
    /// Length normalization strength
    #[arg(long)]
    pub b: Option<f64>,
    /// Okapi negative-IDF floor factor
    #[arg(long)]
    pub epsilon: Option<f64>,
    /// BM25L/BM25+ baseline
    #[arg(long)]
    pub delta: Option<f64>,
    /// JSON file with Bm25Params; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl EngineArgs {
    pub fn params(&self) -> Result<Bm25Params> {
        let mut params = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Bm25Params::default(),
        };
        match self.variant {
            Some(VariantArg::Okapi) if !matches!(params.variant, Variant::Okapi { .. }) => params.variant = Variant::okapi(),
            Some(VariantArg::L) if !matches!(params.variant, Variant::L { .. }) => params.variant = Variant::l(),
            Some(VariantArg::Plus) if !matches!(params.variant, Variant::Plus { .. }) => params.variant = Variant::plus(),
            _ => {}
        }
        if let Some(k1) = self.k1 { params.k1 = k1; }
        if let Some(b) = self.b { params.b = b; }
        match &mut params.variant {
            Variant::Okapi { epsilon } => {
                if let Some(e) = self.epsilon { *epsilon = e; }
            }
            Variant::L { delta } | Variant::Plus { delta } => {
                if let Some(d) = self.delta { *delta = d; }
            }
        }
        Ok(params)
    }
}

#[derive(Debug, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub score: f64,
}

/// Load a corpus file, or every .json/.jsonl/.txt file under a directory in
/// file-name order. Document ids follow the concatenated order.
pub fn collect_corpus(input: &Path, mode: TokenizeMode) -> Result<Vec<Vec<String>>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl" | "txt") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        anyhow::bail!("corpus path {} does not exist", input.display());
    }

    let mut corpus = Vec::new();
    for file in files {
        corpus.extend(load_corpus(&file, mode)?);
    }
    tracing::info!(input = %input.display(), docs = corpus.len(), "loaded corpus");
    Ok(corpus)
}
