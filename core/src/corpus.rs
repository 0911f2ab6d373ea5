//! Corpus sources: tokenized documents from JSON, JSONL or plain-text files,
//! and synthetic corpora for benchmarking.

use crate::tokenizer::{split, tokenize};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizeMode {
    /// Split on single spaces, tokens kept verbatim.
    #[default]
    Whitespace,
    /// Normalized, lowercased word tokens.
    Words,
}

impl TokenizeMode {
    pub fn apply(self, text: &str) -> Vec<String> {
        match self {
            TokenizeMode::Whitespace => split(text, ' '),
            TokenizeMode::Words => tokenize(text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(alias = "text")]
    body: String,
}

/// Load one file as a tokenized corpus, in file order.
pub fn load_corpus<P: AsRef<Path>>(path: P, mode: TokenizeMode) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let docs = match ext {
        "jsonl" => read_jsonl(path)?,
        "json" => read_json(path)?,
        _ => read_lines(path)?,
    };
    tracing::debug!(path = %path.display(), docs = docs.len(), "loaded corpus file");
    Ok(docs.iter().map(|body| mode.apply(body)).collect())
}

fn read_jsonl(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", path.display(), lineno + 1))?;
        out.push(doc.body);
    }
    Ok(out)
}

fn read_json(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))?;
    let mut out = Vec::new();
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                out.push(doc.body);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            out.push(doc.body);
        }
        _ => anyhow::bail!("{}: expected a document object or an array of them", path.display()),
    }
    Ok(out)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(line);
    }
    Ok(out)
}

/// Settings for [`random_corpus`].
#[derive(Debug, Clone, Copy)]
pub struct RandomCorpus {
    pub vocabulary: usize,
    pub docs: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub seed: u64,
}

impl Default for RandomCorpus {
    fn default() -> Self { Self { vocabulary: 1000, docs: 10_000, min_len: 3, max_len: 10, seed: 42 } }
}

/// Documents of `min_len..=max_len` tokens drawn uniformly from a synthetic
/// vocabulary. The same seed always yields the same corpus.
pub fn random_corpus(cfg: RandomCorpus) -> Vec<Vec<String>> {
    let mut rng = fastrand::Rng::with_seed(cfg.seed);
    let vocabulary: Vec<String> = (0..cfg.vocabulary.max(1)).map(|i| synthetic_word(&mut rng, i)).collect();
    let max_len = cfg.max_len.max(cfg.min_len);
    (0..cfg.docs)
        .map(|_| {
            let len = rng.usize(cfg.min_len..=max_len);
            (0..len).map(|_| vocabulary[rng.usize(..vocabulary.len())].clone()).collect()
        })
        .collect()
}

// suffix keeps words unique even when the random stems collide
fn synthetic_word(rng: &mut fastrand::Rng, i: usize) -> String {
    let stem: String = (0..rng.usize(3..=7)).map(|_| rng.lowercase()).collect();
    format!("{stem}{i}")
}
