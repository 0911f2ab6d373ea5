use crate::idf::IdfTable;
use crate::index::CorpusStats;
use crate::DocId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_K1: f64 = 1.5;
pub const DEFAULT_B: f64 = 0.75;
pub const DEFAULT_EPSILON: f64 = 0.25;
pub const DEFAULT_L_DELTA: f64 = 0.5;
pub const DEFAULT_PLUS_DELTA: f64 = 1.0;

/// BM25 variant together with its own smoothing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Variant {
    /// Classic Okapi BM25. Negative IDFs are floored at `epsilon * mean idf`.
    Okapi { epsilon: f64 },
    /// BM25L, shifts the normalized term frequency by `delta`.
    L { delta: f64 },
    /// BM25+, lower-bounds every term contribution by `delta * idf`.
    Plus { delta: f64 },
}

impl Default for Variant {
    fn default() -> Self { Variant::Okapi { epsilon: DEFAULT_EPSILON } }
}

impl Variant {
    pub fn okapi() -> Self { Variant::Okapi { epsilon: DEFAULT_EPSILON } }
    pub fn l() -> Self { Variant::L { delta: DEFAULT_L_DELTA } }
    pub fn plus() -> Self { Variant::Plus { delta: DEFAULT_PLUS_DELTA } }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Okapi { .. } => "okapi",
            Variant::L { .. } => "l",
            Variant::Plus { .. } => "plus",
        }
    }
}

/// Tunable parameters. `k1` and `b` are not validated, any real value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
    pub variant: Variant,
}

impl Default for Bm25Params {
    fn default() -> Self { Self { k1: DEFAULT_K1, b: DEFAULT_B, variant: Variant::default() } }
}

impl Bm25Params {
    pub fn okapi() -> Self { Self { variant: Variant::okapi(), ..Self::default() } }
    pub fn l() -> Self { Self { variant: Variant::l(), ..Self::default() } }
    pub fn plus() -> Self { Self { variant: Variant::plus(), ..Self::default() } }

    pub fn with_k1(mut self, k1: f64) -> Self { self.k1 = k1; self }
    pub fn with_b(mut self, b: f64) -> Self { self.b = b; self }

    /// Contribution of one query term to one document.
    ///
    /// `norm` is `1 - b + b * dl / avgdl`. Okapi returns 0 for `tf == 0`;
    /// L and Plus still add their `delta` baseline.
    #[inline]
    pub fn term_score(&self, idf: f64, tf: u32, norm: f64) -> f64 {
        let k1 = self.k1;
        let tf = tf as f64;
        match self.variant {
            Variant::Okapi { .. } => {
                if tf == 0.0 {
                    return 0.0;
                }
                idf * (tf * (k1 + 1.0)) / (tf + k1 * norm)
            }
            Variant::L { delta } => {
                let ctd = tf / norm;
                idf * (k1 + 1.0) * (ctd + delta) / (k1 + ctd + delta)
            }
            Variant::Plus { delta } => idf * (delta + (tf * (k1 + 1.0)) / (k1 * norm + tf)),
        }
    }
}

/// Sums per-term contributions for every document. Query terms missing from
/// the IDF table contribute nothing; repeated terms are counted each time.
pub fn score_all<T: AsRef<str>>(stats: &CorpusStats, idf: &IdfTable, params: &Bm25Params, query: &[T]) -> Vec<f64> {
    let mut scores = vec![0.0; stats.corpus_size];
    for term in query {
        let term = term.as_ref();
        let Some(&q_idf) = idf.get(term) else { continue };
        for (score, doc) in scores.iter_mut().zip(&stats.docs) {
            *score += params.term_score(q_idf, doc.tf(term), stats.length_norm(doc, params.b));
        }
    }
    scores
}

/// Like [`score_all`] but only for `doc_ids`, aligned with them. Ids past the
/// end of the corpus score 0.0.
pub fn score_subset<T: AsRef<str>>(
    stats: &CorpusStats,
    idf: &IdfTable,
    params: &Bm25Params,
    query: &[T],
    doc_ids: &[DocId],
) -> Vec<f64> {
    let mut scores = vec![0.0; doc_ids.len()];
    for term in query {
        let term = term.as_ref();
        let Some(&q_idf) = idf.get(term) else { continue };
        for (score, &doc_id) in scores.iter_mut().zip(doc_ids) {
            if let Some(doc) = stats.docs.get(doc_id) {
                *score += params.term_score(q_idf, doc.tf(term), stats.length_norm(doc, params.b));
            }
        }
    }
    scores
}
