//! The built BM25 engine: corpus statistics, a variant's IDF table, and the
//! parameters used to score queries against them.
//!
//! The engine is immutable once built and can be shared across threads for
//! read-only querying. Each scoring call returns a freshly allocated vector.

use crate::idf::{calc_idf, IdfTable};
use crate::index::CorpusStats;
use crate::scorer::{score_all, score_subset, Bm25Params};
use crate::topn::top_n_indices;
use crate::DocId;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone)]
pub struct Bm25 {
    stats: CorpusStats,
    idf: IdfTable,
    params: Bm25Params,
}

impl Bm25 {
    /// Build statistics and the IDF table for `corpus`. An empty corpus builds an
    /// engine that returns empty results.
    pub fn build<C, D, T>(corpus: C, params: Bm25Params) -> Self
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let stats = CorpusStats::build(corpus);
        let idf = calc_idf(&stats, &params.variant);
        tracing::debug!(variant = params.variant.name(), k1 = params.k1, b = params.b, terms = idf.len(), "bm25 engine ready");
        Self { stats, idf, params }
    }

    pub fn okapi<C, D, T>(corpus: C) -> Self
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::build(corpus, Bm25Params::okapi())
    }

    pub fn l<C, D, T>(corpus: C) -> Self
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::build(corpus, Bm25Params::l())
    }

    pub fn plus<C, D, T>(corpus: C) -> Self
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::build(corpus, Bm25Params::plus())
    }

    /// One score per document, aligned with the input corpus.
    pub fn scores<T: AsRef<str>>(&self, query: &[T]) -> Vec<f64> {
        score_all(&self.stats, &self.idf, &self.params, query)
    }

    /// Scores for the listed documents only, aligned with `doc_ids`.
    pub fn batch_scores<T: AsRef<str>>(&self, query: &[T], doc_ids: &[DocId]) -> Vec<f64> {
        score_subset(&self.stats, &self.idf, &self.params, query, doc_ids)
    }

    /// Indices of the `n` best documents, best first; equal scores keep
    /// ascending document order.
    pub fn top_n<T: AsRef<str>>(&self, query: &[T], n: usize) -> Vec<DocId> {
        top_n_indices(&self.scores(query), n)
    }

    pub fn top_n_scored<T: AsRef<str>>(&self, query: &[T], n: usize) -> Vec<(DocId, f64)> {
        let scores = self.scores(query);
        top_n_indices(&scores, n).into_iter().map(|i| (i, scores[i])).collect()
    }

    pub fn corpus_size(&self) -> usize { self.stats.corpus_size }
    pub fn avgdl(&self) -> f64 { self.stats.avgdl }
    pub fn idf(&self, term: &str) -> Option<f64> { self.idf.get(term).copied() }
    pub fn idf_table(&self) -> &IdfTable { &self.idf }
    pub fn stats(&self) -> &CorpusStats { &self.stats }
    pub fn params(&self) -> &Bm25Params { &self.params }
}
