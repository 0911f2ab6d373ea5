use std::collections::HashMap;

/// Per-document term frequencies and token count.
#[derive(Debug, Clone, Default)]
pub struct DocumentStats {
    pub term_freqs: HashMap<String, u32>,
    pub len: usize,
}

impl DocumentStats {
    pub fn tf(&self, term: &str) -> u32 { self.term_freqs.get(term).copied().unwrap_or(0) }
}

/// Corpus-wide statistics shared by every BM25 variant.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    pub docs: Vec<DocumentStats>,
    /// term -> number of documents containing it at least once
    pub doc_freqs: HashMap<String, u32>,
    pub corpus_size: usize,
    /// 0.0 for an empty corpus.
    pub avgdl: f64,
}

impl CorpusStats {
    pub fn build<C, D, T>(corpus: C) -> Self
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let corpus = corpus.into_iter();
        let mut docs = Vec::with_capacity(corpus.size_hint().0);
        let mut doc_freqs: HashMap<String, u32> = HashMap::new();
        let mut total_len = 0usize;

        for document in corpus {
            let mut term_freqs: HashMap<String, u32> = HashMap::new();
            let mut len = 0usize;
            for token in document {
                *term_freqs.entry(token.as_ref().to_owned()).or_insert(0) += 1;
                len += 1;
            }
            // distinct terms only, a term repeated in one document counts once
            for term in term_freqs.keys() {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            total_len += len;
            docs.push(DocumentStats { term_freqs, len });
        }

        let corpus_size = docs.len();
        let avgdl = if corpus_size == 0 { 0.0 } else { total_len as f64 / corpus_size as f64 };
        tracing::debug!(corpus_size, vocabulary = doc_freqs.len(), avgdl, "built corpus statistics");
        Self { docs, doc_freqs, corpus_size, avgdl }
    }

    pub fn is_empty(&self) -> bool { self.corpus_size == 0 }

    pub fn doc_lengths(&self) -> impl Iterator<Item = usize> + '_ { self.docs.iter().map(|d| d.len) }

    /// `1 - b + b * dl / avgdl`, the length normalization shared by all variants.
    pub(crate) fn length_norm(&self, doc: &DocumentStats, b: f64) -> f64 {
        1.0 - b + b * doc.len as f64 / self.avgdl
    }
}
