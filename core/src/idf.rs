//! Inverse document frequency tables, one calculator per BM25 variant.
//!
//! Every calculator is a pure function of the document-frequency map and the
//! corpus size. Every term in the map gets exactly one entry in the table.

use crate::index::CorpusStats;
use crate::scorer::Variant;
use std::collections::HashMap;

pub type IdfTable = HashMap<String, f64>;

pub fn calc_idf(stats: &CorpusStats, variant: &Variant) -> IdfTable {
    match *variant {
        Variant::Okapi { epsilon } => okapi_idf(&stats.doc_freqs, stats.corpus_size, epsilon),
        Variant::L { .. } => l_idf(&stats.doc_freqs, stats.corpus_size),
        Variant::Plus { .. } => plus_idf(&stats.doc_freqs, stats.corpus_size),
    }
}

/// `ln(N - n + 0.5) - ln(n + 0.5)`, with negative values replaced by
/// `epsilon * mean(raw idf)`.
pub fn okapi_idf(doc_freqs: &HashMap<String, u32>, corpus_size: usize, epsilon: f64) -> IdfTable {
    let n_docs = corpus_size as f64;
    let mut table = IdfTable::with_capacity(doc_freqs.len());
    let mut idf_sum = 0.0;
    let mut negative = Vec::new();
    for (term, &df) in doc_freqs {
        let df = df as f64;
        let idf = (n_docs - df + 0.5).ln() - (df + 0.5).ln();
        idf_sum += idf;
        if idf < 0.0 {
            negative.push(term.as_str());
        }
        table.insert(term.clone(), idf);
    }
    if table.is_empty() {
        return table;
    }

    // floor uses the mean of the raw values, taken before any replacement
    let average_idf = idf_sum / table.len() as f64;
    let floor = epsilon * average_idf;
    tracing::trace!(average_idf, floor, replaced = negative.len(), "okapi idf floor");
    for term in negative {
        if let Some(idf) = table.get_mut(term) {
            *idf = floor;
        }
    }
    table
}

/// `ln(N + 1) - ln(n + 0.5)`
pub fn l_idf(doc_freqs: &HashMap<String, u32>, corpus_size: usize) -> IdfTable {
    let n_docs = corpus_size as f64;
    doc_freqs
        .iter()
        .map(|(term, &df)| (term.clone(), (n_docs + 1.0).ln() - (df as f64 + 0.5).ln()))
        .collect()
}

/// `ln((N + 1) / n)`
pub fn plus_idf(doc_freqs: &HashMap<String, u32>, corpus_size: usize) -> IdfTable {
    let n_docs = corpus_size as f64;
    doc_freqs
        .iter()
        .map(|(term, &df)| (term.clone(), ((n_docs + 1.0) / df as f64).ln()))
        .collect()
}
