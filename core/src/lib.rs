pub mod bm25;
pub mod corpus;
pub mod idf;
pub mod index;
pub mod scorer;
pub mod tokenizer;
pub mod topn;

pub use bm25::{Bm25, DEFAULT_TOP_N};
pub use idf::IdfTable;
pub use index::{CorpusStats, DocumentStats};
pub use scorer::{Bm25Params, Variant};

/// Position of a document in the corpus it was built from.
pub type DocId = usize;
