use bm25_core::{Bm25, Bm25Params, Variant, DEFAULT_TOP_N};

fn fixture() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Hello", "there", "good", "man!"],
        vec!["It", "is", "quite", "windy", "in", "London"],
        vec!["How", "is", "the", "weather", "today?"],
    ]
}

const QUERY: [&str; 3] = ["there", "is", "London"];

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < tol, "got {actual:?}, expected {expected:?}");
    }
}

fn all_variants(corpus: &[Vec<&'static str>]) -> Vec<Bm25> {
    vec![Bm25::okapi(corpus), Bm25::l(corpus), Bm25::plus(corpus)]
}

#[test]
fn okapi_reference_scores() {
    let engine = Bm25::okapi(&fixture());
    assert_close(&engine.scores(&QUERY), &[0.561347, 0.569072, 0.109463], 1e-3);
}

#[test]
fn bm25l_reference_scores() {
    let engine = Bm25::l(&fixture());
    assert_close(&engine.scores(&QUERY), &[2.20092, 2.34413, 1.81354], 1e-3);
}

#[test]
fn bm25plus_reference_scores() {
    let engine = Bm25::plus(&fixture());
    assert_close(&engine.scores(&QUERY), &[4.98914, 5.37348, 4.15888], 1e-3);
}

#[test]
fn okapi_floors_common_term() {
    let engine = Bm25::okapi(&fixture());
    // "is" occurs in two of three documents, raw idf ln(1.5) - ln(2.5) < 0
    let rare = (2.5f64).ln() - (1.5f64).ln();
    let average = (13.0 * rare - rare) / 14.0;
    let is_idf = engine.idf("is").unwrap();
    assert!((is_idf - 0.25 * average).abs() < 1e-9);
    assert!(is_idf > 0.0);
}

#[test]
fn absent_terms_okapi_zero_others_delta() {
    let corpus = fixture();
    let okapi = Bm25::okapi(&corpus);
    // "Hello" only occurs in document 0
    let scores = okapi.scores(&["Hello"]);
    assert_eq!(scores[1], 0.0);
    assert_eq!(scores[2], 0.0);

    let l = Bm25::l(&corpus);
    let idf = l.idf("Hello").unwrap();
    let baseline = idf * 2.5 * 0.5 / 2.0;
    let scores = l.scores(&["Hello"]);
    assert!((scores[1] - baseline).abs() < 1e-12);
    assert!((scores[2] - baseline).abs() < 1e-12);

    let plus = Bm25::plus(&corpus);
    let idf = plus.idf("Hello").unwrap();
    let scores = plus.scores(&["Hello"]);
    assert!((scores[1] - idf).abs() < 1e-12);
    assert!((scores[2] - idf).abs() < 1e-12);
}

#[test]
fn repeated_query_terms_accumulate() {
    for engine in all_variants(&fixture()) {
        let once = engine.scores(&["London"]);
        let twice = engine.scores(&["London", "London"]);
        for (a, b) in once.iter().zip(&twice) {
            assert!((2.0 * a - b).abs() < 1e-12);
        }
    }
}

#[test]
fn unknown_terms_contribute_nothing() {
    for engine in all_variants(&fixture()) {
        assert_eq!(engine.scores(&["Paris"]), vec![0.0; 3]);
        let with_unknown = engine.scores(&["there", "Paris", "is", "London"]);
        assert_close(&with_unknown, &engine.scores(&QUERY), 1e-12);
    }
}

#[test]
fn empty_query_scores_zero() {
    let empty: [&str; 0] = [];
    for engine in all_variants(&fixture()) {
        assert_eq!(engine.scores(&empty), vec![0.0; 3]);
    }
}

#[test]
fn empty_corpus_scores_nothing() {
    let corpus: Vec<Vec<&str>> = Vec::new();
    for engine in all_variants(&corpus) {
        assert_eq!(engine.corpus_size(), 0);
        assert_eq!(engine.avgdl(), 0.0);
        assert!(engine.scores(&QUERY).is_empty());
        assert!(engine.top_n(&QUERY, DEFAULT_TOP_N).is_empty());
    }
}

#[test]
fn top_n_is_sorted_and_clamped() {
    let query = ["the", "man!"];
    for engine in all_variants(&fixture()) {
        let scores = engine.scores(&query);
        for n in 0..6 {
            let top = engine.top_n(&query, n);
            assert_eq!(top.len(), n.min(3));
            assert!(top.iter().all(|&i| i < 3));
            assert!(top.windows(2).all(|w| scores[w[0]] >= scores[w[1]]));
        }
    }
}

#[test]
fn top_n_ties_keep_document_order() {
    // identical documents score identically
    let corpus = vec![vec!["b"], vec!["a", "x"], vec!["a", "x"], vec!["a", "x"]];
    let engine = Bm25::plus(&corpus);
    assert_eq!(engine.top_n(&["a"], 3), vec![1, 2, 3]);
    assert_eq!(engine.top_n(&["a"], 2), vec![1, 2]);
}

#[test]
fn params_are_not_validated() {
    let params = Bm25Params { k1: -0.5, b: 1.5, variant: Variant::Plus { delta: 1.0 } };
    let engine = Bm25::build(&fixture(), params);
    assert_eq!(engine.scores(&QUERY).len(), 3);
    assert_eq!(engine.params().k1, -0.5);
}

#[test]
fn custom_delta_shifts_plus_baseline() {
    let corpus = fixture();
    let base = Bm25::plus(&corpus);
    let shifted = Bm25::build(&corpus, Bm25Params { variant: Variant::Plus { delta: 2.0 }, ..Bm25Params::default() });
    let idf = base.idf("Hello").unwrap();
    let diff = shifted.scores(&["Hello"])[1] - base.scores(&["Hello"])[1];
    assert!((diff - idf).abs() < 1e-12);
}
