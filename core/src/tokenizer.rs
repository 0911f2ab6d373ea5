use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
}

/// Split on a single delimiter, dropping empty fields. Tokens are kept verbatim.
pub fn split(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter).filter(|t| !t.is_empty()).map(str::to_owned).collect()
}

/// Word tokens after NFKC normalization and lowercasing. No stemming or stopword removal.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized).map(|m| m.as_str().to_owned()).collect()
}
