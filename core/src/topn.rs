use crate::DocId;
use std::cmp::Ordering;

/// Descending by score, ascending by index on ties. NaN sorts last.
fn rank_order(scores: &[f64], a: DocId, b: DocId) -> Ordering {
    let (sa, sb) = (scores[a], scores[b]);
    match (sa.is_nan(), sb.is_nan()) {
        (false, false) => sb.partial_cmp(&sa).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
    .then(a.cmp(&b))
}

/// Indices of the `n` highest scores, best first. `n` is clamped to `scores.len()`.
pub fn top_n_indices(scores: &[f64], n: usize) -> Vec<DocId> {
    let n = n.min(scores.len());
    if n == 0 {
        return Vec::new();
    }
    let mut indices: Vec<DocId> = (0..scores.len()).collect();
    // partial selection, then order only the selected prefix
    if n < indices.len() {
        indices.select_nth_unstable_by(n - 1, |&a, &b| rank_order(scores, a, b));
        indices.truncate(n);
    }
    indices.sort_unstable_by(|&a, &b| rank_order(scores, a, b));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_first() {
        let scores = [0.1, 3.0, 2.0, -1.0, 2.5];
        assert_eq!(top_n_indices(&scores, 3), vec![1, 4, 2]);
    }

    #[test]
    fn clamps_to_len_and_handles_zero() {
        let scores = [1.0, 2.0];
        assert_eq!(top_n_indices(&scores, 10), vec![1, 0]);
        assert!(top_n_indices(&scores, 0).is_empty());
        assert!(top_n_indices(&[], 5).is_empty());
    }

    #[test]
    fn ties_break_by_ascending_index() {
        let scores = [1.0, 5.0, 1.0, 5.0, 1.0, 5.0];
        assert_eq!(top_n_indices(&scores, 4), vec![1, 3, 5, 0]);
        // deterministic across calls
        assert_eq!(top_n_indices(&scores, 4), top_n_indices(&scores, 4));
    }

    #[test]
    fn nan_ranks_last() {
        let scores = [f64::NAN, 0.5, -2.0];
        assert_eq!(top_n_indices(&scores, 3), vec![1, 2, 0]);
    }
}
