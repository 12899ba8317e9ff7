//! Word shingling.
//!
//! A shingle is a window of `k` consecutive tokens borrowed from the token
//! sequence. Shingles compare structurally, element by element.

/// A borrowed window of `k` consecutive tokens.
pub type Shingle<'t, S> = &'t [S];

/// Collect every `k`-token window of `tokens`, in order.
///
/// Repeated windows are kept. Returns an empty vector when `k == 0` or when
/// there are fewer than `k` tokens.
pub fn make_shingles<S>(tokens: &[S], k: usize) -> Vec<Shingle<'_, S>> {
    if k == 0 || tokens.len() < k {
        return Vec::new();
    }
    tokens.windows(k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_shingles_empty_tokens() {
        let tokens: Vec<&str> = vec![];
        assert!(make_shingles(&tokens, 3).is_empty());
    }

    #[test]
    fn make_shingles_k_zero() {
        let tokens = vec!["a", "b", "c"];
        assert!(make_shingles(&tokens, 0).is_empty());
    }

    #[test]
    fn make_shingles_n_less_than_k() {
        let tokens = vec!["a", "b"];
        assert!(make_shingles(&tokens, 3).is_empty());
    }

    #[test]
    fn make_shingles_exact_k() {
        let tokens = vec!["a", "b", "c"];
        let shingles = make_shingles(&tokens, 3);
        assert_eq!(shingles, vec![&["a", "b", "c"][..]]);
    }

    #[test]
    fn make_shingles_produces_correct_count() {
        // n tokens and shingle size k give n - k + 1 shingles
        let tokens = vec!["a", "b", "c", "d", "e"];
        let shingles = make_shingles(&tokens, 3);
        assert_eq!(shingles.len(), 3);
        assert_eq!(shingles[0], &["a", "b", "c"]);
        assert_eq!(shingles[2], &["c", "d", "e"]);
    }

    #[test]
    fn make_shingles_keeps_repeats() {
        let tokens = vec!["much", "much", "much", "much"];
        let shingles = make_shingles(&tokens, 2);
        assert_eq!(shingles.len(), 3);
        assert!(shingles.iter().all(|s| *s == ["much", "much"]));
    }

    #[test]
    fn make_shingles_order_sensitive() {
        let forward = vec!["the", "quick", "brown"];
        let backward = vec!["brown", "quick", "the"];
        assert_ne!(make_shingles(&forward, 2), make_shingles(&backward, 2));
    }

    #[test]
    fn make_shingles_owned_strings() {
        let tokens: Vec<String> = (0..10).map(|i| format!("token{i}")).collect();
        let shingles = make_shingles(&tokens, 4);
        assert_eq!(shingles.len(), 7);
        assert_eq!(shingles[6][3], "token9");
    }
}
