//! Pairwise name similarity.

/// Minimum `1 - distance / max_len` for two names to count as the same business.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Identical names must be longer than this to match.
const EXACT_MATCH_MIN_LEN: usize = 3;

/// Both names must be longer than this for substring containment to count.
const CONTAINMENT_MIN_LEN: usize = 4;

/// Both names must be at least this long for the edit-distance ratio to apply.
const EDIT_DISTANCE_MIN_LEN: usize = 3;

/// Decides whether two normalized names likely refer to the same business.
///
/// Checks run in order and the first hit wins:
///
/// 1. **Exact match** of names longer than two characters
/// 2. **Containment**: both longer than three characters and one contains the other
/// 3. **Edit distance**: both at least three characters and
///    `1 - levenshtein / max_len >= SIMILARITY_THRESHOLD`
///
/// The length floors keep short leftovers of stopword removal from matching
/// everything. Lengths are counted in characters. The relation is symmetric.
pub fn are_similar(a: &str, b: &str) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if a == b && len_a >= EXACT_MATCH_MIN_LEN {
        return true;
    }

    if len_a >= CONTAINMENT_MIN_LEN
        && len_b >= CONTAINMENT_MIN_LEN
        && (a.contains(b) || b.contains(a))
    {
        return true;
    }

    if len_a >= EDIT_DISTANCE_MIN_LEN && len_b >= EDIT_DISTANCE_MIN_LEN {
        let distance = levenshtein(a, b);
        let max_len = len_a.max(len_b);
        let similarity = 1.0 - distance as f64 / max_len as f64;
        return similarity >= SIMILARITY_THRESHOLD;
    }

    false
}

/// Levenshtein edit distance between two strings, counted over characters.
///
/// Uses the full `(m + 1) x (n + 1)` dynamic-programming table with unit cost
/// for insertion, deletion and substitution.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }

    dp[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_reference_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abcd"), 4);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_levenshtein_counts_characters_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn test_levenshtein_matches_reference_implementation() {
        let words = [
            "golden spoon",
            "golden spon",
            "blue moon",
            "starlight bakery",
            "starlite bakery",
            "harbour view",
            "harbor view",
            "",
            "x",
        ];

        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_exact_match_floor() {
        assert!(!are_similar("ab", "ab"));
        assert!(!are_similar("", ""));
        assert!(are_similar("abc", "abc"));
    }

    #[test]
    fn test_containment() {
        assert!(are_similar("starlight bakery", "starlight"));
        assert!(are_similar("starlight", "starlight bakery"));
    }

    #[test]
    fn test_containment_requires_both_longer_than_three() {
        // "moon" is contained but "moo" is too short for containment,
        // and the edit-distance ratio 1 - 1/4 = 0.75 is below threshold.
        assert!(!are_similar("moon", "moo"));
        // Short fragment inside a long name is not enough either.
        assert!(!are_similar("sun", "sunrise yoga studio"));
    }

    #[test]
    fn test_edit_distance_ratio() {
        // 1 edit over 12 chars
        assert!(are_similar("harbor view", "harbour view"));
        // 1 edit over 5 chars is exactly 0.8
        assert!(are_similar("pizza", "pizze"));
        // 3 edits over 5 chars is 0.4
        assert!(!are_similar("pizza", "pasta"));
        assert!(!are_similar("blue moon", "golden spoon"));
    }

    #[test]
    fn test_edit_distance_needs_three_characters() {
        assert!(!are_similar("ab", "abc"));
        assert!(!are_similar("xy", "xz"));
    }

    #[test]
    fn test_symmetry() {
        let names = [
            "golden spoon",
            "golden spoons",
            "starlight",
            "starlight bakery",
            "pizza",
            "pizze",
            "abc",
            "ab",
            "",
            "moon",
            "moo",
        ];

        for a in names {
            for b in names {
                assert_eq!(are_similar(a, b), are_similar(b, a), "{a:?} vs {b:?}");
            }
        }
    }
}
