//! LCS-ratio string similarity.
//!
//! The ratio is `2·LCS / (|a| + |b|)` over character counts, computed from the
//! longest common subsequence rather than edit distance. Subsequences need not
//! be contiguous, so order-scrambled inputs can still score high. The function
//! is pure and must reproduce bit-for-bit: the same value drives both match
//! filtering and the percentage shown to the user.

/// Length of the longest common subsequence of two character sequences.
///
/// Classic O(|a|·|b|) dynamic program, kept to two rolling rows.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized similarity ratio in `[0, 1]`.
///
/// Both inputs are case-folded first. Two empty strings are a degenerate
/// exact match (1.0); exactly one empty string scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    2.0 * lcs_length(&a, &b) as f64 / (len_a + len_b) as f64
}

/// Rounds to 2 decimal places, the precision surfaced across the boundary.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
