//! Counting helpers.
//!
//! Exact, overflow-checked factorials, binomial coefficients and permutation
//! counts. Every function returns `None` when the result does not fit in `u64`.

/// Exact factorial. Returns `None` if `n > 20` (overflow for u64).
pub fn factorial(n: u64) -> Option<u64> {
    let mut result = 1u64;
    for i in 2..=n {
        result = result.checked_mul(i)?;
    }
    Some(result)
}

/// Exact binomial coefficient C(n, k). Zero when `k > n`.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1); the product can
        // exceed u64 even when the quotient does not
        let step = u128::from(result) * u128::from(n - i) / u128::from(i + 1);
        result = u64::try_from(step).ok()?;
    }
    Some(result)
}

/// Combinations with replacement, C(n + k - 1, k).
pub fn binomial_with_replacement(n: u64, k: u64) -> Option<u64> {
    if k == 0 {
        return Some(1);
    }
    if n == 0 {
        return Some(0);
    }
    binomial(n.checked_add(k - 1)?, k)
}

/// Exact permutations P(n, k) = n! / (n-k)!. Zero when `k > n`.
pub fn permutations(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let mut result = 1u64;
    for i in 0..k {
        result = result.checked_mul(n - i)?;
    }
    Some(result)
}
