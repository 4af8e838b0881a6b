//! Three equivalent ways to sum the integers 1..=n

/// Running-total loop. `None` when the sum exceeds the u64 range.
pub fn sum_to_n_iterative(n: u64) -> Option<u64> {
    let mut sum: u64 = 0;
    for i in 1..=n {
        sum = sum.checked_add(i)?;
    }
    Some(sum)
}

/// Closed form n(n+1)/2, computed through u128 so the intermediate product
/// cannot wrap. `None` when the sum exceeds the u64 range.
pub fn sum_to_n_formula(n: u64) -> Option<u64> {
    let wide = u128::from(n) * (u128::from(n) + 1) / 2;
    u64::try_from(wide).ok()
}

/// Recursive definition. `None` when the sum exceeds the u64 range.
///
/// Depth grows linearly with `n`; very large inputs can exhaust the stack, so
/// callers should prefer the other variants beyond a few thousand.
pub fn sum_to_n_recursive(n: u64) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    n.checked_add(sum_to_n_recursive(n - 1)?)
}
