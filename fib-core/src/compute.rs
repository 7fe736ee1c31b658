//! Naive recursive Fibonacci computation.

/// Returns the nth Fibonacci number, conforming to the rule
/// F(n) = F(n-1) + F(n-2) with F(0) = 0 and F(1) = 1,
/// i.e. 0, 1, 1, 2, 3, 5, 8, 13, 21, 34...
///
/// Computed by naive double recursion, deliberately without memoization:
/// the exponential running time for large `n` is part of the contract.
/// Indices whose values exceed `u64` are unreachable at this cost.
#[must_use]
pub fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
