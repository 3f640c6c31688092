/// Recursive Fibonacci.
///
/// Deliberately unmemoized: the kernel measures raw call overhead.

/// Input used by the suite.
pub const DEFAULT_N: u32 = 35;

/// `fib(n)` by naive double recursion. Recursion depth is `n`.
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        return u64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

pub fn report_lines(n: u32, value: u64) -> Vec<String> {
    vec![format!("fib({}) = {}", n, value)]
}
