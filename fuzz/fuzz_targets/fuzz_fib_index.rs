//! Fuzz target: Fibonacci index parsing.
//!
//! Verifies that arbitrary path parameter strings never panic the parser;
//! rejections are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;

use fib_http::routes::parse_fib_index;

fuzz_target!(|data: &str| {
    if let Ok(n) = parse_fib_index(data) {
        // Acceptance implies a plain base-10 non-negative integer.
        assert!(data.trim_start_matches('+').chars().all(|c| c.is_ascii_digit()));
        let _ = n;
    }
});
