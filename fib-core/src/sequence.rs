//! Lazy infinite Fibonacci sequence.

/// Cursor over the Fibonacci sequence starting at F(1) = 1, F(2) = 1.
///
/// Two consecutive values are all the state there is; each `next()` advances
/// the cursor one step and yields the new current value. The sequence is
/// infinite and non-restartable. Instances are fully independent, so a fresh
/// cursor per caller never races with anyone.
#[derive(Debug, Clone)]
pub struct Sequence {
    previous: u64,
    current: u64,
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        // Terms past F(93) wrap around u64 rather than panicking.
        let next = self.previous.wrapping_add(self.current);
        self.previous = self.current;
        self.current = next;
        Some(self.previous)
    }
}

/// Create a fresh sequence cursor positioned before the first term.
#[must_use]
pub fn sequence() -> Sequence {
    Sequence {
        previous: 0,
        current: 1,
    }
}
