//! Eager and lazy sequence producers.
//!
//! Every producer here comes in two flavors that yield the same values in the
//! same order:
//!
//! - **eager** builds the whole result in a `Vec` before returning it;
//! - **lazy** returns an iterator that computes one element per `next()`.
//!
//! The lazy flavor only saves memory if the consumer handles each element and
//! drops it. Collecting a lazy iterator ends with the same allocation the
//! eager flavor makes up front.

use std::iter::FusedIterator;

/// Materialize `0..count` in memory.
///
/// ```
/// use arukay_core::eager_range;
///
/// assert_eq!(eager_range(4), vec![0, 1, 2, 3]);
/// assert!(eager_range(0).is_empty());
/// ```
#[must_use]
pub fn eager_range(count: u64) -> Vec<u64> {
    let mut values = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    for value in 0..count {
        values.push(value);
    }
    values
}

/// Produce `0..count` one value at a time.
///
/// ```
/// use arukay_core::lazy_range;
///
/// let mut run = lazy_range(2);
/// assert_eq!(run.next(), Some(0));
/// assert_eq!(run.next(), Some(1));
/// assert_eq!(run.next(), None);
/// ```
#[must_use]
pub const fn lazy_range(count: u64) -> LazyRange {
    LazyRange {
        next: 0,
        end: count,
    }
}

/// Single-pass iterator over `0..end`.
///
/// Not `Clone`: once a run has been consumed it cannot be replayed, only
/// produced again with [`lazy_range`].
#[derive(Debug)]
pub struct LazyRange {
    next: u64,
    end: u64,
}

impl LazyRange {
    /// Values not yet produced.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.end - self.next
    }
}

impl Iterator for LazyRange {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for LazyRange {}

/// Uppercase every word, all at once.
#[must_use]
pub fn uppercase_eager(words: &[&str]) -> Vec<String> {
    let mut result = Vec::with_capacity(words.len());
    for word in words {
        result.push(word.to_uppercase());
    }
    result
}

/// Uppercase each word as it is pulled.
pub fn uppercase_lazy<'a>(words: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    words.iter().map(|word| word.to_uppercase())
}

/// Trim every line, all at once.
#[must_use]
pub fn trimmed_lines_eager(lines: &[&str]) -> Vec<String> {
    let mut content = Vec::with_capacity(lines.len());
    for line in lines {
        content.push(line.trim().to_owned());
    }
    content
}

/// Trim each line as it is pulled.
pub fn trimmed_lines_lazy<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    lines.iter().map(|line| line.trim().to_owned())
}
