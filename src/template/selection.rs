//! Strategies for choosing one value out of a fixed candidate list.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

/// Picks the next value from an ordered list of candidates.
pub trait ValueSelector {
    /// Return one of `candidates`, or `None` when the list is empty.
    fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str>;
}

/// Uniform random selection.
///
/// The default generator is the thread-local RNG, seeded from OS entropy,
/// so repeated invocations vary their output.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = ThreadRng> {
    rng: R,
}

impl RandomSelector<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Use a caller-supplied generator (e.g. a seeded one).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueSelector for RandomSelector<R> {
    fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.choose(&mut self.rng).map(String::as_str)
    }
}

/// Deterministic selector that walks the candidates by index, wrapping around.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct SequenceSelector {
    next: usize,
}

#[cfg(test)]
impl SequenceSelector {
    pub(crate) fn starting_at(next: usize) -> Self {
        Self { next }
    }
}

#[cfg(test)]
impl ValueSelector for SequenceSelector {
    fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str> {
        if candidates.is_empty() {
            return None;
        }
        let value = &candidates[self.next % candidates.len()];
        self.next += 1;
        Some(value.as_str())
    }
}
