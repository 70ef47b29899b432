use alloc::collections::VecDeque;
use rand::Rng;
use rand::rngs::SmallRng;

/// Uniform choice among a small set of candidates, the only randomness the carve consumes.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl RandomSource for SmallRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed list of choices, for reproducing exact wall layouts.
///
/// Each choice is reduced modulo the candidate count; once the list runs out every pick is `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedSource {
    choices: VecDeque<usize>,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            consumed: 0,
        }
    }

    /// How many picks have been made so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.consumed += 1;
        self.choices.pop_front().map_or(0, |choice| choice % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn scripted_source_wraps_and_falls_back_to_zero() {
        let mut source = ScriptedSource::new([1, 5]);
        assert_eq!(source.pick(3), 1);
        assert_eq!(source.pick(3), 2);
        assert_eq!(source.pick(3), 0);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    fn seeded_rng_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for len in 1..=4 {
            for _ in 0..64 {
                assert!(rng.pick(len) < len);
            }
        }
    }
}
