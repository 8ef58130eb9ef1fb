use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use crate::{Error, Result};

/// Line offset added to every draw counter.
pub const SEED: usize = 200;

/// Value returned for indices past the end of the sequence.
pub const FALLBACK: u32 = 1804289383;

/// The burst source: an ordered list of non-negative integers read once
/// and then addressed by 1-based line index.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSource {
    values: Vec<u32>,
    seed: usize,
}

impl RandomSource {
    pub fn new(values: Vec<u32>) -> Self {
        RandomSource { values, seed: SEED }
    }

    /// Replaces the line offset added to each draw counter.
    pub fn with_seed(mut self, seed: usize) -> Self {
        self.seed = seed;
        self
    }

    /// Reads a newline-delimited sequence, one value per line.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::DrawSourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::parse(&contents)?;
        log::info!("loaded {} draws from {}", source.values.len(), path.display());
        Ok(source)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let values = contents
            .trim_end()
            .lines()
            .enumerate()
            .map(|(number, line)| {
                line.trim()
                    .parse::<u32>()
                    .map_err(|_| Error::MalformedDrawSequence {
                        line: number + 1,
                        value: line.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RandomSource::new(values))
    }

    /// The line index used for the `counter`-th draw of a run.
    pub fn index(&self, counter: usize) -> usize {
        self.seed + counter
    }

    /// The value on line `index` (1-based).
    pub fn try_value(&self, index: usize) -> Result<u32> {
        index
            .checked_sub(1)
            .and_then(|position| self.values.get(position))
            .copied()
            .ok_or_else(|| Error::DrawSourceExhausted {
                index,
                len: self.values.len(),
            })
    }

    /// Like [`RandomSource::try_value`], but substitutes [`FALLBACK`] when
    /// the index is out of range.
    pub fn value(&self, index: usize) -> u32 {
        self.try_value(index).unwrap_or_else(|err| {
            log::debug!("{err}, using {FALLBACK}");
            FALLBACK
        })
    }

    /// A CPU burst length in `1..=bound`.
    pub fn burst(&self, index: usize, bound: NonZeroU32) -> u32 {
        1 + self.value(index) % bound.get()
    }
}

/// Hands out consecutive draws for one simulation run.
#[derive(Debug)]
pub struct Draws<'a> {
    source: &'a RandomSource,
    counter: usize,
}

impl<'a> Draws<'a> {
    pub fn new(source: &'a RandomSource) -> Self {
        Draws { source, counter: 0 }
    }

    /// Draws the next CPU burst length.
    pub fn next_burst(&mut self, bound: NonZeroU32) -> u32 {
        let index = self.source.index(self.counter);
        self.counter += 1;
        self.source.burst(index, bound)
    }

    /// The number of draws taken so far.
    pub fn taken(&self) -> usize {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bound(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn burst_is_one_plus_value_mod_bound() {
        let source = RandomSource::new(vec![3, 10, 0]);
        assert_eq!(source.burst(1, bound(5)), 4);
        assert_eq!(source.burst(2, bound(5)), 1);
        assert_eq!(source.burst(3, bound(5)), 1);
    }

    #[test]
    fn index_adds_seed() {
        let source = RandomSource::new(vec![]);
        assert_eq!(source.index(0), SEED);
        assert_eq!(source.clone().with_seed(1).index(4), 5);
    }

    #[test]
    fn out_of_range_falls_back() {
        let source = RandomSource::new(vec![7]);
        assert_eq!(source.value(2), FALLBACK);
        assert_eq!(source.value(2), FALLBACK);
        assert_eq!(source.value(0), FALLBACK);
        assert!(matches!(
            source.try_value(2),
            Err(Error::DrawSourceExhausted { index: 2, len: 1 })
        ));
        assert_eq!(source.burst(9, bound(5)), 1 + FALLBACK % 5);
    }

    #[test]
    fn draws_are_pure() {
        let source = RandomSource::new(vec![8, 13, 21]);
        let first: Vec<u32> = (1..=3).map(|i| source.burst(i, bound(4))).collect();
        let second: Vec<u32> = (1..=3).map(|i| source.burst(i, bound(4))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn draws_walk_the_sequence_from_the_seed() {
        let source = RandomSource::new(vec![0, 0, 3, 1]).with_seed(3);
        let mut draws = Draws::new(&source);
        assert_eq!(draws.next_burst(bound(5)), 4);
        assert_eq!(draws.next_burst(bound(5)), 2);
        assert_eq!(draws.next_burst(bound(5)), 1 + FALLBACK % 5);
        assert_eq!(draws.taken(), 3);
    }

    #[test]
    fn parses_lines() {
        let source = RandomSource::parse("1804289383\n846930886\n1681692777\n\n").unwrap();
        assert_eq!(source.value(3), 1681692777);
        assert!(matches!(
            source.try_value(4),
            Err(Error::DrawSourceExhausted { index: 4, len: 3 })
        ));
    }

    #[test]
    fn rejects_garbage() {
        let err = RandomSource::parse("12\n\n7\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDrawSequence { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = RandomSource::open("/definitely/not/here/random-numbers.txt").unwrap_err();
        assert!(matches!(err, Error::DrawSourceUnavailable { .. }));
    }
}
