//! Distribution and rejection tests for suffix generation

use std::sync::Mutex;

use super::{ALPHABET, EntropySource, REJECTION_THRESHOLD, random_suffix, random_suffix_from};
use crate::error::{DocIdError, Result};

/// Replays a byte pattern in a loop and counts fill calls
struct ScriptedEntropy {
    pattern: Vec<u8>,
    state: Mutex<(usize, usize)>,
}

impl ScriptedEntropy {
    fn new(pattern: Vec<u8>) -> Self {
        Self {
            pattern,
            state: Mutex::new((0, 0)),
        }
    }

    fn calls(&self) -> usize {
        self.state.lock().unwrap().1
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        for b in buf.iter_mut() {
            *b = self.pattern[state.0 % self.pattern.len()];
            state.0 += 1;
        }
        state.1 += 1;
        Ok(())
    }
}

/// Returns only rejectable bytes for `ok_calls` fills, then fails
struct FlakyEntropy {
    ok_calls: usize,
    calls: Mutex<usize>,
}

impl EntropySource for FlakyEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls > self.ok_calls {
            return Err(DocIdError::EntropyUnavailable("device gone".to_string()));
        }
        buf.fill(0xFF);
        Ok(())
    }
}

fn index_of(c: char) -> usize {
    ALPHABET.iter().position(|&a| a as char == c).unwrap()
}

/// Chi-square statistic of observed counts against a flat expectation
fn chi_square(counts: &[usize], total: usize) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Accepted bytes map through `byte % 62`, rejected ones are skipped
#[test]
fn test_rejects_high_bytes() {
    let source = ScriptedEntropy::new(vec![248, 255, 250, 0, 61, 62, 247, 248]);
    let suffix = random_suffix_from(&source, 4).unwrap();
    assert_eq!(suffix, "a9a9");
    assert_eq!(source.calls(), 1);
}

/// A block of only rejected bytes forces another read
#[test]
fn test_rereads_after_full_rejection() {
    let source = ScriptedEntropy::new(vec![250, 251, 252, 253, 1, 2, 3, 4]);
    let suffix = random_suffix_from(&source, 2).unwrap();
    assert_eq!(suffix, "bc");
    assert_eq!(source.calls(), 2);
}

/// Never accepts a byte at or above the threshold, whatever the pattern
#[test]
fn test_threshold_boundary() {
    let source = ScriptedEntropy::new(vec![REJECTION_THRESHOLD, REJECTION_THRESHOLD - 1]);
    let suffix = random_suffix_from(&source, 8).unwrap();
    // 247 % 62 == 61
    assert_eq!(suffix, "99999999");
}

/// Feeding every byte value once yields every symbol exactly four times
#[test]
fn test_exact_uniformity_over_byte_range() {
    let source = ScriptedEntropy::new((0..=255).collect());
    let suffix = random_suffix_from(&source, 248).unwrap();

    let mut counts = [0usize; 62];
    for c in suffix.chars() {
        counts[index_of(c)] += 1;
    }
    assert!(counts.iter().all(|&c| c == 4), "counts: {:?}", counts);
}

#[test]
fn test_entropy_failure_propagates() {
    let source = FlakyEntropy {
        ok_calls: 0,
        calls: Mutex::new(0),
    };
    let err = random_suffix_from(&source, 10).unwrap_err();
    assert!(err.is_entropy_failure());
}

/// Failure after earlier blocks still yields no partial suffix
#[test]
fn test_entropy_failure_midway() {
    let source = FlakyEntropy {
        ok_calls: 3,
        calls: Mutex::new(0),
    };
    let result = random_suffix_from(&source, 16);
    assert!(matches!(result, Err(DocIdError::EntropyUnavailable(_))));
    assert_eq!(*source.calls.lock().unwrap(), 4);
}

#[test]
fn test_zero_length_reads_nothing() {
    let source = ScriptedEntropy::new(vec![0]);
    assert!(matches!(
        random_suffix_from(&source, 0),
        Err(DocIdError::InvalidArgument(_))
    ));
    assert_eq!(source.calls(), 0);
}

#[test]
fn test_alphabet_closure() {
    for len in 1..200 {
        let suffix = random_suffix(len).unwrap();
        assert_eq!(suffix.len(), len);
        assert!(
            suffix.bytes().all(|b| ALPHABET.contains(&b)),
            "bad suffix {}",
            suffix
        );
    }
}

/// Each position is uniform over the 62 symbols.
///
/// 61 degrees of freedom; 130 sits far beyond the 0.9999 quantile (~108),
/// so a correct generator essentially never trips it.
#[test]
fn test_chi_square_per_position() {
    const LEN: usize = 4;
    const TRIALS: usize = 31_000;

    let mut counts = vec![[0usize; 62]; LEN];
    for _ in 0..TRIALS {
        let suffix = random_suffix(LEN).unwrap();
        for (pos, c) in suffix.chars().enumerate() {
            counts[pos][index_of(c)] += 1;
        }
    }

    for (pos, position_counts) in counts.iter().enumerate() {
        let stat = chi_square(position_counts, TRIALS);
        assert!(stat < 130.0, "position {} chi-square {:.1}", pos, stat);
    }
}

/// The first symbol is independent of the second
#[test]
fn test_adjacent_positions_independent() {
    const TRIALS: usize = 62_000;

    // Bucket pairs by (first + second) mod 62, which is flat iff no coupling
    let mut counts = [0usize; 62];
    for _ in 0..TRIALS {
        let suffix: Vec<usize> = random_suffix(2).unwrap().chars().map(index_of).collect();
        counts[(suffix[0] + suffix[1]) % 62] += 1;
    }

    let stat = chi_square(&counts, TRIALS);
    assert!(stat < 130.0, "chi-square {:.1}", stat);
}
