//! Statistical delimiter sniffing.
//!
//! Scores each candidate delimiter by how consistently it splits the sample
//! lines: a real field separator appears the same number of times on every
//! row. Space is scored like the others and then rejected, because prose
//! columns make it win for the wrong reason.
//!
//! Two entry points share the scoring: [`sniff_delimiter`] over the usual
//! candidate set for the fast path, and [`sniff_any_delimiter`] over every
//! punctuation byte present in the sample, for the loader's last resort.

use std::collections::BTreeSet;

use crate::error::SniffError;

/// Bytes of file prefix the detector is expected to work from.
pub const SAMPLE_BYTES: usize = 8192;

const CANDIDATES: &[u8] = b",;\t| ";
const MAX_SAMPLE_LINES: usize = 20;

/// Infer the field separator from a decoded file sample.
///
/// # Errors
///
/// `SniffError::NoCandidate` when no candidate recurs across the sample,
/// `SniffError::Degenerate` when the winner is a whitespace separator the
/// loader must not trust. Both are recovered by the caller.
pub fn sniff_delimiter(sample: &str) -> Result<u8, SniffError> {
    let lines = sample_lines(sample);
    pick_winner(score_candidates(&lines, CANDIDATES.iter().copied()))
}

/// Exhaustive inference for files no usual delimiter fits: every ASCII
/// punctuation byte occurring in the sample competes on the same
/// consistency score. Quote characters are excluded, they mark field
/// boundaries rather than separate fields.
///
/// # Errors
///
/// Same as [`sniff_delimiter`].
pub fn sniff_any_delimiter(sample: &str) -> Result<u8, SniffError> {
    let lines = sample_lines(sample);
    let candidates: BTreeSet<u8> = lines
        .iter()
        .flat_map(|line| line.bytes())
        .filter(|&b| is_separator_candidate(b))
        .collect();
    pick_winner(score_candidates(&lines, candidates.into_iter()))
}

fn is_separator_candidate(byte: u8) -> bool {
    byte == b'\t'
        || byte == b' '
        || (byte.is_ascii_punctuation() && byte != b'"' && byte != b'\'')
}

fn sample_lines(sample: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = sample
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_SAMPLE_LINES)
        .collect();
    // A bounded sample usually cuts the last line mid-row; it would skew
    // the consistency score.
    if !sample.ends_with('\n') && lines.len() > 1 {
        lines.pop();
    }
    lines
}

/// Score candidates by (lines with the modal count, occurrences per line),
/// lexicographically. Candidates absent from the first line are out.
fn score_candidates(
    lines: &[&str],
    candidates: impl Iterator<Item = u8>,
) -> Option<(u8, usize, usize)> {
    if lines.is_empty() {
        return None;
    }
    let mut best: Option<(u8, usize, usize)> = None;
    for candidate in candidates {
        let per_line: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == candidate).count())
            .collect();
        let expected = per_line[0];
        if expected == 0 {
            continue;
        }
        let consistent = per_line.iter().filter(|&&count| count == expected).count();
        let better = match best {
            None => true,
            Some((_, best_consistent, best_expected)) => {
                (consistent, expected) > (best_consistent, best_expected)
            }
        };
        if better {
            best = Some((candidate, consistent, expected));
        }
    }
    best
}

fn pick_winner(best: Option<(u8, usize, usize)>) -> Result<u8, SniffError> {
    match best {
        None => Err(SniffError::NoCandidate),
        Some((winner, _, _)) if winner == b' ' => Err(SniffError::Degenerate(winner as char)),
        Some((winner, _, _)) => Ok(winner),
    }
}
