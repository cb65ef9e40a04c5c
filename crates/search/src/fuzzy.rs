//! Approximate substring alignment and scoring primitives.

use unicode_segmentation::UnicodeSegmentation;

/// Placement of a pattern inside a text window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Single-character edits needed to turn the window into the pattern
    pub errors: usize,
    /// Character offset where the window starts
    pub start: usize,
}

/// Align `pattern` against every window of `text`.
///
/// Returns one alignment per possible window end, each holding the minimum
/// number of edits for a window ending there. Leading text is free, so the
/// pattern may match anywhere in the text.
///
/// # Arguments
/// * `pattern` - Lowercased query characters
/// * `text` - Lowercased field characters
pub fn alignments(pattern: &[char], text: &[char]) -> Vec<Alignment> {
    let m = pattern.len();
    let n = text.len();

    if m == 0 || n == 0 {
        return Vec::new();
    }

    // (cost, start) per column, two rows
    let mut prev: Vec<(usize, usize)> = (0..=n).map(|j| (0, j)).collect();
    let mut curr = vec![(0, 0); n + 1];

    for i in 1..=m {
        curr[0] = (i, 0);
        for j in 1..=n {
            let cost = if pattern[i - 1] == text[j - 1] { 0 } else { 1 };
            let diag = (prev[j - 1].0 + cost, prev[j - 1].1);
            let up = (prev[j].0 + 1, prev[j].1);
            let left = (curr[j - 1].0 + 1, curr[j - 1].1);

            let mut best = diag;
            if up.0 < best.0 {
                best = up;
            }
            if left.0 < best.0 {
                best = left;
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[1..]
        .iter()
        .map(|&(errors, start)| Alignment { errors, start })
        .collect()
}

/// Score an alignment; 0.0 is a perfect match at the expected location.
///
/// The score is the error ratio plus the distance from `location` scaled by
/// `distance`. A zero `distance` only accepts matches exactly at `location`.
pub fn alignment_score(alignment: Alignment, pattern_len: usize, location: usize, distance: usize) -> f64 {
    let accuracy = alignment.errors as f64 / pattern_len.max(1) as f64;
    let proximity = alignment.start.abs_diff(location);

    if distance == 0 {
        return if proximity == 0 { accuracy } else { 1.0 };
    }

    accuracy + proximity as f64 / distance as f64
}

/// Best (lowest) score for a pattern against a text, if any window exists.
pub fn best_score(pattern: &[char], text: &[char], location: usize, distance: usize) -> Option<f64> {
    alignments(pattern, text)
        .into_iter()
        .map(|a| alignment_score(a, pattern.len(), location, distance))
        .min_by(f64::total_cmp)
}

/// Length normalisation for a field value.
///
/// Longer values match more easily, so their scores are dampened by
/// `1 / sqrt(words)`, rounded to three decimals.
pub fn field_norm(text: &str) -> f64 {
    let words = text.unicode_words().count().max(1);
    let norm = 1.0 / (words as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
