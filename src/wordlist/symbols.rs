//! Probabilistic symbol injection.
//!
//! Each trial draws an insertion count `k` in `0..=max_symbols`, then `k`
//! symbols and `k` gap positions (repeats allowed). Sampling is bounded by
//! trial count and by [`MAX_VARIANTS_PER_WORD`]; it never enumerates.

use std::collections::HashSet;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;

use super::{MAX_TRIALS, MAX_VARIANTS_PER_WORD, MIN_TRIALS, TRIALS_PER_SYMBOL};

/// Parse one weight per insertion count `0..=max_symbols`.
///
/// Returns the weights normalized to sum to one, or `None` (uniform
/// fallback) for empty input, a wrong element count, negative or
/// non-numeric entries, or all-zero weights.
pub fn parse_prob_weights(text: &str, max_symbols: usize) -> Option<Vec<f64>> {
    let parts: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() || Some(parts.len()) != max_symbols.checked_add(1) {
        return None;
    }

    let weights = parts
        .iter()
        .map(|p| p.parse::<f64>().ok().filter(|w| w.is_finite() && *w >= 0.0))
        .collect::<Option<Vec<f64>>>()?;

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }
    Some(weights.into_iter().map(|w| w / total).collect())
}

/// Distribution over the number of symbols inserted per trial.
enum CountDistribution {
    Uniform(usize),
    Weighted(WeightedIndex<f64>),
}

impl CountDistribution {
    fn new(max_symbols: usize, weights: Option<&[f64]>) -> Self {
        weights
            .filter(|w| Some(w.len()) == max_symbols.checked_add(1))
            .and_then(|w| WeightedIndex::new(w.iter().copied()).ok())
            .map_or(Self::Uniform(max_symbols), Self::Weighted)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Self::Uniform(max) => rng.random_range(0..=*max),
            Self::Weighted(dist) => dist.sample(rng),
        }
    }
}

/// Number of independent trials for a given maximum.
pub fn trial_count(max_symbols: usize) -> usize {
    max_symbols
        .saturating_mul(TRIALS_PER_SYMBOL)
        .clamp(MIN_TRIALS, MAX_TRIALS)
}

/// Sample distinct symbol-injected variants of `word`, in the order they
/// were first drawn.
pub fn inject_symbols<R: Rng + ?Sized>(
    word: &str,
    max_symbols: usize,
    symbols: &[char],
    rng: &mut R,
    weights: Option<&[f64]>,
) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let max_symbols = if symbols.is_empty() { 0 } else { max_symbols };
    let counts = CountDistribution::new(max_symbols, weights);

    let mut variants = Vec::new();
    let mut seen = HashSet::new();

    for _ in 0..trial_count(max_symbols) {
        let k = counts.sample(rng);
        let candidate = if k == 0 {
            word.to_string()
        } else {
            splice(&chars, k, symbols, rng)
        };

        if seen.insert(candidate.clone()) {
            variants.push(candidate);
            if variants.len() >= MAX_VARIANTS_PER_WORD {
                break;
            }
        }
    }

    variants
}

/// Insert `k` random symbols into random gaps of `chars`. Symbols sharing a
/// gap keep their sampling order.
fn splice<R: Rng + ?Sized>(chars: &[char], k: usize, symbols: &[char], rng: &mut R) -> String {
    let picked: Vec<char> = (0..k)
        .filter_map(|_| symbols.choose(rng).copied())
        .collect();
    let positions: Vec<usize> = (0..k).map(|_| rng.random_range(0..=chars.len())).collect();

    let mut gaps: Vec<Vec<char>> = vec![Vec::new(); chars.len() + 1];
    for (&pos, &sym) in positions.iter().zip(&picked) {
        gaps[pos].push(sym);
    }

    let mut out = String::with_capacity(chars.len() + k);
    for (i, gap) in gaps.iter().enumerate() {
        out.extend(gap);
        if let Some(&c) = chars.get(i) {
            out.push(c);
        }
    }
    out
}
