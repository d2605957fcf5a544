//! Phase orchestration.
//!
//! Phases run in a fixed order, each gated on the target cap:
//! seed -> leet -> pairwise -> phone -> symbols -> extra separators.
//! Every insertion goes through one [`Collector`] that owns the global
//! dedup set, so a candidate accepted by an earlier phase is never repeated.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use zeroize::Zeroize;

use super::{
    DEFAULT_TARGET_COUNT, EXTRA_SEPARATOR_CAP, MAX_SYMBOLS, PAIRWISE_CAP, SYMBOL_CHARS,
    UNBOUNDED_TARGET,
    base_permutations, inject_symbols, leet_variants, parse_prob_weights,
};
use crate::error::{GenerateError, ReserveExt};
use crate::profile::{
    PhoneFragment, Profile, current_year, expand_profile_tokens, normalize, phone_fragments,
    year_set,
};

const SEED_RANGE: std::ops::RangeInclusive<u64> = 1..=1_000_000_000;

/// Knobs for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub use_leet: bool,
    pub use_symbols: bool,
    /// Clamped to [`MAX_SYMBOLS`].
    pub max_symbols: usize,
    /// Zero means unbounded, capped at [`UNBOUNDED_TARGET`].
    pub target_count: usize,
    /// Fresh seed per run when `None`.
    pub random_seed: Option<u64>,
    /// Comma-separated weights for symbol counts `0..=max_symbols`.
    pub symbol_weights: Option<String>,
    /// Store candidates as produced instead of normalized; dedup is then on
    /// the exact string, so separators, leet digits and symbols survive.
    pub keep_symbols: bool,
    /// Calendar year used for age arithmetic. Defaults to the local year.
    pub reference_year: Option<i32>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            use_leet: true,
            use_symbols: false,
            max_symbols: 2,
            target_count: 5000,
            random_seed: None,
            symbol_weights: None,
            keep_symbols: false,
            reference_year: None,
        }
    }
}

impl GenerateOptions {
    /// Effective cap on the result length.
    pub fn cap(&self) -> usize {
        match self.target_count {
            0 => UNBOUNDED_TARGET,
            n => n,
        }
    }

    /// `max_symbols` clamped to [`MAX_SYMBOLS`].
    pub fn symbol_limit(&self) -> usize {
        self.max_symbols.min(MAX_SYMBOLS)
    }
}

/// Parse a free-form target count; anything unusable becomes
/// [`DEFAULT_TARGET_COUNT`].
pub fn parse_target_count(raw: &str) -> usize {
    match raw.trim().replace(',', "").parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_TARGET_COUNT),
        _ => DEFAULT_TARGET_COUNT,
    }
}

// ============================================================================
// Result
// ============================================================================

/// Ordered, unique candidates plus the seed that produced them.
/// Contents are zeroized on drop.
#[derive(Debug)]
pub struct Wordlist {
    words: Vec<String>,
    seed: u64,
}

impl Wordlist {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Seed to pass back as `random_seed` to replay this run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// First `lines` candidates.
    pub fn preview(&self, lines: usize) -> &[String] {
        &self.words[..self.words.len().min(lines)]
    }

    /// One candidate per line, newline-terminated, in generation order.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), GenerateError> {
        super::output::write_file(path.as_ref(), &self.words)
    }
}

impl Drop for Wordlist {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Build the wordlist for `profile`.
///
/// Malformed numeric inputs never fail; only allocation failure and
/// unexpected internal faults are reported. No partial result is returned
/// on error.
pub fn generate(profile: &Profile, options: &GenerateOptions) -> Result<Wordlist, GenerateError> {
    let seed = options
        .random_seed
        .unwrap_or_else(|| rand::rng().random_range(SEED_RANGE));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(profile, options, seed)));
    match outcome {
        Ok(result) => result.map(|words| Wordlist { words, seed }),
        Err(payload) => Err(GenerateError::Internal(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected internal error".to_string())
}

fn run(profile: &Profile, options: &GenerateOptions, seed: u64) -> Result<Vec<String>, GenerateError> {
    let year = options.reference_year.unwrap_or_else(current_year);
    let tokens = expand_profile_tokens(profile);
    let phones = phone_fragments(profile);
    let years = year_set(profile, year);

    let mut base = base_permutations(&tokens, &years, &phones, true);
    if base.is_empty() {
        base = tokens.clone();
    }

    info!(
        seed,
        tokens = tokens.len(),
        phones = phones.len(),
        years = years.len(),
        base = base.len(),
        cap = options.cap(),
        "starting generation"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    base.shuffle(&mut rng);

    let weights = options
        .symbol_weights
        .as_deref()
        .and_then(|text| parse_prob_weights(text, options.symbol_limit()));
    if options.use_symbols && options.symbol_weights.is_some() && weights.is_none() {
        debug!("symbol weights unusable, sampling counts uniformly");
    }

    let mut phases = Phases {
        options,
        order: base,
        phones,
        weights,
        rng,
        out: Collector::new(options.cap(), options.keep_symbols),
    };

    let mut phase = Phase::Seed;
    while phase != Phase::Done {
        let before = phases.out.len();
        if phases.enabled(phase) {
            phases.run(phase)?;
        }
        debug!(?phase, added = phases.out.len() - before, total = phases.out.len(), "phase complete");
        phase = phase.next();
    }

    Ok(phases.out.finish())
}

// ============================================================================
// Phases
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seed,
    Leet,
    Pairwise,
    Phone,
    Symbols,
    ExtraSeparators,
    Done,
}

impl Phase {
    fn next(self) -> Self {
        match self {
            Phase::Seed => Phase::Leet,
            Phase::Leet => Phase::Pairwise,
            Phase::Pairwise => Phase::Phone,
            Phase::Phone => Phase::Symbols,
            Phase::Symbols => Phase::ExtraSeparators,
            Phase::ExtraSeparators | Phase::Done => Phase::Done,
        }
    }
}

struct Phases<'a> {
    options: &'a GenerateOptions,
    /// Base permutations in this run's shuffled order.
    order: Vec<String>,
    phones: Vec<PhoneFragment>,
    weights: Option<Vec<f64>>,
    rng: StdRng,
    out: Collector,
}

impl Phases<'_> {
    fn enabled(&self, phase: Phase) -> bool {
        match phase {
            Phase::Seed => true,
            Phase::Leet => self.options.use_leet,
            Phase::Pairwise | Phase::ExtraSeparators => !self.out.is_full(),
            Phase::Phone => !self.phones.is_empty() && !self.out.is_full(),
            Phase::Symbols => self.options.use_symbols && !self.out.is_full(),
            Phase::Done => false,
        }
    }

    fn run(&mut self, phase: Phase) -> Result<(), GenerateError> {
        match phase {
            Phase::Seed => self.seed(),
            Phase::Leet => self.leet(),
            Phase::Pairwise => {
                let pairs = pair_joins(&self.order, &[""], PAIRWISE_CAP, &mut self.rng)?;
                self.out.extend_until_full(&pairs)
            }
            Phase::Phone => self.phone(),
            Phase::Symbols => self.symbols(),
            Phase::ExtraSeparators => {
                let pairs = pair_joins(&self.order, &[".", "_"], EXTRA_SEPARATOR_CAP, &mut self.rng)?;
                self.out.extend_until_full(&pairs)
            }
            Phase::Done => Ok(()),
        }
    }

    fn seed(&mut self) -> Result<(), GenerateError> {
        self.out.extend_until_full(&self.order)
    }

    fn leet(&mut self) -> Result<(), GenerateError> {
        for word in &self.order {
            if self.out.is_full() {
                break;
            }
            if let Some(leet) = leet_variants(word) {
                self.out.push(&leet)?;
            }
        }
        Ok(())
    }

    // Fragment and last4 go in together; the final truncation absorbs the
    // one-entry overshoot this allows.
    fn phone(&mut self) -> Result<(), GenerateError> {
        for phone in &self.phones {
            if self.out.is_full() {
                break;
            }
            self.out.push(phone.as_str())?;
            self.out.push(phone.last4())?;
        }
        Ok(())
    }

    fn symbols(&mut self) -> Result<(), GenerateError> {
        let mut seeds = Vec::new();
        seeds.try_reserve(self.out.len()).or_oom("collecting symbol seeds")?;
        seeds.extend(self.out.accepted().iter().cloned());
        seeds.shuffle(&mut self.rng);

        let max = self.options.symbol_limit();
        let weights = self.weights.as_deref();

        for seed in &seeds {
            if self.out.is_full() {
                break;
            }
            let variants = inject_symbols(seed, max, SYMBOL_CHARS, &mut self.rng, weights);
            self.out.extend_until_full(&variants)?;

            if self.options.use_leet
                && !self.out.is_full()
                && let Some(leet) = leet_variants(seed)
            {
                let variants = inject_symbols(&leet, max, SYMBOL_CHARS, &mut self.rng, weights);
                self.out.extend_until_full(&variants)?;
            }
        }
        Ok(())
    }
}

/// Ordered pairs of distinct positions in `order`, joined by each joiner,
/// stopped at `cap` and shuffled.
fn pair_joins(
    order: &[String],
    joiners: &[&str],
    cap: usize,
    rng: &mut StdRng,
) -> Result<Vec<String>, GenerateError> {
    let n = order.len();
    let possible = n.saturating_mul(n.saturating_sub(1)).saturating_mul(joiners.len());
    let mut pairs = Vec::new();
    pairs.try_reserve(possible.min(cap)).or_oom("building pair products")?;

    'outer: for (i, a) in order.iter().enumerate() {
        for (j, b) in order.iter().enumerate() {
            if i == j {
                continue;
            }
            pairs.extend(joiners.iter().map(|sep| format!("{a}{sep}{b}")));
            if pairs.len() >= cap {
                break 'outer;
            }
        }
    }

    pairs.shuffle(rng);
    Ok(pairs)
}

// ============================================================================
// Collector
// ============================================================================

/// Global dedup set plus the accepted candidates in insertion order.
struct Collector {
    cap: usize,
    keep_symbols: bool,
    seen: HashSet<String>,
    accepted: Vec<String>,
}

impl Collector {
    fn new(cap: usize, keep_symbols: bool) -> Self {
        Self {
            cap,
            keep_symbols,
            seen: HashSet::new(),
            accepted: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.accepted.len()
    }

    fn is_full(&self) -> bool {
        self.accepted.len() >= self.cap
    }

    fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Insert unless empty or already seen. Does not check the cap.
    fn push(&mut self, candidate: &str) -> Result<bool, GenerateError> {
        let stored = if self.keep_symbols {
            candidate.to_string()
        } else {
            normalize(candidate)
        };
        if stored.is_empty() || self.seen.contains(&stored) {
            return Ok(false);
        }

        self.seen.try_reserve(1).or_oom("collecting candidates")?;
        self.accepted.try_reserve(1).or_oom("collecting candidates")?;
        self.seen.insert(stored.clone());
        self.accepted.push(stored);
        Ok(true)
    }

    fn extend_until_full(&mut self, candidates: &[String]) -> Result<(), GenerateError> {
        for candidate in candidates {
            if self.is_full() {
                break;
            }
            self.push(candidate)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<String> {
        if self.accepted.len() > self.cap {
            debug!(from = self.accepted.len(), to = self.cap, "truncating to target count");
            self.accepted.truncate(self.cap);
        }
        self.seen.clear();
        self.accepted
    }
}
