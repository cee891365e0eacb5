//! Reply generation for the FAQ assistant.

use std::time::Duration;

use tracing::debug;

use super::matcher::find_best_match;
use super::models::{builtin_faq, FaqEntry, DEFAULT_RESPONSES};

/// Chooses among fallback replies and typing delays.
///
/// `Seeded` draws from a reproducible RNG; `RoundRobin` cycles the fallback
/// replies in order and always waits the midpoint delay.
#[derive(Debug)]
pub enum ResponseSelector {
    RoundRobin { next: usize },
    Seeded(fastrand::Rng),
}

impl ResponseSelector {
    pub fn round_robin() -> Self {
        ResponseSelector::RoundRobin { next: 0 }
    }

    pub fn seeded(seed: u64) -> Self {
        ResponseSelector::Seeded(fastrand::Rng::with_seed(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::round_robin)
    }

    /// Index into a non-empty list of `len` options.
    pub fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            ResponseSelector::RoundRobin { next } => {
                let index = *next % len;
                *next = next.wrapping_add(1);
                index
            }
            ResponseSelector::Seeded(rng) => rng.usize(..len),
        }
    }

    pub fn delay_between(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        match self {
            ResponseSelector::RoundRobin { .. } => min + (max - min) / 2,
            ResponseSelector::Seeded(rng) => {
                let span = (max - min).as_millis() as u64;
                min + Duration::from_millis(rng.u64(..=span))
            }
        }
    }
}

pub struct FaqAssistant {
    entries: Vec<FaqEntry>,
    selector: ResponseSelector,
}

impl FaqAssistant {
    pub fn new(entries: Vec<FaqEntry>, selector: ResponseSelector) -> Self {
        Self { entries, selector }
    }

    /// Assistant over the site's built-in FAQ table.
    pub fn builtin(selector: ResponseSelector) -> Self {
        Self::new(builtin_faq(), selector)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn selector_mut(&mut self) -> &mut ResponseSelector {
        &mut self.selector
    }

    /// Answer for the input; a fallback reply when nothing matches.
    pub fn respond(&mut self, input: &str) -> String {
        if let Some(entry) = find_best_match(&self.entries, input) {
            debug!(category = %entry.category, "FAQ match");
            return entry.answer.clone();
        }

        let index = self.selector.pick(DEFAULT_RESPONSES.len());
        debug!(fallback = index, "No FAQ match; using default response");
        DEFAULT_RESPONSES[index].to_string()
    }
}
