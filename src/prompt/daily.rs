//! "Prompt of the day"
//!
//! The seed is a plain sum of the character codes of the ISO date, so it is
//! stable for a calendar date. Dates whose strings are anagrams of each other
//! share a seed (2024-05-01 and 2024-01-05 both give 488).
//!
//! The daily prompt is drawn from its own freshly seeded generator. The
//! caller's ambient generator is never touched, so ordinary generation is
//! unaffected by asking for the daily prompt.

use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::GenerationOptions;
use crate::pools::PoolRegistry;
use crate::prompt::compose::compose;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn daily_seed(date: NaiveDate) -> u64 {
    date.format("%Y-%m-%d")
        .to_string()
        .chars()
        .map(u64::from)
        .sum()
}

/// Seed for the local calendar date
pub fn daily_seed_today() -> u64 {
    daily_seed(today())
}

pub fn daily_prompt(registry: &PoolRegistry, options: &GenerationOptions, date: NaiveDate) -> String {
    let seed = daily_seed(date);
    debug!(date = %date, seed = seed, "Composing prompt of the day");
    let mut rng = StdRng::seed_from_u64(seed);
    compose(registry, options, &mut rng)
}
