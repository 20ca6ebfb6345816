//! Composition modes
//!
//! Each mode is one post-processing rule over the drafted fragments:
//! - **Standard**: keep everything
//! - **QuickSketch**: core plus at most one of style/mood; detail and constraint dropped
//! - **Challenge**: force a constraint and a detail whenever the pool has them

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GenerationOptions;
use crate::pools::{Field, Pool};
use crate::prompt::compose::Fragments;
use crate::prompt::select::pick;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Mode {
    #[serde(rename = "быстрый скетч")]
    #[value(name = "quick-sketch")]
    QuickSketch,
    #[default]
    #[serde(rename = "стандарт")]
    #[value(name = "standard")]
    Standard,
    #[serde(rename = "челлендж")]
    #[value(name = "challenge")]
    Challenge,
}

impl Mode {
    /// Menu order
    pub const ALL: [Mode; 3] = [Mode::QuickSketch, Mode::Standard, Mode::Challenge];

    /// Display name, also the persisted form
    pub fn name(self) -> &'static str {
        match self {
            Mode::QuickSketch => "быстрый скетч",
            Mode::Standard => "стандарт",
            Mode::Challenge => "челлендж",
        }
    }

    /// Apply this mode's rule to the drafted fragments
    pub fn apply<R: Rng + ?Sized>(
        self,
        fragments: Fragments,
        pool: &Pool,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Fragments {
        match self {
            Mode::Standard => fragments,
            Mode::QuickSketch => quick_sketch(fragments, options),
            Mode::Challenge => challenge(fragments, pool, rng),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core fragment plus a single extra: style if enabled and present, else mood
/// if enabled and present. Detail is never used as the extra.
pub fn quick_sketch(mut fragments: Fragments, options: &GenerationOptions) -> Fragments {
    let style = options
        .include_style
        .then(|| fragments.take(Field::Style))
        .flatten();
    let extra = style.or_else(|| {
        options
            .include_mood
            .then(|| fragments.take(Field::Mood))
            .flatten()
    });

    fragments.retain_core_only();
    if let Some(extra) = extra {
        fragments.push(extra.field, extra.value);
    }
    fragments
}

/// Append a constraint, then a detail, for whichever is missing. Toggles are
/// ignored; an empty pool field is simply left out.
pub fn challenge<R: Rng + ?Sized>(mut fragments: Fragments, pool: &Pool, rng: &mut R) -> Fragments {
    for field in [Field::Constraint, Field::Detail] {
        if fragments.contains(field) {
            continue;
        }
        if let Some(value) = pick(pool, field, rng) {
            fragments.push(field, value);
        }
    }
    fragments
}
