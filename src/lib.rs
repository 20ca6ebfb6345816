//! Randomized art-drawing prompts from themed vocabulary pools.
//!
//! The engine is a set of pure functions over an explicit random generator:
//!
//! ```
//! use draw_idea::config::GenerationOptions;
//! use draw_idea::pools::PoolRegistry;
//! use draw_idea::prompt::{compose, daily_prompt, today};
//!
//! let registry = PoolRegistry::builtin();
//! let options = GenerationOptions::default();
//! let prompt = compose(registry, &options, &mut rand::rng());
//! assert!(!prompt.is_empty());
//!
//! // Same date, same options: same text
//! let date = today();
//! assert_eq!(
//!     daily_prompt(registry, &options, date),
//!     daily_prompt(registry, &options, date),
//! );
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod favorites;
pub mod menu;
pub mod pools;
pub mod prompt;
pub mod session;
