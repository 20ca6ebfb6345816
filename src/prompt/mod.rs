//! Prompt composition engine
//!
//! - **merge**: universal + theme pool for one request
//! - **select**: uniform random pick of a single field
//! - **compose**: fragment drafting and final assembly
//! - **mode**: per-mode post-processing of the drafted fragments
//! - **daily**: date-derived seed and the "prompt of the day"

pub mod compose;
pub mod daily;
pub mod merge;
pub mod mode;
pub mod select;

// Re-export commonly used items
pub use compose::compose;
pub use daily::{daily_prompt, daily_seed, daily_seed_today, today};
pub use mode::Mode;
