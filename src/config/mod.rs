//! Configuration management for draw-idea
//!
//! - **options**: GenerationOptions read by the composer on every call
//! - **settings**: Settings persisted as JSON between runs

pub mod options;
pub mod settings;

// Re-export commonly used types
pub use options::GenerationOptions;
pub use settings::Settings;
