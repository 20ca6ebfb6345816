//! Runtime state of one program run
//!
//! The session owns the ambient random generator and hands it to the
//! composer explicitly. Daily prompts never borrow it.

use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::GenerationOptions;
use crate::favorites::{FavoriteRecord, FavoritesStore};
use crate::pools::PoolRegistry;
use crate::prompt::{compose, daily_prompt};

pub struct Session<'a, R: Rng = StdRng> {
    registry: &'a PoolRegistry,
    options: GenerationOptions,
    rng: R,
    favorites: FavoritesStore,
    last_prompt: Option<String>,
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn new(
        registry: &'a PoolRegistry,
        options: GenerationOptions,
        rng: R,
        favorites: FavoritesStore,
    ) -> Self {
        Self {
            registry,
            options,
            rng,
            favorites,
            last_prompt: None,
        }
    }

    pub fn registry(&self) -> &'a PoolRegistry {
        self.registry
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GenerationOptions {
        &mut self.options
    }

    pub fn last_prompt(&self) -> Option<&str> {
        self.last_prompt.as_deref()
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Ordinary generation from the ambient generator
    pub fn generate(&mut self) -> &str {
        let prompt = compose(self.registry, &self.options, &mut self.rng);
        info!(theme = %self.options.theme, mode = %self.options.mode, "Generated prompt");
        self.last_prompt.insert(prompt)
    }

    /// Prompt of the day for `date`; leaves the ambient generator untouched
    pub fn daily(&mut self, date: NaiveDate) -> &str {
        let prompt = daily_prompt(self.registry, &self.options, date);
        info!(date = %date, theme = %self.options.theme, mode = %self.options.mode, "Generated prompt of the day");
        self.last_prompt.insert(prompt)
    }

    /// Save the last prompt with the current theme and mode
    /// Returns false when nothing has been generated yet.
    pub fn save_last(&mut self) -> Result<bool> {
        let Some(prompt) = self.last_prompt.clone() else {
            return Ok(false);
        };
        let record = FavoriteRecord::new(prompt, self.options.theme.clone(), self.options.mode.name());
        self.favorites.add(record)?;
        Ok(true)
    }

    pub fn clear_favorites(&mut self) -> Result<()> {
        self.favorites.clear()
    }
}
