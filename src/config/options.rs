//! Generation options
//!
//! Owned by the session, read by the composer at call time. Changing them
//! never affects prompts that were already generated.

use serde::{Deserialize, Serialize};

use crate::constants::themes;
use crate::pools::Field;
use crate::prompt::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Theme name; unknown names fall back to the universal pool
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default = "default_true")]
    pub include_style: bool,

    #[serde(default = "default_true")]
    pub include_mood: bool,

    /// Off by default, unlike the other toggles
    #[serde(default)]
    pub include_constraint: bool,

    #[serde(default = "default_true")]
    pub include_detail: bool,
}

fn default_theme() -> String {
    themes::UNIVERSAL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mode: Mode::default(),
            include_style: true,
            include_mood: true,
            include_constraint: false,
            include_detail: true,
        }
    }
}

impl GenerationOptions {
    /// Fields with a user toggle, in menu order
    pub const TOGGLES: [Field; 4] = [Field::Style, Field::Mood, Field::Constraint, Field::Detail];

    /// Whether `field` should be drawn. Core fields are always enabled.
    pub fn is_enabled(&self, field: Field) -> bool {
        match field {
            Field::Subject | Field::Action | Field::Setting => true,
            Field::Style => self.include_style,
            Field::Mood => self.include_mood,
            Field::Constraint => self.include_constraint,
            Field::Detail => self.include_detail,
        }
    }

    /// Flip the toggle for `field` and return its new value
    /// Returns None for core fields, which cannot be disabled.
    pub fn toggle(&mut self, field: Field) -> Option<bool> {
        let flag = match field {
            Field::Subject | Field::Action | Field::Setting => return None,
            Field::Style => &mut self.include_style,
            Field::Mood => &mut self.include_mood,
            Field::Constraint => &mut self.include_constraint,
            Field::Detail => &mut self.include_detail,
        };
        *flag = !*flag;
        Some(*flag)
    }

    /// Set the toggle for `field` when `value` is given
    pub fn set(&mut self, field: Field, value: Option<bool>) {
        if let Some(value) = value
            && self.is_enabled(field) != value
        {
            self.toggle(field);
        }
    }
}
