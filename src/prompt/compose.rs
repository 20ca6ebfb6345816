//! Fragment drafting and prompt assembly

use std::fmt;

use rand::Rng;

use crate::config::GenerationOptions;
use crate::constants::{fallback, format};
use crate::pools::{Field, Pool, PoolRegistry};
use crate::prompt::merge::merge;
use crate::prompt::select::pick;

/// Optional fields, in the order they are attempted
const OPTIONAL_ORDER: [Field; 4] = [Field::Style, Field::Mood, Field::Detail, Field::Constraint];

/// One labeled `"{label}: {value}"` piece of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub field: Field,
    pub value: &'static str,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field.label(), format::LABEL_SEPARATOR, self.value)
    }
}

/// Drafted prompt: the mandatory core plus optional fragments in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    core: String,
    optional: Vec<Fragment>,
}

impl Fragments {
    pub fn new(core: impl Into<String>) -> Self {
        Self {
            core: core.into(),
            optional: Vec::new(),
        }
    }

    pub fn push(&mut self, field: Field, value: &'static str) {
        self.optional.push(Fragment { field, value });
    }

    pub fn contains(&self, field: Field) -> bool {
        self.optional.iter().any(|f| f.field == field)
    }

    /// Remove and return the first fragment for `field`
    pub fn take(&mut self, field: Field) -> Option<Fragment> {
        let idx = self.optional.iter().position(|f| f.field == field)?;
        Some(self.optional.remove(idx))
    }

    /// Drop every optional fragment, keeping the core
    pub fn retain_core_only(&mut self) {
        self.optional.clear();
    }

    /// Total fragment count, core included
    pub fn len(&self) -> usize {
        1 + self.optional.len()
    }

    /// Always false: the core fragment is mandatory
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn render(&self) -> String {
        let mut out = self.core.clone();
        for fragment in &self.optional {
            out.push_str(format::FRAGMENT_SEPARATOR);
            out.push_str(&fragment.to_string());
        }
        out
    }
}

/// Core fragment plus every enabled optional field the pool can supply
pub fn draft<R: Rng + ?Sized>(pool: &Pool, options: &GenerationOptions, rng: &mut R) -> Fragments {
    let subject = pick(pool, Field::Subject, rng).unwrap_or(fallback::SUBJECT);
    let action = pick(pool, Field::Action, rng).unwrap_or(fallback::ACTION);
    let setting = pick(pool, Field::Setting, rng).unwrap_or(fallback::SETTING);

    let mut fragments = Fragments::new(format!("{subject} {action} {setting}"));

    for field in OPTIONAL_ORDER {
        if !options.is_enabled(field) {
            continue;
        }
        if let Some(value) = pick(pool, field, rng) {
            fragments.push(field, value);
        }
    }

    fragments
}

/// Generate one prompt for `options`, drawing from `rng`
///
/// Total: missing candidates degrade to fallback text or omitted fragments.
pub fn compose<R: Rng + ?Sized>(
    registry: &PoolRegistry,
    options: &GenerationOptions,
    rng: &mut R,
) -> String {
    let pool = merge(registry, &options.theme);
    let fragments = draft(&pool, options, rng);
    options.mode.apply(fragments, &pool, options, rng).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::themes;
    use crate::prompt::Mode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn options(theme: &str, mode: Mode) -> GenerationOptions {
        GenerationOptions {
            theme: theme.to_string(),
            mode,
            ..GenerationOptions::default()
        }
    }

    fn all_on(theme: &str, mode: Mode) -> GenerationOptions {
        GenerationOptions {
            include_style: true,
            include_mood: true,
            include_constraint: true,
            include_detail: true,
            ..options(theme, mode)
        }
    }

    fn segments(prompt: &str) -> Vec<&str> {
        prompt.split(format::FRAGMENT_SEPARATOR).collect()
    }

    fn value_of<'a>(segment: &'a str, field: Field) -> Option<&'a str> {
        segment
            .strip_prefix(field.label())
            .and_then(|rest| rest.strip_prefix(format::LABEL_SEPARATOR))
    }

    #[test]
    fn test_fragments_render_joins_with_separator() {
        let mut fragments = Fragments::new("кот спит на крыше");
        fragments.push(Field::Style, "аниме");
        fragments.push(Field::Mood, "уютное");
        assert_eq!(fragments.len(), 3);
        assert!(!fragments.is_empty());
        assert_eq!(fragments.render(), "кот спит на крыше; стиль: аниме; настроение: уютное");
    }

    #[test]
    fn test_fragments_take_removes_first_match() {
        let mut fragments = Fragments::new("core");
        fragments.push(Field::Style, "a");
        fragments.push(Field::Mood, "b");
        let taken = fragments.take(Field::Mood);
        assert_eq!(taken, Some(Fragment { field: Field::Mood, value: "b" }));
        assert!(!fragments.contains(Field::Mood));
        assert!(fragments.take(Field::Detail).is_none());
        fragments.retain_core_only();
        assert_eq!(fragments.len(), 1);
        assert!(!fragments.is_empty());
        assert_eq!(fragments.render(), "core");
    }

    #[test]
    fn test_empty_pool_uses_fallbacks() {
        let registry = PoolRegistry::new("all", Pool::new(), Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        for mode in Mode::ALL {
            let prompt = compose(&registry, &all_on("all", mode), &mut rng);
            assert_eq!(prompt, "кто-то делает что-то странное в неизвестном месте");
        }
    }

    #[test]
    fn test_fantasy_standard_matches_pattern() {
        let registry = PoolRegistry::builtin();
        let merged = merge(registry, themes::FANTASY);
        let universal = registry.universal();
        let opts = options(themes::FANTASY, Mode::Standard);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let prompt = compose(registry, &opts, &mut rng);
            let parts = segments(&prompt);
            assert_eq!(parts.len(), 4, "{prompt}");

            let subjects = merged.get(Field::Subject).unwrap();
            assert_eq!(subjects.len(), 17);
            assert!(subjects.iter().any(|s| parts[0].starts_with(&format!("{s} "))));

            let style = value_of(parts[1], Field::Style).unwrap();
            assert!(universal.get(Field::Style).unwrap().contains(&style));
            assert!(value_of(parts[2], Field::Mood).is_some());
            assert!(value_of(parts[3], Field::Detail).is_some());
        }
    }

    #[test]
    fn test_optional_order_is_style_mood_detail_constraint() {
        let registry = PoolRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let prompt = compose(registry, &all_on(themes::UNIVERSAL, Mode::Standard), &mut rng);
        let parts = segments(&prompt);
        assert_eq!(parts.len(), 5);
        assert!(value_of(parts[1], Field::Style).is_some());
        assert!(value_of(parts[2], Field::Mood).is_some());
        assert!(value_of(parts[3], Field::Detail).is_some());
        assert!(value_of(parts[4], Field::Constraint).is_some());
    }

    #[test]
    fn test_all_toggles_off_standard_is_core_only() {
        let registry = PoolRegistry::builtin();
        let opts = GenerationOptions {
            include_style: false,
            include_mood: false,
            include_constraint: false,
            include_detail: false,
            ..options(themes::SCI_FI, Mode::Standard)
        };
        let mut rng = StdRng::seed_from_u64(9);
        let prompt = compose(registry, &opts, &mut rng);
        assert_eq!(segments(&prompt).len(), 1);
    }

    #[test]
    fn test_core_fragment_present_in_every_mode() {
        let registry = PoolRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        for theme in registry.themes() {
            let merged = merge(registry, theme);
            let subjects = merged.get(Field::Subject).unwrap();
            for mode in Mode::ALL {
                let prompt = compose(registry, &all_on(theme, mode), &mut rng);
                let core = segments(&prompt)[0];
                assert!(!core.contains(format::LABEL_SEPARATOR), "{prompt}");
                assert!(subjects.iter().any(|s| core.starts_with(s)), "{prompt}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_prompt() {
        let registry = PoolRegistry::builtin();
        let opts = all_on(themes::HORROR, Mode::Challenge);
        let a = compose(registry, &opts, &mut StdRng::seed_from_u64(77));
        let b = compose(registry, &opts, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
