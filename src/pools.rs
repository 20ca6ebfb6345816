//! Vocabulary pools keyed by theme
//!
//! The built-in registry is populated once on first use and never mutated.
//! Themes that carry no explicit thematic binding live in the universal pool;
//! theme pools only add candidates on top of it.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::constants::themes;

/// Prompt field. Every pool uses the same closed set of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Subject,
    Action,
    Setting,
    Style,
    Mood,
    Constraint,
    Detail,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Subject,
        Field::Action,
        Field::Setting,
        Field::Style,
        Field::Mood,
        Field::Constraint,
        Field::Detail,
    ];

    /// Label printed in front of an optional fragment (`"стиль: аниме"`)
    pub fn label(self) -> &'static str {
        match self {
            Field::Subject => "персонаж",
            Field::Action => "действие",
            Field::Setting => "окружение",
            Field::Style => "стиль",
            Field::Mood => "настроение",
            Field::Constraint => "ограничение",
            Field::Detail => "деталь",
        }
    }
}

/// Field → ordered candidates. Duplicates are allowed; order carries no priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    fields: BTreeMap<Field, Vec<&'static str>>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; replaces any previous candidates for `field`
    pub fn with(mut self, field: Field, candidates: &[&'static str]) -> Self {
        self.fields.insert(field, candidates.to_vec());
        self
    }

    /// Candidates for `field`, or `None` when the pool omits it
    pub fn get(&self, field: Field) -> Option<&[&'static str]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn push_candidates(&mut self, field: Field, candidates: &[&'static str]) {
        self.fields.entry(field).or_default().extend_from_slice(candidates);
    }
}

/// Read-only theme → pool mapping with one designated universal theme
#[derive(Debug, Clone)]
pub struct PoolRegistry {
    universal_name: &'static str,
    universal: Pool,
    themes: Vec<(&'static str, Pool)>,
    empty: Pool,
}

static BUILTIN: LazyLock<PoolRegistry> = LazyLock::new(builtin_registry);

impl PoolRegistry {
    /// Build a registry. `themes` keeps its order and should not repeat the universal name.
    pub fn new(
        universal_name: &'static str,
        universal: Pool,
        themes: Vec<(&'static str, Pool)>,
    ) -> Self {
        Self {
            universal_name,
            universal,
            themes,
            empty: Pool::new(),
        }
    }

    /// The process-wide built-in vocabulary
    pub fn builtin() -> &'static PoolRegistry {
        &BUILTIN
    }

    pub fn universal_name(&self) -> &'static str {
        self.universal_name
    }

    pub fn universal(&self) -> &Pool {
        &self.universal
    }

    pub fn is_universal(&self, theme: &str) -> bool {
        theme == self.universal_name
    }

    /// Pool for `theme`; unknown themes get an empty pool
    pub fn lookup_theme(&self, theme: &str) -> &Pool {
        if self.is_universal(theme) {
            return &self.universal;
        }
        self.themes
            .iter()
            .find(|(name, _)| *name == theme)
            .map(|(_, pool)| pool)
            .unwrap_or(&self.empty)
    }

    pub fn contains(&self, theme: &str) -> bool {
        self.is_universal(theme) || self.themes.iter().any(|(name, _)| *name == theme)
    }

    /// All theme names, universal first
    pub fn themes(&self) -> Vec<&'static str> {
        std::iter::once(self.universal_name)
            .chain(self.themes.iter().map(|(name, _)| *name))
            .collect()
    }
}

fn builtin_registry() -> PoolRegistry {
    let universal = Pool::new()
        .with(
            Field::Subject,
            &[
                "уставший маг",
                "хитрая лиса-алхимик",
                "космический курьер",
                "робот-няня",
                "странствующий музыкант",
                "детектив",
                "техномонах",
                "кулинар-экспериментатор",
                "художник-иллюзионист",
                "пилот дирижабля",
                "школьница с секретом",
                "потерявшийся турист",
            ],
        )
        .with(
            Field::Action,
            &[
                "ищет потерянный артефакт",
                "чинит странный механизм",
                "впервые использует новую силу",
                "прячется от преследователей",
                "готовит зелье",
                "пишет письмо, которое нельзя отправить",
                "спорит с отражением",
                "спасает маленькое существо",
                "делает выбор между долгом и мечтой",
                "пытается не засмеяться в серьёзной ситуации",
                "обнаруживает тайную комнату",
            ],
        )
        .with(
            Field::Setting,
            &[
                "на крыше высокого здания",
                "в заброшенной библиотеке",
                "в шумном ночном рынке",
                "в туманном лесу",
                "в маленькой мастерской",
                "на вокзале под дождём",
                "в пустыне у одинокой вышки",
                "в подземном метро",
                "в старом театре",
                "у моря на рассвете",
                "в комнате, где время остановилось",
            ],
        )
        .with(
            Field::Style,
            &[
                "аниме",
                "реализм",
                "полуреализм",
                "комикс",
                "пиксель-арт",
                "акварель",
                "тушь/лайн",
                "минимализм",
                "low-poly",
                "ч/б графика",
                "скетч карандашом",
            ],
        )
        .with(
            Field::Mood,
            &[
                "спокойное",
                "меланхоличное",
                "напряжённое",
                "уютное",
                "праздничное",
                "таинственное",
                "комедийное",
                "мечтательное",
                "тревожное",
                "торжественное",
            ],
        )
        .with(
            Field::Constraint,
            &[
                "только 3 цвета",
                "без линий (только пятна)",
                "10 минут на скетч",
                "один источник света",
                "без лица (показать эмоцию позой)",
                "только силуэты",
                "вид сверху",
                "одна деталь должна быть красной",
                "максимум 30 штрихов",
            ],
        )
        .with(
            Field::Detail,
            &[
                "у персонажа необычные перчатки",
                "рядом странная табличка",
                "на фоне заметен символ",
                "есть питомец-компаньон",
                "в кадре зеркало/отражение",
                "на одежде нашивка",
                "в воздухе летят бумажки",
                "на столе загадочный чертёж",
                "в углу прячется кот",
            ],
        );

    let fantasy = Pool::new()
        .with(
            Field::Subject,
            &["ведьма", "рыцарь", "эльф-разведчик", "дракончик-воришка", "алхимик"],
        )
        .with(
            Field::Setting,
            &[
                "в руинах храма",
                "в таверне у камина",
                "на мосту над пропастью",
                "у древнего дерева",
            ],
        )
        .with(
            Field::Detail,
            &[
                "магические руны светятся",
                "меч треснул, но держится",
                "фляга с зельем кипит",
            ],
        );

    let sci_fi = Pool::new()
        .with(
            Field::Subject,
            &[
                "кибер-ниндзя",
                "инженер станции",
                "андроид",
                "навигатор корабля",
                "охотник за дронами",
            ],
        )
        .with(
            Field::Setting,
            &[
                "в коридоре космостанции",
                "на пыльной луне",
                "в неоновом переулке",
                "в кабине меха",
            ],
        )
        .with(
            Field::Detail,
            &["на шлеме трещина", "провода торчат наружу", "голограмма мерцает"],
        );

    let everyday = Pool::new()
        .with(
            Field::Subject,
            &[
                "бариста",
                "студент",
                "доставщик еды",
                "музыкант на улице",
                "девушка с блокнотом",
            ],
        )
        .with(
            Field::Setting,
            &[
                "в маленьком кафе",
                "на остановке",
                "в библиотеке",
                "на кухне ночью",
                "в парке",
            ],
        )
        .with(
            Field::Detail,
            &[
                "на столе недопитый чай",
                "кот залез на сумку",
                "на стене смешной плакат",
            ],
        );

    let horror = Pool::new()
        .with(
            Field::Subject,
            &["ночной сторож", "исследователь", "человек в плаще", "кукла", "пациент"],
        )
        .with(
            Field::Setting,
            &[
                "в пустой больнице",
                "в коридоре с мигающей лампой",
                "в доме на окраине",
                "в тоннеле",
            ],
        )
        .with(
            Field::Mood,
            &["тревожное", "пугающе-тихое", "паранойяльное", "гнетущее"],
        )
        .with(
            Field::Detail,
            &["вдалеке слышны шаги", "на стене царапины", "дверь приоткрыта"],
        );

    PoolRegistry::new(
        themes::UNIVERSAL,
        universal,
        vec![
            (themes::FANTASY, fantasy),
            (themes::SCI_FI, sci_fi),
            (themes::EVERYDAY, everyday),
            (themes::HORROR, horror),
        ],
    )
}
