#![forbid(unsafe_code)]

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use draw_idea::config::{GenerationOptions, Settings};
use draw_idea::constants::logging;
use draw_idea::favorites::{self, FavoritesStore};
use draw_idea::menu;
use draw_idea::pools::{Field, PoolRegistry};
use draw_idea::prompt::{self, Mode};
use draw_idea::session::Session;

/// Randomized art-drawing prompts from themed vocabulary
#[derive(Parser)]
#[command(name = "draw-idea", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Theme for this run (see `draw-idea themes`)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Composition mode for this run
    #[arg(long, value_enum, global = true)]
    mode: Option<Mode>,

    #[arg(long, global = true, overrides_with = "no_style")]
    style: bool,
    #[arg(long, global = true, overrides_with = "style")]
    no_style: bool,

    #[arg(long, global = true, overrides_with = "no_mood")]
    mood: bool,
    #[arg(long, global = true, overrides_with = "mood")]
    no_mood: bool,

    #[arg(long, global = true, overrides_with = "no_constraint")]
    constraint: bool,
    #[arg(long, global = true, overrides_with = "constraint")]
    no_constraint: bool,

    #[arg(long, global = true, overrides_with = "no_detail")]
    detail: bool,
    #[arg(long, global = true, overrides_with = "detail")]
    no_detail: bool,

    /// Seed for ordinary generation (reproducible runs)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Favorites file [default: <config dir>/draw-idea/favorites.json]
    #[arg(long, global = true)]
    favorites: Option<PathBuf>,

    /// Settings file [default: <config dir>/draw-idea/settings.json]
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu (default)
    Menu,
    /// Print freshly generated prompts
    Generate {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Print the prompt of the day
    Daily {
        /// Date as YYYY-MM-DD [default: today]
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List themes
    Themes,
    /// Show or clear saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    List,
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    /// Command-line overrides on top of persisted options; not saved
    fn apply_overrides(&self, options: &mut GenerationOptions) {
        if let Some(theme) = &self.theme {
            options.theme = theme.clone();
        }
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        options.set(Field::Style, flag(self.style, self.no_style));
        options.set(Field::Mood, flag(self.mood, self.no_mood));
        options.set(Field::Constraint, flag(self.constraint, self.no_constraint));
        options.set(Field::Detail, flag(self.detail, self.no_detail));
    }
}

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var(logging::LEVEL_ENV)
        .unwrap_or_else(|_| logging::DEFAULT_LEVEL.to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let registry = PoolRegistry::builtin();
    let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load_from(&settings_path);
    settings.validate(registry);

    let mut options = settings.generation.clone();
    cli.apply_overrides(&mut options);
    if !registry.contains(&options.theme) {
        eprintln!(
            "Неизвестная тема '{}', используются только общие наборы.",
            options.theme
        );
    }
    info!(theme = %options.theme, mode = %options.mode, "Options resolved");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let favorites_path = cli.favorites.clone().unwrap_or_else(favorites::default_path);
    let favorites = FavoritesStore::open(favorites_path);
    let mut session = Session::new(registry, options, rng, favorites);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu::run(&mut session, &settings_path)?,
        Command::Generate { count } => {
            for _ in 0..count {
                println!("{}", session.generate());
            }
        }
        Command::Daily { date } => {
            let date = date.unwrap_or_else(prompt::today);
            println!("{}", session.daily(date));
        }
        Command::Themes => {
            for theme in registry.themes() {
                let mark = if theme == session.options().theme { " (текущая)" } else { "" };
                println!("{theme}{mark}");
            }
        }
        Command::Favorites { action } => match action {
            FavoritesCommand::List => {
                println!("{}", menu::format_favorites(session.favorites().records()));
            }
            FavoritesCommand::Clear { yes } => {
                let confirmed = yes
                    || Confirm::new()
                        .with_prompt("Точно очистить избранное?")
                        .default(false)
                        .interact()?;
                if confirmed {
                    session.clear_favorites()?;
                    println!("Избранное очищено.");
                }
            }
        },
    }

    Ok(())
}
