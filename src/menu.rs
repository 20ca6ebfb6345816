//! Interactive terminal menu
//!
//! Thin caller of the session: every action is one session call plus
//! printing. Theme/mode/toggle changes are written back to the settings file.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Select};
use rand::Rng;
use std::io::IsTerminal;
use std::path::Path;
use tracing::error;

use crate::config::{GenerationOptions, Settings};
use crate::constants::app;
use crate::favorites::FavoriteRecord;
use crate::pools::Field;
use crate::prompt::{Mode, today};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Generate,
    Daily,
    ChooseTheme,
    ChooseMode,
    Toggles,
    SaveLast,
    ShowFavorites,
    ClearFavorites,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::Generate,
        MenuAction::Daily,
        MenuAction::ChooseTheme,
        MenuAction::ChooseMode,
        MenuAction::Toggles,
        MenuAction::SaveLast,
        MenuAction::ShowFavorites,
        MenuAction::ClearFavorites,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::Generate => "Сгенерировать идею",
            MenuAction::Daily => "Идея дня (стабильная на сегодня)",
            MenuAction::ChooseTheme => "Выбрать тему",
            MenuAction::ChooseMode => "Выбрать режим",
            MenuAction::Toggles => "Настройки (что включать)",
            MenuAction::SaveLast => "Сохранить последнюю идею в избранное",
            MenuAction::ShowFavorites => "Показать избранное",
            MenuAction::ClearFavorites => "Очистить избранное",
            MenuAction::Exit => "Выход",
        }
    }
}

pub fn print_header() {
    let rule = "=".repeat(app::BANNER_WIDTH);
    println!("{rule}");
    println!("{}", app::NAME);
    println!("{rule}");
    println!("Мяу");
    println!();
}

/// Numbered favorites list, or the empty-list notice
pub fn format_favorites(records: &[FavoriteRecord]) -> String {
    if records.is_empty() {
        return "Избранное пустое. Как и многие обещания людей.".to_string();
    }
    let mut out = String::from("Избранное:");
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("\n{}. {record}", i + 1));
    }
    out
}

fn mark_current(name: &str, current: bool, mark: &str) -> String {
    if current {
        format!("{name} ({mark})")
    } else {
        name.to_string()
    }
}

fn toggle_label(options: &GenerationOptions, field: Field) -> String {
    let state = if options.is_enabled(field) { "да" } else { "нет" };
    format!("{}: {state}", field.label())
}

/// Run until the user picks "exit" or dismisses the menu
pub fn run<R: Rng>(session: &mut Session<'_, R>, settings_path: &Path) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "The menu requires an interactive terminal.\n\
             Use `draw-idea generate` or `draw-idea daily` for scripted use."
        );
    }

    print_header();

    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    loop {
        let choice = Select::new()
            .with_prompt("Меню")
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("Failed to read menu choice")?;
        let action = choice.map_or(MenuAction::Exit, |idx| MenuAction::ALL[idx]);

        match action {
            MenuAction::Generate => {
                let prompt = session.generate();
                println!("Твоя идея:\n  {prompt}\n");
            }
            MenuAction::Daily => {
                let prompt = session.daily(today());
                println!("Идея дня:\n  {prompt}\n");
            }
            MenuAction::ChooseTheme => {
                choose_theme(session)?;
                persist(session.options(), settings_path);
            }
            MenuAction::ChooseMode => {
                choose_mode(session)?;
                persist(session.options(), settings_path);
            }
            MenuAction::Toggles => {
                toggle_settings(session)?;
                persist(session.options(), settings_path);
            }
            MenuAction::SaveLast => match session.save_last() {
                Ok(true) => println!("Сохранено в избранное.\n"),
                Ok(false) => println!("Сначала сгенерируй идею. Магии из пустоты тут нет.\n"),
                Err(e) => {
                    error!(error = ?e, "Failed to save favorite");
                    eprintln!("Не удалось сохранить: {e:#}\n");
                }
            },
            MenuAction::ShowFavorites => {
                println!("{}\n", format_favorites(session.favorites().records()));
            }
            MenuAction::ClearFavorites => clear_favorites(session)?,
            MenuAction::Exit => {
                println!("Выход. Иди рисуй, а не собирай меню, мяу.");
                return Ok(());
            }
        }
    }
}

fn choose_theme<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    let themes = session.registry().themes();
    let current = session.options().theme.as_str();
    let items: Vec<String> = themes
        .iter()
        .map(|t| mark_current(t, *t == current, "текущая"))
        .collect();
    let default = themes.iter().position(|t| *t == current).unwrap_or(0);

    if let Some(idx) = Select::new()
        .with_prompt("Выбери тему")
        .items(&items)
        .default(default)
        .interact_opt()
        .context("Failed to read theme choice")?
    {
        session.options_mut().theme = themes[idx].to_string();
    }
    println!("Тема: {}\n", session.options().theme);
    Ok(())
}

fn choose_mode<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    let current = session.options().mode;
    let items: Vec<String> = Mode::ALL
        .iter()
        .map(|m| mark_current(m.name(), *m == current, "текущий"))
        .collect();
    let default = Mode::ALL.iter().position(|m| *m == current).unwrap_or(0);

    if let Some(idx) = Select::new()
        .with_prompt("Выбери режим")
        .items(&items)
        .default(default)
        .interact_opt()
        .context("Failed to read mode choice")?
    {
        session.options_mut().mode = Mode::ALL[idx];
    }
    println!("Режим: {}\n", session.options().mode);
    Ok(())
}

fn toggle_settings<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    loop {
        let mut items: Vec<String> = GenerationOptions::TOGGLES
            .iter()
            .map(|f| toggle_label(session.options(), *f))
            .collect();
        items.push("назад".to_string());

        let choice = Select::new()
            .with_prompt("Настройки генерации (вкл/выкл)")
            .items(&items)
            .default(0)
            .interact_opt()
            .context("Failed to read settings choice")?;

        match choice.and_then(|idx| GenerationOptions::TOGGLES.get(idx).copied()) {
            Some(field) => {
                session.options_mut().toggle(field);
            }
            None => {
                println!();
                return Ok(());
            }
        }
    }
}

fn clear_favorites<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt("Точно очистить избранное?")
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Оставили. Наконец-то хоть где-то стабильность.\n");
        return Ok(());
    }
    match session.clear_favorites() {
        Ok(()) => println!("Избранное очищено.\n"),
        Err(e) => {
            error!(error = ?e, "Failed to clear favorites");
            eprintln!("Не удалось очистить: {e:#}\n");
        }
    }
    Ok(())
}

fn persist(options: &GenerationOptions, settings_path: &Path) {
    let settings = Settings {
        generation: options.clone(),
    };
    if let Err(e) = settings.save_to(settings_path) {
        error!(error = ?e, "Failed to save settings");
    }
}
