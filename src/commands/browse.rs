//! Browse command - interactive catalog navigator
//!
//! Reads single key presses from the terminal: arrows (or `w`/`s`, `k`/`j`)
//! move, enter or right selects, backspace, left or `b` goes back, `.`
//! toggles special access, `/` searches from the root, `o` opens the viewed
//! file with the system handler, `r` resets and `q` quits.

use super::Result;
use crate::DbcatError;
use crate::access::{is_unlocked, level_name};
use crate::config::DbcatConfig;
use crate::navigator::{Command, Mode, Navigator, NavigatorSettings, Response};
use crate::output::{OutputWriter, format_view};
use crate::source::{CatalogSource, FsSource};
use dialoguer::console::{Key, Term};
use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::sync::Arc;
use tracing::debug;

const HELP: &str = "\
up / w / k            move up
down / s / j          move down
enter / right         select
backspace / left / b  back
/                     search from the root menu
.                     toggle special access
o                     open the current file externally
r                     back to the root menu
q                     quit";

/// Browser action for one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Command(Command),
    /// Ask for a query, then search
    Search,
    Open,
    Help,
    Quit,
    Ignored,
}

/// Map a key press to a browser action
#[must_use]
pub fn parse_key(key: &Key) -> BrowseInput {
    match key {
        Key::ArrowUp | Key::Char('w' | 'k') => BrowseInput::Command(Command::Up),
        Key::ArrowDown | Key::Char('s' | 'j') => BrowseInput::Command(Command::Down),
        Key::Enter | Key::ArrowRight | Key::Char(' ') => BrowseInput::Command(Command::Select),
        Key::Backspace | Key::ArrowLeft | Key::Escape | Key::Char('b') => {
            BrowseInput::Command(Command::Back)
        }
        Key::Char('.') => BrowseInput::Command(Command::ToggleAccess),
        Key::Char('r') => BrowseInput::Command(Command::Reset),
        Key::Char('/') => BrowseInput::Search,
        Key::Char('o') => BrowseInput::Open,
        Key::Char('?' | 'h') => BrowseInput::Help,
        Key::Char('q') | Key::CtrlC => BrowseInput::Quit,
        _ => BrowseInput::Ignored,
    }
}

/// Execute the browse command
///
/// Starts building the search index in the background right away.
///
/// # Errors
/// Returns an error if stdout is not a terminal, or reading a key or a
/// prompt fails
pub fn execute(config: &DbcatConfig, out: &dyn OutputWriter) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(DbcatError::InvalidInput("browse needs an interactive terminal".into()));
    }

    let source: Arc<dyn CatalogSource> = Arc::new(FsSource::from_config(config));
    let mut navigator = Navigator::new(NavigatorSettings::from(config));
    navigator.prewarm(Arc::clone(&source));

    loop {
        let view = navigator.refresh(source.as_ref());
        out.write(&format_view(&view));

        let key = term.read_key()?;
        match parse_key(&key) {
            BrowseInput::Quit => break,
            BrowseInput::Ignored => debug!(?key, "key ignored"),
            BrowseInput::Help => out.info(HELP),
            BrowseInput::Open => open_current(&navigator, source.as_ref(), out),
            BrowseInput::Search if !searchable(&navigator) => {
                out.warning("Search is only available from the root menu");
            }
            BrowseInput::Search => {
                follow_up(&mut navigator, Response::PromptSearch, source.as_ref(), out)?;
            }
            BrowseInput::Command(command) => {
                let response = navigator.handle(command, source.as_ref());
                follow_up(&mut navigator, response, source.as_ref(), out)?;
            }
        }
    }

    Ok(())
}

/// Prompt for whatever a response asked for and report access changes
fn follow_up(
    navigator: &mut Navigator,
    response: Response,
    source: &dyn CatalogSource,
    out: &dyn OutputWriter,
) -> Result<()> {
    debug!(?response, "command handled");
    let theme = ColorfulTheme::default();

    let next = match response {
        Response::PromptSearch => {
            let query: String = Input::with_theme(&theme)
                .with_prompt("Search")
                .allow_empty(true)
                .interact_text()?;
            navigator.handle(Command::Search(query), source)
        }
        Response::PromptCode => {
            let phrase = Password::with_theme(&theme)
                .with_prompt("Code")
                .allow_empty_password(true)
                .interact()?;
            navigator.handle(Command::EnterCode(phrase), source)
        }
        other => other,
    };

    match next {
        Response::AccessChanged(level) if level.is_set() => out.success(&level_name(level)),
        Response::AccessChanged(_) => out.info("Special access cleared"),
        Response::AccessRejected => out.warning("Access code not recognized"),
        _ => {}
    }
    Ok(())
}

fn searchable(navigator: &Navigator) -> bool {
    navigator.state().mode == Mode::Menu && navigator.state().at_root()
}

fn open_current(navigator: &Navigator, source: &dyn CatalogSource, out: &dyn OutputWriter) {
    let Mode::FileView(open) = &navigator.state().mode else {
        out.warning("No file is open");
        return;
    };
    if !is_unlocked(open.entry.locked_level, navigator.state().special_access) {
        out.warning(&format!("{} Required", level_name(open.entry.locked_level)));
        return;
    }
    let Some(path) = source.locate(&open.folder, &open.entry.name) else {
        out.error(&format!("Cannot locate {}", open.entry.name));
        return;
    };

    if let Err(e) = open::that(&path) {
        out.error(&format!("Failed to open {}: {e}", path.display()));
    }
}
