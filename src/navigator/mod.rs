//! Stateful catalog traversal
//!
//! The [`Navigator`] owns the session's [`NavigatorState`] and is the only
//! thing that mutates it. Callers feed it [`Command`]s and render the
//! [`View`] it produces; nothing is drawn here.
//!
//! # Locations
//!
//! ```text
//! FolderMenu([]) ──select folder──▶ FolderMenu([f]) ──▶ ... ──▶ FileMenu(p)
//!      │    ▲                          │ back / RETURN             │ select
//!      │    └──────────────────────────┘                          ▼
//!      │ SEARCH + query                                       FileView(p, file)
//!      ▼                                                           │ back
//! SearchResults ──select──▶ FileView ──back──▶ SearchResults ◀─────┘ (or FileMenu)
//! ```
//!
//! Every list is filtered by the current special access level at render
//! time, so changing access only re-filters; it never moves the session.
//!
//! # Refresh ordering
//!
//! Each state change bumps a revision. A caller that fetches descriptors
//! off the input path takes a [`RefreshTicket`] first and hands the result
//! back with [`Navigator::complete_refresh`]; results for an older revision
//! are dropped, so a slow fetch can never paint over a newer state.

mod command;
mod state;
mod view;


pub use command::{Command, Response};
pub use state::{Mode, NavigatorState, OpenFile, ReturnTo};
pub use view::{
    ACCESS_DENIED, FileContent, FileView, MenuItem, MenuKind, MenuView, ScrollSlot, Screen, View,
    WINDOW_SLOTS, folder_header, result_count_text, scroll_window,
};

use crate::access::{is_unlocked, is_visible, parse_code};
use crate::catalog::{FileEntry, FileKind, FolderEntry};
use crate::config::DbcatConfig;
use crate::search::LazyIndex;
use crate::source::{CatalogSource, Descriptor};
use crate::tags::{Level, Theme};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Presentation themes the navigator switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorSettings {
    pub default_theme: Theme,
    /// Used inside any hidden folder, overriding its own theme
    pub hidden_theme: Theme,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            default_theme: Theme::Green,
            hidden_theme: Theme::Purple,
        }
    }
}

impl From<&DbcatConfig> for NavigatorSettings {
    fn from(config: &DbcatConfig) -> Self {
        Self {
            default_theme: config.default_theme,
            hidden_theme: config.hidden_theme,
        }
    }
}

/// Snapshot of the state a pending refresh was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    revision: u64,
    path: Vec<String>,
}

impl RefreshTicket {
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Folder path whose descriptor the caller should fetch
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

pub struct Navigator {
    state: NavigatorState,
    settings: NavigatorSettings,
    index: Arc<LazyIndex>,
    revision: u64,
}

impl Navigator {
    #[must_use]
    pub fn new(settings: NavigatorSettings) -> Self {
        Self::with_index(settings, Arc::new(LazyIndex::new()))
    }

    /// Navigator sharing an existing search index
    #[must_use]
    pub fn with_index(settings: NavigatorSettings, index: Arc<LazyIndex>) -> Self {
        Self {
            state: NavigatorState::new(settings.default_theme),
            settings,
            index,
            revision: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &NavigatorState {
        &self.state
    }

    #[must_use]
    pub const fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn index(&self) -> &Arc<LazyIndex> {
        &self.index
    }

    /// Start building the search index on the rayon pool
    ///
    /// A search issued before the build finishes waits for it. A failed
    /// background build leaves the index unbuilt for the next search to retry.
    pub fn prewarm(&self, source: Arc<dyn CatalogSource>) {
        let index = Arc::clone(&self.index);
        rayon::spawn(move || {
            build_index(&index, source.as_ref());
        });
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command, source: &dyn CatalogSource) -> Response {
        let response = match command {
            Command::Up => self.step(source, false),
            Command::Down => self.step(source, true),
            Command::Select => self.select(source),
            Command::Back => self.back(),
            Command::Search(query) => self.search(&query, source),
            Command::ToggleAccess => {
                if self.state.special_access.is_set() {
                    self.set_access(Level::NONE)
                } else {
                    Response::PromptCode
                }
            }
            Command::EnterCode(phrase) => match parse_code(&phrase) {
                Some(level) => self.set_access(level),
                None => Response::AccessRejected,
            },
            Command::ClearAccess => {
                if self.state.special_access.is_set() {
                    self.set_access(Level::NONE)
                } else {
                    Response::Unchanged
                }
            }
            Command::Reset => {
                self.state.reset(self.settings.default_theme);
                Response::Reset
            }
        };

        if response.changed() {
            self.revision += 1;
        }
        response
    }

    /// Render the current state, fetching what it needs from `source`
    ///
    /// Also clamps the selection if the current list shrank.
    pub fn refresh(&mut self, source: &dyn CatalogSource) -> View {
        let descriptor = self.menu_descriptor(source);
        self.render(descriptor, source)
    }

    #[must_use]
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket {
            revision: self.revision,
            path: self.state.path_stack.clone(),
        }
    }

    /// Render with a descriptor fetched for `ticket`
    ///
    /// Returns `None` when the state has moved on since the ticket was taken.
    pub fn complete_refresh(
        &mut self,
        ticket: &RefreshTicket,
        descriptor: Descriptor,
        source: &dyn CatalogSource,
    ) -> Option<View> {
        if ticket.revision != self.revision {
            debug!(
                ticket = ticket.revision,
                current = self.revision,
                "discarding stale refresh"
            );
            return None;
        }
        Some(self.render(descriptor, source))
    }

    fn menu_descriptor(&self, source: &dyn CatalogSource) -> Descriptor {
        match self.state.mode {
            Mode::Menu => source.load_descriptor(&self.state.path_stack),
            Mode::Search | Mode::FileView(_) => Descriptor::Empty,
        }
    }

    fn render(&mut self, descriptor: Descriptor, source: &dyn CatalogSource) -> View {
        let screen = match &self.state.mode {
            Mode::Menu => Screen::Menu(self.folder_menu(descriptor)),
            Mode::Search => Screen::Menu(self.search_menu()),
            Mode::FileView(open) => Screen::File(self.file_view(open, source)),
        };

        if let Screen::Menu(menu) = &screen {
            self.state.selected_index = menu.selected;
        }

        View {
            revision: self.revision,
            theme: self.state.theme,
            access: self.state.special_access,
            screen,
        }
    }

    fn current_menu(&self, source: &dyn CatalogSource) -> Option<MenuView> {
        match &self.state.mode {
            Mode::Menu => Some(self.folder_menu(source.load_descriptor(&self.state.path_stack))),
            Mode::Search => Some(self.search_menu()),
            Mode::FileView(_) => None,
        }
    }

    fn folder_menu(&self, descriptor: Descriptor) -> MenuView {
        let access = self.state.special_access;
        let path = self.state.path_stack.clone();
        let at_root = path.is_empty();
        let selected = self.state.selected_index;

        match descriptor {
            Descriptor::Folders(folders) => {
                let mut items = Vec::with_capacity(folders.len() + 1);
                if !at_root {
                    items.push(MenuItem::Return);
                }
                items.extend(
                    folders
                        .into_iter()
                        .filter(|folder| is_visible(folder.hidden_level, access))
                        .map(MenuItem::Folder),
                );
                if at_root {
                    items.push(MenuItem::Search);
                }
                MenuView::new(MenuKind::Folders, path, items, selected, None)
            }
            Descriptor::Files(files) => {
                let items: Vec<MenuItem> = files
                    .into_iter()
                    .filter(|file| is_visible(file.hidden_level, access))
                    .map(MenuItem::File)
                    .collect();
                let count = (!items.is_empty()).then_some(items.len());
                MenuView::new(MenuKind::Files, path, items, selected, count)
            }
            Descriptor::Empty => MenuView::new(MenuKind::Empty, path, Vec::new(), 0, None),
        }
    }

    fn search_menu(&self) -> MenuView {
        let access = self.state.special_access;
        let mut items = vec![MenuItem::Return];
        items.extend(
            self.state
                .search_results
                .iter()
                .filter(|result| is_visible(result.parsed.hidden_level, access))
                .cloned()
                .map(MenuItem::Result),
        );
        let count = items.len() - 1;
        MenuView::new(
            MenuKind::SearchResults,
            Vec::new(),
            items,
            self.state.selected_index,
            Some(count),
        )
    }

    fn file_view(&self, open: &OpenFile, source: &dyn CatalogSource) -> FileView {
        let entry = &open.entry;
        let kind = entry.kind();
        let unlocked = is_unlocked(entry.locked_level, self.state.special_access);

        let content = match (kind, unlocked) {
            (FileKind::Image, _) => FileContent::Image { blurred: !unlocked },
            (_, false) => FileContent::Denied,
            (FileKind::Audio, true) => FileContent::Audio,
            (FileKind::Markdown | FileKind::Text, true) => {
                match source.read_text(&open.folder, &entry.name) {
                    Ok(text) if kind == FileKind::Markdown => FileContent::Markdown(text),
                    Ok(text) => FileContent::Text(text),
                    Err(e) => {
                        debug!(file = %entry.name, error = %e, "file content unavailable");
                        FileContent::LoadFailed(e.to_string())
                    }
                }
            }
        };

        FileView {
            folder: open.folder.clone(),
            entry: entry.clone(),
            kind,
            header: folder_header(&open.folder),
            unlocked,
            required: (!unlocked).then_some(entry.locked_level),
            location: source.locate(&open.folder, &entry.name),
            content,
        }
    }

    fn step(&mut self, source: &dyn CatalogSource, down: bool) -> Response {
        let Some(menu) = self.current_menu(source) else {
            return Response::Ignored;
        };

        let last = menu.items.len().saturating_sub(1);
        let target = if down {
            (menu.selected + 1).min(last)
        } else {
            menu.selected.saturating_sub(1)
        };

        if target == self.state.selected_index {
            Response::Unchanged
        } else {
            self.state.selected_index = target;
            Response::Moved
        }
    }

    fn select(&mut self, source: &dyn CatalogSource) -> Response {
        let Some(menu) = self.current_menu(source) else {
            return Response::Ignored;
        };
        let Some(item) = menu.selected_item().cloned() else {
            return Response::Ignored;
        };
        self.state.selected_index = menu.selected;

        match item {
            MenuItem::Return if self.state.mode == Mode::Search => self.exit_search(),
            MenuItem::Return => self.ascend(),
            MenuItem::Folder(folder) => self.descend(&folder),
            MenuItem::Search => Response::PromptSearch,
            MenuItem::File(file) => {
                let folder = self.state.path_stack.clone();
                self.open(folder, file, ReturnTo::Menu)
            }
            MenuItem::Result(result) => self.open(result.folders, result.parsed, ReturnTo::Search),
        }
    }

    fn back(&mut self) -> Response {
        if let Mode::FileView(open) = &self.state.mode {
            let mode = open.return_to.into();
            self.state.mode = mode;
            return Response::ClosedFile;
        }

        match self.state.mode {
            Mode::Search => self.exit_search(),
            _ if self.state.at_root() => Response::Ignored,
            _ => self.ascend(),
        }
    }

    fn search(&mut self, query: &str, source: &dyn CatalogSource) -> Response {
        if self.state.mode != Mode::Menu || !self.state.at_root() {
            return Response::Ignored;
        }

        let results: Vec<_> = self
            .index
            .get_or_build(source)
            .lookup(query)
            .into_iter()
            .cloned()
            .collect();
        debug!(query = query.trim(), matches = results.len(), "search");

        self.state.search_results = results;
        self.state.mode = Mode::Search;
        self.state.selected_index = 0;

        let access = self.state.special_access;
        let visible = self
            .state
            .search_results
            .iter()
            .filter(|result| is_visible(result.parsed.hidden_level, access))
            .count();
        Response::SearchCompleted(visible)
    }

    fn descend(&mut self, folder: &FolderEntry) -> Response {
        self.state.remember();
        self.state.path_stack.push(folder.name.clone());
        self.state.selected_index = self.state.recall();
        self.state.theme = if folder.hidden_level.is_set() {
            self.settings.hidden_theme
        } else {
            folder.theme.unwrap_or(self.settings.default_theme)
        };
        Response::Entered
    }

    fn ascend(&mut self) -> Response {
        self.state.remember();
        self.state.path_stack.pop();
        self.state.selected_index = self.state.recall();
        self.state.theme = self.settings.default_theme;
        Response::Returned
    }

    fn exit_search(&mut self) -> Response {
        self.state.search_results.clear();
        self.state.path_stack.clear();
        self.state.mode = Mode::Menu;
        self.state.selected_index = 0;
        self.state.theme = self.settings.default_theme;
        Response::Returned
    }

    fn open(&mut self, folder: Vec<String>, entry: FileEntry, return_to: ReturnTo) -> Response {
        self.state.mode = Mode::FileView(OpenFile {
            folder,
            entry,
            return_to,
        });
        Response::OpenedFile
    }

    fn set_access(&mut self, level: Level) -> Response {
        if self.state.special_access == level {
            return Response::Unchanged;
        }
        self.state.special_access = level;
        Response::AccessChanged(level)
    }
}

/// Build `index` from `source`, containing any panic from the build
///
/// Returns whether the index is built afterwards.
fn build_index(index: &LazyIndex, source: &dyn CatalogSource) -> bool {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        index.get_or_build(source);
    }));
    if result.is_err() {
        warn!("background search index build failed");
    }
    index.is_built()
}
