use crate::catalog::FileEntry;
use crate::search::SearchIndexEntry;
use crate::tags::{Level, Theme};
use std::collections::HashMap;

/// What the navigator is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Folder or file list for `path_stack`
    Menu,
    /// Search results
    Search,
    /// A single file
    FileView(OpenFile),
}

/// The file being viewed and where back returns to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFile {
    pub folder: Vec<String>,
    pub entry: FileEntry,
    pub return_to: ReturnTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTo {
    Menu,
    Search,
}

impl From<ReturnTo> for Mode {
    fn from(value: ReturnTo) -> Self {
        match value {
            ReturnTo::Menu => Self::Menu,
            ReturnTo::Search => Self::Search,
        }
    }
}

/// Session state, mutated only by [`super::Navigator`] command handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState {
    pub path_stack: Vec<String>,
    pub selected_index: usize,
    pub mode: Mode,
    pub special_access: Level,
    pub search_results: Vec<SearchIndexEntry>,
    /// Last selection per `/`-joined path; the root is `""`
    pub history: HashMap<String, usize>,
    pub theme: Theme,
}

impl NavigatorState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            path_stack: Vec::new(),
            selected_index: 0,
            mode: Mode::Menu,
            special_access: Level::NONE,
            search_results: Vec::new(),
            history: HashMap::new(),
            theme,
        }
    }

    #[must_use]
    pub fn path_key(&self) -> String {
        self.path_stack.join("/")
    }

    #[must_use]
    pub fn at_root(&self) -> bool {
        self.path_stack.is_empty()
    }

    /// Record the current selection for the current path
    pub fn remember(&mut self) {
        self.history.insert(self.path_key(), self.selected_index);
    }

    /// The recorded selection for the current path, or 0
    #[must_use]
    pub fn recall(&self) -> usize {
        self.history.get(&self.path_key()).copied().unwrap_or(0)
    }

    /// Back to the root menu
    ///
    /// History and the special access level survive a reset.
    pub fn reset(&mut self, theme: Theme) {
        self.path_stack.clear();
        self.selected_index = 0;
        self.mode = Mode::Menu;
        self.search_results.clear();
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keys() {
        let mut state = NavigatorState::new(Theme::Green);
        state.selected_index = 3;
        state.remember();

        state.path_stack = vec!["a".into(), "b".into()];
        assert_eq!(state.path_key(), "a/b");
        assert_eq!(state.recall(), 0);

        state.path_stack.clear();
        assert_eq!(state.recall(), 3);
    }

    #[test]
    fn test_reset_keeps_history_and_access() {
        let mut state = NavigatorState::new(Theme::Green);
        state.special_access = Level::new(2).unwrap();
        state.path_stack = vec!["a".into()];
        state.selected_index = 4;
        state.remember();
        state.mode = Mode::Search;
        state.theme = Theme::Cyan;

        state.reset(Theme::Green);

        assert!(state.at_root());
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.theme, Theme::Green);
        assert_eq!(state.special_access, Level::new(2).unwrap());
        assert_eq!(state.history.get("a"), Some(&4));
    }
}
