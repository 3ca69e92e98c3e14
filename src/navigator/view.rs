use crate::access::{badges, level_name};
use crate::catalog::{FileEntry, FileKind, FolderEntry};
use crate::search::SearchIndexEntry;
use crate::tags::{Level, Theme};
use std::path::PathBuf;

/// Number of rows in a list window
pub const WINDOW_SLOTS: usize = 9;

pub const ACCESS_DENIED: &str = "Access Denied";

/// A rendered snapshot of the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Navigator revision this view was rendered from
    pub revision: u64,
    pub theme: Theme,
    pub access: Level,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu(MenuView),
    File(FileView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Folders,
    Files,
    SearchResults,
    /// The folder has neither descriptor
    Empty,
}

/// A selectable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Return,
    Folder(FolderEntry),
    Search,
    File(FileEntry),
    Result(SearchIndexEntry),
}

impl MenuItem {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Return => "RETURN".to_string(),
            Self::Search => "SEARCH".to_string(),
            Self::Folder(folder) => format!("{}/", folder.name),
            Self::File(file) => file.name.clone(),
            Self::Result(result) => result.name.clone(),
        }
    }

    /// Hidden/locked markers for files and search results
    #[must_use]
    pub fn badges(&self) -> Option<String> {
        match self {
            Self::File(file) => badges(file.hidden_level, file.locked_level),
            Self::Result(result) => badges(result.parsed.hidden_level, result.parsed.locked_level),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub kind: MenuKind,
    pub path: Vec<String>,
    pub items: Vec<MenuItem>,
    /// Always a valid index into `items`, or 0 when empty
    pub selected: usize,
    /// Shown as `<n> result(s) found.`
    pub result_count: Option<usize>,
}

impl MenuView {
    /// Build a menu, clamping `selected` into range
    #[must_use]
    pub fn new(
        kind: MenuKind,
        path: Vec<String>,
        items: Vec<MenuItem>,
        selected: usize,
        result_count: Option<usize>,
    ) -> Self {
        let selected = selected.min(items.len().saturating_sub(1));
        Self {
            kind,
            path,
            items,
            selected,
            result_count,
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    #[must_use]
    pub fn window(&self) -> [ScrollSlot; WINDOW_SLOTS] {
        scroll_window(self.selected, self.items.len())
    }
}

/// `<n> result(s) found.`
#[must_use]
pub fn result_count_text(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} result{suffix} found.")
}

/// One row of a list window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSlot {
    /// Item index, `None` for padding past either end
    pub index: Option<usize>,
    /// Rows away from the selection; 0 is the highlighted row
    pub distance: usize,
}

/// A fixed window of rows centered on `selected`
///
/// # Examples
/// ```
/// # use dbcat::navigator::scroll_window;
/// let window = scroll_window(0, 3);
/// assert_eq!(window[4].index, Some(0));
/// assert_eq!(window[3].index, None);
/// assert_eq!(window[6].distance, 2);
/// ```
#[must_use]
pub fn scroll_window(selected: usize, len: usize) -> [ScrollSlot; WINDOW_SLOTS] {
    let center = WINDOW_SLOTS / 2;
    std::array::from_fn(|slot| {
        let index = (selected + slot)
            .checked_sub(center)
            .filter(|&index| index < len);
        ScrollSlot {
            index,
            distance: slot.abs_diff(center),
        }
    })
}

/// What the file viewer shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Markdown(String),
    /// Images are always shown; locked ones are blurred under the denial text
    Image { blurred: bool },
    Audio,
    /// Locked and not an image; content was not read
    Denied,
    /// Rendered as `Failed to load file: <message>`
    LoadFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView {
    pub folder: Vec<String>,
    pub entry: FileEntry,
    pub kind: FileKind,
    /// Folder path with a trailing `/`, empty at the root
    pub header: String,
    pub unlocked: bool,
    /// Locked level when not unlocked
    pub required: Option<Level>,
    pub location: Option<PathBuf>,
    pub content: FileContent,
}

impl FileView {
    /// `Level <n> Access Required` when the file is locked at the current access
    #[must_use]
    pub fn required_text(&self) -> Option<String> {
        self.required
            .map(|level| format!("{} Required", level_name(level)))
    }
}

/// `a/b/` for a folder path, `""` for the root
#[must_use]
pub fn folder_header(folder: &[String]) -> String {
    folder.iter().map(|segment| format!("{segment}/")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::RawEntry;

    #[test]
    fn test_scroll_window_centered() {
        let window = scroll_window(5, 20);
        let indices: Vec<Option<usize>> = window.iter().map(|s| s.index).collect();
        assert_eq!(indices, (1..=9).map(Some).collect::<Vec<_>>());
        let distances: Vec<usize> = window.iter().map(|s| s.distance).collect();
        assert_eq!(distances, vec![4, 3, 2, 1, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_scroll_window_pads_ends() {
        let window = scroll_window(1, 2);
        assert_eq!(window[3].index, Some(0));
        assert_eq!(window[4].index, Some(1));
        assert_eq!(window[5].index, None);
        assert!(window[..3].iter().all(|s| s.index.is_none()));
    }

    #[test]
    fn test_scroll_window_empty_list() {
        assert!(scroll_window(0, 0).iter().all(|s| s.index.is_none()));
    }

    #[test]
    fn test_menu_view_clamps_selection() {
        let menu = MenuView::new(MenuKind::Folders, vec![], vec![MenuItem::Search], 7, None);
        assert_eq!(menu.selected, 0);
        assert_eq!(menu.selected_item(), Some(&MenuItem::Search));

        let empty = MenuView::new(MenuKind::Empty, vec![], vec![], 3, None);
        assert_eq!(empty.selected, 0);
        assert!(empty.selected_item().is_none());
    }

    #[test]
    fn test_item_labels_and_badges() {
        let folder = MenuItem::Folder(FolderEntry::parse(&RawEntry::from("Logs:cyan")));
        assert_eq!(folder.label(), "Logs/");
        assert_eq!(folder.badges(), None);

        let file = MenuItem::File(FileEntry::parse(&RawEntry::from("a.txt:hidden2:locked6")));
        assert_eq!(file.label(), "a.txt");
        assert_eq!(file.badges().as_deref(), Some("H9 L"));
        assert_eq!(MenuItem::Return.label(), "RETURN");
    }

    #[test]
    fn test_result_count_text() {
        assert_eq!(result_count_text(0), "0 results found.");
        assert_eq!(result_count_text(1), "1 result found.");
        assert_eq!(result_count_text(12), "12 results found.");
    }

    #[test]
    fn test_folder_header() {
        assert_eq!(folder_header(&[]), "");
        assert_eq!(folder_header(&["a".into(), "b".into()]), "a/b/");
    }
}
