use crate::tags::Level;

/// Input to [`super::Navigator::handle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    /// Activate the selected item
    Select,
    /// Leave the current folder, search or file view
    Back,
    /// Run a search from the root menu
    Search(String),
    /// Clear the special access level, or ask for a code when none is set
    ToggleAccess,
    /// Try a code phrase
    EnterCode(String),
    ClearAccess,
    /// Back to the root menu, keeping history and access
    Reset,
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Selection moved
    Moved,
    /// The command applied but nothing changed
    Unchanged,
    /// The command does not apply in the current mode
    Ignored,
    /// Descended into a folder
    Entered,
    /// Went back to a parent folder or left search
    Returned,
    /// The caller should ask for a search query
    PromptSearch,
    /// The caller should ask for a code phrase
    PromptCode,
    /// Search ran; carries the visible result count
    SearchCompleted(usize),
    AccessChanged(Level),
    /// The code phrase did not match
    AccessRejected,
    OpenedFile,
    ClosedFile,
    Reset,
}

impl Response {
    /// Whether the navigator state changed
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(
            self,
            Self::Unchanged
                | Self::Ignored
                | Self::PromptSearch
                | Self::PromptCode
                | Self::AccessRejected
        )
    }
}
