//! View regions the UI actions write into.
//!
//! Actions never look regions up by name; each one is handed the regions it
//! may touch when it is constructed. The `Memory*` implementations keep the
//! rendered state in memory, for headless front ends and tests.

use std::sync::{PoisonError, RwLock};

/// A dismissible message area.
pub trait AlertRegion: Send + Sync {
    /// Replaces the message and makes the region visible.
    fn show(&self, message: &str);

    /// Hides the region and clears its message.
    fn hide(&self);
}

/// A region whose whole content is swapped on each update.
pub trait ContentRegion: Send + Sync {
    fn replace(&self, content: &str);
}

/// A list that hyperlinked entries are appended to.
pub trait LinkList: Send + Sync {
    fn append(&self, entry: ListEntry);
}

/// One hyperlinked list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    pub href: String,
}

impl ListEntry {
    /// Renders the entry as list markup, escaping label and link.
    pub fn to_html(&self) -> String {
        format!(
            "<li><a href='{}'>{}</a></li>",
            escape_html(&self.href),
            escape_html(&self.label)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Visible flag and message of an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub visible: bool,
    pub message: String,
}

/// Alert region held in memory. Starts hidden and empty.
#[derive(Debug, Default)]
pub struct MemoryAlert {
    state: RwLock<AlertState>,
}

impl MemoryAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AlertState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl AlertRegion for MemoryAlert {
    fn show(&self, message: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.visible = true;
        state.message = message.to_string();
    }

    fn hide(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.visible = false;
        state.message.clear();
    }
}

/// Content region held in memory.
#[derive(Debug, Default)]
pub struct MemoryRegion {
    content: RwLock<String>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.content.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ContentRegion for MemoryRegion {
    fn replace(&self, content: &str) {
        *self.content.write().unwrap_or_else(PoisonError::into_inner) = content.to_string();
    }
}

/// Link list held in memory.
#[derive(Debug, Default)]
pub struct MemoryList {
    entries: RwLock<Vec<ListEntry>>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ListEntry> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The list rendered as `<li>` markup, one line per entry.
    pub fn to_html(&self) -> String {
        self.entries()
            .iter()
            .map(ListEntry::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl LinkList for MemoryList {
    fn append(&self, entry: ListEntry) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).push(entry);
    }
}
