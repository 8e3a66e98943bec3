//! Catalog Model
//!
//! The page currently on screen. Replaced wholesale whenever a page response
//! is applied; artwork data is never merged across fetches.

use crate::api::Artwork;

#[derive(Clone, Debug)]
pub struct CatalogModel {
    /// Page the displayed rows belong to (1-based)
    pub page: u32,

    /// Total pages reported by the last successful fetch
    pub total_pages: Option<u32>,

    /// Rows of the displayed page, in API order
    pub items: Vec<Artwork>,

    /// Cursor row in the table
    pub cursor: Option<usize>,

    /// Whether the last fetch for `page` failed
    pub load_failed: bool,

    /// Time the last applied fetch took (milliseconds)
    pub last_load_time_ms: Option<u64>,
}

impl CatalogModel {
    pub fn new(page: u32) -> Self {
        Self {
            page,
            total_pages: None,
            items: Vec::new(),
            cursor: None,
            load_failed: false,
            last_load_time_ms: None,
        }
    }

    pub fn cursor_item(&self) -> Option<&Artwork> {
        self.cursor.and_then(|idx| self.items.get(idx))
    }

    /// Move the cursor one row down, wrapping to the top
    pub fn cursor_down(&mut self) {
        let rows = self.items.len();
        self.cursor = match self.cursor {
            _ if rows == 0 => None,
            Some(idx) if idx + 1 < rows => Some(idx + 1),
            _ => Some(0),
        };
    }

    /// Move the cursor one row up, wrapping to the bottom
    ///
    /// A cursor left past the end of a shorter page lands on the last row.
    pub fn cursor_up(&mut self) {
        let rows = self.items.len();
        self.cursor = match self.cursor {
            _ if rows == 0 => None,
            Some(idx) if idx > 0 => Some(idx.min(rows) - 1),
            _ => Some(rows - 1),
        };
    }

    /// Swap in a freshly fetched page
    pub fn replace_page(&mut self, page: u32, items: Vec<Artwork>, total_pages: Option<u32>) {
        self.page = page;
        self.cursor = if items.is_empty() { None } else { Some(0) };
        self.items = items;
        if total_pages.is_some() {
            self.total_pages = total_pages;
        }
        self.load_failed = false;
    }

    /// A failed fetch leaves the page empty
    pub fn clear_page(&mut self, page: u32) {
        self.page = page;
        self.items.clear();
        self.cursor = None;
        self.load_failed = true;
    }
}
