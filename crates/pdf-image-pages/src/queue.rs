use crate::page::Page;
use crate::types::*;

/// Ordered pages awaiting export. Insertion order is output order.
///
/// Every page in a non-empty queue has the same dimensions.
#[derive(Debug, Default, Clone)]
pub struct PageQueue {
    pages: Vec<Page>,
}

impl PageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page, rejecting one whose size differs from the queued pages
    pub fn push(&mut self, page: Page) -> Result<()> {
        if let Some(expected) = self.dimensions() {
            if page.dimensions() != expected {
                return Err(PageError::PageSizeMismatch {
                    expected,
                    actual: page.dimensions(),
                });
            }
        }
        self.pages.push(page);
        Ok(())
    }

    /// Shared page size, or `None` while empty
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.pages.first().map(Page::dimensions)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Drop every page, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let count = self.pages.len();
        self.pages.clear();
        count
    }
}
