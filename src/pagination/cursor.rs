//! Pagination Cursor
//!
//! Forward and backward locators for the two-directional area listing.

use crate::error::{Boundary, PokedexError, Result};
use crate::models::LocationAreaPage;

/// Direction of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

// == Pagination Cursor ==
/// Current traversal position as a pair of fetch targets.
///
/// The cursor only changes through `record`, which runs after a page has
/// been fetched and decoded. A failed fetch therefore leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    first_page: String,
    next: Option<String>,
    previous: Option<String>,
}

impl PaginationCursor {
    // == Constructor ==
    /// Starts before the first page: `next` is the first page, `previous` unset.
    pub fn new(first_page: impl Into<String>) -> Self {
        let first_page = first_page.into();
        Self {
            next: Some(first_page.clone()),
            previous: None,
            first_page,
        }
    }

    pub fn first_page(&self) -> &str {
        &self.first_page
    }

    /// Locator the next `advance` would fetch, `None` once the listing is exhausted.
    pub fn next_target(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Locator the next `retreat` would fetch, `None` at the first page.
    pub fn previous_target(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    // == Target ==
    /// Resolves the locator to fetch for `direction`.
    ///
    /// Fails with `AtBoundary` when that pointer is unset, without any side effect.
    pub fn target(&self, direction: Direction) -> Result<&str> {
        match direction {
            Direction::Forward => self
                .next_target()
                .ok_or(PokedexError::AtBoundary(Boundary::Last)),
            Direction::Backward => self
                .previous_target()
                .ok_or(PokedexError::AtBoundary(Boundary::First)),
        }
    }

    // == Record ==
    /// Moves both pointers after `page` was fetched in `direction`.
    ///
    /// Forward: `previous` becomes the first-page locator while it is unset
    /// (first fetch, or back at the first page), otherwise the page's declared
    /// previous; `next` becomes the page's declared next.
    ///
    /// Backward: both pointers come straight from the page.
    pub fn record(&mut self, direction: Direction, page: &LocationAreaPage) {
        match direction {
            Direction::Forward => {
                self.previous = match self.previous {
                    None => Some(self.first_page.clone()),
                    Some(_) => page.previous.clone(),
                };
                self.next = page.next.clone();
            }
            Direction::Backward => {
                self.next = page.next.clone();
                self.previous = page.previous.clone();
            }
        }
    }
}
