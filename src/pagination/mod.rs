//! Pagination Module
//!
//! Cursor over the paginated location-area listing.

mod cursor;

pub use cursor::{Direction, PaginationCursor};
