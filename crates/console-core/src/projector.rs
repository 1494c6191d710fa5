//! Most-recent-first display window over an append-ordered feed.

/// Maximum number of feed records shown at once.
pub const DISPLAY_WINDOW: usize = 20;

/// Reverse the feed and keep the first [`DISPLAY_WINDOW`] records.
///
/// The backend delivers records oldest first; the newest record ends up at
/// index 0. The input slice is left untouched.
pub fn project<T>(records: &[T]) -> Vec<&T> {
    records.iter().rev().take(DISPLAY_WINDOW).collect()
}
