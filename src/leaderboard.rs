use std::ops::Range;

/// Number of entries in a window around a target entry.
pub const WINDOW_SIZE: usize = 10;
/// Entries shown above the target when it is fully surrounded.
pub const WINDOW_BEFORE: usize = 4;
/// Entries shown below the target when it is fully surrounded.
pub const WINDOW_AFTER: usize = 5;

/// A collection of items already in rank order (rank 0 first).
pub struct Leaderboard<T: LeaderboardItem> {
    ranked: Vec<T>,
}

impl<T: LeaderboardItem> Leaderboard<T> {
    pub fn new(ranked: Vec<T>) -> Self {
        Self { ranked }
    }

    /// Returns the rank of the item identified by `id`, if present.
    pub fn rank_of(&self, id: &T::Id) -> Option<usize> {
        self.ranked.iter().position(|item| item.id() == id)
    }

    /// Returns the window of items surrounding the item identified by `id`,
    /// or `None` if there is no such item.
    pub fn around(mut self, id: &T::Id) -> Option<Vec<T>> {
        let rank = self.rank_of(id)?;
        let window = window_bounds(rank, self.ranked.len());
        self.ranked.truncate(window.end);
        Some(self.ranked.split_off(window.start))
    }
}

/// Computes the slice of ranks shown around the item at `rank`
/// in a leaderboard of `len` items.
///
/// The window holds `WINDOW_BEFORE` items above the target and `WINDOW_AFTER`
/// below it. Near either end of the leaderboard the window slides to stay in
/// bounds instead of shrinking, so it always holds `min(len, WINDOW_SIZE)` items.
pub fn window_bounds(rank: usize, len: usize) -> Range<usize> {
    debug_assert!(rank < len);

    let mut start = rank.saturating_sub(WINDOW_BEFORE);
    let mut end = len.min(rank + WINDOW_AFTER + 1);

    if end - start < WINDOW_SIZE {
        if start == 0 {
            end = len.min(start + WINDOW_SIZE);
        } else if end == len {
            start = end.saturating_sub(WINDOW_SIZE);
        }
    }

    start..end
}

/// An item that can be located on a leaderboard by its identifier.
pub trait LeaderboardItem {
    type Id: PartialEq + ?Sized;

    fn id(&self) -> &Self::Id;
}
