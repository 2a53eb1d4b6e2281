//! Viewport: a fixed-size window over a virtualized sequence.
//!
//! The viewport owns the cursor and the scroll offset. Cursor movement uses
//! follow scrolling: the offset moves by the minimum needed to keep the
//! cursor inside `offset..offset + visible`. Explicit scrolling
//! ([`Viewport::set_offset`], [`Viewport::scroll_to`]) may leave the cursor
//! outside the window until the next cursor move.

use std::ops::Range;

use log::trace;

/// Window size used when none is configured.
pub const DEFAULT_VISIBLE: usize = 10;

/// Scroll window and cursor over `total` addressable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First slot of the window.
    offset: usize,
    /// Window size in slots.
    visible: usize,
    /// Number of addressable slots.
    total: usize,
    /// Focused slot.
    cursor: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE, 0)
    }
}

impl Viewport {
    /// Create a viewport showing `visible` slots out of `total`, cursor at the top.
    pub fn new(visible: usize, total: usize) -> Self {
        Self {
            offset: 0,
            visible,
            total,
            cursor: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if there is nothing to address.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check if `index` lies inside the current window.
    pub fn is_visible(&self, index: usize) -> bool {
        index < self.total && index >= self.offset && index < self.offset + self.visible
    }

    // -------------------------------------------------------------------------
    // Capacity
    // -------------------------------------------------------------------------

    /// Set the number of addressable slots.
    ///
    /// A cursor past the new end is pulled back to the last slot. The offset
    /// is only re-clamped; a cursor that did not move may end up outside the
    /// window.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            self.cursor = 0;
            self.offset = 0;
            return;
        }
        self.offset = self.offset.min(self.max_offset());
        if self.cursor >= total {
            self.cursor = total - 1;
            self.follow();
        }
    }

    /// Set the window size. Keeps the cursor on screen.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.offset = self.offset.min(self.max_offset());
        self.follow();
    }

    // -------------------------------------------------------------------------
    // Cursor movement
    // -------------------------------------------------------------------------

    /// Move the cursor up one slot. No wraparound.
    pub fn move_up(&mut self) {
        if self.cursor == 0 || self.total == 0 {
            return;
        }
        self.cursor -= 1;
        self.follow();
    }

    /// Move the cursor down one slot. No wraparound.
    pub fn move_down(&mut self) {
        if self.cursor + 1 >= self.total {
            return;
        }
        self.cursor += 1;
        self.follow();
    }

    /// Jump to the first slot and re-home the window.
    pub fn move_to_top(&mut self) {
        if self.total == 0 {
            return;
        }
        self.cursor = 0;
        self.offset = 0;
        trace!("Viewport re-home: cursor=0 offset=0");
    }

    /// Jump to the last slot and re-home the window at the end.
    pub fn move_to_bottom(&mut self) {
        if self.total == 0 {
            return;
        }
        self.cursor = self.total - 1;
        self.offset = self.max_offset();
        trace!(
            "Viewport re-home: cursor={} offset={}",
            self.cursor, self.offset
        );
    }

    /// Move the cursor up by one window.
    pub fn page_up(&mut self) {
        self.move_by_up(self.visible);
    }

    /// Move the cursor down by one window.
    pub fn page_down(&mut self) {
        self.move_by_down(self.visible);
    }

    /// Move the cursor up by half a window (at least one slot).
    pub fn half_page_up(&mut self) {
        self.move_by_up((self.visible / 2).max(1));
    }

    /// Move the cursor down by half a window (at least one slot).
    pub fn half_page_down(&mut self) {
        self.move_by_down((self.visible / 2).max(1));
    }

    /// Place the cursor on `index` (clamped to the last slot).
    pub fn set_cursor(&mut self, index: usize) {
        if self.total == 0 {
            return;
        }
        self.cursor = index.min(self.total - 1);
        self.follow();
    }

    fn move_by_up(&mut self, step: usize) {
        if self.total == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_sub(step);
        self.follow();
    }

    fn move_by_down(&mut self, step: usize) {
        if self.total == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add(step).min(self.total - 1);
        self.follow();
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Set the offset directly (clamped). The cursor is left where it is.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    /// Scroll the minimum amount needed to bring `index` into view.
    ///
    /// The cursor does not move. Out-of-range and already visible indices are
    /// ignored.
    pub fn scroll_to(&mut self, index: usize) {
        if index >= self.total || self.is_visible(index) {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if self.visible > 0 {
            self.offset = index + 1 - self.visible;
        }
        self.offset = self.offset.min(self.max_offset());
        trace!("Viewport scroll_to({}): offset={}", index, self.offset);
    }

    /// Half-open range of slots to paint.
    pub fn range(&self) -> Range<usize> {
        if self.total == 0 {
            return 0..0;
        }
        let end = (self.offset + self.visible).min(self.total);
        self.offset.min(end)..end
    }

    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_down(&self) -> bool {
        self.offset + self.visible < self.total
    }

    /// Check if the content is larger than the window.
    pub fn has_scroll(&self) -> bool {
        self.total > self.visible
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// Shift the offset by the minimum needed to show the cursor.
    fn follow(&mut self) {
        if self.total == 0 {
            self.offset = 0;
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.visible > 0 && self.cursor >= self.offset + self.visible {
            self.offset = self.cursor + 1 - self.visible;
        }
        self.offset = self.offset.min(self.max_offset());
        trace!(
            "Viewport follow: cursor={} offset={}",
            self.cursor, self.offset
        );
    }
}
