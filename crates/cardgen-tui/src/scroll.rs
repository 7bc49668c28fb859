//! Scroll state shared by the card list and the log panel.

/// Scroll position of a list panel.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// First visible line when not following.
    pub offset: usize,
    /// Whether the panel keeps its newest lines in view.
    pub follow: bool,
}

impl ScrollState {
    /// A panel pinned to its first line.
    #[must_use]
    pub fn top() -> Self {
        Self {
            offset: 0,
            follow: false,
        }
    }

    /// A panel that follows new lines.
    #[must_use]
    pub fn following() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    pub fn scroll_up(&mut self, total: usize, height: usize) {
        self.pin(total, height);
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total: usize, height: usize) {
        self.offset = (self.offset + 1).min(Self::max_offset(total, height));
    }

    pub fn page_up(&mut self, page: usize, total: usize, height: usize) {
        self.pin(total, height);
        self.offset = self.offset.saturating_sub(page);
    }

    /// Page down, clamped to the last full page.
    pub fn page_down(&mut self, page: usize, total: usize, height: usize) {
        self.offset = (self.offset + page).min(Self::max_offset(total, height));
    }

    pub fn home(&mut self) {
        self.follow = false;
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize, height: usize) {
        self.offset = Self::max_offset(total, height);
    }

    /// Resume following new lines.
    pub fn resume_follow(&mut self) {
        self.follow = true;
    }

    /// First line to draw for `total` lines in a viewport of `height`.
    #[must_use]
    pub fn visible_start(&self, total: usize, height: usize) -> usize {
        if self.follow {
            Self::max_offset(total, height)
        } else {
            self.offset.min(Self::max_offset(total, height))
        }
    }

    fn max_offset(total: usize, height: usize) -> usize {
        total.saturating_sub(height.max(1))
    }

    /// Stop following, keeping the currently visible window.
    fn pin(&mut self, total: usize, height: usize) {
        if self.follow {
            self.offset = Self::max_offset(total, height);
            self.follow = false;
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::top()
    }
}
