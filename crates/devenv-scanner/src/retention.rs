//! Bounded line retention with oldest-first eviction

use std::collections::VecDeque;

/// Keeps at most `capacity` lines, evicting the oldest on overflow.
#[derive(Debug, Clone)]
pub struct RetainedLines {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RetainedLines {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a line, dropping the oldest entry if the cap is exceeded
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Retained lines in discovery order
    pub fn into_vec(self) -> Vec<String> {
        self.lines.into()
    }
}
