//! Backend-agnostic keyboard state and rising-edge detection.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keys the settings controller can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Tab,
    Space,
    Enter,
    Escape,
    /// Any printable character key. Snapshots and settings fold it to
    /// lower case, so `Char('T')` and `Char('t')` are the same binding.
    Char(char),
}

impl Key {
    /// Character key folded to lower case.
    pub fn character(c: char) -> Self {
        Self::Char(c).normalized()
    }

    /// Folds character keys to lower case; other keys are unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c.to_lowercase().next().unwrap_or(c)),
            other => other,
        }
    }
}

/// Set of keys held down during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    held: HashSet<Key>,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given keys held.
    pub fn pressed<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        Self {
            held: keys.into_iter().map(Key::normalized).collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key.normalized());
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key.normalized());
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key.normalized())
    }

    pub fn is_up(&self, key: Key) -> bool {
        !self.is_down(key)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

/// True when `key` is down in `current` and was up in `previous`.
#[inline]
pub fn rising_edge(previous: &KeySnapshot, current: &KeySnapshot, key: Key) -> bool {
    current.is_down(key) && previous.is_up(key)
}

/// Keeps the previous and current snapshots for frame-to-frame edge checks.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    previous: KeySnapshot,
    current: KeySnapshot,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs this frame's snapshot. Call once per frame before querying.
    pub fn capture(&mut self, snapshot: &KeySnapshot) {
        self.current.clone_from(snapshot);
    }

    pub fn rising(&self, key: Key) -> bool {
        rising_edge(&self.previous, &self.current, key)
    }

    /// Rolls the current snapshot into the previous slot at frame end.
    pub fn finish_frame(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
    }
}
