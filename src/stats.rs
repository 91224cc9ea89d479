//! Render-agnostic text board describing the live settings.
//!
//! The board only stores names, texts and selection. Fonts, colours and
//! layout belong to whatever rendering sink reads it.

use crate::error::{GravityLabError, Result};

/// One named line of text on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatText {
    pub name: String,
    pub text: String,
    pub selected: bool,
}

/// Ordered collection of stat lines with at most one highlight per name.
#[derive(Debug, Clone, Default)]
pub struct StatBoard {
    stats: Vec<StatText>,
}

impl StatBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stat(&mut self, name: impl Into<String>, text: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.stats.iter().any(|s| s.name == name) {
            return Err(GravityLabError::DuplicateStat(name));
        }
        self.stats.push(StatText {
            name,
            text: text.into(),
            selected: false,
        });
        Ok(())
    }

    pub fn stat(&self, name: &str) -> Result<&StatText> {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| GravityLabError::StatNotFound(name.to_string()))
    }

    fn stat_mut(&mut self, name: &str) -> Result<&mut StatText> {
        self.stats
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| GravityLabError::StatNotFound(name.to_string()))
    }

    pub fn update_stat(&mut self, name: &str, text: impl Into<String>) -> Result<()> {
        self.stat_mut(name)?.text = text.into();
        Ok(())
    }

    pub fn select(&mut self, name: &str) -> Result<()> {
        self.stat_mut(name)?.selected = true;
        Ok(())
    }

    pub fn unselect_all(&mut self) {
        for stat in &mut self.stats {
            stat.selected = false;
        }
    }

    /// Clears every highlight and selects `name` alone.
    pub fn select_only(&mut self, name: &str) -> Result<()> {
        self.stat(name)?;
        self.unselect_all();
        self.select(name)
    }

    pub fn selected(&self) -> impl Iterator<Item = &StatText> {
        self.stats.iter().filter(|s| s.selected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatText> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
