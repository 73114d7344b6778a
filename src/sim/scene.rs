//! Scene (level) indexing

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Active scene index within the host's build order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSceneIndex")]
pub struct SceneIndex {
    current: usize,
    count: usize,
}

/// Unchecked wire form, validated through [`SceneIndex::new`]
#[derive(Deserialize)]
struct RawSceneIndex {
    current: usize,
    count: usize,
}

impl TryFrom<RawSceneIndex> for SceneIndex {
    type Error = Error;

    fn try_from(raw: RawSceneIndex) -> Result<Self> {
        Self::new(raw.current, raw.count)
    }
}

impl SceneIndex {
    /// `count` must be at least 1 and `current` must lie inside it
    pub fn new(current: usize, count: usize) -> Result<Self> {
        if count == 0 || current >= count {
            return Err(Error::InvalidScene { current, count });
        }
        Ok(Self { current, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the following level, wrapping back to the first
    pub fn next(&self) -> usize {
        (self.current + 1) % self.count
    }

    /// Index to load when restarting the current level
    pub fn reload(&self) -> usize {
        self.current
    }
}

/// A scene change requested by the rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneAction {
    LoadNext,
    Reload,
}

impl SceneAction {
    /// Resolve to a concrete scene index
    pub fn target(&self, scenes: &SceneIndex) -> usize {
        match self {
            SceneAction::LoadNext => scenes.next(),
            SceneAction::Reload => scenes.reload(),
        }
    }
}
