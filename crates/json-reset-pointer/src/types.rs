//! Type definitions for structural paths.

use std::fmt;

use crate::util::is_valid_index;

/// A step in a structural path.
///
/// Steps are always stored as strings; steps made only of ASCII digits
/// address array indices.
pub type PathStep = String;

/// A structural path: the sequence of steps from the root to a slot.
pub type Path = Vec<PathStep>;

/// The key of a slot inside its container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Array index.
    Index(usize),
    /// Object property name.
    Name(String),
}

impl Key {
    /// Classify a path step: canonical non-negative integers that fit a
    /// `usize` become [`Key::Index`], everything else is a [`Key::Name`].
    ///
    /// `Key::from_step(s).as_step() == s` holds for every step.
    pub fn from_step(step: &str) -> Self {
        if is_valid_index(step) {
            if let Ok(idx) = step.parse::<usize>() {
                return Key::Index(idx);
            }
        }
        Key::Name(step.to_string())
    }

    /// Returns true if this key addresses an array index.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// The index, if this is an array key.
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(idx) => Some(*idx),
            Key::Name(_) => None,
        }
    }

    /// The key as an object property name. Indices render as decimal strings.
    pub fn as_step(&self) -> PathStep {
        match self {
            Key::Index(idx) => idx.to_string(),
            Key::Name(name) => name.clone(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(idx) => write!(f, "{idx}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}

impl From<&str> for Key {
    fn from(step: &str) -> Self {
        Key::from_step(step)
    }
}
