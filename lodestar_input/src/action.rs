// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

/// Logical key action, the result of mapping a physical key.
///
/// Elements register handlers per action. The built-in variants cover the
/// default key map; [`Action::Custom`] carries any other name a host binds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Move up.
    Up,
    /// Move down.
    Down,
    /// Activate the focused element.
    Enter,
    /// Jump to the last element.
    Last,
    /// Space bar.
    Space,
    /// Go back.
    Back,
    /// Escape.
    Escape,
    /// Host-defined action.
    Custom(String),
}

impl Action {
    /// The action's logical name, e.g. `"Left"`.
    pub fn name(&self) -> &str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Enter => "Enter",
            Self::Last => "Last",
            Self::Space => "Space",
            Self::Back => "Back",
            Self::Escape => "Escape",
            Self::Custom(name) => name,
        }
    }

    /// Parse a logical name. Unknown names become [`Action::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Left" => Self::Left,
            "Right" => Self::Right,
            "Up" => Self::Up,
            "Down" => Self::Down,
            "Enter" => Self::Enter,
            "Last" => Self::Last,
            "Space" => Self::Space,
            "Back" => Self::Back,
            "Escape" => Self::Escape,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
