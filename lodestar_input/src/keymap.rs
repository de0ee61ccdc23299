// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from physical keys to logical [`Action`]s.
//!
//! A [`KeyMap`] has two independent key spaces: key identifiers (`"ArrowLeft"`,
//! `"a"`, `" "`) and legacy numeric key codes. Lookup consults the identifier
//! first and falls back to the code only when the identifier has no entry.
//!
//! Hosts customise the map with [`KeyOverrides`], which bind one action to any
//! number of raw keys. Merging is last-write-wins per raw key, so a built-in
//! binding survives unless an override rebinds that exact key.
//!
//! ```rust
//! use lodestar_input::{Action, KeyEvent, KeyMap, KeyOverrides, RawKey};
//!
//! let overrides = KeyOverrides::new()
//!     .bind(Action::Left, ["KeyA"])
//!     .bind(Action::from("Menu"), [RawKey::Code(93)]);
//! let keymap = KeyMap::with_overrides(&overrides);
//!
//! assert_eq!(keymap.lookup(&KeyEvent::new("KeyA", 65)), Some(&Action::Left));
//! assert_eq!(keymap.lookup(&KeyEvent::new("ArrowLeft", 37)), Some(&Action::Left));
//! assert_eq!(keymap.lookup(&KeyEvent::from_code(93)), Some(&Action::from("Menu")));
//! assert_eq!(keymap.lookup(&KeyEvent::new("F13", 124)), None);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::action::Action;
use crate::event::KeyEvent;

/// Built-in key identifier bindings.
const DEFAULT_BINDINGS: [(&str, Action); 9] = [
    ("ArrowLeft", Action::Left),
    ("ArrowRight", Action::Right),
    ("ArrowUp", Action::Up),
    ("ArrowDown", Action::Down),
    ("Enter", Action::Enter),
    ("l", Action::Last),
    (" ", Action::Space),
    ("Backspace", Action::Back),
    ("Escape", Action::Escape),
];

/// A physical key in one of the two key spaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawKey {
    /// Key identifier, matched against [`KeyEvent::key`].
    Key(String),
    /// Numeric key code, matched against [`KeyEvent::key_code`].
    Code(u32),
}

impl From<&str> for RawKey {
    fn from(key: &str) -> Self {
        Self::Key(key.into())
    }
}

impl From<String> for RawKey {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<u32> for RawKey {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

/// Host-supplied additions and replacements for the default bindings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOverrides {
    bindings: Vec<(Action, Vec<RawKey>)>,
}

impl KeyOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `action` to each of `keys`.
    ///
    /// Later calls win when they mention a raw key an earlier call already bound.
    #[must_use]
    pub fn bind<K: Into<RawKey>>(
        mut self,
        action: impl Into<Action>,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        self.bindings
            .push((action.into(), keys.into_iter().map(Into::into).collect()));
        self
    }

    /// Bindings in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (&Action, &[RawKey])> + '_ {
        self.bindings
            .iter()
            .map(|(action, keys)| (action, keys.as_slice()))
    }

    /// Whether no binding was added.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Lookup table from raw keys to actions.
///
/// [`KeyMap::default`] holds the built-in bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    by_key: HashMap<String, Action>,
    by_code: HashMap<u32, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (key, action) in DEFAULT_BINDINGS {
            map.by_key.insert(key.into(), action);
        }
        map
    }
}

impl KeyMap {
    /// A map with no bindings at all.
    pub fn empty() -> Self {
        Self {
            by_key: HashMap::new(),
            by_code: HashMap::new(),
        }
    }

    /// The built-in bindings merged with `overrides`.
    pub fn with_overrides(overrides: &KeyOverrides) -> Self {
        let mut map = Self::default();
        map.merge(overrides);
        map
    }

    /// Bind a single raw key, returning the action it was bound to before.
    pub fn bind(&mut self, raw: impl Into<RawKey>, action: Action) -> Option<Action> {
        match raw.into() {
            RawKey::Key(key) => self.by_key.insert(key, action),
            RawKey::Code(code) => self.by_code.insert(code, action),
        }
    }

    /// Apply every binding of `overrides` in order.
    pub fn merge(&mut self, overrides: &KeyOverrides) {
        for (action, keys) in overrides.iter() {
            for raw in keys {
                if let Some(old) = self.bind(raw.clone(), action.clone())
                    && old != *action
                {
                    tracing::trace!(?raw, %old, new = %action, "key rebound");
                }
            }
        }
    }

    /// The action bound to one raw key.
    pub fn get(&self, raw: &RawKey) -> Option<&Action> {
        match raw {
            RawKey::Key(key) => self.by_key.get(key.as_str()),
            RawKey::Code(code) => self.by_code.get(code),
        }
    }

    /// Map an event to its action: identifier first, code only if the
    /// identifier is unbound.
    pub fn lookup(&self, event: &KeyEvent) -> Option<&Action> {
        self.by_key
            .get(event.key.as_str())
            .or_else(|| self.by_code.get(&event.key_code))
    }

    /// Every raw key currently bound to `action`.
    pub fn keys_for<'a>(&'a self, action: &'a Action) -> impl Iterator<Item = RawKey> + 'a {
        let keys = self
            .by_key
            .iter()
            .filter(move |(_, a)| *a == action)
            .map(|(k, _)| RawKey::Key(k.clone()));
        let codes = self
            .by_code
            .iter()
            .filter(move |(_, a)| *a == action)
            .map(|(c, _)| RawKey::Code(*c));
        keys.chain(codes)
    }

    /// Number of bound raw keys across both key spaces.
    pub fn len(&self) -> usize {
        self.by_key.len() + self.by_code.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
