// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use lodestar_focus::{FocusHandlers, FocusPath, FocusTracker, SubscriptionId};
use lodestar_scene::{NodeId, Scene};

use crate::dispatch::{Dispatched, dispatch};
use crate::error::Error;
use crate::event::KeyEvent;
use crate::handlers::KeyHandlers;
use crate::keymap::{KeyMap, KeyOverrides};

/// Focus and key input for one scene.
///
/// Owns the key map, the focus tracker and both handler tables. The scene is
/// passed into each call so hosts keep ownership of it.
///
/// Focus changes and key dispatch never interleave: a handler that wants to
/// move focus calls [`KeyContext::request_focus`](crate::KeyContext::request_focus),
/// and [`FocusManager::key_down`] applies the request once the walk is over.
#[derive(Debug)]
pub struct FocusManager {
    keymap: KeyMap,
    tracker: FocusTracker,
    focus_handlers: FocusHandlers,
    key_handlers: KeyHandlers,
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FocusManager {
    /// Set up with the default key map, merged with `overrides` if given.
    pub fn new(overrides: Option<KeyOverrides>) -> Self {
        let keymap = match overrides {
            Some(overrides) => KeyMap::with_overrides(&overrides),
            None => KeyMap::default(),
        };
        Self::with_keymap(keymap)
    }

    /// Set up with a fully custom key map.
    pub fn with_keymap(keymap: KeyMap) -> Self {
        Self {
            keymap,
            tracker: FocusTracker::new(None),
            focus_handlers: FocusHandlers::new(),
            key_handlers: KeyHandlers::new(),
        }
    }

    /// Start with `node` as the focused element without reconciling it.
    ///
    /// The published path stays empty until the first [`FocusManager::focus`]
    /// call that changes the value. Observers subscribed before this call are
    /// dropped.
    #[must_use]
    pub fn with_initial_focus(mut self, node: Option<NodeId>) -> Self {
        self.tracker = FocusTracker::new(node);
        self
    }

    /// The key map in use.
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// The focused element.
    pub fn focused(&self) -> Option<NodeId> {
        self.tracker.focused()
    }

    /// Snapshot of the published focus path.
    pub fn focus_path(&self) -> FocusPath {
        self.tracker.path()
    }

    /// `on_focus` / `on_blur` handlers.
    pub fn focus_handlers(&self) -> &FocusHandlers {
        &self.focus_handlers
    }

    /// Mutable access to the `on_focus` / `on_blur` handlers.
    pub fn focus_handlers_mut(&mut self) -> &mut FocusHandlers {
        &mut self.focus_handlers
    }

    /// Key handlers.
    pub fn key_handlers(&self) -> &KeyHandlers {
        &self.key_handlers
    }

    /// Mutable access to the key handlers.
    pub fn key_handlers_mut(&mut self) -> &mut KeyHandlers {
        &mut self.key_handlers
    }

    /// Call `observer` with each newly published focus path.
    pub fn subscribe(&mut self, observer: impl FnMut(&FocusPath) + 'static) -> SubscriptionId {
        self.tracker.subscribe(observer)
    }

    /// Remove an observer. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.tracker.unsubscribe(id)
    }

    /// Focus `node`, or clear focus with `None`.
    ///
    /// Returns whether the focused element changed.
    pub fn focus(&mut self, scene: &mut Scene, node: Option<NodeId>) -> Result<bool, Error> {
        self.tracker
            .set_focused(scene, &mut self.focus_handlers, node)
            .map_err(Error::from)
    }

    /// Remove `node` and its subtree from `scene`, dropping their handlers.
    ///
    /// If the focused element is inside the subtree, focus first moves to
    /// `node`'s parent (or is cleared for a root), so the departing elements
    /// still receive `on_blur`. Returns the removed ids; a stale `node` removes
    /// nothing.
    pub fn remove(&mut self, scene: &mut Scene, node: NodeId) -> Result<Vec<NodeId>, Error> {
        if !scene.is_alive(node) {
            return Ok(Vec::new());
        }
        let focus_inside = self
            .focused()
            .is_some_and(|f| scene.ancestors(f).any(|a| a == node));
        if focus_inside {
            let parent = scene.parent_of(node);
            self.focus(scene, parent)?;
        }
        let removed = scene.remove(node);
        for &id in &removed {
            self.focus_handlers.clear(id);
            self.key_handlers.clear(id);
        }
        tracing::debug!(?node, count = removed.len(), "removed subtree");
        Ok(removed)
    }

    /// Handle a key press.
    ///
    /// Dispatches along the current path snapshot, then applies the last focus
    /// request a handler made, if any. A failed dispatch applies nothing.
    pub fn key_down(&mut self, scene: &mut Scene, event: &KeyEvent) -> Result<Dispatched, Error> {
        let path = self.tracker.path();
        let done = dispatch(event, &self.keymap, scene, &path, &mut self.key_handlers)?;
        if let Some(target) = done.focus_request {
            self.focus(scene, Some(target))?;
        }
        Ok(done)
    }
}
